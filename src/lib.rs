//! Bramble - lightweight 2D game toolkit.
//!
//! Provides the pieces a small frame-driven 2D game needs between the
//! platform layer and game code: double-buffered input polling with
//! edge-triggered queries, a UI widget canvas with focus and z-ordered
//! hit-testing, a bounded snap/pan camera, and small timing/text
//! primitives. Rendering and resource loading stay on the host side
//! behind narrow traits.
//!
//! Frame contract: poll input once, then canvas update, then render,
//! strictly in that order, once per frame.

pub mod camera;
pub mod core;
pub mod gfx;
pub mod input;
pub mod ui;

pub use camera::Camera;
pub use crate::core::{BrambleError, Counter, Result, ToolkitConfig};
pub use gfx::{Color, FontHandle, ImageHandle, RenderSink, Resources};
pub use input::{Input, InputSource, Key, MouseButton, TextCapture, WinitInput};
pub use ui::{UiCanvas, Widget, WidgetBehavior, WidgetFrame, WidgetId};
