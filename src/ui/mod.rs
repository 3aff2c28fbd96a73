//! UI widget/canvas layer.
//!
//! A [`UiCanvas`] owns its widgets in an index-addressable arena; callers
//! hold [`WidgetId`]s. Top-level order is z-order (last added = topmost).
//! The canvas runs hit-testing on mouse press edges, keeps at most one
//! widget focused, and dispatches per-frame update and render over the
//! tree.

pub mod canvas;
pub mod widget;
pub mod widgets;

pub use canvas::UiCanvas;
pub use widget::{Empty, Widget, WidgetBehavior, WidgetFrame, WidgetId};
pub use widgets::{Button, Label, TextBox};
