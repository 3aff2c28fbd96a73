//! Input polling: double-buffered keyboard/mouse snapshots, edge queries,
//! text capture, and the winit boundary adapter.
//!
//! The frame loop owns an [`Input`] instance and polls it exactly once per
//! frame from an [`InputSource`]; everything downstream (canvas, text
//! capture, game code) reads edges and levels from that instance. There is
//! no global input state.

pub mod keys;
pub mod state;
pub mod text;
pub mod winit;

pub use keys::{Key, MouseButton};
pub use state::{Input, InputSource, Keyboard, Mouse};
pub use text::TextCapture;
pub use self::winit::WinitInput;
