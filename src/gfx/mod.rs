//! Graphics boundary.
//!
//! The toolkit never draws anything itself: widgets and the camera talk
//! to a [`RenderSink`] the host engine implements on top of its actual
//! backend. Resource loading is likewise external; the toolkit only
//! carries opaque handles resolved through [`resources::Resources`].

pub mod resources;

use glam::Vec2;

pub use resources::Resources;

/// Opaque handle to a host-loaded font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u32);

/// Opaque handle to a host-loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// RGBA color, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Pack into u32 (RGBA8 format).
    pub fn to_u32(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0) as u32;
        let a = (self.a.clamp(0.0, 1.0) * 255.0) as u32;
        (r << 24) | (g << 16) | (b << 8) | a
    }

    /// Unpack from u32 (RGBA8 format).
    pub fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 24) & 0xFF) as f32 / 255.0,
            g: ((packed >> 16) & 0xFF) as f32 / 255.0,
            b: ((packed >> 8) & 0xFF) as f32 / 255.0,
            a: (packed & 0xFF) as f32 / 255.0,
        }
    }
}

/// Primitive draw operations plus a coordinate-offset primitive. Widgets
/// render through this; [`Camera::translate`](crate::camera::Camera::translate)
/// uses only [`RenderSink::translate`].
pub trait RenderSink {
    fn draw_text(&mut self, text: &str, position: Vec2, font: FontHandle, color: Color);
    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Color);
    fn draw_rect_outline(&mut self, position: Vec2, size: Vec2, color: Color);
    fn draw_image(&mut self, image: ImageHandle, position: Vec2);

    /// Offset all subsequent draw coordinates.
    fn translate(&mut self, offset: Vec2);
}
