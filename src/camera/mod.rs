//! Bounded snap/pan viewport camera.
//!
//! The camera tracks a top-left viewport position inside world bounds.
//! `snap` jumps straight to a clamped target; `pan` eases toward it at a
//! bounded speed per call, which gives smooth frame-by-frame motion
//! toward a moving target without external tweening. The camera draws
//! nothing; `translate` hands its offset to the render sink.

use glam::Vec2;
use tracing::warn;

use crate::gfx::RenderSink;

/// Viewport camera with per-axis clamping against world bounds.
///
/// World bounds default to an unset sentinel (-1); callers must call
/// [`Camera::set_bounds`] before snapping or panning, since the clamp
/// compares against the stored bounds as-is. Bounds smaller than the
/// viewport are a degenerate configuration and produce out-of-range
/// positions; they are logged but not corrected.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub x: f32,
    pub y: f32,

    pub view_width: f32,
    pub view_height: f32,
    pub max_width: f32,
    pub max_height: f32,

    /// Default pan speed, world units per call.
    pub speed: f32,
    target_x: f32,
    target_y: f32,
}

impl Camera {
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            view_width,
            view_height,
            max_width: -1.0,
            max_height: -1.0,
            speed: 1.0,
            target_x: 0.0,
            target_y: 0.0,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the world bounds the viewport is clamped within.
    pub fn set_bounds(&mut self, max_width: f32, max_height: f32) {
        if max_width < self.view_width || max_height < self.view_height {
            warn!(
                max_width,
                max_height,
                view_width = self.view_width,
                view_height = self.view_height,
                "camera bounds smaller than viewport; positions will go negative"
            );
        }
        self.max_width = max_width;
        self.max_height = max_height;
    }

    /// Top-left position of the viewport.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The clamped target of the most recent snap/pan.
    pub fn pan_target(&self) -> Vec2 {
        Vec2::new(self.target_x, self.target_y)
    }

    fn clamp_x(&self, mut target: f32, center: bool) -> f32 {
        if center {
            target -= self.view_width / 2.0;
        }
        if target < 0.0 {
            0.0
        } else if target + self.view_width > self.max_width {
            self.max_width - self.view_width
        } else {
            target
        }
    }

    fn clamp_y(&self, mut target: f32, center: bool) -> f32 {
        if center {
            target -= self.view_height / 2.0;
        }
        if target < 0.0 {
            0.0
        } else if target + self.view_height > self.max_height {
            self.max_height - self.view_height
        } else {
            target
        }
    }

    /// Jump both axes straight to the clamped target. With `center`, the
    /// target is treated as the point to center in the viewport.
    pub fn snap(&mut self, target_x: f32, target_y: f32, center: bool) {
        self.snap_x(target_x, center);
        self.snap_y(target_y, center);
    }

    pub fn snap_x(&mut self, target_x: f32, center: bool) {
        self.x = self.clamp_x(target_x, center);
        self.target_x = self.x;
    }

    pub fn snap_y(&mut self, target_y: f32, center: bool) {
        self.y = self.clamp_y(target_y, center);
        self.target_y = self.y;
    }

    /// Move both axes toward the clamped target at the default speed.
    pub fn pan(&mut self, target_x: f32, target_y: f32, center: bool) {
        self.pan_x(target_x, center, None);
        self.pan_y(target_y, center, None);
    }

    /// Move the x axis at most `speed` toward the clamped target, landing
    /// exactly on it when within range (no overshoot).
    pub fn pan_x(&mut self, target_x: f32, center: bool, speed: Option<f32>) {
        let speed = speed.unwrap_or(self.speed);
        let target = self.clamp_x(target_x, center);
        self.target_x = target;

        if self.x + speed < target {
            self.x += speed;
        } else if self.x - speed > target {
            self.x -= speed;
        } else {
            self.x = target;
        }
    }

    pub fn pan_y(&mut self, target_y: f32, center: bool, speed: Option<f32>) {
        let speed = speed.unwrap_or(self.speed);
        let target = self.clamp_y(target_y, center);
        self.target_y = target;

        if self.y + speed < target {
            self.y += speed;
        } else if self.y - speed > target {
            self.y -= speed;
        } else {
            self.y = target;
        }
    }

    /// Apply the camera offset to the render sink. World-space drawing
    /// after this call lands at the right screen position.
    pub fn translate(&self, sink: &mut dyn RenderSink) {
        sink.translate(Vec2::new(-self.x, -self.y));
    }
}
