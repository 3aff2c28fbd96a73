//! Widget building blocks: frames, behaviors, and arena ids.
//!
//! Widgets live in the canvas arena and are addressed by plain indices;
//! parent and focus references are ids, never owning pointers, so the
//! tree has no reference cycles. A widget is a geometric frame plus a
//! behavior implementing the overridable hooks.

use glam::Vec2;

use crate::gfx::RenderSink;
use crate::input::Input;

/// Index of a widget in its canvas arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub(crate) u32);

impl WidgetId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position, extents and state flags of one widget.
#[derive(Debug, Clone, Copy)]
pub struct WidgetFrame {
    /// Top-left corner, in canvas coordinates.
    pub position: Vec2,
    pub size: Vec2,

    /// Inactive widgets are skipped by canvas update dispatch.
    pub active: bool,
    /// Invisible widgets are skipped by canvas render dispatch.
    pub visible: bool,
    /// Whether this widget may hold focus. Non-focusable widgets reject
    /// focus assignment with an error.
    pub focusable: bool,

    pub(crate) focused: bool,
}

impl WidgetFrame {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            active: true,
            visible: true,
            focusable: true,
            focused: false,
        }
    }

    /// Whether this widget currently holds focus (directly or through a
    /// focused descendant).
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Inclusive axis-aligned bounding box test.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.x <= point.x
            && point.x <= self.position.x + self.size.x
            && self.position.y <= point.y
            && point.y <= self.position.y + self.size.y
    }

    /// Convert a canvas-space point to widget-local coordinates.
    pub fn normalize(&self, point: Vec2) -> Vec2 {
        point - self.position
    }
}

/// Overridable widget hooks. Every method defaults to a no-op, so a
/// behavior implements only what it needs.
pub trait WidgetBehavior {
    /// Per-frame update. Runs after input polling, parent before children.
    fn update(&mut self, frame: &mut WidgetFrame, input: &Input) {
        let _ = (frame, input);
    }

    /// Draw this widget. Children are rendered afterwards and paint on
    /// top.
    fn render(&self, frame: &WidgetFrame, sink: &mut dyn RenderSink) {
        let _ = (frame, sink);
    }

    /// Fired when hit-testing lands on this widget. `point` is in canvas
    /// coordinates; use [`WidgetFrame::normalize`] for local ones.
    fn clicked(&mut self, frame: &mut WidgetFrame, point: Vec2) {
        let _ = (frame, point);
    }

    /// Fired on each ancestor of a clicked widget.
    fn child_clicked(&mut self, frame: &mut WidgetFrame) {
        let _ = frame;
    }
}

/// Behavior with every hook left at its default.
pub struct Empty;

impl WidgetBehavior for Empty {}

/// A widget ready to be inserted into a canvas.
pub struct Widget {
    pub frame: WidgetFrame,
    pub behavior: Box<dyn WidgetBehavior>,
}

impl Widget {
    pub fn new(position: Vec2, size: Vec2, behavior: impl WidgetBehavior + 'static) -> Self {
        Self {
            frame: WidgetFrame::new(position, size),
            behavior: Box::new(behavior),
        }
    }

    /// A widget with no behavior, useful as a plain container.
    pub fn plain(position: Vec2, size: Vec2) -> Self {
        Self::new(position, size, Empty)
    }

    pub fn non_focusable(mut self) -> Self {
        self.frame.focusable = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.frame.visible = false;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.frame.active = false;
        self
    }
}

/// Arena slot: frame + behavior + tree links.
pub(crate) struct Node {
    pub frame: WidgetFrame,
    pub behavior: Box<dyn WidgetBehavior>,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
}
