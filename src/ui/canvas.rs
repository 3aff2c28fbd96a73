//! UI canvas: widget ownership, focus exclusivity, hit-testing, and
//! per-frame update/render dispatch.

use glam::Vec2;
use tracing::debug;

use crate::core::error::{BrambleError, Result};
use crate::gfx::RenderSink;
use crate::input::{Input, MouseButton};

use super::widget::{Node, Widget, WidgetFrame, WidgetId};

/// Owns a tree of widgets in an index-addressable arena.
///
/// Top-level order is z-order: the last-added root is topmost, drawn
/// last and hit-tested first. At most one widget holds canvas focus at a
/// time; assigning a new one un-focuses the previous.
///
/// Looking up a removed [`WidgetId`] is a programmer error and panics.
#[derive(Default)]
pub struct UiCanvas {
    nodes: Vec<Option<Node>>,
    free: Vec<u32>,
    roots: Vec<WidgetId>,
    focused: Option<WidgetId>,
}

impl UiCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, id: WidgetId) -> &Node {
        self.nodes[id.index()].as_ref().expect("stale widget id")
    }

    fn node_mut(&mut self, id: WidgetId) -> &mut Node {
        self.nodes[id.index()].as_mut().expect("stale widget id")
    }

    fn alloc(&mut self, widget: Widget, parent: Option<WidgetId>) -> WidgetId {
        let node = Node {
            frame: widget.frame,
            behavior: widget.behavior,
            parent,
            children: Vec::new(),
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot as usize] = Some(node);
                WidgetId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                WidgetId(self.nodes.len() as u32 - 1)
            }
        }
    }

    /// Add a top-level widget. It becomes topmost in z-order. The first
    /// focusable widget added while nothing is focused takes focus.
    pub fn add(&mut self, widget: Widget) -> WidgetId {
        let id = self.alloc(widget, None);
        self.roots.push(id);
        if self.focused.is_none() && self.node(id).frame.focusable {
            let _ = self.focus(id);
        }
        debug!(?id, "widget added");
        id
    }

    /// Add a child of `parent`, topmost among its siblings.
    pub fn add_child(&mut self, parent: WidgetId, widget: Widget) -> WidgetId {
        let id = self.alloc(widget, Some(parent));
        self.node_mut(parent).children.push(id);
        debug!(?id, ?parent, "child widget added");
        id
    }

    /// Remove a widget and its whole subtree. If the focused widget is in
    /// the removed subtree, focus is cleared and not reassigned.
    pub fn remove(&mut self, id: WidgetId) {
        let mut subtree = Vec::new();
        self.collect_subtree(id, &mut subtree);

        if let Some(focused) = self.focused {
            if subtree.contains(&focused) {
                self.focused = None;
            }
        }

        match self.node(id).parent {
            Some(parent) => self.node_mut(parent).children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }

        for id in subtree {
            self.nodes[id.index()] = None;
            self.free.push(id.0);
        }
        debug!(?id, "widget removed");
    }

    fn collect_subtree(&self, id: WidgetId, out: &mut Vec<WidgetId>) {
        out.push(id);
        for child in &self.node(id).children {
            self.collect_subtree(*child, out);
        }
    }

    /// The widget currently holding canvas focus.
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Move canvas focus to `id`. Errors if the widget is not focusable.
    /// The previously focused widget loses its flag; every ancestor of
    /// the new one gains it (upward propagation only, never sideways).
    pub fn focus(&mut self, id: WidgetId) -> Result<()> {
        if !self.node(id).frame.focusable {
            return Err(BrambleError::NotFocusable(id));
        }

        if let Some(previous) = self.focused {
            if previous != id {
                self.node_mut(previous).frame.focused = false;
            }
        }

        self.focused = Some(id);
        let mut current = Some(id);
        while let Some(widget) = current {
            let node = self.node_mut(widget);
            node.frame.focused = true;
            current = node.parent;
        }
        debug!(?id, "focus changed");
        Ok(())
    }

    /// Frame accessor. Panics on a stale id.
    pub fn frame(&self, id: WidgetId) -> &WidgetFrame {
        &self.node(id).frame
    }

    pub fn frame_mut(&mut self, id: WidgetId) -> &mut WidgetFrame {
        &mut self.node_mut(id).frame
    }

    /// Hit-test all widgets at `cursor` and fire `clicked` on the topmost
    /// match. Roots are scanned in reverse z-order; within a widget,
    /// children are tested before the widget's own bounding box, so
    /// children win over their parent at the same point. The first hit at
    /// any depth stops the entire scan.
    pub fn poll_widgets(&mut self, cursor: Vec2) {
        let roots: Vec<WidgetId> = self.roots.iter().rev().copied().collect();
        for root in roots {
            if self.poll_widget(root, cursor) {
                break;
            }
        }
    }

    fn poll_widget(&mut self, id: WidgetId, cursor: Vec2) -> bool {
        let children = self.node(id).children.clone();
        for child in children {
            if self.poll_widget(child, cursor) {
                let node = self.node_mut(id);
                let Node {
                    frame, behavior, ..
                } = node;
                behavior.child_clicked(frame);
                return true;
            }
        }

        if self.node(id).frame.contains(cursor) {
            let node = self.node_mut(id);
            let Node {
                frame, behavior, ..
            } = node;
            behavior.clicked(frame, cursor);
            self.focus_nearest(id);
            return true;
        }
        false
    }

    /// Focus the widget itself or, when it is not focusable, its nearest
    /// focusable ancestor. No-op when neither exists.
    fn focus_nearest(&mut self, id: WidgetId) {
        let mut current = Some(id);
        while let Some(widget) = current {
            if self.node(widget).frame.focusable {
                let _ = self.focus(widget);
                return;
            }
            current = self.node(widget).parent;
        }
    }

    /// Per-frame update. On a left-button rising edge, hit-testing runs
    /// at the cursor first; then every active root updates, parent before
    /// children (pre-order).
    pub fn update(&mut self, input: &Input) {
        if input.mouse.pressed(MouseButton::Left) {
            self.poll_widgets(input.mouse.position());
        }

        let roots = self.roots.clone();
        for root in roots {
            if self.node(root).frame.active {
                self.update_widget(root, input);
            }
        }
    }

    fn update_widget(&mut self, id: WidgetId, input: &Input) {
        let node = self.node_mut(id);
        let Node {
            frame, behavior, ..
        } = node;
        behavior.update(frame, input);

        let children = self.node(id).children.clone();
        for child in children {
            self.update_widget(child, input);
        }
    }

    /// Render every visible root back-to-front, each widget before its
    /// children so children paint on top.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for root in &self.roots {
            if self.node(*root).frame.visible {
                self.render_widget(*root, sink);
            }
        }
    }

    fn render_widget(&self, id: WidgetId, sink: &mut dyn RenderSink) {
        let node = self.node(id);
        node.behavior.render(&node.frame, sink);
        for child in &node.children {
            self.render_widget(*child, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::input::{InputSource, Key};

    struct ClickProbe {
        hits: Rc<Cell<u32>>,
        child_hits: Rc<Cell<u32>>,
    }

    impl ClickProbe {
        fn new() -> (Self, Rc<Cell<u32>>, Rc<Cell<u32>>) {
            let hits = Rc::new(Cell::new(0));
            let child_hits = Rc::new(Cell::new(0));
            (
                Self {
                    hits: hits.clone(),
                    child_hits: child_hits.clone(),
                },
                hits,
                child_hits,
            )
        }
    }

    impl crate::ui::WidgetBehavior for ClickProbe {
        fn clicked(&mut self, _frame: &mut WidgetFrame, _point: Vec2) {
            self.hits.set(self.hits.get() + 1);
        }

        fn child_clicked(&mut self, _frame: &mut WidgetFrame) {
            self.child_hits.set(self.child_hits.get() + 1);
        }
    }

    fn probe_widget(position: Vec2, size: Vec2) -> (Widget, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let (probe, hits, child_hits) = ClickProbe::new();
        (Widget::new(position, size, probe), hits, child_hits)
    }

    #[test]
    fn test_first_added_widget_takes_focus() {
        let mut canvas = UiCanvas::new();
        let a = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));
        let _b = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));
        assert_eq!(canvas.focused_widget(), Some(a));
        assert!(canvas.frame(a).focused());
    }

    #[test]
    fn test_non_focusable_first_widget_leaves_focus_unset() {
        let mut canvas = UiCanvas::new();
        let a = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE).non_focusable());
        assert_eq!(canvas.focused_widget(), None);
        assert!(!canvas.frame(a).focused());
    }

    #[test]
    fn test_focus_rejects_non_focusable() {
        let mut canvas = UiCanvas::new();
        let a = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE).non_focusable());
        assert!(matches!(
            canvas.focus(a),
            Err(BrambleError::NotFocusable(id)) if id == a
        ));
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut canvas = UiCanvas::new();
        let a = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));
        let b = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));

        canvas.focus(b).unwrap();
        assert_eq!(canvas.focused_widget(), Some(b));
        assert!(!canvas.frame(a).focused());
        assert!(canvas.frame(b).focused());
    }

    #[test]
    fn test_focus_propagates_to_ancestors_only() {
        let mut canvas = UiCanvas::new();
        let root = canvas.add(Widget::plain(Vec2::ZERO, Vec2::splat(100.0)));
        let child = canvas.add_child(root, Widget::plain(Vec2::ZERO, Vec2::splat(50.0)));
        let grandchild = canvas.add_child(child, Widget::plain(Vec2::ZERO, Vec2::splat(25.0)));
        let sibling = canvas.add_child(root, Widget::plain(Vec2::ZERO, Vec2::splat(50.0)));

        canvas.focus(grandchild).unwrap();
        assert!(canvas.frame(grandchild).focused());
        assert!(canvas.frame(child).focused());
        assert!(canvas.frame(root).focused());
        assert!(!canvas.frame(sibling).focused());
    }

    #[test]
    fn test_topmost_wins_hit_test() {
        let mut canvas = UiCanvas::new();
        let size = Vec2::splat(50.0);
        let (widget_a, hits_a, _) = probe_widget(Vec2::ZERO, size);
        let (widget_b, hits_b, _) = probe_widget(Vec2::ZERO, size);
        let (widget_c, hits_c, _) = probe_widget(Vec2::ZERO, size);
        let _a = canvas.add(widget_a);
        let _b = canvas.add(widget_b);
        let c = canvas.add(widget_c);

        canvas.poll_widgets(Vec2::new(25.0, 25.0));

        assert_eq!(hits_a.get(), 0);
        assert_eq!(hits_b.get(), 0);
        assert_eq!(hits_c.get(), 1);
        assert_eq!(canvas.focused_widget(), Some(c));
    }

    #[test]
    fn test_children_win_over_parent() {
        let mut canvas = UiCanvas::new();
        let (parent_widget, parent_hits, parent_child_hits) =
            probe_widget(Vec2::ZERO, Vec2::splat(100.0));
        let (child_widget, child_hits, _) = probe_widget(Vec2::ZERO, Vec2::splat(40.0));
        let parent = canvas.add(parent_widget);
        let child = canvas.add_child(parent, child_widget);

        canvas.poll_widgets(Vec2::new(20.0, 20.0));

        assert_eq!(child_hits.get(), 1);
        assert_eq!(parent_hits.get(), 0);
        assert_eq!(parent_child_hits.get(), 1);
        assert_eq!(canvas.focused_widget(), Some(child));
    }

    #[test]
    fn test_non_focusable_hit_focuses_nearest_ancestor() {
        let mut canvas = UiCanvas::new();
        let (parent_widget, _, _) = probe_widget(Vec2::ZERO, Vec2::splat(100.0));
        let (child_widget, child_hits, _) = probe_widget(Vec2::ZERO, Vec2::splat(40.0));
        let parent = canvas.add(parent_widget);
        let child = canvas.add_child(parent, child_widget.non_focusable());

        canvas.focus(parent).unwrap();
        canvas.poll_widgets(Vec2::new(20.0, 20.0));

        assert_eq!(child_hits.get(), 1);
        assert_eq!(canvas.focused_widget(), Some(parent));
    }

    #[test]
    fn test_miss_hits_nothing() {
        let mut canvas = UiCanvas::new();
        let (widget, hits, _) = probe_widget(Vec2::ZERO, Vec2::splat(10.0));
        canvas.add(widget);

        canvas.poll_widgets(Vec2::new(50.0, 50.0));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_remove_focused_clears_focus() {
        let mut canvas = UiCanvas::new();
        let a = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));
        let _b = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));

        assert_eq!(canvas.focused_widget(), Some(a));
        canvas.remove(a);
        assert_eq!(canvas.focused_widget(), None);
    }

    #[test]
    fn test_remove_subtree_containing_focus_clears_focus() {
        let mut canvas = UiCanvas::new();
        let root = canvas.add(Widget::plain(Vec2::ZERO, Vec2::splat(100.0)));
        let child = canvas.add_child(root, Widget::plain(Vec2::ZERO, Vec2::splat(50.0)));

        canvas.focus(child).unwrap();
        canvas.remove(root);
        assert_eq!(canvas.focused_widget(), None);
    }

    #[test]
    fn test_removed_slot_is_reused() {
        let mut canvas = UiCanvas::new();
        let a = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));
        canvas.remove(a);
        let b = canvas.add(Widget::plain(Vec2::ZERO, Vec2::ONE));
        assert_eq!(a.0, b.0);
    }

    struct UpdateProbe {
        log: Rc<std::cell::RefCell<Vec<&'static str>>>,
        name: &'static str,
    }

    impl crate::ui::WidgetBehavior for UpdateProbe {
        fn update(&mut self, _frame: &mut WidgetFrame, _input: &Input) {
            self.log.borrow_mut().push(self.name);
        }
    }

    struct IdleSource;

    impl InputSource for IdleSource {
        fn key_down(&self, _key: Key) -> bool {
            false
        }

        fn button_down(&self, _button: MouseButton) -> bool {
            false
        }

        fn cursor_position(&self) -> Vec2 {
            Vec2::ZERO
        }
    }

    #[test]
    fn test_update_runs_parent_before_children_and_skips_inactive() {
        let mut canvas = UiCanvas::new();
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let probe = |name| UpdateProbe {
            log: log.clone(),
            name,
        };

        let parent = canvas.add(Widget::new(Vec2::ZERO, Vec2::ONE, probe("parent")));
        canvas.add_child(parent, Widget::new(Vec2::ZERO, Vec2::ONE, probe("child")));
        canvas.add(Widget::new(Vec2::ZERO, Vec2::ONE, probe("idle")).inactive());

        let input = Input::new(&IdleSource);
        canvas.update(&input);

        assert_eq!(*log.borrow(), vec!["parent", "child"]);
    }
}
