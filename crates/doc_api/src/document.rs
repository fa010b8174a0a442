use crate::event::DocEvent;
use crate::id::{ListenerId, NodeId, TimerId};
use core_types::Rect;

/// Snapshot of the host's text selection, reduced to caret semantics.
///
/// `start_rect` is the bounding rectangle of the first range collapsed to
/// its start point (the insertion point, not the selection extent). It is
/// `None` when the selection holds no range at all; a range that has not
/// been laid out yet reports a degenerate rect instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionState {
    pub anchor: Option<NodeId>,
    pub start_rect: Option<Rect>,
}

/// Capability surface of a DOM-like host document.
///
/// Object-safe on purpose: the engine takes `&mut dyn HostDocument` so a
/// single engine build works against any host.
pub trait HostDocument {
    /// Create an element and append it to the document body.
    ///
    /// Returns `None` when the host has no document to insert into.
    fn create_element(&mut self, tag: &str, dom_id: &str) -> Option<NodeId>;

    /// Remove every element carrying this dom id. Returns `true` if
    /// anything was removed; removing what does not exist is a no-op.
    fn remove_element_by_dom_id(&mut self, dom_id: &str) -> bool;

    fn element_by_dom_id(&self, dom_id: &str) -> Option<NodeId>;

    fn set_style_property(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_style_property(&mut self, node: NodeId, name: &str);

    /// Insert a stylesheet node tagged with `dom_id` into the document's
    /// style registry. The host appends; keeping the registry free of
    /// duplicates is the caller's job.
    fn insert_stylesheet(&mut self, dom_id: &str, css: &str) -> Option<NodeId>;

    /// Remove every stylesheet carrying this dom id.
    fn remove_stylesheet(&mut self, dom_id: &str) -> bool;

    fn stylesheet_text(&self, dom_id: &str) -> Option<&str>;

    /// Set a custom property on the document root element.
    fn set_root_property(&mut self, name: &str, value: &str);

    fn active_element(&self) -> Option<NodeId>;

    /// The current selection, or `None` when the host has none.
    fn selection(&self) -> Option<SelectionState>;

    /// Nearest ancestor-or-self of `node` whose class list contains
    /// `fragment` as a substring.
    fn closest_by_class_fragment(&self, node: NodeId, fragment: &str) -> Option<NodeId>;

    /// Force a synchronous layout pass and return the node's laid-out
    /// height. Used to restart CSS animations.
    fn force_reflow(&mut self, node: NodeId) -> f32;

    fn add_event_listener(&mut self, event: DocEvent) -> Option<ListenerId>;

    fn remove_event_listener(&mut self, listener: ListenerId);

    /// Arm a repeating timer with the given period.
    fn set_interval(&mut self, period_ms: u64) -> Option<TimerId>;

    fn clear_interval(&mut self, timer: TimerId);
}
