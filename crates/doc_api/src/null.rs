use crate::document::{HostDocument, SelectionState};
use crate::event::DocEvent;
use crate::id::{ListenerId, NodeId, TimerId};

/// Host for environments without a document (headless contexts, tests of
/// the degraded path). Every query answers "nothing", every mutation is a
/// no-op; driving the full engine lifecycle against it must never panic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDocument;

impl HostDocument for NullDocument {
    fn create_element(&mut self, _tag: &str, _dom_id: &str) -> Option<NodeId> {
        None
    }

    fn remove_element_by_dom_id(&mut self, _dom_id: &str) -> bool {
        false
    }

    fn element_by_dom_id(&self, _dom_id: &str) -> Option<NodeId> {
        None
    }

    fn set_style_property(&mut self, _node: NodeId, _name: &str, _value: &str) {}

    fn remove_style_property(&mut self, _node: NodeId, _name: &str) {}

    fn insert_stylesheet(&mut self, _dom_id: &str, _css: &str) -> Option<NodeId> {
        None
    }

    fn remove_stylesheet(&mut self, _dom_id: &str) -> bool {
        false
    }

    fn stylesheet_text(&self, _dom_id: &str) -> Option<&str> {
        None
    }

    fn set_root_property(&mut self, _name: &str, _value: &str) {}

    fn active_element(&self) -> Option<NodeId> {
        None
    }

    fn selection(&self) -> Option<SelectionState> {
        None
    }

    fn closest_by_class_fragment(&self, _node: NodeId, _fragment: &str) -> Option<NodeId> {
        None
    }

    fn force_reflow(&mut self, _node: NodeId) -> f32 {
        0.0
    }

    fn add_event_listener(&mut self, _event: DocEvent) -> Option<ListenerId> {
        None
    }

    fn remove_event_listener(&mut self, _listener: ListenerId) {}

    fn set_interval(&mut self, _period_ms: u64) -> Option<TimerId> {
        None
    }

    fn clear_interval(&mut self, _timer: TimerId) {}
}
