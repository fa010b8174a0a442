//! # headless_doc
//!
//! Flat-arena, in-memory implementation of [`HostDocument`]. It backs the
//! integration tests and the demo binary: tests build a document shape,
//! point focus/selection at it, then drive the engine through the pump
//! ([`HeadlessDocument::advance`] / [`HeadlessDocument::fire`]) exactly the
//! way a real single-threaded host event loop would.
//!
//! Nodes are never reallocated; removal detaches them, so `NodeId`s stay
//! stable for the document's lifetime.

use core_types::Rect;
use doc_api::{DocEvent, Fired, HostDocument, ListenerId, NodeId, SelectionState, TimerId};

#[derive(Clone, Debug)]
struct ElementNode {
    tag: String,
    dom_id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    style: Vec<(String, String)>,
    css_text: Option<String>,
    layout_height: f32,
    detached: bool,
}

impl ElementNode {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            dom_id: None,
            classes: Vec::new(),
            parent,
            style: Vec::new(),
            css_text: None,
            layout_height: 0.0,
            detached: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Interval {
    period_ms: u64,
    next_due: u64,
}

/// In-memory DOM-like document with an explicit event pump.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    nodes: Vec<ElementNode>,
    root_properties: Vec<(String, String)>,
    active: Option<NodeId>,
    selection: Option<SelectionState>,
    listeners: Vec<(ListenerId, DocEvent)>,
    timers: Vec<(TimerId, Interval)>,
    next_listener: u64,
    next_timer: u64,
    now_ms: u64,
    reflows: u64,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        let mut doc = Self::default();
        let root = doc.push(ElementNode::new("html", None));
        doc.push(ElementNode::new("body", Some(root)));
        doc
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn body(&self) -> NodeId {
        NodeId(1)
    }

    /// Append an element under `parent` with the given class list.
    pub fn add_element(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let mut node = ElementNode::new(tag, Some(parent));
        node.classes = classes.iter().map(|c| c.to_string()).collect();
        self.push(node)
    }

    /// Height this node reports from a forced layout read.
    pub fn set_layout_height(&mut self, node: NodeId, height: f32) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.layout_height = height;
        }
    }

    pub fn focus(&mut self, node: Option<NodeId>) {
        self.active = node;
    }

    /// Install a selection whose first range collapses to `start_rect`.
    pub fn set_selection(&mut self, anchor: NodeId, start_rect: Option<Rect>) {
        self.selection = Some(SelectionState {
            anchor: Some(anchor),
            start_rect,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Advance the clock, collecting every interval firing that came due.
    ///
    /// Due firings are delivered in time order; timers that fire at the
    /// same instant keep registration order. Dispatch happens after the
    /// pump returns, so clearing a timer from a handler affects the next
    /// pump cycle, never the current snapshot.
    pub fn advance(&mut self, ms: u64) -> Vec<Fired> {
        let end = self.now_ms.saturating_add(ms);
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .map(|(_, iv)| iv.next_due)
                .min()
                .filter(|&due| due <= end);
            let Some(due) = next else { break };

            let ids: Vec<TimerId> = self
                .timers
                .iter()
                .filter(|(_, iv)| iv.next_due == due)
                .map(|(id, _)| *id)
                .collect();
            for id in ids {
                if let Some((_, iv)) = self.timers.iter_mut().find(|(t, _)| *t == id) {
                    iv.next_due = iv.next_due.saturating_add(iv.period_ms);
                    fired.push(Fired::Timer(id));
                }
            }
        }

        self.now_ms = end;
        fired
    }

    /// Dispatch a host event to every registered listener.
    pub fn fire(&mut self, event: DocEvent) -> Vec<Fired> {
        self.listeners
            .iter()
            .filter(|(_, e)| *e == event)
            .map(|(id, e)| Fired::Event(*id, *e))
            .collect()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    // --- observability for tests ---

    /// Live (non-detached) elements carrying this dom id.
    pub fn element_count(&self, dom_id: &str) -> usize {
        self.nodes
            .iter()
            .filter(|n| !n.detached && n.dom_id.as_deref() == Some(dom_id))
            .count()
    }

    /// Live stylesheet nodes carrying this dom id.
    pub fn stylesheet_count(&self, dom_id: &str) -> usize {
        self.nodes
            .iter()
            .filter(|n| {
                !n.detached && n.css_text.is_some() && n.dom_id.as_deref() == Some(dom_id)
            })
            .count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn reflow_count(&self) -> u64 {
        self.reflows
    }

    pub fn style_property(&self, node: NodeId, name: &str) -> Option<&str> {
        let n = self.nodes.get(node.0 as usize)?;
        n.style
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn root_property(&self, name: &str) -> Option<&str> {
        self.root_properties
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    // --- internals ---

    fn push(&mut self, node: ElementNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> Option<&ElementNode> {
        self.nodes.get(id.0 as usize).filter(|n| !n.detached)
    }
}

impl HostDocument for HeadlessDocument {
    fn create_element(&mut self, tag: &str, dom_id: &str) -> Option<NodeId> {
        let body = self.body();
        let mut node = ElementNode::new(tag, Some(body));
        node.dom_id = Some(dom_id.to_string());
        Some(self.push(node))
    }

    fn remove_element_by_dom_id(&mut self, dom_id: &str) -> bool {
        let mut removed = false;
        for n in &mut self.nodes {
            if !n.detached && n.dom_id.as_deref() == Some(dom_id) {
                n.detached = true;
                removed = true;
            }
        }
        removed
    }

    fn element_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| !n.detached && n.dom_id.as_deref() == Some(dom_id))
            .map(|i| NodeId(i as u32))
    }

    fn set_style_property(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(n) = self.nodes.get_mut(node.0 as usize) else {
            return;
        };
        if let Some(entry) = n.style.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            n.style.push((name.to_string(), value.to_string()));
        }
    }

    fn remove_style_property(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.style.retain(|(k, _)| k != name);
        }
    }

    fn insert_stylesheet(&mut self, dom_id: &str, css: &str) -> Option<NodeId> {
        let root = self.root();
        let mut node = ElementNode::new("style", Some(root));
        node.dom_id = Some(dom_id.to_string());
        node.css_text = Some(css.to_string());
        Some(self.push(node))
    }

    fn remove_stylesheet(&mut self, dom_id: &str) -> bool {
        let mut removed = false;
        for n in &mut self.nodes {
            if !n.detached && n.css_text.is_some() && n.dom_id.as_deref() == Some(dom_id) {
                n.detached = true;
                removed = true;
            }
        }
        removed
    }

    fn stylesheet_text(&self, dom_id: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| !n.detached && n.css_text.is_some() && n.dom_id.as_deref() == Some(dom_id))
            .and_then(|n| n.css_text.as_deref())
    }

    fn set_root_property(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.root_properties.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            self.root_properties
                .push((name.to_string(), value.to_string()));
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        let active = self.active?;
        self.node(active)?;
        Some(active)
    }

    fn selection(&self) -> Option<SelectionState> {
        self.selection
    }

    fn closest_by_class_fragment(&self, node: NodeId, fragment: &str) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            // A detached ancestor means the node is no longer in the document.
            let n = self.node(id)?;
            if n.classes.iter().any(|c| c.contains(fragment)) {
                return Some(id);
            }
            cursor = n.parent;
        }
        None
    }

    fn force_reflow(&mut self, node: NodeId) -> f32 {
        self.reflows += 1;
        self.nodes
            .get(node.0 as usize)
            .map(|n| n.layout_height)
            .unwrap_or(0.0)
    }

    fn add_event_listener(&mut self, event: DocEvent) -> Option<ListenerId> {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, event));
        Some(id)
    }

    fn remove_event_listener(&mut self, listener: ListenerId) {
        self.listeners.retain(|(id, _)| *id != listener);
    }

    fn set_interval(&mut self, period_ms: u64) -> Option<TimerId> {
        let period_ms = period_ms.max(1);
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.timers.push((
            id,
            Interval {
                period_ms,
                next_due: self.now_ms.saturating_add(period_ms),
            },
        ));
        Some(id)
    }

    fn clear_interval(&mut self, timer: TimerId) {
        self.timers.retain(|(id, _)| *id != timer);
    }
}
