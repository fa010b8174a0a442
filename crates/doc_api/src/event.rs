use crate::id::{ListenerId, TimerId};

/// Host-dispatched events the engine can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocEvent {
    SelectionChange,
    KeyDown,
}

/// One delivery reported by a host's event pump.
///
/// The embedder drains these from its host and routes them into the
/// engine; the engine ignores firings that do not belong to its live
/// tracking session (e.g. a timer cleared earlier in the same frame).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fired {
    Timer(TimerId),
    Event(ListenerId, DocEvent),
}
