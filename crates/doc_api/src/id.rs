//! Opaque handles into a host document.
//!
//! These are plain newtypes over integers so that no concrete DOM type
//! leaks across the capability boundary. Hosts allocate them; the engine
//! only stores and compares them.

/// Identifier for a node in the host document tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Handle to a registered event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Handle to an armed repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);
