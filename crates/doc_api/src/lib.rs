//! # doc_api
//!
//! Capability surface the caret overlay engine requires from a host
//! document. The engine does not care which document implementation sits
//! behind it; it only needs:
//!
//! - element creation/removal and inline style writes
//! - a registry for injected stylesheets
//! - a focus/active-element query and a text-selection query
//! - structural ancestor matching (class-fragment based)
//! - event-listener and repeating-timer registration
//!
//! All registration methods return `Option`: a host without a visual
//! document (see [`NullDocument`]) answers `None` and every mutation is a
//! no-op, so the engine degrades without errors in non-visual contexts.

mod document;
mod event;
mod id;
mod null;

pub use document::{HostDocument, SelectionState};
pub use event::{DocEvent, Fired};
pub use id::{ListenerId, NodeId, TimerId};
pub use null::NullDocument;
