//! # caret_engine
//!
//! Renders a custom animated caret as a single floating overlay element
//! and keeps it synchronized with the text selection of an external
//! editing surface. The engine owns three document-wide resources and
//! replaces rather than accumulates all of them:
//!
//! - one injected stylesheet ([`STYLE_ID`])
//! - one overlay element ([`CARET_ID`])
//! - one tracking session (a 16 ms interval plus selection-change and
//!   key-down listeners)
//!
//! The host document is reached exclusively through
//! [`doc_api::HostDocument`], so the engine runs unchanged against a real
//! DOM bridge, the in-memory `headless_doc`, or `NullDocument` (where the
//! whole lifecycle degrades to no-ops).
//!
//! ## Driving it
//!
//! The embedder owns the event loop: it drains its host's pump and feeds
//! [`Fired`] values into [`CaretEngine::on_fired`], and calls
//! [`CaretEngine::sync_settings`] whenever the settings store may have
//! changed. `stop` tears everything down unconditionally.

mod config;
mod engine;
mod overlay;
mod styles;
mod surface;
mod tracker;

pub use config::EngineConfig;
pub use engine::CaretEngine;
pub use overlay::CARET_ID;
pub use styles::STYLE_ID;
pub use surface::SurfaceMatcher;
pub use tracker::{DEFAULT_CARET_HEIGHT, HIDE_AFTER_SKIPPED_TICKS, TICK_MS};

// Re-exported so embedders only handling engine wiring need one import.
pub use doc_api::{DocEvent, Fired, HostDocument, NodeId, NullDocument};
