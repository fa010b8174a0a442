//! # settings_core
//!
//! Configuration layer for the smooth-typing plugin:
//! - [`SettingsStore`]: typed store holding the current value of every
//!   user-facing option
//! - [`OptionKey`]/[`OptionValue`]: dynamic view for schema-driven callers
//!   (settings panels, serializers)
//!
//! ## Change notification
//!
//! There are no per-option callbacks. The store bumps a monotonic
//! [`SettingsStore::revision`] counter on every write; consumers remember
//! the revision they last acted on and re-read the whole store when it
//! moves. This keeps the reactive graph to a single edge and makes apply
//! ordering deterministic.

mod schema;
mod store;

pub use schema::{OPTIONS, OptionKey, OptionValue, ValueKind};
pub use store::{SettingsError, SettingsStore};
