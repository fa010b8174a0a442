//! Lifecycle controller: owns every live resource (config snapshot,
//! overlay element, tracking session) and is the only writer of the
//! document-wide singletons.

use crate::config::EngineConfig;
use crate::surface::SurfaceMatcher;
use crate::tracker::{DEFAULT_CARET_HEIGHT, HIDE_AFTER_SKIPPED_TICKS, TrackingSession};
use crate::{overlay, styles};
use doc_api::{Fired, HostDocument, NodeId};
use settings_core::SettingsStore;

/// The caret synchronization engine.
///
/// All state lives on the instance; two engines can run against two
/// documents independently. Methods take the host as `&mut dyn
/// HostDocument`, so ticks are serialized by construction and `stop`
/// takes effect synchronously.
#[derive(Debug, Default)]
pub struct CaretEngine {
    config: EngineConfig,
    matcher: SurfaceMatcher,
    overlay: Option<NodeId>,
    session: Option<TrackingSession>,
    applied_revision: Option<u64>,
    skipped_ticks: u32,
}

impl CaretEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom editing-surface markers.
    pub fn with_matcher(matcher: SurfaceMatcher) -> Self {
        Self {
            matcher,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Activate: one settings apply.
    pub fn start(&mut self, doc: &mut dyn HostDocument, store: &SettingsStore) {
        self.apply_settings(doc, store);
    }

    /// Deactivate: remove the stylesheet, destroy the overlay and stop
    /// tracking, regardless of current settings. Leaves zero residue and
    /// is safe to call when nothing is running.
    pub fn stop(&mut self, doc: &mut dyn HostDocument) {
        styles::remove(doc);
        overlay::destroy(doc);
        self.overlay = None;
        self.stop_tracking(doc);
        self.applied_revision = None;
        log::debug!(target: "caret.engine", "engine stopped");
    }

    /// Snapshot the store and reconcile every resource with it.
    pub fn apply_settings(&mut self, doc: &mut dyn HostDocument, store: &SettingsStore) {
        let config = EngineConfig::from_store(store);

        doc.set_root_property("--caret-speed", &format!("{}ms", config.caret_speed_ms));
        styles::apply(doc, &config, &self.matcher);

        if config.caret_enabled {
            self.overlay = overlay::create(doc);
            self.start_tracking(doc);
        } else {
            overlay::destroy(doc);
            self.overlay = None;
            self.stop_tracking(doc);
        }

        self.applied_revision = Some(store.revision());
        log::debug!(
            target: "caret.engine",
            "settings applied: caret={} fade={} speed={}ms",
            config.caret_enabled,
            config.fade_enabled,
            config.caret_speed_ms
        );
        self.config = config;
    }

    /// The single change subscription: re-apply only when the store's
    /// revision moved since the last apply. Returns whether it applied.
    pub fn sync_settings(&mut self, doc: &mut dyn HostDocument, store: &SettingsStore) -> bool {
        if self.applied_revision == Some(store.revision()) {
            return false;
        }
        self.apply_settings(doc, store);
        true
    }

    /// Route one host delivery. Firings that do not belong to the live
    /// session (e.g. a timer cleared earlier this frame) are dropped.
    pub fn on_fired(&mut self, doc: &mut dyn HostDocument, fired: Fired) {
        let Some(session) = self.session else {
            return;
        };
        match fired {
            Fired::Timer(timer) if timer == session.timer => {
                self.update_position(doc);
            }
            Fired::Event(listener, _) if listener == session.selection_listener => {
                self.update_position(doc);
            }
            Fired::Event(listener, _) if listener == session.key_listener => {
                self.restart_blink(doc);
                self.update_position(doc);
            }
            _ => {}
        }
    }

    /// One tick: read the selection and move the overlay, or hide it.
    ///
    /// Missing data is never an error; at worst the overlay is hidden or
    /// keeps its last geometry for this tick.
    fn update_position(&mut self, doc: &mut dyn HostDocument) {
        let Some(overlay) = self.overlay else {
            return;
        };

        if self.matcher.focused_surface(&*doc).is_none() {
            doc.set_style_property(overlay, "display", "none");
            return;
        }

        let Some(selection) = doc.selection() else {
            self.note_skipped_tick(doc, overlay);
            return;
        };
        let Some(rect) = selection.start_rect else {
            self.note_skipped_tick(doc, overlay);
            return;
        };
        if rect.is_degenerate() {
            self.note_skipped_tick(doc, overlay);
            return;
        }

        let Some(anchor) = selection.anchor else {
            self.note_skipped_tick(doc, overlay);
            return;
        };
        if self.matcher.find_editing_surface(&*doc, anchor).is_none() {
            doc.set_style_property(overlay, "display", "none");
            return;
        }

        self.skipped_ticks = 0;
        let height = if rect.height == 0.0 {
            DEFAULT_CARET_HEIGHT
        } else {
            rect.height
        };

        doc.set_style_property(overlay, "display", "block");
        doc.set_style_property(overlay, "left", &format!("{}px", rect.x));
        doc.set_style_property(overlay, "top", &format!("{}px", rect.y));
        doc.set_style_property(overlay, "height", &format!("{height}px"));
        log::trace!(
            target: "caret.tracker",
            "caret at ({}, {}) h={height}",
            rect.x,
            rect.y
        );
    }

    /// A tick with nothing to draw keeps the last geometry, but a stale
    /// overlay must not outlive the selection it was drawn for.
    fn note_skipped_tick(&mut self, doc: &mut dyn HostDocument, overlay: NodeId) {
        self.skipped_ticks = self.skipped_ticks.saturating_add(1);
        if self.skipped_ticks >= HIDE_AFTER_SKIPPED_TICKS {
            doc.set_style_property(overlay, "display", "none");
        }
    }

    /// Restart the blink animation so the caret is solid right after a
    /// keystroke: drop the animation, force one layout pass, restore it.
    fn restart_blink(&mut self, doc: &mut dyn HostDocument) {
        let Some(overlay) = self.overlay else {
            return;
        };
        doc.set_style_property(overlay, "animation", "none");
        let _ = doc.force_reflow(overlay);
        doc.remove_style_property(overlay, "animation");
    }

    fn start_tracking(&mut self, doc: &mut dyn HostDocument) {
        self.stop_tracking(doc);
        self.session = TrackingSession::start(doc);
        self.skipped_ticks = 0;
    }

    fn stop_tracking(&mut self, doc: &mut dyn HostDocument) {
        if let Some(session) = self.session.take() {
            session.stop(doc);
        }
    }
}
