//! Tracking session: the repeating tick timer plus the two event
//! subscriptions that keep the overlay in sync with the selection.

use doc_api::{DocEvent, HostDocument, ListenerId, TimerId};

/// Tick cadence while tracking.
pub const TICK_MS: u64 = 16;

/// Overlay height when the selection rect reports zero height
/// (e.g. the caret sits on an empty line).
pub const DEFAULT_CARET_HEIGHT: f32 = 20.0;

/// Consecutive skipped ticks after which a stale overlay is hidden.
/// Roughly one second at the tick cadence; covers the surface
/// unmounting without a focus change.
pub const HIDE_AFTER_SKIPPED_TICKS: u32 = 60;

/// Live resources of one tracking run: at most one session exists, and
/// starting a new one always stops the previous one first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrackingSession {
    pub(crate) timer: TimerId,
    pub(crate) selection_listener: ListenerId,
    pub(crate) key_listener: ListenerId,
}

impl TrackingSession {
    /// Register the timer and both listeners. Returns `None` on hosts
    /// without a document; partial registrations are rolled back.
    pub(crate) fn start(doc: &mut dyn HostDocument) -> Option<Self> {
        let timer = doc.set_interval(TICK_MS)?;

        let Some(selection_listener) = doc.add_event_listener(DocEvent::SelectionChange) else {
            doc.clear_interval(timer);
            return None;
        };
        let Some(key_listener) = doc.add_event_listener(DocEvent::KeyDown) else {
            doc.remove_event_listener(selection_listener);
            doc.clear_interval(timer);
            return None;
        };

        log::debug!(target: "caret.tracker", "tracking started");
        Some(Self {
            timer,
            selection_listener,
            key_listener,
        })
    }

    /// Synchronously cancel the timer and remove both listeners; no tick
    /// can be delivered for this session afterwards.
    pub(crate) fn stop(self, doc: &mut dyn HostDocument) {
        doc.clear_interval(self.timer);
        doc.remove_event_listener(self.selection_listener);
        doc.remove_event_listener(self.key_listener);
        log::debug!(target: "caret.tracker", "tracking stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_api::NullDocument;
    use headless_doc::HeadlessDocument;

    #[test]
    fn start_registers_one_timer_and_two_listeners() {
        let mut doc = HeadlessDocument::new();
        let session = TrackingSession::start(&mut doc).unwrap();
        assert_eq!(doc.timer_count(), 1);
        assert_eq!(doc.listener_count(), 2);

        session.stop(&mut doc);
        assert_eq!(doc.timer_count(), 0);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn start_fails_cleanly_without_a_document() {
        let mut doc = NullDocument;
        assert!(TrackingSession::start(&mut doc).is_none());
    }
}
