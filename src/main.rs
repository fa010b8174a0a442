//! Headless demo of the caret synchronization engine.
//!
//! Builds an in-memory document with a slate-style editing surface, then
//! scripts a short typing session: keystrokes move the selection, the
//! engine tracks it through timer and event deliveries, and the overlay
//! geometry is logged per keystroke. Finishes by toggling the caret off
//! and on through the settings store and tearing everything down.

use caret_engine::{CARET_ID, CaretEngine, DocEvent, HostDocument, TICK_MS};
use core_types::Rect;
use headless_doc::HeadlessDocument;
use settings_core::SettingsStore;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut doc = HeadlessDocument::new();
    let body = doc.body();
    let chat = doc.add_element(body, "div", &["chatContent-3ab9"]);
    let surface = doc.add_element(chat, "div", &["slateTextArea-1a2b"]);
    let line = doc.add_element(surface, "span", &[]);
    doc.focus(Some(surface));

    let mut store = SettingsStore::default();
    store.set_caret_color(0x00ff88);
    store.set_caret_speed(80);

    let mut engine = CaretEngine::new();
    engine.start(&mut doc, &store);
    log::info!(
        "engine started: overlay={} stylesheet installed, tracking={}",
        doc.element_count(CARET_ID),
        engine.is_tracking()
    );

    // ~1 second of typing: a keystroke every 6 frames moves the caret
    // 8px to the right.
    let mut x = 12.0;
    for frame in 0u32..60 {
        if frame % 6 == 0 {
            x += 8.0;
            doc.set_selection(line, Some(Rect::new(x, 40.0, 0.0, 18.0)));
            for fired in doc.fire(DocEvent::KeyDown) {
                engine.on_fired(&mut doc, fired);
            }
            if let Some(overlay) = doc.element_by_dom_id(CARET_ID) {
                log::info!(
                    "keystroke at frame {frame}: caret left={:?} top={:?} height={:?}",
                    doc.style_property(overlay, "left"),
                    doc.style_property(overlay, "top"),
                    doc.style_property(overlay, "height"),
                );
            }
        }
        for fired in doc.advance(TICK_MS) {
            engine.on_fired(&mut doc, fired);
        }
    }

    store.set_smooth_caret(false);
    engine.sync_settings(&mut doc, &store);
    log::info!(
        "caret disabled: overlays={} timers={} listeners={}",
        doc.element_count(CARET_ID),
        doc.timer_count(),
        doc.listener_count(),
    );

    store.set_smooth_caret(true);
    engine.sync_settings(&mut doc, &store);
    log::info!(
        "caret re-enabled: overlays={} tracking={}",
        doc.element_count(CARET_ID),
        engine.is_tracking()
    );

    engine.stop(&mut doc);
    log::info!(
        "engine stopped: overlays={} timers={} listeners={}",
        doc.element_count(CARET_ID),
        doc.timer_count(),
        doc.listener_count(),
    );
}
