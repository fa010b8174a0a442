//! Stylesheet synthesis and (re)installation.
//!
//! One stylesheet carries everything the overlay needs: it hides the
//! host's native caret, defines the fade-in and blink animations, and
//! optionally themes the surface scrollbar. `apply` always removes the
//! previous sheet first, so repeated applies leave exactly one.

use crate::config::EngineConfig;
use crate::surface::SurfaceMatcher;
use doc_api::HostDocument;
use std::fmt::Write;

/// Fixed dom id of the injected stylesheet.
pub const STYLE_ID: &str = "smooth-typing-style";

/// Text spans the fade-in animation attaches to.
const FADE_SPAN_SELECTOR: &str = "span[data-slate-string=\"true\"]";

pub(crate) fn apply(doc: &mut dyn HostDocument, config: &EngineConfig, matcher: &SurfaceMatcher) {
    doc.remove_stylesheet(STYLE_ID);
    let css = render(config, matcher);
    doc.insert_stylesheet(STYLE_ID, &css);
    log::debug!(target: "caret.styles", "stylesheet installed ({} bytes)", css.len());
}

pub(crate) fn remove(doc: &mut dyn HostDocument) {
    doc.remove_stylesheet(STYLE_ID);
}

fn render(config: &EngineConfig, matcher: &SurfaceMatcher) -> String {
    let surface = matcher.surface_selector();
    let caret_color = config.caret_color_css();
    let mut css = String::new();

    // The overlay is the only caret that should be visible.
    let _ = write!(
        css,
        "{surface} * {{\n    caret-color: transparent !important;\n}}\n\n"
    );

    if config.fade_enabled {
        let _ = write!(
            css,
            "{surface} {FADE_SPAN_SELECTOR} {{\n    animation: smoothCharIn {}ms ease-out both;\n}}\n\n",
            config.fade_speed_ms
        );
    }

    css.push_str(
        "@keyframes smoothCharIn {\n\
         \x20   from { opacity: 0.6; filter: blur(0.4px); }\n\
         \x20   to { opacity: 1; filter: blur(0px); }\n\
         }\n\n",
    );

    let _ = write!(
        css,
        "#{} {{\n\
         \x20   position: fixed;\n\
         \x20   width: 2px;\n\
         \x20   border-radius: 2px;\n\
         \x20   background: {caret_color};\n\
         \x20   pointer-events: none;\n\
         \x20   z-index: 9999;\n\
         \x20   animation: caretBlink 1s step-end infinite;\n\
         \x20   transition: left var(--caret-speed, 80ms) cubic-bezier(0.2, 0, 0, 1),\n\
         \x20               top var(--caret-speed, 80ms) cubic-bezier(0.2, 0, 0, 1),\n\
         \x20               height var(--caret-speed, 80ms) ease,\n\
         \x20               background 300ms ease;\n\
         }}\n\n",
        crate::overlay::CARET_ID
    );

    css.push_str(
        "@keyframes caretBlink {\n\
         \x20   0%, 100% { opacity: 1; }\n\
         \x20   50% { opacity: 0; }\n\
         }\n",
    );

    if config.scrollbar_enabled {
        let color = &config.scrollbar_color;
        let _ = write!(
            css,
            "\n{surface} {{\n\
             \x20   overflow-y: auto;\n\
             \x20   scroll-behavior: smooth;\n\
             \x20   scrollbar-width: thin;\n\
             \x20   scrollbar-color: {color} transparent;\n\
             }}\n\n\
             {surface}::-webkit-scrollbar {{\n\
             \x20   width: 4px;\n\
             }}\n\n\
             {surface}::-webkit-scrollbar-track {{\n\
             \x20   background: transparent;\n\
             }}\n\n\
             {surface}::-webkit-scrollbar-thumb {{\n\
             \x20   background: {color};\n\
             \x20   border-radius: 4px;\n\
             \x20   transition: background 200ms ease;\n\
             }}\n\n\
             {surface}::-webkit-scrollbar-thumb:hover {{\n\
             \x20   background: {color}cc;\n\
             }}\n"
        );
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use headless_doc::HeadlessDocument;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn apply_is_idempotent() {
        let mut doc = HeadlessDocument::new();
        let matcher = SurfaceMatcher::default();
        let cfg = config();

        apply(&mut doc, &cfg, &matcher);
        apply(&mut doc, &cfg, &matcher);
        apply(&mut doc, &cfg, &matcher);
        assert_eq!(doc.stylesheet_count(STYLE_ID), 1);

        remove(&mut doc);
        assert_eq!(doc.stylesheet_count(STYLE_ID), 0);
    }

    #[test]
    fn render_hides_the_native_caret() {
        let css = render(&config(), &SurfaceMatcher::default());
        assert!(css.contains("[class*=\"slateTextArea\"] * {"));
        assert!(css.contains("caret-color: transparent !important;"));
    }

    #[test]
    fn render_parameterizes_blink_and_color() {
        let cfg = EngineConfig {
            caret_color: 0xff0000,
            ..config()
        };
        let css = render(&cfg, &SurfaceMatcher::default());
        assert!(css.contains("#smooth-typing-caret {"));
        assert!(css.contains("background: #ff0000;"));
        assert!(css.contains("animation: caretBlink 1s step-end infinite;"));
        assert!(css.contains("var(--caret-speed, 80ms)"));
    }

    #[test]
    fn fade_rule_follows_the_toggle() {
        let cfg = EngineConfig {
            fade_enabled: true,
            fade_speed_ms: 120,
            ..config()
        };
        let css = render(&cfg, &SurfaceMatcher::default());
        assert!(css.contains("animation: smoothCharIn 120ms ease-out both;"));

        let cfg = EngineConfig {
            fade_enabled: false,
            ..cfg
        };
        let css = render(&cfg, &SurfaceMatcher::default());
        assert!(!css.contains("smoothCharIn 120ms"));
        // Keyframes stay defined either way.
        assert!(css.contains("@keyframes smoothCharIn"));
    }

    #[test]
    fn scrollbar_block_is_conditional_with_hover_alpha() {
        let cfg = EngineConfig {
            scrollbar_enabled: true,
            scrollbar_color: "#3b3b3b".to_string(),
            ..config()
        };
        let css = render(&cfg, &SurfaceMatcher::default());
        assert!(css.contains("scrollbar-color: #3b3b3b transparent;"));
        assert!(css.contains("background: #3b3b3bcc;"));

        let cfg = EngineConfig {
            scrollbar_enabled: false,
            ..cfg
        };
        let css = render(&cfg, &SurfaceMatcher::default());
        assert!(!css.contains("scrollbar"));
    }
}
