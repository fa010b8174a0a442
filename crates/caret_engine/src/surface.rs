//! Structural detection of the host's text-editing surface.
//!
//! The surface is owned externally and its exact markup varies, so it is
//! matched by class-name fragments rather than identity. Keeping the
//! matching strategy here means the tracker never inspects class lists
//! itself and the markers can be swapped out per host.

use doc_api::{HostDocument, NodeId};

/// Class fragments that identify an editable text region.
#[derive(Clone, Debug)]
pub struct SurfaceMatcher {
    markers: Vec<String>,
}

impl SurfaceMatcher {
    /// `markers` in priority order; the first one is the primary marker
    /// used for anchor scoping and stylesheet selectors.
    pub fn new(markers: &[&str]) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// CSS selector matching the primary surface marker.
    pub fn surface_selector(&self) -> String {
        let primary = self.markers.first().map(String::as_str).unwrap_or("");
        format!("[class*=\"{primary}\"]")
    }

    /// The editing surface enclosing the currently focused element, if any.
    pub fn focused_surface(&self, doc: &dyn HostDocument) -> Option<NodeId> {
        let active = doc.active_element()?;
        self.markers
            .iter()
            .find_map(|m| doc.closest_by_class_fragment(active, m))
    }

    /// The editing surface enclosing `node`, matched against the primary
    /// marker only. Guards against stray selections outside the surface.
    pub fn find_editing_surface(&self, doc: &dyn HostDocument, node: NodeId) -> Option<NodeId> {
        let primary = self.markers.first()?;
        doc.closest_by_class_fragment(node, primary)
    }
}

impl Default for SurfaceMatcher {
    fn default() -> Self {
        Self::new(&["slateTextArea", "textArea"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headless_doc::HeadlessDocument;

    #[test]
    fn focused_surface_accepts_any_marker() {
        let mut doc = HeadlessDocument::new();
        let body = doc.body();
        let legacy = doc.add_element(body, "div", &["textArea-old"]);
        let inner = doc.add_element(legacy, "span", &[]);
        doc.focus(Some(inner));

        let matcher = SurfaceMatcher::default();
        assert_eq!(matcher.focused_surface(&doc), Some(legacy));
    }

    #[test]
    fn anchor_scope_uses_the_primary_marker_only() {
        let mut doc = HeadlessDocument::new();
        let body = doc.body();
        let legacy = doc.add_element(body, "div", &["textArea-old"]);
        let inner = doc.add_element(legacy, "span", &[]);

        let matcher = SurfaceMatcher::default();
        assert_eq!(matcher.find_editing_surface(&doc, inner), None);

        let slate = doc.add_element(body, "div", &["slateTextArea-1a2b"]);
        let line = doc.add_element(slate, "span", &[]);
        assert_eq!(matcher.find_editing_surface(&doc, line), Some(slate));
    }

    #[test]
    fn selector_targets_the_primary_marker() {
        let matcher = SurfaceMatcher::default();
        assert_eq!(matcher.surface_selector(), "[class*=\"slateTextArea\"]");
    }
}
