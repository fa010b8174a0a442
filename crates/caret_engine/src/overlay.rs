//! Ownership of the single floating caret element.

use doc_api::{HostDocument, NodeId};

/// Fixed dom id of the overlay element.
pub const CARET_ID: &str = "smooth-typing-caret";

/// Insert the overlay, destroying any previous instance first so exactly
/// one element with [`CARET_ID`] exists afterwards.
pub(crate) fn create(doc: &mut dyn HostDocument) -> Option<NodeId> {
    destroy(doc);
    doc.create_element("div", CARET_ID)
}

/// Remove the overlay if present; a no-op otherwise.
pub(crate) fn destroy(doc: &mut dyn HostDocument) {
    doc.remove_element_by_dom_id(CARET_ID);
}

#[cfg(test)]
mod tests {
    use super::*;
    use headless_doc::HeadlessDocument;

    #[test]
    fn create_replaces_rather_than_accumulates() {
        let mut doc = HeadlessDocument::new();
        create(&mut doc);
        create(&mut doc);
        create(&mut doc);
        assert_eq!(doc.element_count(CARET_ID), 1);
    }

    #[test]
    fn destroy_without_overlay_is_a_no_op() {
        let mut doc = HeadlessDocument::new();
        destroy(&mut doc);
        assert_eq!(doc.element_count(CARET_ID), 0);
    }
}
