//! Contents of the source-document modal.

#[cfg(test)]
#[path = "source_modal_test.rs"]
mod source_modal_test;

use super::conversation::Document;

/// One rendered card: "Document N" over the document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentCard {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceModalState {
    visible: bool,
    cards: Vec<DocumentCard>,
}

impl SourceModalState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn cards(&self) -> &[DocumentCard] {
        &self.cards
    }

    /// Replace any previous cards with one per document, in order, and
    /// show the modal. An empty list still shows it.
    pub fn show(&mut self, docs: &[Document]) {
        self.cards = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| DocumentCard { title: format!("Document {}", i + 1), body: doc.body.clone() })
            .collect();
        self.visible = true;
    }

    /// Hide the modal; cards stay until the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
