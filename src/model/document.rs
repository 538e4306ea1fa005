//! Document-level types.

use super::{Page, ShapeLocation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A design document: an ordered list of pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document name
    #[serde(default)]
    pub name: String,

    /// Version label assigned by the editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            last_modified: None,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get a page by id.
    pub fn get_page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Count every shape in the document.
    pub fn total_shapes(&self) -> usize {
        self.pages.iter().map(Page::total_shapes).sum()
    }

    /// Find a shape by id, searching pages in order.
    ///
    /// Returns the owning page with the shape's location on it.
    pub fn locate_shape(&self, id: &str) -> Option<(&Page, ShapeLocation<'_>)> {
        self.pages
            .iter()
            .find_map(|page| page.locate_shape(id).map(|location| (page, location)))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;

    #[test]
    fn test_document_new() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.name, "Untitled");
    }

    #[test]
    fn test_locate_across_pages() {
        let mut doc = Document::new("Doc");
        let mut first = Page::new("1", "First");
        first.add_shape(Shape::text_shape("a", ["A"]));
        let mut second = Page::new("2", "Second");
        second.add_shape(Shape::text_shape("b", ["B"]));
        doc.add_page(first);
        doc.add_page(second);

        let (page, location) = doc.locate_shape("b").unwrap();
        assert_eq!(page.id, "2");
        assert_eq!(location.shape.id, "b");
        assert!(doc.get_page("1").is_some());
        assert!(doc.get_page("3").is_none());
        assert_eq!(doc.total_shapes(), 2);
    }

    #[test]
    fn test_last_modified_rfc3339() {
        let json = r#"{"name": "Doc", "last_modified": "2024-03-01T12:00:00Z", "pages": []}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(
            doc.last_modified.unwrap().to_rfc3339(),
            "2024-03-01T12:00:00+00:00"
        );
    }
}
