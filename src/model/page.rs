//! Page-level types.

use super::{Shape, Transform};
use serde::{Deserialize, Serialize};

/// A single page (canvas) in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Stable identifier
    pub id: String,

    /// Page name
    #[serde(default)]
    pub name: String,

    /// Canvas background (hex color)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Top-level shapes in paint order
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Add a top-level shape.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Check if the page has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Count every shape on the page, nested ones included.
    pub fn total_shapes(&self) -> usize {
        self.shapes.iter().map(Shape::total_shapes).sum()
    }

    /// Find a shape by id anywhere on the page.
    pub fn find_shape(&self, id: &str) -> Option<&Shape> {
        self.locate_shape(id).map(|location| location.shape)
    }

    /// Find a shape by id, walking the same container children the
    /// converted tree contains.
    pub fn locate_shape(&self, id: &str) -> Option<ShapeLocation<'_>> {
        fn walk<'a>(
            shapes: &'a [Shape],
            parent: Transform,
            visible: bool,
            id: &str,
        ) -> Option<ShapeLocation<'a>> {
            for shape in shapes {
                let visible = visible && shape.visible;
                if shape.id == id {
                    return Some(ShapeLocation {
                        shape,
                        parent,
                        visible,
                    });
                }
                if !shape.is_container() {
                    continue;
                }
                let own = parent.then(&shape.relative_transform());
                if let Some(found) = walk(&shape.children, own, visible, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.shapes, Transform::default(), true, id)
    }
}

/// A shape found on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeLocation<'a> {
    /// The shape itself
    pub shape: &'a Shape,

    /// Transform of the parent into page space
    pub parent: Transform,

    /// False when the shape or any ancestor is hidden
    pub visible: bool,
}
