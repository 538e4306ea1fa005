//! Conversion from the internal design model into the target schema.
//!
//! Each converter is a pure function of a borrowed [`Shape`] producing one
//! trait fragment. The [`NodeAssembler`] merges the fragments that apply to
//! a shape's kind into a complete [`Node`] and recurses into containers.
//!
//! # Example
//!
//! ```
//! use figmap::convert::{arc_data, convert_node};
//! use figmap::model::{OvalAttrs, Shape, ShapeKind};
//!
//! let ring = Shape::new(
//!     "1:1",
//!     ShapeKind::Oval(OvalAttrs {
//!         inner_radius: Some(0.5),
//!         ..Default::default()
//!     }),
//! );
//!
//! assert_eq!(arc_data(&ring).inner_radius, 0.5);
//!
//! let node = convert_node(&ring, None).unwrap();
//! assert_eq!(node.node_type.as_str(), "ELLIPSE");
//! ```

mod arc;
mod assembler;
mod document;
mod effect;
mod layout;
mod options;
mod paint;
mod result;
mod style;
mod text;
mod vector;

pub use arc::{arc_data, arc_trait};
pub use assembler::{node_type, NodeAssembler};
pub use document::{convert_document, convert_nodes, get_node, DOCUMENT_ID, SCHEMA_VERSION};
pub use effect::{effect, effects};
pub use layout::{bounding_box, corner_trait, layout_trait};
pub use options::ConvertOptions;
pub use paint::{color, fills_trait, paint, paints, strokes_trait};
pub use result::{ConvertResult, ConvertStats};
pub use style::{style_from_attr, type_style};
pub use text::{text_trait, type_properties};
pub use vector::{fill_geometry, path, path_data, vector_trait};

use crate::model::Shape;
use crate::schema::Node;

/// Convert one shape subtree, materializing children down to `depth`
/// levels below it (`None` = unlimited).
///
/// Returns `None` when the shape has a kind the target schema cannot
/// represent.
pub fn convert_node(shape: &Shape, depth: Option<u32>) -> Option<Node> {
    let options = ConvertOptions::new().with_max_depth(depth);
    convert_node_with_options(shape, &options)
}

/// Convert one shape subtree with explicit options.
pub fn convert_node_with_options(shape: &Shape, options: &ConvertOptions) -> Option<Node> {
    NodeAssembler::new(options).assemble(shape)
}
