//! # figmap
//!
//! Read-only conversion of an internal vector-design document model into a
//! Figma-compatible node schema.
//!
//! Design tools built around the Figma REST shape (`DOCUMENT` / `CANVAS` /
//! typed nodes with camelCase trait fields) can consume documents from an
//! editor with its own data model through this crate. Conversion never
//! mutates the source document.
//!
//! ## Quick Start
//!
//! ```
//! use figmap::{parse_str, convert, ConvertOptions, JsonFormat};
//!
//! fn main() -> figmap::Result<()> {
//!     let doc = parse_str(r#"{
//!         "name": "Landing",
//!         "pages": [{
//!             "id": "1:0",
//!             "name": "Home",
//!             "shapes": [{
//!                 "id": "1:1",
//!                 "name": "Title",
//!                 "width": 200, "height": 40,
//!                 "kind": {"type": "text", "paragraphs": [{"text": "Hello"}]}
//!             }]
//!         }]
//!     }"#)?;
//!
//!     let options = ConvertOptions::new().with_depth(2);
//!     let file = convert::convert_document(&doc, &options).value;
//!     let json = figmap::render::to_json(&file, JsonFormat::Compact)?;
//!     assert!(json.contains(r#""characters":"Hello""#));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Trait fragments**: layout, blend, fills, strokes, corners, arcs,
//!   vector geometry, frames, boolean operations and text
//! - **Depth limiting**: cut large trees at any level below the requested node
//! - **Node lookup**: convert individual pages or shapes by id
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod convert;
pub mod error;
pub mod model;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use convert::{
    arc_data, convert_document, convert_node, convert_node_with_options, convert_nodes, get_node,
    type_properties, type_style, ConvertOptions, ConvertResult, ConvertStats, NodeAssembler,
};
pub use error::{Error, Result};
pub use model::{Document, Page, Shape, ShapeKind};
pub use render::JsonFormat;
pub use schema::{FileResponse, Node, NodeType, NodesResponse};

use std::io::Read;
use std::path::Path;

/// Load a design document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use figmap::parse_file;
///
/// let doc = parse_file("design.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path.as_ref())?;
    log::debug!(
        "Loaded {} bytes from {}",
        data.len(),
        path.as_ref().display()
    );
    parse_bytes(&data)
}

/// Load a design document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(data)?)
}

/// Load a design document from a JSON string.
pub fn parse_str(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Load a design document from a reader.
///
/// # Example
///
/// ```no_run
/// use figmap::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("design.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}

/// Convert a design document file to target-schema JSON.
///
/// # Example
///
/// ```no_run
/// use figmap::{to_file_json, JsonFormat};
///
/// let json = to_file_json("design.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("file.json", json).unwrap();
/// ```
pub fn to_file_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    let file = convert_document(&doc, &ConvertOptions::default()).value;
    render::to_json(&file, format)
}

/// Builder for loading and converting design documents.
///
/// # Example
///
/// ```no_run
/// use figmap::{Figmap, JsonFormat};
///
/// let json = Figmap::new()
///     .with_depth(3)
///     .with_geometry()
///     .without_hidden()
///     .parse("design.json")?
///     .to_file_json(JsonFormat::Pretty)?;
/// # Ok::<(), figmap::Error>(())
/// ```
pub struct Figmap {
    options: ConvertOptions,
}

impl Figmap {
    /// Create a new Figmap builder.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Limit the depth of materialized children.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.options = self.options.with_depth(depth);
        self
    }

    /// Emit vector geometry.
    pub fn with_geometry(mut self) -> Self {
        self.options = self.options.with_geometry(true);
        self
    }

    /// Skip hidden shapes.
    pub fn without_hidden(mut self) -> Self {
        self.options = self.options.with_hidden(false);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Use a complete set of options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Load a document file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<FigmapResult> {
        let document = parse_file(path)?;
        Ok(self.wrap(document))
    }

    /// Load a document from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<FigmapResult> {
        let document = parse_bytes(data)?;
        Ok(self.wrap(document))
    }

    /// Wrap an already loaded document.
    pub fn wrap(self, document: Document) -> FigmapResult {
        FigmapResult {
            document,
            options: self.options,
        }
    }
}

impl Default for Figmap {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document with the options to convert it with.
pub struct FigmapResult {
    /// The loaded document
    pub document: Document,
    /// Convert options to use
    options: ConvertOptions,
}

impl FigmapResult {
    /// Convert the whole document.
    pub fn convert(&self) -> ConvertResult<FileResponse> {
        convert_document(&self.document, &self.options)
    }

    /// Convert the whole document to JSON.
    pub fn to_file_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.convert().value, format)
    }

    /// Convert individual nodes.
    pub fn nodes<I, S>(&self, ids: I) -> ConvertResult<NodesResponse>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        convert_nodes(&self.document, ids, &self.options)
    }

    /// Convert individual nodes to JSON.
    pub fn to_nodes_json<I, S>(&self, ids: I, format: JsonFormat) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        render::to_json(&self.nodes(ids).value, format)
    }

    /// Convert one node, optionally restricted to one page.
    pub fn node(&self, page_id: Option<&str>, node_id: &str) -> Result<Node> {
        get_node(&self.document, page_id, node_id, &self.options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the convert options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}
