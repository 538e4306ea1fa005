//! Target-schema nodes and the trait fragments merged into them.
//!
//! A [`Node`] is the kind-independent base (identity, type tag, visibility,
//! children) plus one optional slot per trait fragment. Fragments are
//! flattened into the node object, so every fragment must own field names
//! no other fragment (or the base) uses.

use super::{ArcData, Color, Effect, Paint, Path, Rectangle, StrokeAlign, TypePropertiesTrait, Vector};
use serde::{Deserialize, Serialize};

/// Node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Vector,
    BooleanOperation,
    Rectangle,
    Ellipse,
    Text,
}

impl NodeType {
    /// Tag as it appears in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Vector => "VECTOR",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete target-schema node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Omitted when `true`
    #[serde(skip_serializing_if = "is_visible")]
    pub visible: bool,

    #[serde(flatten)]
    pub layout: Option<LayoutTrait>,

    #[serde(flatten)]
    pub blend: Option<BlendTrait>,

    #[serde(flatten)]
    pub fills: Option<FillsTrait>,

    #[serde(flatten)]
    pub strokes: Option<StrokesTrait>,

    #[serde(flatten)]
    pub corner: Option<CornerTrait>,

    #[serde(flatten)]
    pub arc: Option<ArcTrait>,

    #[serde(flatten)]
    pub vector: Option<VectorGeometryTrait>,

    #[serde(flatten)]
    pub frame: Option<FrameTrait>,

    #[serde(flatten)]
    pub boolean: Option<BooleanOperationTrait>,

    #[serde(flatten)]
    pub canvas: Option<CanvasTrait>,

    #[serde(flatten)]
    pub text: Option<TypePropertiesTrait>,

    /// Absent when the node has no children or they were not materialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

fn is_visible(visible: &bool) -> bool {
    *visible
}

impl Node {
    /// Create a visible node with no trait fragments.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: true,
            layout: None,
            blend: None,
            fills: None,
            strokes: None,
            corner: None,
            arc: None,
            vector: None,
            frame: None,
            boolean: None,
            canvas: None,
            text: None,
            children: None,
        }
    }

    /// Materialized children, or an empty slice.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Depth of the materialized subtree (a leaf has depth 0).
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Count this node and all materialized descendants.
    pub fn total_nodes(&self) -> usize {
        1 + self.children().iter().map(Node::total_nodes).sum::<usize>()
    }

    /// Find a materialized node by id, depth first.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }
}

/// Placement and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTrait {
    /// Axis-aligned bounds in page space
    pub absolute_bounding_box: Rectangle,

    /// `[[a, c, e], [b, d, f]]` relative to the parent
    pub relative_transform: [[f64; 3]; 2],

    /// Unrotated width and height
    pub size: Vector,
}

/// Layer opacity and effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendTrait {
    pub opacity: f64,
    pub effects: Vec<Effect>,
}

/// Fill paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsTrait {
    pub fills: Vec<Paint>,
}

/// Stroke paints and stroke settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokesTrait {
    pub strokes: Vec<Paint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<StrokeAlign>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dashes: Option<Vec<f64>>,
}

/// Corner rounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerTrait {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,

    /// Top-left, top-right, bottom-right, bottom-left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectangle_corner_radii: Option<[f64; 4]>,
}

impl CornerTrait {
    /// Check if no corner field is present.
    pub fn is_empty(&self) -> bool {
        self.corner_radius.is_none() && self.rectangle_corner_radii.is_none()
    }
}

/// Arc data of an ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcTrait {
    pub arc_data: ArcData,
}

/// Outline geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorGeometryTrait {
    pub fill_geometry: Vec<Path>,
}

/// Frame clipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTrait {
    pub clips_content: bool,
}

/// Boolean operation of a boolean node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanOperationTrait {
    pub boolean_operation: BooleanOperation,
}

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BooleanOperation {
    Union,
    Intersect,
    Subtract,
    Exclude,
}

/// Canvas background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasTrait {
    pub background_color: Color,
}
