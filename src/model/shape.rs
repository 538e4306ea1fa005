//! Shape tree of the internal design model.

use super::{Effect, Paint, Point, Stroke, TextContent, Transform};
use serde::{Deserialize, Serialize};

/// A node in a page's shape tree.
///
/// `x` and `y` are relative to the parent shape (or the page for top-level
/// shapes). `rotation` is in degrees around the shape's own origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Stable identifier
    pub id: String,

    /// Layer name
    #[serde(default)]
    pub name: String,

    /// Whether the shape is shown
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Horizontal offset from the parent origin
    #[serde(default)]
    pub x: f64,

    /// Vertical offset from the parent origin
    #[serde(default)]
    pub y: f64,

    /// Width of the unrotated shape
    #[serde(default)]
    pub width: f64,

    /// Height of the unrotated shape
    #[serde(default)]
    pub height: f64,

    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f64,

    /// Layer opacity (0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Fill paints, bottom to top
    #[serde(default)]
    pub fills: Vec<Paint>,

    /// Strokes, bottom to top
    #[serde(default)]
    pub strokes: Vec<Stroke>,

    /// Effects
    #[serde(default)]
    pub effects: Vec<Effect>,

    /// Kind-specific attributes
    pub kind: ShapeKind,

    /// Child shapes in paint order (first is painted first)
    #[serde(default)]
    pub children: Vec<Shape>,
}

impl Shape {
    /// Create a visible, unplaced shape of the given kind.
    pub fn new(id: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            visible: true,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            opacity: 1.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            kind,
            children: Vec::new(),
        }
    }

    /// Create a group containing `children`.
    pub fn group(id: impl Into<String>, children: Vec<Shape>) -> Self {
        let mut shape = Self::new(id, ShapeKind::Group);
        shape.children = children;
        shape
    }

    /// Create a text shape from plain paragraph strings.
    pub fn text_shape<I, S>(id: impl Into<String>, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(id, ShapeKind::Text(TextContent::from_paragraphs(paragraphs)))
    }

    /// Set the layer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set position and size.
    pub fn with_frame(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Set rotation in degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Add a fill paint.
    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    /// Add a stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.strokes.push(stroke);
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Add a child shape.
    pub fn with_child(mut self, child: Shape) -> Self {
        self.children.push(child);
        self
    }

    /// Set visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Transform from this shape's space into its parent's space.
    pub fn relative_transform(&self) -> Transform {
        Transform::from_placement(self.x, self.y, self.rotation)
    }

    /// Arc attributes, if this shape carries them.
    pub fn arc(&self) -> Option<&OvalAttrs> {
        match &self.kind {
            ShapeKind::Oval(oval) => Some(oval),
            _ => None,
        }
    }

    /// Text content, if this shape carries it.
    pub fn text(&self) -> Option<&TextContent> {
        match &self.kind {
            ShapeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Vector paths, if this shape carries them.
    pub fn vector_paths(&self) -> Option<&[VectorPath]> {
        match &self.kind {
            ShapeKind::Path(path) => Some(&path.paths),
            _ => None,
        }
    }

    /// Corner rounding, if this shape carries it.
    pub fn corner(&self) -> Option<&CornerAttrs> {
        match &self.kind {
            ShapeKind::Rect(corner) => Some(corner),
            ShapeKind::Frame(frame) => Some(&frame.corner),
            _ => None,
        }
    }

    /// Check if the shape's children are part of its content.
    pub fn is_container(&self) -> bool {
        matches!(
            self.kind,
            ShapeKind::Group | ShapeKind::Frame(_) | ShapeKind::Boolean(_)
        )
    }

    /// Count this shape and all of its descendants.
    pub fn total_shapes(&self) -> usize {
        1 + self.children.iter().map(Shape::total_shapes).sum::<usize>()
    }
}

/// Kind discriminator with the attributes specific to each kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Rectangle
    Rect(CornerAttrs),

    /// Ellipse, arc, pie or ring
    Oval(OvalAttrs),

    /// Free-form vector path
    Path(PathAttrs),

    /// Text block
    Text(TextContent),

    /// Plain grouping of children
    Group,

    /// Frame (artboard) with optional clipping
    Frame(FrameAttrs),

    /// Boolean combination of children
    Boolean(BooleanAttrs),

    /// A kind this model version does not recognize
    #[serde(other)]
    Unknown,
}

impl ShapeKind {
    /// Lowercase kind name as it appears in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rect(_) => "rect",
            ShapeKind::Oval(_) => "oval",
            ShapeKind::Path(_) => "path",
            ShapeKind::Text(_) => "text",
            ShapeKind::Group => "group",
            ShapeKind::Frame(_) => "frame",
            ShapeKind::Boolean(_) => "boolean",
            ShapeKind::Unknown => "unknown",
        }
    }
}

/// Corner rounding of rectangles and frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerAttrs {
    /// Uniform corner radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,

    /// Per-corner radii: top-left, top-right, bottom-right, bottom-left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<[f64; 4]>,
}

/// Arc attributes of an oval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OvalAttrs {
    /// Start angle of the arc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_angle: Option<f64>,

    /// End angle of the arc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_angle: Option<f64>,

    /// Inner radius ratio for rings (0 = solid)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
}

/// Frame attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameAttrs {
    /// Whether children are clipped to the frame bounds
    #[serde(default)]
    pub clip_content: bool,

    /// Corner rounding
    #[serde(flatten)]
    pub corner: CornerAttrs,
}

/// Boolean operation attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanAttrs {
    /// How children are combined
    #[serde(default)]
    pub operation: BooleanOp,
}

/// Boolean operation applied to a boolean shape's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOp {
    /// Union of all children
    #[default]
    Union,
    /// Area shared by all children
    Intersect,
    /// First child minus the rest
    Subtract,
    /// Area covered by an odd number of children
    Exclude,
}

/// Vector path attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathAttrs {
    /// Sub-paths
    #[serde(default)]
    pub paths: Vec<VectorPath>,
}

/// A single vector path in shape-local coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    /// Drawing commands
    #[serde(default)]
    pub commands: Vec<PathCommand>,

    /// Fill rule
    #[serde(default)]
    pub winding: WindingRule,
}

impl VectorPath {
    /// Create a path from commands with the non-zero fill rule.
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            winding: WindingRule::NonZero,
        }
    }
}

/// A path drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    /// Start a new sub-path
    MoveTo { x: f64, y: f64 },
    /// Straight line
    LineTo { x: f64, y: f64 },
    /// Quadratic curve
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    /// Cubic curve
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// Close the current sub-path
    Close,
}

impl PathCommand {
    /// End point of the command, if it has one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::QuadTo { x, y, .. }
            | PathCommand::CubicTo { x, y, .. } => Some(Point::new(x, y)),
            PathCommand::Close => None,
        }
    }
}

/// Fill rule of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindingRule {
    /// Non-zero winding
    #[default]
    NonZero,
    /// Even-odd
    EvenOdd,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_narrowing() {
        let oval = Shape::new("1", ShapeKind::Oval(OvalAttrs::default()));
        assert!(oval.arc().is_some());
        assert!(oval.text().is_none());
        assert!(oval.vector_paths().is_none());

        let text = Shape::text_shape("2", ["Hi"]);
        assert!(text.arc().is_none());
        assert!(text.text().is_some());
    }

    #[test]
    fn test_corner_for_rect_and_frame() {
        let rect = Shape::new("r", ShapeKind::Rect(CornerAttrs::default()));
        let frame = Shape::new("f", ShapeKind::Frame(FrameAttrs::default()));
        let group = Shape::group("g", Vec::new());
        assert!(rect.corner().is_some());
        assert!(frame.corner().is_some());
        assert!(group.corner().is_none());
    }

    #[test]
    fn test_is_container() {
        assert!(Shape::group("g", Vec::new()).is_container());
        assert!(Shape::new("b", ShapeKind::Boolean(BooleanAttrs::default())).is_container());
        assert!(!Shape::text_shape("t", ["x"]).is_container());
    }

    #[test]
    fn test_total_shapes() {
        let tree = Shape::group(
            "root",
            vec![
                Shape::group("a", vec![Shape::text_shape("a1", ["x"])]),
                Shape::text_shape("b", ["y"]),
            ],
        );
        assert_eq!(tree.total_shapes(), 4);
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let shape: Shape =
            serde_json::from_str(r#"{"id": "s1", "kind": {"type": "sticker"}}"#).unwrap();
        assert_eq!(shape.kind, ShapeKind::Unknown);
        assert!(shape.visible);
        assert_eq!(shape.opacity, 1.0);
    }

    #[test]
    fn test_deserialize_oval() {
        let json = r#"{
            "id": "o1",
            "name": "Pie",
            "width": 100,
            "height": 100,
            "kind": {"type": "oval", "starting_angle": 0.5, "inner_radius": 0.25}
        }"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        let arc = shape.arc().unwrap();
        assert_eq!(arc.starting_angle, Some(0.5));
        assert_eq!(arc.ending_angle, None);
        assert_eq!(arc.inner_radius, Some(0.25));
    }

    #[test]
    fn test_deserialize_path_commands() {
        let json = r#"{
            "id": "p1",
            "kind": {"type": "path", "paths": [{
                "commands": [
                    {"cmd": "move_to", "x": 0, "y": 0},
                    {"cmd": "line_to", "x": 10, "y": 0},
                    {"cmd": "close"}
                ],
                "winding": "even_odd"
            }]}
        }"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        let paths = shape.vector_paths().unwrap();
        assert_eq!(paths[0].commands.len(), 3);
        assert_eq!(paths[0].winding, WindingRule::EvenOdd);
        assert_eq!(paths[0].commands[1].end_point(), Some(Point::new(10.0, 0.0)));
    }
}
