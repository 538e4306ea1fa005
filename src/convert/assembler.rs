//! Node assembly: shape trees into target-schema node trees.

use crate::model::{BooleanOp, Page, Shape, ShapeKind, Transform};
use crate::schema::{
    BlendTrait, BooleanOperation, BooleanOperationTrait, CanvasTrait, Color, FrameTrait, Node,
    NodeType,
};

use super::{
    arc_trait, color, corner_trait, effects, fills_trait, layout_trait, strokes_trait, text_trait,
    vector_trait, ConvertOptions, ConvertStats,
};

/// Assembles complete nodes by merging the trait fragments that apply to
/// each shape kind.
///
/// Levels count from the node the assembler was asked for: that node is
/// level 0, and a node at level `L` gets its children only while `L` is
/// below the configured depth.
pub struct NodeAssembler<'a> {
    options: &'a ConvertOptions,
    stats: ConvertStats,
}

impl<'a> NodeAssembler<'a> {
    /// Create a new assembler.
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            stats: ConvertStats::new(),
        }
    }

    /// Assemble a shape placed directly on its page.
    ///
    /// Returns `None` when the shape is skipped (unknown kind, or hidden
    /// while hidden shapes are excluded).
    pub fn assemble(&mut self, shape: &Shape) -> Option<Node> {
        self.assemble_in(shape, &Transform::default())
    }

    /// Assemble a shape whose parent maps into page space through `parent`.
    pub fn assemble_in(&mut self, shape: &Shape, parent: &Transform) -> Option<Node> {
        self.shape_node(shape, parent, 0)
    }

    /// Assemble a page as a CANVAS node.
    pub fn assemble_page(&mut self, page: &Page) -> Node {
        self.page_node(page, 0)
    }

    pub(crate) fn page_node(&mut self, page: &Page, level: u32) -> Node {
        self.stats.add_page();

        let mut node = Node::new(page.id.clone(), page.name.clone(), NodeType::Canvas);
        node.canvas = Some(CanvasTrait {
            background_color: page
                .background
                .as_deref()
                .map(color)
                .unwrap_or(Color::WHITE),
        });
        node.children = self.children(&page.id, &page.shapes, &Transform::default(), level);
        node
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &ConvertStats {
        &self.stats
    }

    /// Consume the assembler, returning its statistics.
    pub fn into_stats(self) -> ConvertStats {
        self.stats
    }

    fn shape_node(&mut self, shape: &Shape, parent: &Transform, level: u32) -> Option<Node> {
        let Some(node_type) = node_type(&shape.kind) else {
            log::warn!("Skipping shape {} with unknown kind", shape.id);
            self.stats.add_skipped();
            return None;
        };

        if !shape.visible && !self.options.include_hidden {
            log::debug!("Skipping hidden shape {}", shape.id);
            self.stats.add_hidden();
            return None;
        }

        self.stats.add_node();

        let mut node = Node::new(shape.id.clone(), shape.name.clone(), node_type);
        node.visible = shape.visible;
        node.layout = Some(layout_trait(shape, parent));
        node.blend = Some(BlendTrait {
            opacity: super::paint::unit(shape.opacity),
            effects: effects(&shape.effects),
        });
        node.fills = Some(fills_trait(shape));
        node.strokes = Some(strokes_trait(shape));
        node.corner = corner_trait(shape);

        match &shape.kind {
            ShapeKind::Oval(_) => node.arc = arc_trait(shape),
            ShapeKind::Path(_) if self.options.geometry => node.vector = vector_trait(shape),
            ShapeKind::Text(_) => {
                node.text = text_trait(shape);
                if let Some(text) = &node.text {
                    self.stats.count_text(&text.characters);
                }
            }
            ShapeKind::Frame(frame) => {
                node.frame = Some(FrameTrait {
                    clips_content: frame.clip_content,
                })
            }
            ShapeKind::Boolean(boolean) => {
                node.boolean = Some(BooleanOperationTrait {
                    boolean_operation: boolean_operation(boolean.operation),
                })
            }
            _ => {}
        }

        if shape.is_container() {
            let own = parent.then(&shape.relative_transform());
            node.children = self.children(&shape.id, &shape.children, &own, level);
        }

        Some(node)
    }

    /// Children of a container at `level`, or `None` when the depth limit
    /// stops here.
    fn children(
        &mut self,
        owner: &str,
        shapes: &[Shape],
        parent: &Transform,
        level: u32,
    ) -> Option<Vec<Node>> {
        if !self.options.allows_children(level) {
            if !shapes.is_empty() {
                log::debug!(
                    "Depth limit reached at {} (level {}), omitting {} children",
                    owner,
                    level,
                    shapes.len()
                );
                self.stats.add_truncated();
            }
            return None;
        }

        Some(
            shapes
                .iter()
                .filter_map(|child| self.shape_node(child, parent, level + 1))
                .collect(),
        )
    }
}

/// Target node type of a shape kind, or `None` for unknown kinds.
pub fn node_type(kind: &ShapeKind) -> Option<NodeType> {
    match kind {
        ShapeKind::Rect(_) => Some(NodeType::Rectangle),
        ShapeKind::Oval(_) => Some(NodeType::Ellipse),
        ShapeKind::Path(_) => Some(NodeType::Vector),
        ShapeKind::Text(_) => Some(NodeType::Text),
        ShapeKind::Group => Some(NodeType::Group),
        ShapeKind::Frame(_) => Some(NodeType::Frame),
        ShapeKind::Boolean(_) => Some(NodeType::BooleanOperation),
        ShapeKind::Unknown => None,
    }
}

fn boolean_operation(op: BooleanOp) -> BooleanOperation {
    match op {
        BooleanOp::Union => BooleanOperation::Union,
        BooleanOp::Intersect => BooleanOperation::Intersect,
        BooleanOp::Subtract => BooleanOperation::Subtract,
        BooleanOp::Exclude => BooleanOperation::Exclude,
    }
}
