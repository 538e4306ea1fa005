//! Target-schema types.
//!
//! These mirror the Figma REST node schema closely enough for tooling that
//! expects it: camelCase field names, upper-case enum tags, and optional
//! fields omitted rather than `null`.

mod file;
mod geometry;
mod node;
mod paint;
mod text;

pub use file::{FileResponse, NodeEntry, NodesResponse};
pub use geometry::{ArcData, Path, Rectangle, Vector, WindingRule};
pub use node::{
    ArcTrait, BlendTrait, BooleanOperation, BooleanOperationTrait, CanvasTrait, CornerTrait,
    FillsTrait, FrameTrait, LayoutTrait, Node, NodeType, StrokesTrait, VectorGeometryTrait,
};
pub use paint::{BlendMode, Color, ColorStop, Effect, EffectType, Paint, PaintType, ScaleMode, StrokeAlign};
pub use text::{LineType, TypePropertiesTrait, TypeStyle};
