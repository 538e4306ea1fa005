//! Internal design document model.
//!
//! This is the read-only source side of the conversion: pages holding
//! shape trees, with kind-specific attributes reached through capability
//! accessors such as [`Shape::arc`] and [`Shape::text`]. The model can be
//! deserialized from the editor's JSON export.

mod document;
mod geometry;
mod page;
mod paint;
mod shape;
mod text;

pub use document::Document;
pub use geometry::{Point, Transform};
pub(crate) use geometry::finite_or_zero;
pub use page::{Page, ShapeLocation};
pub use paint::{
    Blur, Effect, GradientStop, Paint, PaintSource, ScaleMode, Shadow, Stroke, StrokeAlign,
};
pub use shape::{
    BooleanAttrs, BooleanOp, CornerAttrs, FrameAttrs, OvalAttrs, PathAttrs, PathCommand, Shape,
    ShapeKind, VectorPath, WindingRule,
};
pub use text::{TextAttr, TextContent, TextParagraph, TextRun};
