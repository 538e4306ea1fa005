//! Fill and stroke paints.

use crate::model::{self, PaintSource, Point, Shape};
use crate::schema::{
    Color, ColorStop, FillsTrait, Paint, PaintType, ScaleMode, StrokeAlign, StrokesTrait, Vector,
};

/// Convert a source hex color, degrading to opaque black when malformed.
pub fn color(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        log::warn!("Malformed color {:?}, using black", hex);
        Color::BLACK
    })
}

/// Convert one paint.
pub fn paint(source: &model::Paint) -> Paint {
    let opacity = unit(source.opacity);

    match &source.source {
        PaintSource::Solid { color: hex } => {
            let mut paint = Paint::new(PaintType::Solid, source.visible, opacity);
            paint.color = Some(color(hex));
            paint
        }
        PaintSource::LinearGradient { start, end, stops } => {
            let mut paint = Paint::new(PaintType::GradientLinear, source.visible, opacity);
            paint.gradient_handle_positions = Some(linear_handles(*start, *end));
            paint.gradient_stops = Some(color_stops(stops));
            paint
        }
        PaintSource::RadialGradient {
            center,
            radius,
            stops,
        } => {
            let mut paint = Paint::new(PaintType::GradientRadial, source.visible, opacity);
            paint.gradient_handle_positions = Some(radial_handles(*center, *radius));
            paint.gradient_stops = Some(color_stops(stops));
            paint
        }
        PaintSource::Image {
            image_ref,
            scale_mode,
        } => {
            let mut paint = Paint::new(PaintType::Image, source.visible, opacity);
            paint.image_ref = Some(image_ref.clone());
            paint.scale_mode = Some(match scale_mode {
                model::ScaleMode::Fill => ScaleMode::Fill,
                model::ScaleMode::Fit => ScaleMode::Fit,
                model::ScaleMode::Crop => ScaleMode::Crop,
                model::ScaleMode::Tile => ScaleMode::Tile,
            });
            paint
        }
    }
}

/// Convert a paint list, preserving order.
pub fn paints(sources: &[model::Paint]) -> Vec<Paint> {
    sources.iter().map(paint).collect()
}

/// Fills fragment of a shape.
pub fn fills_trait(shape: &Shape) -> FillsTrait {
    FillsTrait {
        fills: paints(&shape.fills),
    }
}

/// Strokes fragment of a shape.
///
/// The target schema has one stroke weight per node, so weight, alignment
/// and dashes come from the first stroke.
pub fn strokes_trait(shape: &Shape) -> StrokesTrait {
    let strokes = shape.strokes.iter().map(|s| paint(&s.paint)).collect();
    let Some(first) = shape.strokes.first() else {
        return StrokesTrait {
            strokes,
            ..Default::default()
        };
    };

    StrokesTrait {
        strokes,
        stroke_weight: Some(non_negative(first.width)),
        stroke_align: Some(match first.align {
            model::StrokeAlign::Inside => StrokeAlign::Inside,
            model::StrokeAlign::Center => StrokeAlign::Center,
            model::StrokeAlign::Outside => StrokeAlign::Outside,
        }),
        stroke_dashes: (!first.dashes.is_empty())
            .then(|| first.dashes.iter().copied().map(non_negative).collect()),
    }
}

/// Handles for a linear gradient: start, end, and a width handle
/// perpendicular to the gradient line at the start.
fn linear_handles(start: Point, end: Point) -> [Vector; 3] {
    let (sx, sy) = (finite(start.x), finite(start.y));
    let (ex, ey) = (finite(end.x), finite(end.y));
    let (dx, dy) = (ex - sx, ey - sy);
    [
        Vector::new(sx, sy),
        Vector::new(ex, ey),
        Vector::new(sx - dy, sy + dx),
    ]
}

/// Handles for a radial gradient: center, horizontal and vertical radius.
fn radial_handles(center: Point, radius: f64) -> [Vector; 3] {
    let (cx, cy) = (finite(center.x), finite(center.y));
    let r = non_negative(radius);
    [
        Vector::new(cx, cy),
        Vector::new(cx + r, cy),
        Vector::new(cx, cy + r),
    ]
}

fn color_stops(stops: &[model::GradientStop]) -> Vec<ColorStop> {
    stops
        .iter()
        .map(|stop| ColorStop {
            position: unit(stop.position),
            color: color(&stop.color),
        })
        .collect()
}

fn finite(v: f64) -> f64 {
    model::finite_or_zero(v)
}

fn non_negative(v: f64) -> f64 {
    finite(v).max(0.0)
}

/// Clamp into `0.0..=1.0`; non-finite values become `1.0`.
pub(super) fn unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradientStop, ShapeKind, Stroke};

    #[test]
    fn test_solid_paint() {
        let converted = paint(&model::Paint::solid("#FF0000").with_opacity(0.5));
        assert_eq!(converted.paint_type, PaintType::Solid);
        assert_eq!(converted.opacity, 0.5);
        assert!(converted.visible);
        assert_eq!(converted.color, Some(Color::from_rgba8(255, 0, 0, 255)));
        assert!(converted.gradient_stops.is_none());
    }

    #[test]
    fn test_malformed_color_is_black() {
        let converted = paint(&model::Paint::solid("not-a-color"));
        assert_eq!(converted.color, Some(Color::BLACK));
    }

    #[test]
    fn test_linear_gradient_handles() {
        let source = model::Paint::new(PaintSource::LinearGradient {
            start: Point::new(0.0, 0.5),
            end: Point::new(1.0, 0.5),
            stops: vec![
                GradientStop {
                    position: 0.0,
                    color: "#000".to_string(),
                },
                GradientStop {
                    position: 1.0,
                    color: "#fff".to_string(),
                },
            ],
        });
        let converted = paint(&source);
        let handles = converted.gradient_handle_positions.unwrap();

        assert_eq!(converted.paint_type, PaintType::GradientLinear);
        assert_eq!(handles[0], Vector::new(0.0, 0.5));
        assert_eq!(handles[1], Vector::new(1.0, 0.5));
        assert_eq!(handles[2], Vector::new(0.0, 1.5));

        let stops = converted.gradient_stops.unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].color, Color::WHITE);
    }

    #[test]
    fn test_radial_gradient_handles() {
        let source = model::Paint::new(PaintSource::RadialGradient {
            center: Point::new(0.5, 0.5),
            radius: 0.5,
            stops: Vec::new(),
        });
        let handles = paint(&source).gradient_handle_positions.unwrap();
        assert_eq!(handles[0], Vector::new(0.5, 0.5));
        assert_eq!(handles[1], Vector::new(1.0, 0.5));
        assert_eq!(handles[2], Vector::new(0.5, 1.0));
    }

    #[test]
    fn test_image_paint() {
        let source = model::Paint::new(PaintSource::Image {
            image_ref: "img-42".to_string(),
            scale_mode: model::ScaleMode::Tile,
        });
        let converted = paint(&source);
        assert_eq!(converted.paint_type, PaintType::Image);
        assert_eq!(converted.image_ref.as_deref(), Some("img-42"));
        assert_eq!(converted.scale_mode, Some(ScaleMode::Tile));
    }

    #[test]
    fn test_opacity_clamped() {
        assert_eq!(paint(&model::Paint::solid("#000").with_opacity(2.0)).opacity, 1.0);
        assert_eq!(paint(&model::Paint::solid("#000").with_opacity(-1.0)).opacity, 0.0);
        assert_eq!(
            paint(&model::Paint::solid("#000").with_opacity(f64::NAN)).opacity,
            1.0
        );
    }

    #[test]
    fn test_strokes_from_first_stroke() {
        let mut first = Stroke::new(model::Paint::solid("#000"), 2.0);
        first.align = model::StrokeAlign::Inside;
        first.dashes = vec![4.0, 2.0];
        let second = Stroke::new(model::Paint::solid("#fff"), 8.0);
        let shape = Shape::new("r", ShapeKind::Group)
            .with_stroke(first)
            .with_stroke(second);

        let fragment = strokes_trait(&shape);
        assert_eq!(fragment.strokes.len(), 2);
        assert_eq!(fragment.stroke_weight, Some(2.0));
        assert_eq!(fragment.stroke_align, Some(StrokeAlign::Inside));
        assert_eq!(fragment.stroke_dashes, Some(vec![4.0, 2.0]));
    }

    #[test]
    fn test_no_strokes() {
        let fragment = strokes_trait(&Shape::group("g", Vec::new()));
        assert!(fragment.strokes.is_empty());
        assert!(fragment.stroke_weight.is_none());
        assert!(fragment.stroke_dashes.is_none());
    }

    #[test]
    fn test_fill_order_preserved() {
        let shape = Shape::group("g", Vec::new())
            .with_fill(model::Paint::solid("#000"))
            .with_fill(model::Paint::solid("#fff"));
        let fills = fills_trait(&shape).fills;
        assert_eq!(fills[0].color, Some(Color::BLACK));
        assert_eq!(fills[1].color, Some(Color::WHITE));
    }
}
