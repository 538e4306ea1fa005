//! Placement, size and corner rounding.

use crate::model::{finite_or_zero, Shape, Transform};
use crate::schema::{CornerTrait, LayoutTrait, Rectangle, Vector};

/// Layout fragment of a shape.
///
/// `parent` maps the parent's space into page space. The bounding box is
/// the axis-aligned bound of the shape's four corners in page space.
pub fn layout_trait(shape: &Shape, parent: &Transform) -> LayoutTrait {
    let relative = shape.relative_transform();
    let absolute = parent.then(&relative);
    let size = Vector::new(
        finite_or_zero(shape.width).max(0.0),
        finite_or_zero(shape.height).max(0.0),
    );

    LayoutTrait {
        absolute_bounding_box: bounding_box(&absolute, size.x, size.y),
        relative_transform: relative.rows(),
        size,
    }
}

/// Axis-aligned bound of a `width` x `height` box mapped through `ts`.
pub fn bounding_box(ts: &Transform, width: f64, height: f64) -> Rectangle {
    let corners = [
        ts.apply(0.0, 0.0),
        ts.apply(width, 0.0),
        ts.apply(width, height),
        ts.apply(0.0, height),
    ];

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in corners {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Rectangle {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Corner fragment for rectangles and frames with any rounding set.
pub fn corner_trait(shape: &Shape) -> Option<CornerTrait> {
    let corner = shape.corner()?;
    let fragment = CornerTrait {
        corner_radius: corner
            .corner_radius
            .filter(|r| r.is_finite())
            .map(|r| r.max(0.0)),
        rectangle_corner_radii: corner
            .corner_radii
            .map(|radii| radii.map(|r| finite_or_zero(r).max(0.0))),
    };

    (!fragment.is_empty()).then_some(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CornerAttrs, ShapeKind};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unrotated_layout() {
        let shape = Shape::group("g", Vec::new()).with_frame(10.0, 20.0, 100.0, 50.0);
        let layout = layout_trait(&shape, &Transform::default());

        assert_eq!(
            layout.absolute_bounding_box,
            Rectangle {
                x: 10.0,
                y: 20.0,
                width: 100.0,
                height: 50.0
            }
        );
        assert_eq!(layout.relative_transform, [[1.0, 0.0, 10.0], [0.0, 1.0, 20.0]]);
        assert_eq!(layout.size, Vector::new(100.0, 50.0));
    }

    #[test]
    fn test_parent_offset_composes() {
        let shape = Shape::group("g", Vec::new()).with_frame(5.0, 5.0, 10.0, 10.0);
        let layout = layout_trait(&shape, &Transform::new_translate(100.0, 200.0));

        assert_eq!(layout.absolute_bounding_box.x, 105.0);
        assert_eq!(layout.absolute_bounding_box.y, 205.0);
        assert_eq!(layout.relative_transform[0][2], 5.0);
    }

    #[test]
    fn test_rotated_bounds() {
        let shape = Shape::group("g", Vec::new())
            .with_frame(0.0, 0.0, 10.0, 20.0)
            .with_rotation(90.0);
        let bbox = layout_trait(&shape, &Transform::default()).absolute_bounding_box;

        assert!(approx(bbox.x, -20.0));
        assert!(approx(bbox.y, 0.0));
        assert!(approx(bbox.width, 20.0));
        assert!(approx(bbox.height, 10.0));
    }

    #[test]
    fn test_negative_size_clamped() {
        let shape = Shape::group("g", Vec::new()).with_frame(0.0, 0.0, -5.0, f64::NAN);
        let layout = layout_trait(&shape, &Transform::default());
        assert_eq!(layout.size, Vector::new(0.0, 0.0));
        assert_eq!(layout.absolute_bounding_box.width, 0.0);
    }

    #[test]
    fn test_corner_trait() {
        let rect = Shape::new(
            "r",
            ShapeKind::Rect(CornerAttrs {
                corner_radius: Some(4.0),
                corner_radii: None,
            }),
        );
        let corner = corner_trait(&rect).unwrap();
        assert_eq!(corner.corner_radius, Some(4.0));
        assert!(corner.rectangle_corner_radii.is_none());
    }

    #[test]
    fn test_corner_trait_absent() {
        let plain = Shape::new("r", ShapeKind::Rect(CornerAttrs::default()));
        assert!(corner_trait(&plain).is_none());
        assert!(corner_trait(&Shape::group("g", Vec::new())).is_none());
    }
}
