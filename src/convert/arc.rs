//! Arc geometry of oval shapes.

use crate::model::Shape;
use crate::schema::{ArcData, ArcTrait};

/// Convert a shape's arc attributes.
///
/// Total over every shape: a missing or non-finite value becomes `0`, and
/// shapes without arc attributes yield an all-zero arc.
pub fn arc_data(shape: &Shape) -> ArcData {
    let Some(oval) = shape.arc() else {
        return ArcData::default();
    };

    ArcData {
        starting_angle: finite(oval.starting_angle),
        ending_angle: finite(oval.ending_angle),
        inner_radius: finite(oval.inner_radius),
    }
}

/// Arc fragment for shapes that carry arc attributes.
pub fn arc_trait(shape: &Shape) -> Option<ArcTrait> {
    shape.arc().map(|_| ArcTrait {
        arc_data: arc_data(shape),
    })
}

fn finite(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
