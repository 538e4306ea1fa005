//! Text properties of text shapes.

use crate::model::Shape;
use crate::schema::TypePropertiesTrait;

use super::type_style;

/// Convert a shape's text into the type-properties fragment.
///
/// `characters` is every paragraph joined by `\n`; `style` is the
/// shape-level style. Per-character overrides and list metadata are not
/// resolved, so the override and line arrays are always empty.
pub fn type_properties(shape: &Shape) -> TypePropertiesTrait {
    let characters = shape.text().map(|text| text.plain_text()).unwrap_or_default();

    if shape.text().is_some_and(|text| text.has_run_overrides()) {
        log::debug!(
            "Shape {}: run-level style overrides present but not resolved",
            shape.id
        );
    }

    TypePropertiesTrait {
        characters,
        style: type_style(shape),
        ..Default::default()
    }
}

/// Type-properties fragment for shapes that carry text.
pub fn text_trait(shape: &Shape) -> Option<TypePropertiesTrait> {
    shape.text().map(|_| type_properties(shape))
}
