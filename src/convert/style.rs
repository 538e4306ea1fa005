//! Type style of text shapes.

use crate::model::{Shape, TextAttr};
use crate::schema::TypeStyle;

/// Convert a shape's resolved text attributes into a type style.
///
/// Only flattens field names; cascade resolution belongs to the document
/// model. A shape without an attribute record (or without text) yields an
/// all-absent style.
///
/// The source model has a single font name, so it feeds both
/// `fontFamily` and `fontPostScriptName`.
pub fn type_style(shape: &Shape) -> TypeStyle {
    shape
        .text()
        .and_then(|text| text.attr.as_ref())
        .map(style_from_attr)
        .unwrap_or_default()
}

/// Convert one attribute record into a type style.
///
/// Non-finite numbers are dropped so they never reach the output as `null`.
pub fn style_from_attr(attr: &TextAttr) -> TypeStyle {
    TypeStyle {
        font_family: attr.font_name.clone(),
        font_post_script_name: attr.font_name.clone(),
        paragraph_spacing: finite(attr.para_spacing),
        paragraph_indent: finite(attr.indent),
        italic: attr.italic,
        font_weight: finite(attr.weight),
        font_size: finite(attr.font_size),
        letter_spacing: finite(attr.kerning),
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
