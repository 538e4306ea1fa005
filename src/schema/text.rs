//! Text fragments of the target schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-paragraph type style.
///
/// Absent fields are omitted from the output; an all-absent style means
/// "no style information", not a zeroed style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_post_script_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_indent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

impl TypeStyle {
    /// Check if no field is present.
    pub fn is_empty(&self) -> bool {
        *self == TypeStyle::default()
    }
}

/// Text content and styling of a text node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypePropertiesTrait {
    /// All paragraphs joined by `\n`
    pub characters: String,

    /// Style of the whole text
    pub style: TypeStyle,

    /// Per-character index into `style_override_table` (0 = no override)
    pub character_style_overrides: Vec<usize>,

    /// Override styles keyed by override id
    pub style_override_table: BTreeMap<String, TypeStyle>,

    /// List type of each line
    pub line_types: Vec<LineType>,

    /// Indentation level of each line
    pub line_indentations: Vec<u32>,
}

/// List formatting of a text line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineType {
    /// Plain line
    #[default]
    None,
    /// Numbered list item
    Ordered,
    /// Bulleted list item
    Unordered,
}
