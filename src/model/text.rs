//! Text content of text-kind shapes.

use serde::{Deserialize, Serialize};

/// Text content attached to a text shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Paragraphs in reading order
    #[serde(default)]
    pub paragraphs: Vec<TextParagraph>,

    /// Resolved text attributes for the whole shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<TextAttr>,
}

impl TextContent {
    /// Create text content from plain paragraph strings.
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs.into_iter().map(TextParagraph::new).collect(),
            attr: None,
        }
    }

    /// Set the shape-level attribute record.
    pub fn with_attr(mut self, attr: TextAttr) -> Self {
        self.attr = Some(attr);
        self
    }

    /// Plain text of every paragraph joined by newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if any paragraph carries run-level overrides.
    pub fn has_run_overrides(&self) -> bool {
        self.paragraphs.iter().any(|p| !p.runs.is_empty())
    }

    /// Check if there is no text at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text.is_empty())
    }
}

/// A single paragraph of a text shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextParagraph {
    /// Plain text of the paragraph
    #[serde(default)]
    pub text: String,

    /// Character ranges with attribute overrides
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<TextRun>,
}

impl TextParagraph {
    /// Create a paragraph without run overrides.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Add a run override.
    pub fn with_run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }
}

/// A character range `[start, end)` inside a paragraph with its own attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// First character index (inclusive)
    pub start: usize,

    /// Last character index (exclusive)
    pub end: usize,

    /// Attributes overriding the shape-level record
    pub attr: TextAttr,
}

/// Resolved text attribute record.
///
/// Cascading has already been applied by the document model; every field
/// may still be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAttr {
    /// Font name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    /// Space after each paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub para_spacing: Option<f64>,

    /// First line indent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<f64>,

    /// Italic text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Font weight (100-900)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Font size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Letter spacing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerning: Option<f64>,
}

impl TextAttr {
    /// Create an attribute record with only a font name.
    pub fn font(name: impl Into<String>) -> Self {
        Self {
            font_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the italic flag.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }
}
