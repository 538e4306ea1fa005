//! Conversion result with statistics.

use serde::{Deserialize, Serialize};

/// A converted value together with the statistics of its conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult<T> {
    /// The converted response
    pub value: T,

    /// Conversion statistics
    pub stats: ConvertStats,
}

impl<T> ConvertResult<T> {
    /// Create a new convert result.
    pub fn new(value: T, stats: ConvertStats) -> Self {
        Self { value, stats }
    }

    /// Discard the statistics.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Statistics collected while assembling nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertStats {
    /// Number of pages converted
    pub page_count: u32,

    /// Number of nodes emitted (pages and document root excluded)
    pub node_count: u32,

    /// Number of nodes whose children were omitted by the depth limit
    pub truncated_count: u32,

    /// Number of shapes skipped because their kind is unknown
    pub skipped_count: u32,

    /// Number of hidden shapes skipped
    pub hidden_count: u32,

    /// Number of text characters emitted
    pub char_count: u32,
}

impl ConvertStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment node count.
    pub fn add_node(&mut self) {
        self.node_count += 1;
    }

    /// Increment truncated count.
    pub fn add_truncated(&mut self) {
        self.truncated_count += 1;
    }

    /// Increment skipped count.
    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Increment hidden count.
    pub fn add_hidden(&mut self) {
        self.hidden_count += 1;
    }

    /// Add the character count of emitted text.
    pub fn count_text(&mut self, text: &str) {
        self.char_count += text.chars().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConvertStats) {
        self.page_count += other.page_count;
        self.node_count += other.node_count;
        self.truncated_count += other.truncated_count;
        self.skipped_count += other.skipped_count;
        self.hidden_count += other.hidden_count;
        self.char_count += other.char_count;
    }
}
