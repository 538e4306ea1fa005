//! Conversion options.

/// Options controlling how a document is converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Maximum depth of materialized children below each requested node
    /// (`None` = unlimited)
    pub depth: Option<u32>,

    /// Whether to emit `fillGeometry` for vector shapes
    pub geometry: bool,

    /// Whether hidden shapes are emitted (with `visible: false`) or skipped
    pub include_hidden: bool,

    /// Whether pages are converted in parallel
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create new convert options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the depth of materialized children.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set an optional depth limit.
    pub fn with_max_depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable vector geometry output.
    pub fn with_geometry(mut self, geometry: bool) -> Self {
        self.geometry = geometry;
        self
    }

    /// Include or skip hidden shapes.
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check if children at `level` may be materialized.
    pub(crate) fn allows_children(&self, level: u32) -> bool {
        self.depth.map_or(true, |max| level < max)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            depth: None,
            geometry: false,
            include_hidden: true,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.depth, None);
        assert!(!options.geometry);
        assert!(options.include_hidden);
        assert!(options.parallel);
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_depth(2)
            .with_geometry(true)
            .with_hidden(false)
            .sequential();

        assert_eq!(options.depth, Some(2));
        assert!(options.geometry);
        assert!(!options.include_hidden);
        assert!(!options.parallel);
    }

    #[test]
    fn test_allows_children() {
        let unlimited = ConvertOptions::default();
        assert!(unlimited.allows_children(1000));

        let limited = ConvertOptions::new().with_depth(1);
        assert!(limited.allows_children(0));
        assert!(!limited.allows_children(1));

        let none = ConvertOptions::new().with_depth(0);
        assert!(!none.allows_children(0));
    }
}
