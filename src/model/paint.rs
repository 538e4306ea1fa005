//! Paints, strokes and effects of the internal model.

use super::Point;
use serde::{Deserialize, Serialize};

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Paint source
    #[serde(flatten)]
    pub source: PaintSource,

    /// Paint opacity (0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Whether the paint is enabled
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Paint {
    /// Create a solid paint from a hex color.
    pub fn solid(color: impl Into<String>) -> Self {
        Self::new(PaintSource::Solid {
            color: color.into(),
        })
    }

    /// Create an opaque, visible paint from a source.
    pub fn new(source: PaintSource) -> Self {
        Self {
            source,
            opacity: 1.0,
            visible: true,
        }
    }

    /// Set the paint opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Where a paint takes its color from.
///
/// Gradient points are normalized to the shape's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaintSource {
    /// A flat color
    Solid {
        /// Hex color (`#RGB`, `#RRGGBB` or `#RRGGBBAA`)
        color: String,
    },

    /// A linear gradient between two points
    LinearGradient {
        /// Gradient start
        start: Point,
        /// Gradient end
        end: Point,
        /// Color stops
        #[serde(default)]
        stops: Vec<GradientStop>,
    },

    /// A radial gradient around a center
    RadialGradient {
        /// Gradient center
        center: Point,
        /// Gradient radius
        radius: f64,
        /// Color stops
        #[serde(default)]
        stops: Vec<GradientStop>,
    },

    /// A bitmap paint
    Image {
        /// Image reference in the document's asset store
        image_ref: String,
        /// How the image is fitted
        #[serde(default)]
        scale_mode: ScaleMode,
    },
}

/// A gradient color stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient (0.0 - 1.0)
    pub position: f64,

    /// Hex color
    pub color: String,
}

/// How an image paint is fitted into its shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Cover the shape, cropping overflow
    #[default]
    Fill,
    /// Fit inside the shape
    Fit,
    /// Crop without scaling
    Crop,
    /// Repeat the image
    Tile,
}

/// A stroke applied to a shape outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke paint
    pub paint: Paint,

    /// Stroke width
    #[serde(default = "default_stroke_width")]
    pub width: f64,

    /// Stroke alignment relative to the outline
    #[serde(default)]
    pub align: StrokeAlign,

    /// Dash pattern (empty = solid)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dashes: Vec<f64>,
}

impl Stroke {
    /// Create a centered stroke.
    pub fn new(paint: Paint, width: f64) -> Self {
        Self {
            paint,
            width,
            align: StrokeAlign::Center,
            dashes: Vec::new(),
        }
    }
}

/// Stroke alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeAlign {
    /// Inside the outline
    Inside,
    /// Centered on the outline (default)
    #[default]
    Center,
    /// Outside the outline
    Outside,
}

/// A visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Shadow cast behind the shape
    DropShadow(Shadow),

    /// Shadow cast inside the shape
    InnerShadow(Shadow),

    /// Blur of the shape itself
    LayerBlur(Blur),

    /// Blur of whatever is behind the shape
    BackgroundBlur(Blur),
}

/// Shadow parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Hex color
    pub color: String,

    /// Shadow offset
    #[serde(default)]
    pub offset: Point,

    /// Blur radius
    #[serde(default)]
    pub blur: f64,

    /// Spread distance
    #[serde(default)]
    pub spread: f64,

    /// Whether the effect is enabled
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// Blur parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    /// Blur radius
    pub radius: f64,

    /// Whether the effect is enabled
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

fn default_stroke_width() -> f64 {
    1.0
}
