//! Geometry fragments of the target schema.

use serde::{Deserialize, Serialize};

/// Arc parameters of an ellipse node.
///
/// Angles are passed through from the source model unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcData {
    /// Start angle
    pub starting_angle: f64,

    /// End angle
    pub ending_angle: f64,

    /// Inner radius ratio
    pub inner_radius: f64,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2D vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An SVG-style path with its fill rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// SVG path data
    pub path: String,

    /// Fill rule
    pub winding_rule: WindingRule,
}

/// Fill rule of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WindingRule {
    /// Non-zero winding
    Nonzero,
    /// Even-odd
    Evenodd,
}
