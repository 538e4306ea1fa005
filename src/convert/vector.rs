//! Outline geometry of path shapes.

use std::fmt::Write;

use crate::model::{finite_or_zero, PathCommand, Shape, VectorPath};
use crate::schema::{Path, VectorGeometryTrait, WindingRule};

/// Convert a shape's vector paths into SVG path data.
///
/// Shapes without vector paths yield an empty list.
pub fn fill_geometry(shape: &Shape) -> Vec<Path> {
    shape
        .vector_paths()
        .map(|paths| paths.iter().map(path).collect())
        .unwrap_or_default()
}

/// Vector geometry fragment for shapes that carry paths.
pub fn vector_trait(shape: &Shape) -> Option<VectorGeometryTrait> {
    shape.vector_paths().map(|_| VectorGeometryTrait {
        fill_geometry: fill_geometry(shape),
    })
}

/// Convert one path.
pub fn path(source: &VectorPath) -> Path {
    Path {
        path: path_data(&source.commands),
        winding_rule: match source.winding {
            crate::model::WindingRule::NonZero => WindingRule::Nonzero,
            crate::model::WindingRule::EvenOdd => WindingRule::Evenodd,
        },
    }
}

/// Format commands as absolute SVG path data, e.g. `M 0 0 L 10 0 Z`.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();

    for command in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => push_segment(&mut out, 'M', &[x, y]),
            PathCommand::LineTo { x, y } => push_segment(&mut out, 'L', &[x, y]),
            PathCommand::QuadTo { x1, y1, x, y } => push_segment(&mut out, 'Q', &[x1, y1, x, y]),
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => push_segment(&mut out, 'C', &[x1, y1, x2, y2, x, y]),
            PathCommand::Close => out.push('Z'),
        }
    }

    out
}

fn push_segment(out: &mut String, letter: char, coords: &[f64]) {
    out.push(letter);
    for &v in coords {
        // Writing into a String cannot fail.
        let _ = write!(out, " {}", finite_or_zero(v));
    }
}
