//! # Draw Descriptors
//!
//! [`ToDraw`] is the only thing a run hands to the renderer.

use crate::color::Color;
use crate::value::Figure;
use glam::DVec2;
use gsharp_geometry::FigureKind;
use serde::{Deserialize, Serialize};

/// One figure to render.
///
/// | kind | points | radius |
/// |------|--------|--------|
/// | point | `[p]` | - |
/// | line, segment, ray | `[a, b]` | - |
/// | circle | `[center]` | yes |
/// | arc | `[center, start, end]` | yes |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDraw {
    /// Figure kind tag.
    pub kind: FigureKind,
    /// Color active when drawn.
    pub color: Color,
    /// Resolved points.
    pub points: Vec<DVec2>,
    /// Radius of circles and arcs.
    pub radius: Option<f64>,
    /// Label text.
    pub comment: Option<String>,
}

impl ToDraw {
    /// Describe a figure in the given color.
    ///
    /// `label` overrides the figure's own comment.
    pub fn from_figure(figure: &Figure, color: Color, label: Option<&str>) -> Self {
        Self {
            kind: figure.shape.kind(),
            color,
            points: figure.shape.points(),
            radius: figure.shape.radius(),
            comment: label
                .map(str::to_string)
                .or_else(|| figure.comment.clone()),
        }
    }
}
