//! Radar chart builder.
//!
//! Turns a score card into a closed polar polygon, one axis per area.
//! Pure geometry: the rendering surface decides colors, stroke widths,
//! and rasterisation.

use std::f64::consts::PI;

use serde::Serialize;

use crate::domain::assessment::ScoreCard;
use crate::domain::catalog::{Area, QuestionBank};

/// One labelled spoke of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarAxis {
    pub area: Area,
    pub label: &'static str,
    /// Angle in radians, counter-clockwise from the positive x axis.
    pub angle: f64,
}

/// One polygon vertex, in both polar and Cartesian form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarVertex {
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

impl RadarVertex {
    fn at(angle: f64, radius: f64) -> Self {
        Self {
            angle,
            radius,
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }
}

/// The complete chart: axes plus the closed score polygon.
///
/// The radial axis is always `[0, max_area_score]` so profiles stay
/// visually comparable across respondents regardless of the data range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    axes: Vec<RadarAxis>,
    vertices: Vec<RadarVertex>,
    radial_max: u32,
}

impl RadarChart {
    /// Builds the chart from a score card, one vertex per area in
    /// canonical order, closed by repeating the first vertex.
    pub fn build(card: &ScoreCard) -> Self {
        let n = Area::COUNT;
        let axes: Vec<RadarAxis> = Area::ALL
            .into_iter()
            .enumerate()
            .map(|(i, area)| RadarAxis {
                area,
                label: area.label(),
                angle: 2.0 * PI * i as f64 / n as f64,
            })
            .collect();

        let mut vertices: Vec<RadarVertex> = axes
            .iter()
            .map(|axis| RadarVertex::at(axis.angle, card.area_score(axis.area) as f64))
            .collect();
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }

        Self {
            axes,
            vertices,
            radial_max: QuestionBank::max_area_score(),
        }
    }

    /// The labelled spokes, in canonical area order.
    pub fn axes(&self) -> &[RadarAxis] {
        &self.axes
    }

    /// The closed vertex sequence used for the filled shape. The outline
    /// strokes exactly the same sequence.
    pub fn polygon(&self) -> &[RadarVertex] {
        &self.vertices
    }

    /// The outline path: identical vertices to the fill.
    pub fn outline(&self) -> &[RadarVertex] {
        &self.vertices
    }

    /// Fixed upper bound of the radial axis.
    pub fn radial_max(&self) -> u32 {
        self.radial_max
    }
}
