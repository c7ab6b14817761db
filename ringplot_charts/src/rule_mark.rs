// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment (axis domain lines, tick marks, connector lines).

use kurbo::{BezPath, Point};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use ringplot_core::{GroupId, Mark, MarkId};

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point in scene coordinates.
    pub start: Point,
    /// End point in scene coordinates.
    pub end: Point,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Initial opacity.
    pub opacity: f64,
    /// Optional group membership.
    pub group: Option<GroupId>,
    /// Rendering order hint (`ringplot_core::Mark::z_index`).
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            id,
            start: start.into(),
            end: end.into(),
            stroke: css::BLACK.into(),
            stroke_width: 1.0,
            opacity: 1.0,
            group: None,
            z_index: z_order::AXIS_RULES,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, (x0, y), (x1, y))
    }

    /// Creates a vertical rule.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, (x, y0), (x, y1))
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the initial opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Places the rule in a group.
    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the segment length.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to(self.start);
        p.line_to(self.end);
        let b = Mark::builder(self.id)
            .path()
            .path(p)
            .z_index(self.z_index)
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.clone(), self.stroke_width)
            .opacity(self.opacity);
        match self.group {
            Some(g) => b.group(g).build(),
            None => b.build(),
        }
    }
}
