// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover overlays: connector lines from the center to a dot, plus a rotated label.

use kurbo::{Line, Point};
use ringplot_charts::{OVERLAY_LINES, RuleMarkSpec, TextMarkSpec};
use ringplot_core::Mark;
use smallvec::SmallVec;

use crate::config::{CircleVisConfig, OverlayStyle};
use crate::ids;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Pixel-space geometry of one overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayGeometry {
    /// Where the lines start (the mapped center dot).
    pub origin: Point,
    /// The mapped hovered dot.
    pub target: Point,
    /// Lines to draw, connector first.
    pub lines: SmallVec<[Line; 3]>,
    /// Label anchor: the midpoint of the connector.
    pub label_pos: Point,
    /// Label rotation about `label_pos`, in degrees, aligning it with the connector.
    pub label_angle: f64,
}

impl OverlayGeometry {
    /// Computes overlay geometry between `origin` and `target`.
    pub fn new(style: OverlayStyle, origin: Point, target: Point) -> Self {
        let mut lines = SmallVec::new();
        lines.push(Line::new(origin, target));
        if style == OverlayStyle::RightAngle {
            let corner = Point::new(target.x, origin.y);
            lines.push(Line::new(origin, corner));
            lines.push(Line::new(corner, target));
        }
        let delta = target - origin;
        Self {
            origin,
            target,
            lines,
            label_pos: origin.midpoint(target),
            label_angle: delta.y.atan2(delta.x).to_degrees(),
        }
    }

    /// Builds the overlay marks for dot `index`, all in the dot's overlay group.
    ///
    /// Marks start at `opacity`; they are faded in by the caller.
    pub fn marks(
        &self,
        index: usize,
        config: &CircleVisConfig,
        opacity: f64,
    ) -> SmallVec<[Mark; 4]> {
        let group = ids::overlay_group(index);
        let mut out: SmallVec<[Mark; 4]> = self
            .lines
            .iter()
            .enumerate()
            .map(|(slot, line)| {
                RuleMarkSpec::new(ids::overlay_line(index, slot), line.p0, line.p1)
                    .with_stroke(
                        config.overlay_stroke.brush.clone(),
                        config.overlay_stroke.stroke_width,
                    )
                    .with_opacity(opacity)
                    .with_group(group)
                    .with_z_index(OVERLAY_LINES)
                    .mark()
            })
            .collect();
        out.push(
            TextMarkSpec::new(ids::overlay_label(index), self.label_pos, config.label.clone())
                .with_font_size(config.label_font_size)
                .with_angle(self.label_angle)
                .with_opacity(opacity)
                .with_group(group)
                .mark(),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use ringplot_core::{MarkKind, MarkPayload};

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn connector_is_a_single_line_with_midpoint_label() {
        let g = OverlayGeometry::new(
            OverlayStyle::Connector,
            Point::new(300.0, 300.0),
            Point::new(570.0, 300.0),
        );
        assert_eq!(g.lines.len(), 1);
        assert_eq!(g.label_pos, Point::new(435.0, 300.0));
        assert!(g.label_angle.abs() < EPS);
    }

    #[test]
    fn label_angle_follows_screen_space_slope() {
        // Screen y grows downward, so a dot below-right of the center rotates clockwise.
        let g = OverlayGeometry::new(
            OverlayStyle::Connector,
            Point::new(300.0, 300.0),
            Point::new(400.0, 400.0),
        );
        assert!((g.label_angle - 45.0).abs() < EPS);

        let g = OverlayGeometry::new(
            OverlayStyle::Connector,
            Point::new(300.0, 300.0),
            Point::new(200.0, 300.0),
        );
        assert!((g.label_angle - 180.0).abs() < EPS);
    }

    #[test]
    fn right_angle_adds_horizontal_then_vertical_leg() {
        let origin = Point::new(300.0, 300.0);
        let target = Point::new(400.0, 200.0);
        let g = OverlayGeometry::new(OverlayStyle::RightAngle, origin, target);
        assert_eq!(g.lines.len(), 3);
        assert_eq!(g.lines[0], Line::new(origin, target));
        assert_eq!(g.lines[1], Line::new(origin, Point::new(400.0, 300.0)));
        assert_eq!(g.lines[2], Line::new(Point::new(400.0, 300.0), target));
    }

    #[test]
    fn marks_share_the_overlay_group_and_start_transparent() {
        let config = CircleVisConfig::default().with_overlay_style(OverlayStyle::RightAngle);
        let g = OverlayGeometry::new(
            config.overlay_style,
            Point::new(300.0, 300.0),
            Point::new(500.0, 250.0),
        );
        let marks = g.marks(9, &config, 0.0);
        assert_eq!(marks.len(), 4);
        assert_eq!(
            marks.iter().filter(|m| m.kind() == MarkKind::Path).count(),
            3
        );
        assert!(marks.iter().all(|m| m.group == Some(ids::overlay_group(9))));
        assert!(marks.iter().all(|m| m.payload.opacity() == 0.0));

        let MarkPayload::Text(label) = &marks[3].payload else {
            panic!("label is last");
        };
        assert_eq!(label.text, "hello");
        assert_eq!(label.pos, Point::new(400.0, 275.0));
        assert!((label.angle - g.label_angle).abs() < EPS);
    }
}
