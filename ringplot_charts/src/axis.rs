// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a single [`AxisSpec`] with an `orient` of `bottom` or `left`. Axes are built from
//! an already-instantiated [`ScaleLinear`], so the ticks land exactly where series marks mapped
//! through the same scale land.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use ringplot_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{MAX_TICKS, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks, frames, connectors).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis along the bottom edge of the plot, ticks pointing down.
    Bottom,
    /// A vertical axis along the left edge of the plot, ticks pointing left.
    Left,
}

/// Number of consecutive ids, starting at [`AxisSpec::id_base`], an axis may use.
///
/// The domain line takes the base, tick `i` takes `base + 1 + i` and label `i` takes
/// `base + 1 + MAX_TICKS + i`.
pub const AXIS_ID_SPAN: u64 = 1 + 2 * MAX_TICKS;

/// An axis specification over an instantiated linear scale.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The scale the axis visualizes.
    pub scale: ScaleLinear,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length (in pixels).
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Gap between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter.
    ///
    /// The second argument is the tick step, which can be used for consistent decimals.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification.
    ///
    /// The returned axis has `tick_count = 10`, `tick_size = 6`, `tick_padding = 3` and
    /// `style = AxisStyle::default()`.
    pub fn new(id_base: u64, scale: ScaleLinear, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            ticks: true,
            labels: true,
            show_domain: true,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: ScaleLinear) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: ScaleLinear) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the tick values that fall inside the scale's domain.
    pub fn tick_values(&self) -> Vec<f64> {
        let (d0, d1) = self.scale.domain();
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .filter(|v| *v >= lo - 1.0e-9 && *v <= hi + 1.0e-9)
            .collect()
    }

    /// Generate axis marks along the edge of `plot` selected by [`AxisSpec::orient`].
    ///
    /// Ticks whose mapped position falls outside the plot are skipped.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let ticks = self.tick_values();
        let step = tick_step(&ticks);
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let label_gap = self.tick_padding.max(0.0);

        let mut out = Vec::new();

        if self.show_domain {
            let domain = match self.orient {
                AxisOrient::Bottom => RuleMarkSpec::horizontal(
                    MarkId::from_raw(self.id_base),
                    plot.y1,
                    plot.x0,
                    plot.x1,
                ),
                AxisOrient::Left => RuleMarkSpec::vertical(
                    MarkId::from_raw(self.id_base),
                    plot.x0,
                    plot.y0,
                    plot.y1,
                ),
            };
            out.push(self.rule(domain));
        }

        for (i, v) in ticks.into_iter().enumerate() {
            let p = self.scale.map(v);
            let inside = match self.orient {
                AxisOrient::Bottom => p >= plot.x0 - 1.0e-9 && p <= plot.x1 + 1.0e-9,
                AxisOrient::Left => p >= plot.y0 - 1.0e-9 && p <= plot.y1 + 1.0e-9,
            };
            if !inside {
                continue;
            }

            if self.ticks {
                let id = MarkId::from_raw(self.id_base + 1 + i as u64);
                let tick = match self.orient {
                    AxisOrient::Bottom => RuleMarkSpec::vertical(id, p, plot.y1, plot.y1 + tick_size),
                    AxisOrient::Left => RuleMarkSpec::horizontal(id, p, plot.x0 - tick_size, plot.x0),
                };
                out.push(self.rule(tick));
            }

            if self.labels {
                let id = MarkId::from_raw(self.id_base + 1 + MAX_TICKS + i as u64);
                let label = self.format_tick(v, step);
                let spec = match self.orient {
                    AxisOrient::Bottom => {
                        TextMarkSpec::new(id, (p, plot.y1 + tick_extent + label_gap), label)
                            .with_anchor(TextAnchor::Middle)
                            .with_baseline(TextBaseline::Hanging)
                    }
                    AxisOrient::Left => {
                        TextMarkSpec::new(id, (plot.x0 - tick_extent - label_gap, p), label)
                            .with_anchor(TextAnchor::End)
                            .with_baseline(TextBaseline::Middle)
                    }
                };
                out.push(
                    spec.with_font_size(self.style.label_font_size)
                        .with_fill(self.style.label_fill.clone())
                        .with_z_index(z_order::AXIS_LABELS)
                        .mark(),
                );
            }
        }

        out
    }

    fn rule(&self, spec: RuleMarkSpec) -> Mark {
        spec.with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
            .with_z_index(z_order::AXIS_RULES)
            .mark()
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}
