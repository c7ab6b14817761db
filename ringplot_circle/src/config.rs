// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visualization configuration.

extern crate alloc;

use alloc::string::String;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use ringplot_charts::StrokeStyle;
use ringplot_core::Easing;

/// Which lines an overlay draws between the center and the hovered dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayStyle {
    /// A single straight connector from the center to the dot.
    #[default]
    Connector,
    /// The connector plus the two legs of the right triangle it spans: a horizontal leg from
    /// the center to the dot's x, then a vertical leg to the dot.
    RightAngle,
}

impl OverlayStyle {
    /// Number of line marks an overlay of this style draws.
    pub fn line_count(self) -> usize {
        match self {
            Self::Connector => 1,
            Self::RightAngle => 3,
        }
    }
}

/// Configuration for a [`CircleVis`](crate::CircleVis).
///
/// Defaults reproduce the classic 600x600 ring of 126 dots.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleVisConfig {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Padding between the surface edge and the plot area, on every side.
    pub padding: f64,
    /// Circle radius in data units; `None` means half the surface width.
    pub radius: Option<f64>,
    /// Angular step between ring points, in radians.
    pub step: f64,
    /// Display radius of ring dots.
    pub ring_dot_radius: f64,
    /// Display radius of the center dot.
    pub center_dot_radius: f64,
    /// Approximate tick count for nice domains and axes.
    pub tick_count: usize,
    /// Dot fill.
    pub dot_fill: Brush,
    /// Container outline; `None` draws no frame.
    pub frame: Option<StrokeStyle>,
    /// Factor applied to a dot's radius when it enters.
    pub entrance_scale: f64,
    /// Duration of each dot's entrance, in milliseconds.
    pub entrance_duration: f64,
    /// Factor applied to a dot's radius while hovered.
    pub hover_scale: f64,
    /// Duration of the hover grow/shrink, in milliseconds.
    pub hover_duration: f64,
    /// Easing of the hover grow/shrink.
    pub hover_easing: Easing,
    /// Which lines the overlay draws.
    pub overlay_style: OverlayStyle,
    /// Overlay line style.
    pub overlay_stroke: StrokeStyle,
    /// Overlay label text.
    pub label: String,
    /// Overlay label font size.
    pub label_font_size: f64,
}

impl Default for CircleVisConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            padding: 30.0,
            radius: None,
            step: 0.05,
            ring_dot_radius: 5.0,
            center_dot_radius: 3.0,
            tick_count: 10,
            dot_fill: css::BLACK.into(),
            frame: Some(StrokeStyle::solid(css::BLACK, 1.0)),
            entrance_scale: 4.0,
            entrance_duration: 1000.0,
            hover_scale: 1.5,
            hover_duration: 500.0,
            hover_easing: Easing::elastic().with_period(1.0),
            overlay_style: OverlayStyle::Connector,
            overlay_stroke: StrokeStyle::solid(css::BLACK, 1.0),
            label: String::from("hello"),
            label_font_size: 12.0,
        }
    }
}

impl CircleVisConfig {
    /// Sets the surface size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the padding around the plot area.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the circle radius in data units.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the angular step between ring points.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the display radii of ring dots and the center dot.
    pub fn with_dot_radii(mut self, ring: f64, center: f64) -> Self {
        self.ring_dot_radius = ring;
        self.center_dot_radius = center;
        self
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the dot fill.
    pub fn with_dot_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.dot_fill = fill.into();
        self
    }

    /// Sets or removes the container outline.
    pub fn with_frame(mut self, frame: Option<StrokeStyle>) -> Self {
        self.frame = frame;
        self
    }

    /// Sets the entrance duration in milliseconds.
    pub fn with_entrance_duration(mut self, duration: f64) -> Self {
        self.entrance_duration = duration;
        self
    }

    /// Sets the hover grow/shrink duration and easing.
    pub fn with_hover_motion(mut self, duration: f64, easing: Easing) -> Self {
        self.hover_duration = duration;
        self.hover_easing = easing;
        self
    }

    /// Sets the overlay style.
    pub fn with_overlay_style(mut self, style: OverlayStyle) -> Self {
        self.overlay_style = style;
        self
    }

    /// Sets the overlay line style.
    pub fn with_overlay_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.overlay_stroke = stroke;
        self
    }

    /// Sets the overlay label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Circle radius in data units.
    pub fn resolved_radius(&self) -> f64 {
        self.radius.unwrap_or(self.width / 2.0)
    }

    /// The surface rectangle, anchored at the origin.
    pub fn surface(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The plot rectangle: the surface inset by `padding` on every side.
    pub fn plot(&self) -> Rect {
        self.surface().inset(-self.padding)
    }
}
