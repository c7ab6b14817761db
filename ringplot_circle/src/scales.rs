// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot scales shared by dots, overlays and axes.

use kurbo::Point;
use ringplot_charts::{ScaleLinear, ScaleLinearSpec};

use crate::config::CircleVisConfig;
use crate::error::CircleVisError;
use crate::points::{Dot, DotSet};

/// The x and y scales of a plot, instantiated once and shared read-only.
///
/// `x` maps `[0, max x]` onto `[padding, width - padding]`. `y` maps `[max y, 0]` onto
/// `[padding, height - padding]`, so larger values sit higher on screen. Both domains are
/// rounded outward to nice numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotScales {
    /// Horizontal scale.
    pub x: ScaleLinear,
    /// Vertical scale (reversed domain).
    pub y: ScaleLinear,
}

impl PlotScales {
    /// Builds the scales for `dots` on the surface described by `config`.
    pub fn new(dots: &DotSet, config: &CircleVisConfig) -> Result<Self, CircleVisError> {
        let plot = config.plot();
        if !(plot.width() > 0.0 && plot.height() > 0.0) {
            return Err(CircleVisError::InvalidSurface {
                width: config.width,
                height: config.height,
                padding: config.padding,
            });
        }
        let (Some(max_x), Some(max_y)) = (dots.max_x(), dots.max_y()) else {
            return Err(CircleVisError::EmptyDomain);
        };

        let x = ScaleLinearSpec::new((0.0, max_x))
            .with_nice(true)
            .instantiate_resolved((plot.x0, plot.x1), config.tick_count);
        let y = ScaleLinearSpec::new((max_y, 0.0))
            .with_nice(true)
            .instantiate_resolved((plot.y0, plot.y1), config.tick_count);
        log::debug!("plot scales: x {:?} y {:?}", x.domain(), y.domain());
        Ok(Self { x, y })
    }

    /// Maps a dot's data coordinates to pixels.
    pub fn map(&self, dot: &Dot) -> Point {
        self.map_xy(dot.x, dot.y)
    }

    /// Maps a data-space coordinate pair to pixels.
    pub fn map_xy(&self, x: f64, y: f64) -> Point {
        Point::new(self.x.map(x), self.y.map(y))
    }
}
