// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use peniko::{Brush, Color};
use ringplot_core::{Mark, MarkId};

use crate::axis::StrokeStyle;

/// A rectangle mark spec.
///
/// Used for plot backgrounds and for the outline frame of a drawing surface.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint (`ringplot_core::Mark::z_index`).
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec with a default fill and no outline.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::PLOT_BACKGROUND,
        }
    }

    /// Creates an unfilled outline frame.
    pub fn frame(id: MarkId, rect: Rect, stroke: StrokeStyle) -> Self {
        Self::new(id, rect)
            .with_fill(Color::TRANSPARENT)
            .with_stroke(stroke)
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let b = Mark::builder(self.id)
            .rect()
            .z_index(self.z_index)
            .rect(self.rect)
            .fill(self.fill.clone());
        match &self.stroke {
            Some(s) => b.stroke(s.brush.clone(), s.stroke_width).build(),
            None => b.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use ringplot_core::MarkPayload;

    use super::*;

    #[test]
    fn frame_is_stroked_and_unfilled() {
        let rect = Rect::new(0.0, 0.0, 600.0, 600.0);
        let m = RectMarkSpec::frame(MarkId(1), rect, StrokeStyle::solid(css::BLACK, 1.0)).mark();
        let MarkPayload::Rect(r) = &m.payload else {
            panic!("expected rect payload");
        };
        assert_eq!(r.rect, rect);
        assert_eq!(r.fill, Brush::Solid(Color::TRANSPARENT));
        assert_eq!(r.stroke_width, 1.0);
        assert_eq!(m.z_index, crate::z_order::PLOT_BACKGROUND);
    }
}
