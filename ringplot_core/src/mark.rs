// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: stable-identity visual primitives.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity for a mark.
///
/// Identity is what lets a [`Scene`](crate::Scene) turn a new list of marks into
/// `Enter`/`Update`/`Exit` diffs. Callers derive ids deterministically (for example from a
/// base plus a row index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identity of a group of marks that are created and removed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

/// The primitive kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A circle with a center and radius.
    Circle,
    /// An arbitrary path.
    Path,
    /// An unshaped text run.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor position.
    #[default]
    Start,
    /// Text is centered on the anchor position.
    Middle,
    /// Text ends at the anchor position.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    #[default]
    Alphabetic,
    /// The vertical middle of the em box.
    Middle,
    /// The hanging baseline (top of the text).
    Hanging,
    /// The ideographic baseline (bottom of the text).
    Ideographic,
}

/// Resolved rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Resolved circle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Resolved path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Resolved text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A resolved mark payload, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle.
    Rect(RectMark),
    /// Circle.
    Circle(CircleMark),
    /// Path.
    Path(PathMark),
    /// Text.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Circle(_) => MarkKind::Circle,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, if known without text shaping.
    ///
    /// Text marks return `None`; renderers that shape text can measure them.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Circle(c) => Some(Rect::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.center.x + c.radius,
                c.center.y + c.radius,
            )),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }

    /// Returns the payload opacity.
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Rect(r) => r.opacity,
            Self::Circle(c) => c.opacity,
            Self::Path(p) => p.opacity,
            Self::Text(t) => t.opacity,
        }
    }

    /// Sets the payload opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        let opacity = opacity.clamp(0.0, 1.0);
        match self {
            Self::Rect(r) => r.opacity = opacity,
            Self::Circle(c) => c.opacity = opacity,
            Self::Path(p) => p.opacity = opacity,
            Self::Text(t) => t.opacity = opacity,
        }
    }

    /// Returns the radius of a circle payload.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Self::Circle(c) => Some(c.radius),
            _ => None,
        }
    }

    /// Sets the radius of a circle payload.
    ///
    /// Returns `false` (and does nothing) for other kinds. Negative radii clamp to zero.
    pub fn set_radius(&mut self, radius: f64) -> bool {
        match self {
            Self::Circle(c) => {
                c.radius = radius.max(0.0);
                true
            }
            _ => false,
        }
    }
}

/// A stable-identity mark with a resolved payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Optional group membership.
    pub group: Option<GroupId>,
    /// Optional tooltip text.
    pub title: Option<String>,
    /// The resolved payload.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder {
            id,
            z_index: 0,
            group: None,
            title: None,
        }
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

/// Shared mark builder state, before a kind is chosen.
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
    group: Option<GroupId>,
    title: Option<String>,
}

macro_rules! common_setters {
    () => {
        /// Sets the z-index.
        pub fn z_index(mut self, z_index: i32) -> Self {
            self.common.z_index = z_index;
            self
        }

        /// Places the mark in a group.
        pub fn group(mut self, group: GroupId) -> Self {
            self.common.group = Some(group);
            self
        }

        /// Sets the tooltip text.
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.common.title = Some(title.into());
            self
        }

        /// Sets the opacity.
        pub fn opacity(mut self, opacity: f64) -> Self {
            self.mark.opacity = opacity.clamp(0.0, 1.0);
            self
        }
    };
}

impl MarkBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Places the mark in a group.
    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Builds a rectangle mark.
    pub fn rect(self) -> RectBuilder {
        RectBuilder {
            common: self,
            mark: RectMark {
                rect: Rect::ZERO,
                fill: Brush::default(),
                stroke: Brush::Solid(Color::TRANSPARENT),
                stroke_width: 0.0,
                opacity: 1.0,
            },
        }
    }

    /// Builds a circle mark.
    pub fn circle(self) -> CircleBuilder {
        CircleBuilder {
            common: self,
            mark: CircleMark {
                center: Point::ZERO,
                radius: 0.0,
                fill: Brush::default(),
                opacity: 1.0,
            },
        }
    }

    /// Builds a path mark.
    pub fn path(self) -> PathBuilder {
        PathBuilder {
            common: self,
            mark: PathMark {
                path: BezPath::new(),
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: Brush::default(),
                stroke_width: 1.0,
                opacity: 1.0,
            },
        }
    }

    /// Builds a text mark.
    pub fn text(self) -> TextBuilder {
        TextBuilder {
            common: self,
            mark: TextMark {
                pos: Point::ZERO,
                text: String::new(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                fill: Brush::default(),
                opacity: 1.0,
            },
        }
    }

    fn finish(self, payload: MarkPayload) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            group: self.group,
            title: self.title,
            payload,
        }
    }
}

/// Builder for rectangle marks.
#[derive(Clone, Debug)]
pub struct RectBuilder {
    common: MarkBuilder,
    mark: RectMark,
}

impl RectBuilder {
    common_setters!();

    /// Sets the rectangle geometry.
    pub fn rect(mut self, rect: Rect) -> Self {
        self.mark.rect = rect;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Sets stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.mark.stroke = stroke.into();
        self.mark.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.common.finish(MarkPayload::Rect(self.mark))
    }
}

/// Builder for circle marks.
#[derive(Clone, Debug)]
pub struct CircleBuilder {
    common: MarkBuilder,
    mark: CircleMark,
}

impl CircleBuilder {
    common_setters!();

    /// Sets the center.
    pub fn center(mut self, center: impl Into<Point>) -> Self {
        self.mark.center = center.into();
        self
    }

    /// Sets the radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.mark.radius = radius.max(0.0);
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.common.finish(MarkPayload::Circle(self.mark))
    }
}

/// Builder for path marks.
#[derive(Clone, Debug)]
pub struct PathBuilder {
    common: MarkBuilder,
    mark: PathMark,
}

impl PathBuilder {
    common_setters!();

    /// Sets the path geometry.
    pub fn path(mut self, path: BezPath) -> Self {
        self.mark.path = path;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Sets stroke paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.mark.stroke = stroke.into();
        self.mark.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.common.finish(MarkPayload::Path(self.mark))
    }
}

/// Builder for text marks.
#[derive(Clone, Debug)]
pub struct TextBuilder {
    common: MarkBuilder,
    mark: TextMark,
}

impl TextBuilder {
    common_setters!();

    /// Sets the anchor position.
    pub fn pos(mut self, pos: impl Into<Point>) -> Self {
        self.mark.pos = pos.into();
        self
    }

    /// Sets the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.mark.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.mark.font_size = font_size;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.mark.angle = angle;
        self
    }

    /// Sets the text anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.mark.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.mark.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.mark.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        self.common.finish(MarkPayload::Text(self.mark))
    }
}
