// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a diff-driven mark scene.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use ringplot_circle::ids;
use ringplot_core::{Mark, MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

/// A renderer-side mirror of the scene, kept in sync by applying [`MarkDiff`]s.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, Mark>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, new, .. } | MarkDiff::Update { id, new, .. } => {
                    self.marks.insert(*id, (**new).clone());
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.content_bounds()) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Rect::new(0.0, 0.0, 100.0, 100.0),
        };
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );

        let mut sorted: Vec<&Mark> = self.marks.values().collect();
        sorted.sort_by_key(|m| (m.z_index, m.id));

        // Grouped marks are written together, at the position of the group's first mark.
        let mut written_groups = HashSet::new();
        for mark in &sorted {
            match mark.group {
                None => write_mark(&mut out, mark, ""),
                Some(group) => {
                    if !written_groups.insert(group) {
                        continue;
                    }
                    let _ = writeln!(out, r#"<g id="{}">"#, ids::group_name(group));
                    for member in sorted.iter().filter(|m| m.group == Some(group)) {
                        write_mark(&mut out, member, "  ");
                    }
                    out.push_str("</g>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for mark in self.marks.values() {
            let b = match &mark.payload {
                MarkPayload::Text(t) => Some(estimate_text_bounds_anchored(
                    t.pos.x,
                    t.pos.y,
                    t.font_size,
                    t.anchor,
                    t.baseline,
                    &t.text,
                )),
                payload => payload.bounds(),
            };
            let Some(b) = b else {
                continue;
            };
            rect = Some(rect.map_or(b, |r| r.union(b)));
        }
        rect.map(|r| r.inflate(10.0, 10.0))
    }
}

fn write_mark(out: &mut String, mark: &Mark, indent: &str) {
    out.push_str(indent);
    let id_attr = ids::element_name(mark.id)
        .map(|name| format!(r#" id="{name}""#))
        .unwrap_or_default();
    match &mark.payload {
        MarkPayload::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect{id_attr} x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            );
            write_paint_attr(out, "fill", &r.fill);
            if r.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &r.stroke);
                let _ = write!(out, r#" stroke-width="{}""#, r.stroke_width);
            }
            write_opacity_attr(out, r.opacity);
        }
        MarkPayload::Circle(c) => {
            let _ = write!(
                out,
                r#"<circle{id_attr} cx="{}" cy="{}" r="{}""#,
                c.center.x, c.center.y, c.radius
            );
            write_paint_attr(out, "fill", &c.fill);
            write_opacity_attr(out, c.opacity);
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
                TextBaseline::Ideographic => "ideographic",
            };
            let _ = write!(
                out,
                r#"<text{id_attr} x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            );
            if t.angle != 0.0 {
                let _ = write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                );
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            write_opacity_attr(out, t.opacity);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
            return;
        }
        MarkPayload::Path(p) => {
            let d = p.path.to_svg();
            let _ = write!(out, r#"<path{id_attr} d="{d}""#);
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
            }
            write_opacity_attr(out, p.opacity);
        }
    }
    match &mark.title {
        Some(title) => {
            let tag = match mark.payload {
                MarkPayload::Rect(_) => "rect",
                MarkPayload::Circle(_) => "circle",
                MarkPayload::Path(_) => "path",
                MarkPayload::Text(_) => "text",
            };
            let _ = writeln!(out, "><title>{}</title></{tag}>", escape_xml(title));
        }
        None => out.push_str("/>\n"),
    }
}

fn estimate_text_bounds_anchored(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width.
    let glyph_w = 0.6 * font_size;
    let width = glyph_w * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_midline = match baseline {
        TextBaseline::Middle => y,
        TextBaseline::Alphabetic => y - 0.3 * font_size,
        TextBaseline::Hanging => y + 0.3 * font_size,
        TextBaseline::Ideographic => y - 0.2 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y_midline - half_height, x1, y_midline + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let paint_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, paint_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn write_opacity_attr(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        let _ = write!(out, r#" opacity="{opacity:.3}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use ringplot_core::GroupId;

    use super::*;

    #[test]
    fn applies_enter_update_exit() {
        let mut scene = ringplot_core::Scene::new();
        let mut svg = SvgScene::default();
        let dot = |r: f64| {
            Mark::builder(ids::dot(0))
                .circle()
                .center((10.0, 10.0))
                .radius(r)
                .title("600,300")
                .build()
        };
        svg.apply_diffs(&scene.tick([dot(2.0)]));
        svg.apply_diffs(&scene.tick([dot(3.0)]));
        let s = svg.to_svg_string();
        assert!(s.contains(r#"<circle id="dot-0" cx="10" cy="10" r="3""#), "{s}");
        assert!(s.contains("<title>600,300</title></circle>"), "{s}");

        svg.apply_diffs(&scene.tick(Vec::<Mark>::new()));
        assert_eq!(svg.len(), 0);
    }

    #[test]
    fn grouped_marks_are_wrapped_in_one_group() {
        let mut scene = ringplot_core::Scene::new();
        let mut svg = SvgScene::default();
        let g = GroupId(4);
        let line = Mark::builder(ids::overlay_line(4, 0))
            .z_index(60)
            .group(g)
            .path()
            .opacity(0.5)
            .build();
        let label = Mark::builder(ids::overlay_label(4))
            .z_index(70)
            .group(g)
            .text()
            .text("a<b")
            .build();
        svg.apply_diffs(&scene.tick([line, label]));
        let s = svg.to_svg_string();
        assert_eq!(s.matches(r#"<g id="over-4">"#).count(), 1, "{s}");
        assert!(s.contains(r#"id="line-4""#), "{s}");
        assert!(s.contains(r#"opacity="0.500""#), "{s}");
        assert!(s.contains("a&lt;b</text>"), "{s}");
    }

    #[test]
    fn right_angle_legs_get_distinct_element_ids() {
        let mut scene = ringplot_core::Scene::new();
        let mut svg = SvgScene::default();
        let lines = (0..3).map(|slot| {
            Mark::builder(ids::overlay_line(20, slot))
                .z_index(60)
                .group(GroupId(20))
                .path()
                .build()
        });
        svg.apply_diffs(&scene.tick(lines));
        let s = svg.to_svg_string();
        assert_eq!(s.matches(r#"id="line-20""#).count(), 1, "{s}");
        assert!(s.contains(r#"id="line-20-1""#), "{s}");
        assert!(s.contains(r#"id="line-20-2""#), "{s}");
    }
}
