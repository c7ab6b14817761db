// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animated circle visualization.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use kurbo::Point;
use ringplot_charts::{AxisSpec, PLOT_BACKGROUND, RectMarkSpec, SERIES_POINTS};
use ringplot_core::{
    Advance, Mark, MarkDiff, MarkId, MarkPayload, Scene, Timeline, Transition, TransitionEvent,
};
use smallvec::SmallVec;

use crate::config::CircleVisConfig;
use crate::error::CircleVisError;
use crate::hover::{DotInteraction, HoverState, OverlayHandle, OverlayPhase};
use crate::ids;
use crate::overlay::OverlayGeometry;
use crate::points::DotSet;
use crate::scales::PlotScales;

/// What a scheduled transition is for; echoed back when it ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Dot `i` animating in.
    Entrance(usize),
    /// Dot `i` growing on hover.
    Grow(usize),
    /// Dot `i` shrinking back after hover.
    Shrink(usize),
    /// An overlay mark of dot `i` fading in.
    OverlayIn(usize),
    /// An overlay mark of dot `i` fading out; the mark is removed when this ends.
    OverlayOut(usize),
}

/// A circular scatterplot with staggered entrance and hover overlays.
///
/// The visualization is driven entirely by the caller: [`mount`](Self::mount) once, then
/// [`advance`](Self::advance) with increasing timestamps (milliseconds) and feed pointer events
/// as they happen. Every call returns the [`MarkDiff`]s a renderer needs; the retained
/// [`Scene`] is available for full redraws.
///
/// Hover is ignored until the last dot's entrance has completed.
#[derive(Debug)]
pub struct CircleVis {
    config: CircleVisConfig,
    dots: DotSet,
    scales: PlotScales,
    scene: Scene,
    timeline: Timeline<Cue>,
    interactions: Vec<DotInteraction>,
    interactive: bool,
    pointer: Option<usize>,
}

impl CircleVis {
    /// Generates the dots and plot scales described by `config`.
    pub fn new(config: CircleVisConfig) -> Result<Self, CircleVisError> {
        let dots = DotSet::generate(
            config.resolved_radius(),
            config.step,
            config.ring_dot_radius,
            config.center_dot_radius,
        );
        let scales = PlotScales::new(&dots, &config)?;
        log::debug!("generated {} dots", dots.len());
        Ok(Self {
            interactions: alloc::vec![DotInteraction::default(); dots.len()],
            config,
            dots,
            scales,
            scene: Scene::new(),
            timeline: Timeline::new(),
            interactive: false,
            pointer: None,
        })
    }

    /// The configuration.
    pub fn config(&self) -> &CircleVisConfig {
        &self.config
    }

    /// The generated dots.
    pub fn dots(&self) -> &DotSet {
        &self.dots
    }

    /// The shared plot scales.
    pub fn scales(&self) -> &PlotScales {
        &self.scales
    }

    /// The retained scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Whether hover interaction is enabled.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether any transition is running or pending.
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Hover state of dot `index`.
    pub fn hover_state(&self, index: usize) -> Option<HoverState> {
        self.interactions.get(index).map(|d| d.state)
    }

    /// The overlay dot `index` currently owns.
    pub fn overlay(&self, index: usize) -> Option<&OverlayHandle> {
        self.interactions.get(index)?.overlay.as_ref()
    }

    /// Whether dot `index` currently owns an overlay (including one that is fading out).
    pub fn overlay_exists(&self, index: usize) -> bool {
        self.overlay(index).is_some()
    }

    /// Start delay of dot `index`'s entrance, in milliseconds.
    ///
    /// The delay is `index * len * 0.1`, so the whole sequence grows quadratically with the
    /// number of dots.
    pub fn entrance_delay(&self, index: usize) -> f64 {
        index as f64 * self.dots.len() as f64 * 0.1
    }

    /// Pixel-space overlay geometry for ring dot `index`.
    ///
    /// Returns `None` for the center dot and out-of-range indices.
    pub fn overlay_geometry(&self, index: usize) -> Option<OverlayGeometry> {
        if !self.dots.is_ring(index) {
            return None;
        }
        let center = self.dots.get(self.dots.center_index()?)?;
        let dot = self.dots.get(index)?;
        Some(OverlayGeometry::new(
            self.config.overlay_style,
            self.scales.map(center),
            self.scales.map(dot),
        ))
    }

    /// Builds the frame, axes and dots, and schedules every dot's entrance relative to `now`.
    ///
    /// Mounting again resets the visualization: overlays exit, hover state clears and the
    /// entrance replays.
    pub fn mount(&mut self, now: f64) -> Vec<MarkDiff> {
        self.timeline = Timeline::new();
        self.interactions.fill(DotInteraction::default());
        self.interactive = false;
        self.pointer = None;

        let plot = self.config.plot();
        let mut marks: Vec<Mark> = Vec::new();
        if let Some(stroke) = &self.config.frame {
            marks.push(
                RectMarkSpec::frame(ids::FRAME, self.config.surface(), stroke.clone())
                    .with_z_index(PLOT_BACKGROUND)
                    .mark(),
            );
        }
        marks.extend(
            AxisSpec::bottom(ids::X_AXIS_BASE, self.scales.x)
                .with_tick_count(self.config.tick_count)
                .marks(plot),
        );
        marks.extend(
            AxisSpec::left(ids::Y_AXIS_BASE, self.scales.y)
                .with_tick_count(self.config.tick_count)
                .marks(plot),
        );
        for (i, dot) in self.dots.iter().enumerate() {
            marks.push(
                Mark::builder(ids::dot(i))
                    .z_index(SERIES_POINTS)
                    .circle()
                    .center(self.scales.map(dot))
                    .radius(dot.r * self.config.entrance_scale)
                    .fill(self.config.dot_fill.clone())
                    .opacity(0.0)
                    .title(format!("{},{}", dot.x, dot.y))
                    .build(),
            );
        }
        let diffs = self.scene.tick(marks);

        for (i, dot) in self.dots.iter().enumerate() {
            let delay = self.entrance_delay(i);
            self.timeline.schedule(
                now,
                Transition::new(ids::dot(i), Cue::Entrance(i))
                    .radius(dot.r)
                    .opacity(1.0)
                    .with_delay(delay)
                    .with_duration(self.config.entrance_duration),
            );
        }
        log::debug!(
            "mounted {} marks; entrance ends after {} ms",
            self.scene.len(),
            self.dots
                .center_index()
                .map_or(0.0, |i| self.entrance_delay(i) + self.config.entrance_duration)
        );
        diffs
    }

    /// Advances every transition to `now` and reacts to the ones that finished.
    pub fn advance(&mut self, now: f64) -> Vec<MarkDiff> {
        let Advance { mut diffs, events } = self.timeline.advance(now, &mut self.scene);
        for event in events {
            match event {
                TransitionEvent::Ended { target, tag, .. } => {
                    self.on_ended(target, tag, &mut diffs);
                }
                TransitionEvent::Interrupted { id, target, tag } => {
                    log::trace!("{tag:?} ({id:?}) on {target:?} interrupted");
                }
            }
        }
        diffs
    }

    fn on_ended(&mut self, target: MarkId, cue: Cue, diffs: &mut Vec<MarkDiff>) {
        match cue {
            Cue::Entrance(i) => {
                if Some(i) == self.dots.center_index() && !self.interactive {
                    self.interactive = true;
                    log::info!("entrance complete, hover enabled");
                }
            }
            Cue::OverlayIn(i) => {
                if let Some(h) = &mut self.interactions[i].overlay {
                    if h.phase == OverlayPhase::FadingIn {
                        h.phase = OverlayPhase::Shown;
                    }
                }
            }
            Cue::OverlayOut(i) => {
                let interaction = &mut self.interactions[i];
                let Some(h) = &mut interaction.overlay else {
                    return;
                };
                if h.phase != OverlayPhase::FadingOut {
                    return;
                }
                diffs.extend(self.scene.remove(target));
                if h.release(target) {
                    interaction.overlay = None;
                    log::debug!("overlay of dot {i} removed");
                }
            }
            Cue::Grow(_) | Cue::Shrink(_) => {}
        }
    }

    /// The pointer entered dot `index` at time `now`.
    ///
    /// The dot grows with the hover easing. Ring dots also get an overlay that fades in; an
    /// overlay that is still fading out from an earlier hover is reused. The dot becomes the one
    /// [`pointer_move`](Self::pointer_move) tracks; a different tracked dot is left first.
    pub fn pointer_enter(
        &mut self,
        index: usize,
        now: f64,
    ) -> Result<Vec<MarkDiff>, CircleVisError> {
        let dot = *self.dots.get(index).ok_or(CircleVisError::UnknownDot(index))?;
        if !self.interactive {
            log::trace!("ignoring enter on dot {index} before entrance completes");
            return Ok(Vec::new());
        }
        let mut diffs = Vec::new();
        if let Some(prev) = self.pointer.filter(|&prev| prev != index) {
            diffs.extend(self.pointer_leave(prev, now)?);
        }
        self.pointer = Some(index);
        if self.interactions[index].state == HoverState::Hovered {
            return Ok(diffs);
        }
        log::debug!("hover enter dot {index}");

        let overlay_marks = self
            .overlay_geometry(index)
            .map(|g| g.marks(index, &self.config, 0.0));

        self.interactions[index].state = HoverState::Hovered;
        self.timeline.schedule(
            now,
            Transition::new(ids::dot(index), Cue::Grow(index))
                .radius(dot.r * self.config.hover_scale)
                .with_duration(self.config.hover_duration)
                .with_easing(self.config.hover_easing),
        );

        let Some(marks) = overlay_marks else {
            return Ok(diffs);
        };

        let mut mark_ids: SmallVec<[MarkId; 4]> = SmallVec::new();
        for mark in marks {
            mark_ids.push(mark.id);
            if !self.scene.contains(mark.id) {
                diffs.extend(self.scene.insert(mark));
            }
        }
        let group = ids::overlay_group(index);
        let handle = self.interactions[index]
            .overlay
            .get_or_insert_with(|| OverlayHandle::new(group, mark_ids.iter().copied()));
        handle.marks = mark_ids.clone();
        handle.phase = OverlayPhase::FadingIn;

        for id in mark_ids {
            self.timeline
                .schedule(now, Transition::new(id, Cue::OverlayIn(index)).opacity(1.0));
        }
        Ok(diffs)
    }

    /// The pointer left dot `index` at time `now`.
    ///
    /// The dot shrinks back; its overlay fades out and is removed once the fade completes.
    pub fn pointer_leave(
        &mut self,
        index: usize,
        now: f64,
    ) -> Result<Vec<MarkDiff>, CircleVisError> {
        let dot = *self.dots.get(index).ok_or(CircleVisError::UnknownDot(index))?;
        if !self.interactive {
            return Ok(Vec::new());
        }
        if self.pointer == Some(index) {
            self.pointer = None;
        }
        if self.interactions[index].state == HoverState::Idle {
            return Ok(Vec::new());
        }
        log::debug!("hover leave dot {index}");

        let interaction = &mut self.interactions[index];
        interaction.state = HoverState::Idle;
        self.timeline.schedule(
            now,
            Transition::new(ids::dot(index), Cue::Shrink(index))
                .radius(dot.r)
                .with_duration(self.config.hover_duration)
                .with_easing(self.config.hover_easing),
        );
        if let Some(h) = &mut interaction.overlay {
            h.phase = OverlayPhase::FadingOut;
            for &id in &h.marks {
                self.timeline
                    .schedule(now, Transition::new(id, Cue::OverlayOut(index)).opacity(0.0));
            }
        }
        Ok(Vec::new())
    }

    /// The pointer moved to `pos` at time `now`.
    ///
    /// Hit-tests the dots and synthesizes leave/enter events when the dot under the pointer
    /// changes.
    pub fn pointer_move(&mut self, pos: Point, now: f64) -> Result<Vec<MarkDiff>, CircleVisError> {
        if !self.interactive {
            return Ok(Vec::new());
        }
        let hit = self.hit_test(pos);
        if hit == self.pointer {
            return Ok(Vec::new());
        }
        let mut diffs = Vec::new();
        if let Some(prev) = self.pointer.take() {
            diffs.extend(self.pointer_leave(prev, now)?);
        }
        if let Some(next) = hit {
            diffs.extend(self.pointer_enter(next, now)?);
        }
        self.pointer = hit;
        Ok(diffs)
    }

    /// Returns the topmost dot whose current circle contains `pos`.
    pub fn hit_test(&self, pos: Point) -> Option<usize> {
        (0..self.dots.len()).rev().find(|&i| {
            match self.scene.get(ids::dot(i)).map(|m| &m.payload) {
                Some(MarkPayload::Circle(c)) => pos.distance(c.center) <= c.radius,
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn mount_enters_frame_axes_and_dots() {
        let mut vis = CircleVis::new(CircleVisConfig::default()).unwrap();
        let diffs = vis.mount(0.0);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));
        assert!(vis.scene().contains(ids::FRAME));
        assert!(vis.scene().contains(MarkId(ids::X_AXIS_BASE)));
        assert!(vis.scene().contains(MarkId(ids::Y_AXIS_BASE)));
        for i in 0..vis.dots().len() {
            assert!(vis.scene().contains(ids::dot(i)), "dot {i} missing");
        }
    }

    #[test]
    fn dots_enter_large_and_transparent_with_coordinate_titles() {
        let mut vis = CircleVis::new(CircleVisConfig::default()).unwrap();
        vis.mount(0.0);
        let first = vis.scene().get(ids::dot(0)).unwrap();
        assert_eq!(first.payload.radius(), Some(20.0));
        assert_eq!(first.payload.opacity(), 0.0);
        assert_eq!(first.title.as_deref(), Some("600,300"));
        let center = vis.scene().get(ids::dot(126)).unwrap();
        assert_eq!(center.payload.radius(), Some(12.0));
        assert_eq!(center.title.as_deref(), Some("300,300"));
    }

    #[test]
    fn overlay_geometry_runs_from_the_scaled_center() {
        let vis = CircleVis::new(CircleVisConfig::default()).unwrap();
        let g = vis.overlay_geometry(0).unwrap();
        assert_eq!(g.origin, Point::new(300.0, 300.0));
        assert!((g.target.x - 570.0).abs() < 1e-9);
        assert!((g.target.y - 300.0).abs() < 1e-9);
        assert!(vis.overlay_geometry(126).is_none());
        assert!(vis.overlay_geometry(127).is_none());
    }

    #[test]
    fn invalid_surface_is_reported_at_construction() {
        let err = CircleVis::new(CircleVisConfig::default().with_padding(300.0)).unwrap_err();
        assert!(matches!(err, CircleVisError::InvalidSurface { .. }));
    }
}
