// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction scenarios driven with explicit timestamps.

extern crate std;

use alloc::vec::Vec;

use kurbo::Point;
use ringplot_core::{MarkDiff, MarkKind, MarkPayload};

use crate::{
    CircleVis, CircleVisConfig, CircleVisError, HoverState, OverlayPhase, OverlayStyle, ids,
};

/// The last dot's entrance ends at `126 * 127 * 0.1 + 1000` ms.
const ENTRANCE_END: f64 = 2600.2;
/// A time by which every entrance transition has ended.
const READY: f64 = 2700.0;

fn ready_vis(config: CircleVisConfig) -> CircleVis {
    let mut vis = CircleVis::new(config).unwrap();
    vis.mount(0.0);
    vis.advance(READY);
    assert!(vis.is_interactive(), "entrance should be complete at {READY}");
    vis
}

fn opacity(vis: &CircleVis, id: ringplot_core::MarkId) -> f64 {
    vis.scene().get(id).unwrap().payload.opacity()
}

fn radius(vis: &CircleVis, index: usize) -> f64 {
    vis.scene().get(ids::dot(index)).unwrap().payload.radius().unwrap()
}

fn overlay_kinds(vis: &CircleVis, index: usize) -> (usize, usize) {
    let members = vis.scene().group_members(ids::overlay_group(index));
    let lines = members
        .iter()
        .filter(|id| vis.scene().get(**id).map(|m| m.kind()) == Some(MarkKind::Path))
        .count();
    (lines, members.len() - lines)
}

#[test]
fn entrance_delay_grows_quadratically_with_dot_count() {
    let vis = CircleVis::new(CircleVisConfig::default()).unwrap();
    let len = vis.dots().len();
    assert_eq!(len, 127);
    assert_eq!(vis.entrance_delay(0), 0.0);
    let last = vis.entrance_delay(len - 1);
    assert!((last - (len - 1) as f64 * len as f64 * 0.1).abs() < 1e-9);
    assert!((last - 1600.2).abs() < 1e-6);

    // Halving the step roughly doubles the dot count and quadruples the final delay.
    let dense = CircleVis::new(CircleVisConfig::default().with_step(0.025)).unwrap();
    let dense_last = dense.entrance_delay(dense.dots().len() - 1);
    assert!(dense_last > 3.9 * last, "{dense_last} vs {last}");
}

#[test]
fn dots_settle_at_their_display_radius() {
    let vis = ready_vis(CircleVisConfig::default());
    assert_eq!(radius(&vis, 0), 5.0);
    assert_eq!(radius(&vis, 126), 3.0);
    assert_eq!(opacity(&vis, ids::dot(60)), 1.0);
}

#[test]
fn hover_is_ignored_until_the_last_entrance_ends() {
    let mut vis = CircleVis::new(CircleVisConfig::default()).unwrap();
    vis.mount(0.0);

    vis.advance(ENTRANCE_END - 1.0);
    assert!(!vis.is_interactive());
    assert!(vis.pointer_enter(0, ENTRANCE_END - 1.0).unwrap().is_empty());
    assert_eq!(vis.hover_state(0), Some(HoverState::Idle));
    assert!(!vis.overlay_exists(0));
    assert!(vis.pointer_move(Point::new(570.0, 300.0), ENTRANCE_END - 1.0).unwrap().is_empty());

    vis.advance(ENTRANCE_END + 1.0);
    assert!(vis.is_interactive());
    vis.pointer_enter(0, ENTRANCE_END + 1.0).unwrap();
    assert_eq!(vis.hover_state(0), Some(HoverState::Hovered));
}

#[test]
fn hovering_a_ring_dot_fades_in_a_connector_and_label() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    let diffs = vis.pointer_enter(0, t).unwrap();
    assert_eq!(diffs.len(), 2);
    assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));
    assert_eq!(overlay_kinds(&vis, 0), (1, 1));
    assert_eq!(opacity(&vis, ids::overlay_line(0, 0)), 0.0);
    assert_eq!(vis.overlay(0).unwrap().phase, OverlayPhase::FadingIn);

    vis.advance(t + 125.0);
    let mid = opacity(&vis, ids::overlay_label(0));
    assert!((mid - 0.5).abs() < 1e-9, "cubic in-out is halfway at t=0.5: {mid}");

    vis.advance(t + 250.0);
    assert_eq!(opacity(&vis, ids::overlay_line(0, 0)), 1.0);
    assert_eq!(opacity(&vis, ids::overlay_label(0)), 1.0);
    assert_eq!(vis.overlay(0).unwrap().phase, OverlayPhase::Shown);

    vis.advance(t + 500.0);
    assert_eq!(radius(&vis, 0), 7.5);
}

#[test]
fn overlay_label_sits_at_the_connector_midpoint() {
    let mut vis = ready_vis(CircleVisConfig::default());
    vis.pointer_enter(0, READY).unwrap();
    let label = vis.scene().get(ids::overlay_label(0)).unwrap();
    let MarkPayload::Text(text) = &label.payload else {
        panic!("label should be text");
    };
    assert_eq!(text.text, "hello");
    assert!((text.pos.x - 435.0).abs() < 1e-9);
    assert!((text.pos.y - 300.0).abs() < 1e-9);
    assert!(text.angle.abs() < 1e-9);
}

#[test]
fn right_angle_overlays_draw_three_lines() {
    let mut vis =
        ready_vis(CircleVisConfig::default().with_overlay_style(OverlayStyle::RightAngle));
    vis.pointer_enter(20, READY).unwrap();
    assert_eq!(overlay_kinds(&vis, 20), (3, 1));
    assert_eq!(vis.overlay(20).unwrap().marks.len(), 4);

    vis.advance(READY + 300.0);
    vis.pointer_leave(20, READY + 300.0).unwrap();
    vis.advance(READY + 549.0);
    assert_eq!(overlay_kinds(&vis, 20), (3, 1));

    let diffs = vis.advance(READY + 550.0);
    let exits = diffs
        .iter()
        .filter(|d| matches!(d, MarkDiff::Exit { .. }))
        .count();
    assert_eq!(exits, 4);
    assert!(!vis.overlay_exists(20));
    assert!(vis.scene().group_members(ids::overlay_group(20)).is_empty());
}

#[test]
fn hovering_the_center_dot_grows_it_without_an_overlay() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let center = vis.dots().center_index().unwrap();
    let diffs = vis.pointer_enter(center, READY).unwrap();
    assert!(diffs.is_empty());
    assert!(!vis.overlay_exists(center));
    assert!(vis.scene().group_members(ids::overlay_group(center)).is_empty());

    vis.advance(READY + 500.0);
    assert_eq!(radius(&vis, center), 4.5);

    vis.pointer_leave(center, READY + 500.0).unwrap();
    vis.advance(READY + 1000.0);
    assert_eq!(radius(&vis, center), 3.0);
}

#[test]
fn leaving_removes_the_overlay_only_after_the_fade_completes() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    vis.pointer_enter(5, t).unwrap();
    vis.advance(t + 300.0);

    vis.pointer_leave(5, t + 300.0).unwrap();
    assert_eq!(vis.hover_state(5), Some(HoverState::Idle));
    assert!(vis.overlay_exists(5), "overlay must survive the leave itself");
    assert_eq!(vis.overlay(5).unwrap().phase, OverlayPhase::FadingOut);

    vis.advance(t + 549.0);
    assert!(vis.overlay_exists(5));
    assert_eq!(overlay_kinds(&vis, 5), (1, 1));
    assert!(opacity(&vis, ids::overlay_line(5, 0)) < 0.01);

    let diffs = vis.advance(t + 550.0);
    assert!(!vis.overlay_exists(5));
    assert!(vis.scene().group_members(ids::overlay_group(5)).is_empty());
    let exits = diffs
        .iter()
        .filter(|d| matches!(d, MarkDiff::Exit { .. }))
        .count();
    assert_eq!(exits, 2);

    vis.advance(t + 800.0);
    assert_eq!(radius(&vis, 5), 5.0);
    assert!(!vis.is_animating());
}

#[test]
fn leaving_during_fade_in_fades_out_from_the_current_opacity() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    vis.pointer_enter(3, t).unwrap();
    vis.advance(t + 125.0);
    vis.pointer_leave(3, t + 125.0).unwrap();

    vis.advance(t + 250.0);
    let o = opacity(&vis, ids::overlay_label(3));
    assert!(o > 0.0 && o < 0.5, "fading out from 0.5: {o}");

    vis.advance(t + 375.0);
    assert!(!vis.overlay_exists(3));
}

#[test]
fn re_entering_during_fade_out_keeps_a_single_overlay() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    vis.pointer_enter(8, t).unwrap();
    vis.advance(t + 300.0);
    vis.pointer_leave(8, t + 300.0).unwrap();
    vis.advance(t + 400.0);

    let diffs = vis.pointer_enter(8, t + 400.0).unwrap();
    assert!(diffs.is_empty(), "existing overlay marks are reused");
    assert_eq!(vis.overlay(8).unwrap().phase, OverlayPhase::FadingIn);

    // The interrupted fade-out must not remove the overlay when it would have ended.
    vis.advance(t + 560.0);
    assert!(vis.overlay_exists(8));
    vis.advance(t + 1000.0);
    assert!(vis.overlay_exists(8));
    assert_eq!(overlay_kinds(&vis, 8), (1, 1));
    assert_eq!(opacity(&vis, ids::overlay_line(8, 0)), 1.0);
}

#[test]
fn repeated_enter_is_idempotent() {
    let mut vis = ready_vis(CircleVisConfig::default());
    vis.pointer_enter(2, READY).unwrap();
    assert!(vis.pointer_enter(2, READY + 10.0).unwrap().is_empty());
    assert_eq!(overlay_kinds(&vis, 2), (1, 1));
    assert!(vis.pointer_leave(7, READY).unwrap().is_empty());
}

#[test]
fn unknown_dots_are_errors() {
    let mut vis = ready_vis(CircleVisConfig::default());
    assert_eq!(
        vis.pointer_enter(127, READY),
        Err(CircleVisError::UnknownDot(127))
    );
    assert_eq!(
        vis.pointer_leave(1000, READY),
        Err(CircleVisError::UnknownDot(1000))
    );
}

#[test]
fn hit_test_finds_the_dot_under_the_pointer() {
    let vis = ready_vis(CircleVisConfig::default());
    assert_eq!(vis.hit_test(Point::new(570.0, 300.0)), Some(0));
    assert_eq!(vis.hit_test(Point::new(572.0, 303.0)), Some(0));
    assert_eq!(vis.hit_test(Point::new(300.0, 300.0)), Some(126));
    assert_eq!(vis.hit_test(Point::new(100.0, 100.0)), None);
}

#[test]
fn pointer_moves_synthesize_enter_and_leave() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    vis.pointer_move(Point::new(570.0, 300.0), t).unwrap();
    assert_eq!(vis.hover_state(0), Some(HoverState::Hovered));
    assert!(vis.overlay_exists(0));

    // Moving within the same dot changes nothing.
    assert!(vis.pointer_move(Point::new(571.0, 300.0), t + 10.0).unwrap().is_empty());

    vis.pointer_move(Point::new(300.0, 300.0), t + 300.0).unwrap();
    assert_eq!(vis.hover_state(0), Some(HoverState::Idle));
    assert_eq!(vis.hover_state(126), Some(HoverState::Hovered));

    vis.pointer_move(Point::new(100.0, 100.0), t + 400.0).unwrap();
    assert_eq!(vis.hover_state(126), Some(HoverState::Idle));

    vis.advance(t + 1000.0);
    assert!(!vis.overlay_exists(0));
}

#[test]
fn direct_enter_then_pointer_move_away_releases_the_overlay() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    vis.pointer_enter(0, t).unwrap();
    vis.pointer_move(Point::new(100.0, 100.0), t + 10.0).unwrap();
    assert_eq!(vis.hover_state(0), Some(HoverState::Idle));

    vis.advance(t + 2000.0);
    assert!(!vis.overlay_exists(0));
    assert!(vis.scene().group_members(ids::overlay_group(0)).is_empty());
}

#[test]
fn direct_enter_on_another_dot_leaves_the_previous_one() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let t = READY;
    vis.pointer_enter(0, t).unwrap();
    vis.pointer_enter(40, t + 100.0).unwrap();
    assert_eq!(vis.hover_state(0), Some(HoverState::Idle));
    assert_eq!(vis.hover_state(40), Some(HoverState::Hovered));

    // A direct leave clears the tracked dot, so moving into empty space is a no-op.
    vis.pointer_leave(40, t + 200.0).unwrap();
    assert!(vis.pointer_move(Point::new(100.0, 100.0), t + 210.0).unwrap().is_empty());
    vis.advance(t + 2000.0);
    assert!(!vis.overlay_exists(0));
    assert!(!vis.overlay_exists(40));

    // Moving back onto a dot after direct calls still synthesizes the enter.
    vis.pointer_move(Point::new(570.0, 300.0), t + 2100.0).unwrap();
    assert_eq!(vis.hover_state(0), Some(HoverState::Hovered));
}

#[test]
fn overlays_only_exist_between_enter_and_exit_fade_end() {
    let mut vis = ready_vis(CircleVisConfig::default());
    let mut now = READY;
    let mut hovered: Vec<usize> = Vec::new();
    for i in (0..120).step_by(17) {
        vis.pointer_enter(i, now).unwrap();
        hovered.push(i);
        now += 100.0;
        vis.advance(now);
        vis.pointer_leave(i, now).unwrap();
    }
    let last = *hovered.last().unwrap();
    assert!(vis.overlay_exists(last), "the latest overlay is still fading out");
    now += 1000.0;
    vis.advance(now);
    for &i in &hovered {
        assert!(!vis.overlay_exists(i), "overlay {i} outlived its fade");
        assert!(vis.scene().group_members(ids::overlay_group(i)).is_empty());
    }
    assert!(vis.scene().len() > 127);
}
