// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted run of the ringplot circle visualization.
//!
//! Mounts the visualization, steps 16 ms frames through the entrance, hovers and leaves a ring
//! dot, then hovers the center dot, writing an SVG snapshot at each milestone into
//! `ringplot_demo.html`.
//!
//! `RINGPLOT_STYLE=right-angle` selects the right-angle overlay; `RUST_LOG` controls logging.

mod html;
mod svg;

use std::error::Error;

use kurbo::Point;
use ringplot_circle::{CircleVis, CircleVisConfig, OverlayStyle};
use ringplot_core::MarkDiff;

const FRAME_MS: f64 = 16.0;
/// Upper bound on any scripted wait, so a stuck animation cannot hang the demo.
const MAX_WAIT_MS: f64 = 60_000.0;
const OUTPUT: &str = "ringplot_demo.html";

/// Drives a [`CircleVis`] frame by frame and mirrors its diffs into an [`svg::SvgScene`].
struct Player {
    vis: CircleVis,
    svg: svg::SvgScene,
    now: f64,
    sections: Vec<html::HtmlSection>,
}

impl Player {
    fn new(vis: CircleVis) -> Self {
        let mut svg = svg::SvgScene::default();
        svg.set_view_box(vis.config().surface());
        Self {
            vis,
            svg,
            now: 0.0,
            sections: Vec::new(),
        }
    }

    fn apply(&mut self, diffs: &[MarkDiff]) {
        self.svg.apply_diffs(diffs);
    }

    fn step(&mut self) {
        self.now += FRAME_MS;
        let diffs = self.vis.advance(self.now);
        self.apply(&diffs);
    }

    /// Steps frames until `done` holds, or `MAX_WAIT_MS` has passed.
    fn run_until(&mut self, done: impl Fn(&CircleVis) -> bool) -> Result<(), String> {
        let deadline = self.now + MAX_WAIT_MS;
        while !done(&self.vis) {
            if self.now >= deadline {
                return Err(format!("condition not reached by t = {} ms", self.now));
            }
            self.step();
        }
        Ok(())
    }

    fn run_for(&mut self, ms: f64) {
        let until = self.now + ms;
        while self.now < until {
            self.step();
        }
    }

    fn snapshot(&mut self, title: &str, description: &str) {
        log::info!("snapshot {title:?} at t = {} ms ({} marks)", self.now, self.svg.len());
        self.sections.push(html::HtmlSection {
            title: format!("{title} (t = {} ms)", self.now),
            description: description.to_string(),
            svg: self.svg.to_svg_string(),
        });
    }
}

fn overlay_style_from_env() -> OverlayStyle {
    match std::env::var("RINGPLOT_STYLE").as_deref() {
        Ok("right-angle") => OverlayStyle::RightAngle,
        Ok("connector") | Err(_) => OverlayStyle::Connector,
        Ok(other) => {
            log::warn!("unknown RINGPLOT_STYLE {other:?}; using the connector overlay");
            OverlayStyle::Connector
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let style = overlay_style_from_env();
    let vis = CircleVis::new(CircleVisConfig::default().with_overlay_style(style))?;
    let center = vis.dots().center_index().ok_or("no dots generated")?;
    let ring_dot = 20.min(center.saturating_sub(1));
    let mut player = Player::new(vis);

    let diffs = player.vis.mount(player.now);
    player.apply(&diffs);
    player.snapshot(
        "Mounted",
        "Frame, axes and every dot, each at four times its radius and fully transparent.",
    );

    player.run_for(1200.0);
    player.snapshot(
        "Entrance",
        "Dots animate in with a delay of index * count * 0.1 ms, so later dots lag quadratically.",
    );

    player.run_until(CircleVis::is_interactive)?;
    player.snapshot(
        "Interactive",
        "The last dot's entrance has ended; hover is now enabled.",
    );

    let diffs = player.vis.pointer_enter(ring_dot, player.now)?;
    player.apply(&diffs);
    player.run_for(300.0);
    player.snapshot(
        "Hovered ring dot",
        "The dot grew with an elastic ease and its overlay faded in.",
    );

    let diffs = player.vis.pointer_leave(ring_dot, player.now)?;
    player.apply(&diffs);
    player.run_for(100.0);
    player.snapshot(
        "Leaving",
        "The dot shrinks back while the overlay fades out; it is still in the scene.",
    );

    player.run_until(|vis| !vis.overlay_exists(ring_dot))?;
    player.snapshot(
        "Overlay removed",
        "The fade-out completed and the overlay marks were removed.",
    );

    let center_pos: Point = player
        .vis
        .dots()
        .get(center)
        .map(|dot| player.vis.scales().map(dot))
        .ok_or("center dot missing")?;
    let diffs = player.vis.pointer_move(center_pos, player.now)?;
    player.apply(&diffs);
    player.run_for(500.0);
    player.snapshot(
        "Hovered center dot",
        "The center dot grows like any other, but never gets an overlay.",
    );

    let diffs = player.vis.pointer_move(Point::ZERO, player.now)?;
    player.apply(&diffs);
    player.run_until(|vis| !vis.is_animating())?;
    player.snapshot("Settled", "The pointer left; every transition has finished.");

    let title = match style {
        OverlayStyle::Connector => "ringplot: connector overlay",
        OverlayStyle::RightAngle => "ringplot: right-angle overlay",
    };
    let html = html::render_report(title, &player.sections);
    std::fs::write(OUTPUT, html)?;
    println!("wrote {OUTPUT}");
    Ok(())
}
