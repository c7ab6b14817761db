// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transitions: time-based tweens of mark properties.
//!
//! A [`Timeline`] holds scheduled [`Transition`]s. Time is supplied by the caller (in
//! milliseconds) on every [`Timeline::advance`], which writes eased values into a [`Scene`] and
//! reports completion as [`TransitionEvent`]s. Continuations ("when this fade ends, remove the
//! overlay") are expressed by tagging a transition and reacting to its `Ended` event.
//!
//! Scheduling a transition on a mark interrupts any earlier transition on the same mark, so at
//! most one transition drives a given mark at a time.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::diff::MarkDiff;
use crate::ease::Easing;
use crate::mark::{MarkId, MarkPayload};
use crate::scene::Scene;

/// Duration used when a transition does not set one.
pub const DEFAULT_DURATION_MS: f64 = 250.0;

/// Identity of a scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub u64);

/// A property animated by a transition, with its target value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Channel {
    /// Circle radius.
    Radius(f64),
    /// Mark opacity.
    Opacity(f64),
}

impl Channel {
    fn target(self) -> f64 {
        match self {
            Self::Radius(v) | Self::Opacity(v) => v,
        }
    }

    fn read(self, payload: &MarkPayload) -> Option<f64> {
        match self {
            Self::Radius(_) => payload.radius(),
            Self::Opacity(_) => Some(payload.opacity()),
        }
    }

    fn write(self, payload: &mut MarkPayload, value: f64) {
        match self {
            Self::Radius(_) => {
                payload.set_radius(value);
            }
            Self::Opacity(_) => payload.set_opacity(value),
        }
    }
}

/// A tween of one mark's properties.
///
/// `T` is a caller-defined tag echoed back in [`TransitionEvent`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<T> {
    /// The animated mark.
    pub target: MarkId,
    /// Animated properties and their end values.
    pub channels: SmallVec<[Channel; 2]>,
    /// Start delay in milliseconds.
    pub delay: f64,
    /// Duration in milliseconds.
    pub duration: f64,
    /// Easing curve.
    pub easing: Easing,
    /// Caller tag.
    pub tag: T,
}

impl<T> Transition<T> {
    /// Creates a transition with no channels, no delay, the default duration and cubic easing.
    pub fn new(target: MarkId, tag: T) -> Self {
        Self {
            target,
            channels: SmallVec::new(),
            delay: 0.0,
            duration: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            tag,
        }
    }

    /// Animates the circle radius to `to`.
    pub fn radius(mut self, to: f64) -> Self {
        self.channels.push(Channel::Radius(to));
        self
    }

    /// Animates the opacity to `to`.
    pub fn opacity(mut self, to: f64) -> Self {
        self.channels.push(Channel::Opacity(to));
        self
    }

    /// Sets the start delay.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// A lifecycle event reported by [`Timeline::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionEvent<T> {
    /// The transition reached its end values.
    Ended {
        /// Transition id.
        id: TransitionId,
        /// Animated mark.
        target: MarkId,
        /// Caller tag.
        tag: T,
    },
    /// The transition was superseded by a newer one on the same mark, or its mark vanished.
    Interrupted {
        /// Transition id.
        id: TransitionId,
        /// Animated mark.
        target: MarkId,
        /// Caller tag.
        tag: T,
    },
}

impl<T> TransitionEvent<T> {
    /// Returns the transition id.
    pub fn id(&self) -> TransitionId {
        match self {
            Self::Ended { id, .. } | Self::Interrupted { id, .. } => *id,
        }
    }
}

/// The result of advancing a timeline.
#[derive(Debug)]
pub struct Advance<T> {
    /// Scene updates produced by this step.
    pub diffs: Vec<MarkDiff>,
    /// Lifecycle events, in scheduling order.
    pub events: Vec<TransitionEvent<T>>,
}

#[derive(Debug)]
struct Scheduled<T> {
    id: TransitionId,
    scheduled_at: f64,
    transition: Transition<T>,
    /// Start values, captured from the scene once the delay elapses.
    from: Option<SmallVec<[f64; 2]>>,
}

/// A scheduler for [`Transition`]s.
#[derive(Debug)]
pub struct Timeline<T> {
    next_id: u64,
    scheduled: Vec<Scheduled<T>>,
    pending_events: Vec<TransitionEvent<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            scheduled: Vec::new(),
            pending_events: Vec::new(),
        }
    }
}

impl<T> Timeline<T> {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of running or pending transitions.
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    /// Returns `true` if nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }

    /// Schedules `transition` relative to `now`.
    ///
    /// Any earlier transition on the same mark is interrupted; its `Interrupted` event is
    /// reported by the next [`advance`](Self::advance).
    pub fn schedule(&mut self, now: f64, transition: Transition<T>) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;

        let target = transition.target;
        let mut i = 0;
        while i < self.scheduled.len() {
            if self.scheduled[i].transition.target == target {
                let old = self.scheduled.remove(i);
                log::debug!("transition {:?} on {target:?} interrupted by {id:?}", old.id);
                self.pending_events.push(TransitionEvent::Interrupted {
                    id: old.id,
                    target,
                    tag: old.transition.tag,
                });
            } else {
                i += 1;
            }
        }

        log::trace!(
            "schedule {id:?} on {target:?}: delay={} duration={}",
            transition.delay,
            transition.duration
        );
        self.scheduled.push(Scheduled {
            id,
            scheduled_at: now,
            transition,
            from: None,
        });
        id
    }

    /// Cancels a transition without reporting an event.
    ///
    /// Returns the transition's tag if it was still scheduled.
    pub fn cancel(&mut self, id: TransitionId) -> Option<T> {
        let index = self.scheduled.iter().position(|s| s.id == id)?;
        Some(self.scheduled.remove(index).transition.tag)
    }

    /// Cancels every transition on `target` without reporting events.
    ///
    /// Returns the number of cancelled transitions.
    pub fn cancel_target(&mut self, target: MarkId) -> usize {
        let before = self.scheduled.len();
        self.scheduled.retain(|s| s.transition.target != target);
        before - self.scheduled.len()
    }

    /// Returns `true` if the transition is still running or pending.
    pub fn is_active(&self, id: TransitionId) -> bool {
        self.scheduled.iter().any(|s| s.id == id)
    }

    /// Returns the transition currently driving `target`, if any.
    pub fn active_for(&self, target: MarkId) -> Option<TransitionId> {
        self.scheduled
            .iter()
            .find(|s| s.transition.target == target)
            .map(|s| s.id)
    }

    /// Advances every transition to time `now`, writing eased values into `scene`.
    ///
    /// Transitions whose delay has not elapsed are left untouched. A transition whose mark no
    /// longer exists is reported as `Interrupted`. Finished transitions write their exact end
    /// values and report `Ended`.
    pub fn advance(&mut self, now: f64, scene: &mut Scene) -> Advance<T> {
        let mut diffs = Vec::new();
        let mut events = core::mem::take(&mut self.pending_events);

        let mut i = 0;
        while i < self.scheduled.len() {
            let s = &mut self.scheduled[i];
            let elapsed = now - s.scheduled_at - s.transition.delay;
            if elapsed < 0.0 {
                i += 1;
                continue;
            }

            let target = s.transition.target;
            let Some(mark) = scene.get(target) else {
                let gone = self.scheduled.remove(i);
                events.push(TransitionEvent::Interrupted {
                    id: gone.id,
                    target,
                    tag: gone.transition.tag,
                });
                continue;
            };

            let from = s.from.get_or_insert_with(|| {
                s.transition
                    .channels
                    .iter()
                    .map(|c| c.read(&mark.payload).unwrap_or_else(|| c.target()))
                    .collect()
            });

            let t = if s.transition.duration <= 0.0 {
                1.0
            } else {
                (elapsed / s.transition.duration).min(1.0)
            };
            let done = t >= 1.0;
            let k = if done { 1.0 } else { s.transition.easing.apply(t) };

            let channels = &s.transition.channels;
            let from = &*from;
            if let Some(diff) = scene.modify(target, |payload| {
                for (c, start) in channels.iter().zip(from.iter()) {
                    let value = start + (c.target() - start) * k;
                    c.write(payload, value);
                }
            }) {
                diffs.push(diff);
            }

            if done {
                let finished = self.scheduled.remove(i);
                log::trace!("transition {:?} on {target:?} ended", finished.id);
                events.push(TransitionEvent::Ended {
                    id: finished.id,
                    target,
                    tag: finished.transition.tag,
                });
            } else {
                i += 1;
            }
        }

        Advance { diffs, events }
    }
}
