//! Environment transition state machine.
//!
//! A transition is either a fade (opacity 1 → 0, swap, 0 → 1) or a zoom
//! (post-process zoom 1 → threshold, swap, reset). Progress advances in
//! fixed ticks; the render loop feeds frame time in through
//! [`TransitionController::advance`], which converts it to ticks with an
//! accumulator. Requests while a transition runs are dropped.

use crate::constants::*;
use std::time::Duration;

// Float accumulation of steps lands within this distance of the terminal value.
const SNAP_EPSILON: f32 = 1e-4;
const MIN_STEP: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeConfig {
    pub step: f32,
    pub interval: Duration,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            step: FADE_STEP,
            interval: Duration::from_millis(FADE_INTERVAL_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    pub step: f32,
    pub threshold: f32,
    pub interval: Duration,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            threshold: ZOOM_THRESHOLD,
            interval: Duration::from_millis(ZOOM_INTERVAL_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionStrategy {
    Fade(FadeConfig),
    Zoom(ZoomConfig),
}

impl Default for TransitionStrategy {
    fn default() -> Self {
        TransitionStrategy::Fade(FadeConfig::default())
    }
}

impl TransitionStrategy {
    fn interval(&self) -> Duration {
        match self {
            TransitionStrategy::Fade(c) => c.interval,
            TransitionStrategy::Zoom(c) => c.interval,
        }
    }

    /// Number of ticks one full cycle takes.
    pub fn ticks_per_cycle(&self) -> u32 {
        match self {
            TransitionStrategy::Fade(c) => {
                let per_ramp = ((1.0 - SNAP_EPSILON) / c.step.max(MIN_STEP)).ceil() as u32;
                per_ramp * 2
            }
            TransitionStrategy::Zoom(c) => {
                let span = (c.threshold - 1.0 - SNAP_EPSILON).max(0.0);
                ((span / c.step.max(MIN_STEP)).ceil() as u32).max(1)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    FadeOut { opacity: f32 },
    FadeIn { opacity: f32 },
    ZoomIn { zoom: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    Started,
    /// The active environment must change now. Emitted exactly once per cycle.
    Swapped,
    Finished,
}

/// Values the post-process pass needs this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostEffect {
    pub opacity: f32,
    pub zoom: f32,
    pub zoom_enabled: bool,
}

impl Default for PostEffect {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            zoom: 1.0,
            zoom_enabled: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TransitionController {
    strategy: TransitionStrategy,
    phase: Phase,
    accum: Duration,
    completed: u64,
}

impl TransitionController {
    pub fn new(strategy: TransitionStrategy) -> Self {
        Self {
            strategy,
            phase: Phase::Idle,
            accum: Duration::ZERO,
            completed: 0,
        }
    }

    pub fn strategy(&self) -> TransitionStrategy {
        self.strategy
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed
    }

    /// Try to start a transition. Returns `false` (and changes nothing) when
    /// one is already running.
    pub fn request(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.accum = Duration::ZERO;
        self.phase = match self.strategy {
            TransitionStrategy::Fade(_) => Phase::FadeOut { opacity: 1.0 },
            TransitionStrategy::Zoom(_) => Phase::ZoomIn { zoom: 1.0 },
        };
        true
    }

    /// Feed elapsed frame time; runs as many fixed ticks as fit.
    pub fn advance(&mut self, dt: Duration, events: &mut Vec<TransitionEvent>) {
        if !self.is_busy() {
            self.accum = Duration::ZERO;
            return;
        }
        let interval = self.strategy.interval();
        if interval.is_zero() {
            while self.is_busy() {
                self.step(events);
            }
            return;
        }
        self.accum += dt;
        while self.is_busy() && self.accum >= interval {
            self.accum -= interval;
            self.step(events);
        }
    }

    /// Run exactly one tick.
    pub fn step(&mut self, events: &mut Vec<TransitionEvent>) {
        self.phase = match (self.phase, self.strategy) {
            (Phase::Idle, _) => Phase::Idle,
            (Phase::FadeOut { opacity }, TransitionStrategy::Fade(c)) => {
                let mut o = (opacity - c.step.max(MIN_STEP)).max(0.0);
                if o <= SNAP_EPSILON {
                    o = 0.0;
                }
                if o == 0.0 {
                    events.push(TransitionEvent::Swapped);
                    Phase::FadeIn { opacity: 0.0 }
                } else {
                    Phase::FadeOut { opacity: o }
                }
            }
            (Phase::FadeIn { opacity }, TransitionStrategy::Fade(c)) => {
                let o = opacity + c.step.max(MIN_STEP);
                if o >= 1.0 - SNAP_EPSILON {
                    self.completed += 1;
                    events.push(TransitionEvent::Finished);
                    Phase::Idle
                } else {
                    Phase::FadeIn { opacity: o }
                }
            }
            (Phase::ZoomIn { zoom }, TransitionStrategy::Zoom(c)) => {
                let z = zoom + c.step.max(MIN_STEP);
                if z >= c.threshold - SNAP_EPSILON {
                    self.completed += 1;
                    events.push(TransitionEvent::Swapped);
                    events.push(TransitionEvent::Finished);
                    Phase::Idle
                } else {
                    Phase::ZoomIn { zoom: z }
                }
            }
            // phase from a different strategy cannot occur: strategy is fixed at construction
            (_, _) => Phase::Idle,
        };
    }

    pub fn effect(&self) -> PostEffect {
        match self.phase {
            Phase::Idle => PostEffect::default(),
            Phase::FadeOut { opacity } | Phase::FadeIn { opacity } => PostEffect {
                opacity,
                ..PostEffect::default()
            },
            Phase::ZoomIn { zoom } => PostEffect {
                zoom,
                zoom_enabled: true,
                ..PostEffect::default()
            },
        }
    }
}
