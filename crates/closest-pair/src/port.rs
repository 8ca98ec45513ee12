//! Visualization seam: step events emitted by the engine.
//!
//! Purpose
//! - The engine owns no rendering. It reports milestones (frame opened/closed,
//!   divider, strip, pair found/updated) to a `VisualizationPort` and obeys the
//!   returned `Step`.
//! - `Step::Pause` lets a front-end pace the animation; `Step::Stop` cancels.
//!
//! Provided ports
//! - `NoopPort`: ignores everything (the default for plain solves).
//! - `Recorder`: collects `Event`s for replay, tests, or JSON traces.
//! - `Paced<P>`: forwards to `P` and asks for a fixed pause after each event.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClosestPairError;
use crate::geometry::{Pair, SubproblemBounds};

/// What the engine should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// Block for the given duration, then continue.
    Pause(Duration),
    Stop,
}

impl Step {
    /// Act on the step: block on `Pause`, fail on `Stop`.
    pub(crate) fn obey(self) -> Result<(), ClosestPairError> {
        match self {
            Step::Continue => Ok(()),
            Step::Pause(d) => {
                std::thread::sleep(d);
                Ok(())
            }
            Step::Stop => Err(ClosestPairError::Cancelled),
        }
    }
}

/// Sink for step events. Every method defaults to `Step::Continue`.
pub trait VisualizationPort {
    fn on_subproblem_open(&mut self, _bounds: SubproblemBounds) -> Step {
        Step::Continue
    }
    fn on_subproblem_close(&mut self) -> Step {
        Step::Continue
    }
    fn on_divider_drawn(&mut self, _x: f64) -> Step {
        Step::Continue
    }
    /// Strip `[mid_x - d, mid_x + d]` about to be scanned.
    fn on_strip_opened(&mut self, _bounds: SubproblemBounds) -> Step {
        Step::Continue
    }
    fn on_pair_found(&mut self, _pair: &Pair) -> Step {
        Step::Continue
    }
    fn on_pair_updated(&mut self, _pair: &Pair) -> Step {
        Step::Continue
    }
}

impl<P: VisualizationPort + ?Sized> VisualizationPort for &mut P {
    fn on_subproblem_open(&mut self, bounds: SubproblemBounds) -> Step {
        (**self).on_subproblem_open(bounds)
    }
    fn on_subproblem_close(&mut self) -> Step {
        (**self).on_subproblem_close()
    }
    fn on_divider_drawn(&mut self, x: f64) -> Step {
        (**self).on_divider_drawn(x)
    }
    fn on_strip_opened(&mut self, bounds: SubproblemBounds) -> Step {
        (**self).on_strip_opened(bounds)
    }
    fn on_pair_found(&mut self, pair: &Pair) -> Step {
        (**self).on_pair_found(pair)
    }
    fn on_pair_updated(&mut self, pair: &Pair) -> Step {
        (**self).on_pair_updated(pair)
    }
}

/// Port that ignores all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPort;

impl VisualizationPort for NoopPort {}

/// One step event, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    SubproblemOpened { bounds: SubproblemBounds },
    SubproblemClosed,
    DividerDrawn { x: f64 },
    StripOpened { bounds: SubproblemBounds },
    PairFound { pair: Pair },
    PairUpdated { pair: Pair },
}

impl Event {
    /// Replay this event into another port.
    pub fn replay<P: VisualizationPort + ?Sized>(&self, port: &mut P) -> Step {
        match self {
            Event::SubproblemOpened { bounds } => port.on_subproblem_open(*bounds),
            Event::SubproblemClosed => port.on_subproblem_close(),
            Event::DividerDrawn { x } => port.on_divider_drawn(*x),
            Event::StripOpened { bounds } => port.on_strip_opened(*bounds),
            Event::PairFound { pair } => port.on_pair_found(pair),
            Event::PairUpdated { pair } => port.on_pair_updated(pair),
        }
    }
}

/// Records every event; optionally stops after `stop_after` events.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    pub stop_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Recorder that returns `Step::Stop` once `n` events have been recorded.
    pub fn stopping_after(n: usize) -> Self {
        Self {
            events: Vec::new(),
            stop_after: Some(n),
        }
    }
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn push(&mut self, e: Event) -> Step {
        self.events.push(e);
        match self.stop_after {
            Some(n) if self.events.len() >= n => Step::Stop,
            _ => Step::Continue,
        }
    }
}

impl VisualizationPort for Recorder {
    fn on_subproblem_open(&mut self, bounds: SubproblemBounds) -> Step {
        self.push(Event::SubproblemOpened { bounds })
    }
    fn on_subproblem_close(&mut self) -> Step {
        self.push(Event::SubproblemClosed)
    }
    fn on_divider_drawn(&mut self, x: f64) -> Step {
        self.push(Event::DividerDrawn { x })
    }
    fn on_strip_opened(&mut self, bounds: SubproblemBounds) -> Step {
        self.push(Event::StripOpened { bounds })
    }
    fn on_pair_found(&mut self, pair: &Pair) -> Step {
        self.push(Event::PairFound { pair: *pair })
    }
    fn on_pair_updated(&mut self, pair: &Pair) -> Step {
        self.push(Event::PairUpdated { pair: *pair })
    }
}

/// Forwards to `inner` and turns its `Continue` into `Pause(delay)`.
/// `Stop` and explicit pauses from `inner` pass through unchanged.
#[derive(Clone, Debug)]
pub struct Paced<P> {
    pub inner: P,
    pub delay: Duration,
}

impl<P> Paced<P> {
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }
    pub fn into_inner(self) -> P {
        self.inner
    }

    #[inline]
    fn pace(&self, step: Step) -> Step {
        match step {
            Step::Continue if !self.delay.is_zero() => Step::Pause(self.delay),
            other => other,
        }
    }
}

impl<P: VisualizationPort> VisualizationPort for Paced<P> {
    fn on_subproblem_open(&mut self, bounds: SubproblemBounds) -> Step {
        let s = self.inner.on_subproblem_open(bounds);
        self.pace(s)
    }
    fn on_subproblem_close(&mut self) -> Step {
        let s = self.inner.on_subproblem_close();
        self.pace(s)
    }
    fn on_divider_drawn(&mut self, x: f64) -> Step {
        let s = self.inner.on_divider_drawn(x);
        self.pace(s)
    }
    fn on_strip_opened(&mut self, bounds: SubproblemBounds) -> Step {
        let s = self.inner.on_strip_opened(bounds);
        self.pace(s)
    }
    fn on_pair_found(&mut self, pair: &Pair) -> Step {
        let s = self.inner.on_pair_found(pair);
        self.pace(s)
    }
    fn on_pair_updated(&mut self, pair: &Pair) -> Step {
        let s = self.inner.on_pair_updated(pair);
        self.pace(s)
    }
}
