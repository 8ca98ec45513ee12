//! Port that logs each step event with `tracing` and keeps the trace.

use closest_pair::{Event, Pair, Recorder, Step, SubproblemBounds, VisualizationPort};

#[derive(Default)]
pub struct LogPort {
    recorder: Recorder,
    depth: usize,
}

impl LogPort {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn into_events(self) -> Vec<Event> {
        self.recorder.into_events()
    }
}

impl VisualizationPort for LogPort {
    fn on_subproblem_open(&mut self, bounds: SubproblemBounds) -> Step {
        tracing::debug!(
            depth = self.depth,
            x_start = bounds.x_start,
            x_end = bounds.x_end,
            "subproblem_open"
        );
        self.depth += 1;
        self.recorder.on_subproblem_open(bounds)
    }
    fn on_subproblem_close(&mut self) -> Step {
        self.depth = self.depth.saturating_sub(1);
        tracing::debug!(depth = self.depth, "subproblem_close");
        self.recorder.on_subproblem_close()
    }
    fn on_divider_drawn(&mut self, x: f64) -> Step {
        tracing::debug!(depth = self.depth, x, "divider");
        self.recorder.on_divider_drawn(x)
    }
    fn on_strip_opened(&mut self, bounds: SubproblemBounds) -> Step {
        tracing::debug!(
            depth = self.depth,
            x_start = bounds.x_start,
            x_end = bounds.x_end,
            "strip"
        );
        self.recorder.on_strip_opened(bounds)
    }
    fn on_pair_found(&mut self, pair: &Pair) -> Step {
        tracing::debug!(depth = self.depth, pair = ?pair_xy(pair), d = pair.distance(), "pair_found");
        self.recorder.on_pair_found(pair)
    }
    fn on_pair_updated(&mut self, pair: &Pair) -> Step {
        tracing::debug!(depth = self.depth, pair = ?pair_xy(pair), d = pair.distance(), "pair_updated");
        self.recorder.on_pair_updated(pair)
    }
}

pub fn pair_xy(pair: &Pair) -> [(f64, f64); 2] {
    [(pair.a.x, pair.a.y), (pair.b.x, pair.b.y)]
}
