use std::time::{Duration, Instant};

use tracing::debug;

/// The three stages of one detection call, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReduceRows,
    Threshold,
    Decide,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::ReduceRows, Stage::Threshold, Stage::Decide];

    pub fn name(self) -> &'static str {
        match self {
            Stage::ReduceRows => "reduce_rows",
            Stage::Threshold => "threshold",
            Stage::Decide => "decide",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Wall time spent in each stage of one detection call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimings {
    durations: [Duration; 3],
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: Stage, duration: Duration) {
        self.durations[stage.index()] = duration;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.durations[stage.index()]
    }

    /// Looks a stage up by its log name, e.g. `"reduce_rows"`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == name)
            .map(|stage| self.get(stage))
    }

    pub fn steps(&self) -> [(&'static str, Duration); 3] {
        Stage::ALL.map(|stage| (stage.name(), self.get(stage)))
    }

    pub fn total_duration(&self) -> Duration {
        self.durations.iter().sum()
    }

    pub fn log_summary(&self) {
        let total = self.total_duration().as_secs_f64();
        for (name, duration) in self.steps() {
            let share = if total > 0.0 {
                duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            debug!(
                stage = name,
                micros = duration.as_secs_f64() * 1_000_000.0,
                share_pct = share,
                "Stage timing"
            );
        }
        debug!(micros = total * 1_000_000.0, "Detection total");
    }
}

pub struct Timer {
    start: Instant,
    stage: Stage,
}

impl Timer {
    pub fn start(stage: Stage) -> Self {
        Self {
            start: Instant::now(),
            stage,
        }
    }

    pub fn stop(self) -> (Stage, Duration) {
        (self.stage, self.start.elapsed())
    }
}
