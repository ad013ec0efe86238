use {
    crate::*,
    std::{fmt, time::Instant},
};

/// Running counters over all ticks of a loop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub skipped: u64,
    pub sampled: u64,
    pub recovered: u64,
    pub move_left: u64,
    pub move_right: u64,
    pub stop: u64,
    pub no_op: u64,
}

impl TickStats {
    pub fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        match outcome {
            TickOutcome::Skipped => self.skipped += 1,
            TickOutcome::Recovered { .. } => {
                self.sampled += 1;
                self.recovered += 1;
            }
            TickOutcome::Dispatched { .. } => self.sampled += 1,
        }
        if let Some(command) = outcome.command() {
            *self.count_mut(command) += 1;
        }
    }

    /// How many times `command` reached the handler.
    pub fn count(&self, command: ActionCommand) -> u64 {
        match command {
            ActionCommand::MoveLeft => self.move_left,
            ActionCommand::MoveRight => self.move_right,
            ActionCommand::Stop => self.stop,
            ActionCommand::NoOp => self.no_op,
        }
    }

    fn count_mut(&mut self, command: ActionCommand) -> &mut u64 {
        match command {
            ActionCommand::MoveLeft => &mut self.move_left,
            ActionCommand::MoveRight => &mut self.move_right,
            ActionCommand::Stop => &mut self.stop,
            ActionCommand::NoOp => &mut self.no_op,
        }
    }
}

impl fmt::Display for TickStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticks, {} sampled, {} skipped, {} recovered; left {}, right {}, stop {}, no-op {}",
            self.ticks,
            self.sampled,
            self.skipped,
            self.recovered,
            self.move_left,
            self.move_right,
            self.stop,
            self.no_op
        )
    }
}

// weight of the newest interval in the moving average
const FRAME_RATE_SMOOTHING: f32 = 0.1;

/// Smoothed rate of sampled frames per second.
#[derive(Debug, Default, Clone)]
pub struct FrameRate {
    last: Option<Instant>,
    fps: f32,
}

impl FrameRate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return the updated rate.
    pub fn mark(&mut self, now: Instant) -> f32 {
        if let Some(last) = self.last {
            let seconds = now.saturating_duration_since(last).as_secs_f32();
            if seconds > 0.0 {
                let instant_fps = 1.0 / seconds;
                self.fps = if self.fps == 0.0 {
                    instant_fps
                } else {
                    self.fps + FRAME_RATE_SMOOTHING * (instant_fps - self.fps)
                };
            }
        }
        self.last = Some(now);
        self.fps
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
