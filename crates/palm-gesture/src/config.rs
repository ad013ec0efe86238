use std::time::Duration;

/// Settings for [`GestureLoop`](crate::GestureLoop).
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    mirror: bool,
    tick_rate: u32,
    report_every: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            tick_rate: 30,
            report_every: 300,
        }
    }
}

impl GestureConfig {
    /// Flip frames left-to-right before classification, so the user's
    /// right hand appears on the right as in a mirror.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Ticks per second when the loop paces itself.
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Log a stats summary every this many ticks; 0 disables it.
    pub fn with_report_every(mut self, report_every: u64) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn report_every(&self) -> u64 {
        self.report_every
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}
