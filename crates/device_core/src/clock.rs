use bevy_ecs::prelude::Resource;

/// Default interval between sensor updates, in simulated seconds.
pub const DEFAULT_PERIOD_SECS: u64 = 10;

/// Fixed-period tick timeline. The device updates on a strict cadence, so the
/// clock only needs the current timestamp and the period; `advance` moves the
/// timeline forward one period per tick.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationClock {
    now_secs: u64,
    period_secs: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD_SECS)
    }
}

impl SimulationClock {
    pub fn new(period_secs: u64) -> Self {
        debug_assert!(period_secs > 0, "tick period must be positive");
        Self {
            now_secs: 0,
            period_secs: period_secs.max(1),
        }
    }

    /// Elapsed simulated time in seconds.
    pub fn now(&self) -> u64 {
        self.now_secs
    }

    pub fn period_secs(&self) -> u64 {
        self.period_secs
    }

    /// Advances the timeline by one period and returns the new timestamp.
    pub fn advance(&mut self) -> u64 {
        self.now_secs += self.period_secs;
        self.now_secs
    }
}
