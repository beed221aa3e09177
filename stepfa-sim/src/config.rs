use std::time::Duration;

/// Speed the simulator starts with, on a scale from 0 to 100.
pub const DEFAULT_SPEED: u8 = 50;

/// Highest value of the speed scale.
pub const MAX_SPEED: u8 = 100;

/// Timing configuration of a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Shortest period between two automatic steps. Requested periods below
    /// this are raised to it.
    pub min_period: Duration,
    /// Period used at speed 0.
    pub max_period: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // 50 steps per second
            min_period: Duration::from_millis(20),
            max_period: Duration::from_millis(2000),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_period(mut self, min_period: Duration) -> Self {
        self.min_period = min_period;
        self
    }

    pub fn with_max_period(mut self, max_period: Duration) -> Self {
        self.max_period = max_period;
        self
    }

    /// Raises the period to at least [`min_period`](Self::min_period).
    pub fn clamp_period(&self, period: Duration) -> Duration {
        period.max(self.min_period)
    }

    /// Converts a speed between 0 and [`MAX_SPEED`] to the period between two
    /// steps. Every speed unit takes 1/100th of the maximum period off.
    pub fn speed_to_period(&self, speed: u8) -> Duration {
        let speed = u32::from(speed.min(MAX_SPEED));
        let step = self.max_period / u32::from(MAX_SPEED);

        self.clamp_period(self.max_period.saturating_sub(step * speed))
    }
}
