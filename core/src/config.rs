use std::time::Duration;

use crate::constants::{CYCLE_PERIOD, TIMER_PERIOD};
use crate::error::ConfigError;

/// # Config
/// Timing of a Chip-8 machine.
///
/// The CPU runs one instruction every `cycle_period`. The delay and sound
/// timers count down (and a frame becomes due) every `timer_period`, which is
/// approximated as a whole number of CPU cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    cycle_period: Duration,
    timer_period: Duration,
}

impl Config {
    pub fn new(cycle_period: Duration, timer_period: Duration) -> Result<Self, ConfigError> {
        if cycle_period.is_zero() {
            return Err(ConfigError::ZeroCyclePeriod);
        }
        if timer_period < cycle_period {
            return Err(ConfigError::TimerFasterThanCycle);
        }
        Ok(Config {
            cycle_period,
            timer_period,
        })
    }

    /// Builds a config from rates in Hz rather than periods.
    pub fn from_rates(instructions_per_second: u32, timer_hz: u32) -> Result<Self, ConfigError> {
        if instructions_per_second == 0 {
            return Err(ConfigError::ZeroCyclePeriod);
        }
        if timer_hz == 0 || timer_hz > instructions_per_second {
            return Err(ConfigError::TimerFasterThanCycle);
        }
        Config::new(
            Duration::from_nanos(1_000_000_000 / u64::from(instructions_per_second)),
            Duration::from_nanos(1_000_000_000 / u64::from(timer_hz)),
        )
    }

    pub fn cycle_period(&self) -> Duration {
        self.cycle_period
    }

    /// Number of CPU cycles between two timer decrements.
    pub fn ticks_per_timer(&self) -> u32 {
        let ticks = self.timer_period.as_nanos() / self.cycle_period.as_nanos();
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cycle_period: CYCLE_PERIOD,
            timer_period: TIMER_PERIOD,
        }
    }
}
