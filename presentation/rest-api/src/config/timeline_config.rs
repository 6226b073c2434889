use std::env;
use std::time::Duration;

use scheduler::TimelineDelays;

/// Timing of the simulated preparation timeline
#[derive(Debug, Clone, Copy)]
pub struct TimelineConfig {
    pub assembling_delay_ms: u64,
    pub ready_delay_ms: u64,
}

impl TimelineConfig {
    /// Load timeline configuration from environment variables
    ///
    /// Environment variables, both measured from checkout:
    /// - ORDER_ASSEMBLING_DELAY_MS: delay before `assembling` (default: 2000)
    /// - ORDER_READY_DELAY_MS: delay before `ready` (default: 17000)
    pub fn from_env() -> Self {
        let assembling_delay_ms = env::var("ORDER_ASSEMBLING_DELAY_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(2000);
        let ready_delay_ms = env::var("ORDER_READY_DELAY_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(17000);

        Self {
            assembling_delay_ms,
            ready_delay_ms,
        }
    }

    pub fn delays(&self) -> TimelineDelays {
        TimelineDelays {
            assembling: Duration::from_millis(self.assembling_delay_ms),
            ready: Duration::from_millis(self.ready_delay_ms),
        }
    }
}
