//! Cleanup sweeper configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the recycle-bin cleanup sweeper
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupConfig {
    /// Days a soft-deleted entry stays restorable before permanent purge
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,

    /// Seconds between sweeps
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl CleanupConfig {
    /// Interval between sweeps as a [`Duration`]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate cleanup configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retention_days < 1 {
            return Err(ValidationError::InvalidRetentionDays);
        }
        if self.sweep_interval_secs < 1 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_retention_days() -> i64 {
    30
}

// Daily, matching the retention granularity.
fn default_sweep_interval_secs() -> u64 {
    86_400
}
