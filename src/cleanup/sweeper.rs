//! Background sweeper that makes soft deletes permanent.
//!
//! Runs on a fixed interval, purging tasks and projects whose soft-delete
//! timestamp is older than the retention window. A failed sweep is logged
//! and retried on the next tick; the loop itself never dies. Designed for
//! a single instance per deployment.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;

use crate::config::CleanupConfig;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{ProjectRepository, TaskRepository};

/// Counts from one completed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    pub tasks_purged: u64,
    pub projects_purged: u64,
}

/// Periodic purge of recycle-bin entries past the retention window.
pub struct CleanupSweeper {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
    retention_days: i64,
    sweep_interval: Duration,
}

impl CleanupSweeper {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
        config: &CleanupConfig,
    ) -> Self {
        Self {
            tasks,
            projects,
            retention_days: config.retention_days,
            sweep_interval: config.sweep_interval(),
        }
    }

    /// Run one sweep: purge everything soft-deleted before the cutoff.
    ///
    /// The purge is irreversible and bypasses ownership scoping; entries
    /// inside the retention window are never touched.
    pub async fn sweep_once(&self) -> Result<SweepReport, DomainError> {
        let cutoff = Timestamp::now().minus_days(self.retention_days);

        let tasks_purged = self.tasks.purge_deleted_before(&cutoff).await?;
        let projects_purged = self.projects.purge_deleted_before(&cutoff).await?;

        let report = SweepReport {
            tasks_purged,
            projects_purged,
        };
        if tasks_purged > 0 || projects_purged > 0 {
            tracing::info!(
                tasks = tasks_purged,
                projects = projects_purged,
                "cleanup sweep purged entries"
            );
        } else {
            tracing::debug!("cleanup sweep found nothing to purge");
        }
        Ok(report)
    }

    /// Run the sweep loop until the shutdown signal flips to `true`.
    ///
    /// Sweep errors are logged and the next tick proceeds as scheduled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(self.sweep_interval);
        tracing::info!(
            retention_days = self.retention_days,
            interval_secs = self.sweep_interval.as_secs(),
            "cleanup sweeper started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(err) = self.sweep_once().await {
                        tracing::error!(error = %err, "cleanup sweep failed");
                    }
                }
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        tracing::info!("cleanup sweeper stopped");
                        return;
                    }
                }
            }
        }
    }
}
