//! Cleanup - permanent purge of expired recycle-bin entries.

mod sweeper;

pub use sweeper::{CleanupSweeper, SweepReport};
