//! Trajectory log
//!
//! Ordered position samples across both phases of a run, kept solely for
//! the external visualization collaborators. The navigational core never
//! reads this log; homing is computed from the accumulated vector alone.
//! Recording can be disabled to run with O(1) memory.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position history of a run, one sample per step plus the origin.
///
/// # Example
/// ```
/// use ant_navigator_core_rs::TrajectoryLog;
/// use glam::DVec2;
///
/// let mut log = TrajectoryLog::new(true);
/// log.record(DVec2::ZERO);
/// log.record(DVec2::new(1.0, 0.0));
/// assert_eq!(log.len(), 2);
///
/// let mut disabled = TrajectoryLog::new(false);
/// disabled.record(DVec2::ZERO);
/// assert!(disabled.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryLog {
    enabled: bool,
    samples: Vec<DVec2>,
}

impl TrajectoryLog {
    /// Create a log; when `enabled` is false every `record` is a no-op.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            samples: Vec::new(),
        }
    }

    /// Append a position sample (no-op when recording is disabled).
    pub fn record(&mut self, position: DVec2) {
        if self.enabled {
            self.samples.push(position);
        }
    }

    /// Whether recording is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Recorded samples, oldest first.
    pub fn samples(&self) -> &[DVec2] {
        &self.samples
    }

    /// Consume the log, yielding the samples.
    pub fn into_samples(self) -> Vec<DVec2> {
        self.samples
    }
}
