//! Data models for storage-provisioning reports
//!
//! This module contains the record structure produced by the report parser:
//! one observation window of storage workload metrics for a monitored
//! database resource.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One observation window of storage-provisioning metrics
///
/// A record either carries a window assigned from the fixed 12-slot schedule
/// (summary rows) or a single start instant taken from the row itself
/// (time-series rows, which never carry an end). Metric values are passed
/// through from the report without plausibility checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageProvisioning {
    /// Start of the observation window; absent only for an out-of-schedule
    /// summary row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<DateTime<Utc>>,

    /// End of the observation window; absent while the window is still open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<DateTime<Utc>>,

    /// Average CPU utilization reported by the database
    pub cpu_db_avg: f64,

    /// Maximum CPU utilization reported by the database
    pub cpu_db_max: f64,

    /// Average CPU utilization reported by the host
    pub cpu_host_avg: f64,

    /// Maximum CPU utilization reported by the host
    pub cpu_host_max: f64,

    /// Average I/O operations per second
    pub iops_avg: f64,

    /// Maximum I/O operations per second
    pub iops_max: f64,

    /// Average I/O throughput in MB/s
    pub iomb_avg: f64,

    /// Maximum I/O throughput in MB/s
    pub iomb_max: f64,
}

impl StorageProvisioning {
    /// Check whether the record carries any window bound at all
    pub fn has_window(&self) -> bool {
        self.time_start.is_some() || self.time_end.is_some()
    }

    /// Check whether the record represents the still-open current window
    pub fn is_open_ended(&self) -> bool {
        self.time_start.is_some() && self.time_end.is_none()
    }

    /// Length of the observation window, when both bounds are present
    pub fn window_duration(&self) -> Option<Duration> {
        match (self.time_start, self.time_end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}
