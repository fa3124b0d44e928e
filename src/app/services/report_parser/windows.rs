//! Fixed observation-window schedule for summary rows
//!
//! Every report opens with twelve summary rows whose observation windows are
//! not carried on the rows themselves; they are assigned by position from
//! this schedule, relative to a single reference instant.

use chrono::{DateTime, Duration, Utc};

use crate::constants::SUMMARY_SLOT_COUNT;

/// Day offsets of one schedule slot, relative to the reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOffsets {
    /// Days before the reference instant at which the window starts
    pub start_days_ago: i64,

    /// Days before the reference instant at which the window ends; `None`
    /// marks the still-open current window
    pub end_days_ago: Option<i64>,
}

/// Window schedule applied to the first twelve rows of every report.
///
/// Slots 0 and 1 are trailing 30-day and 7-day windows ending at the
/// reference instant, slots 2 through 4 the three preceding whole weeks,
/// slot 5 the open current window, and slots 6 through 11 the six preceding
/// single days, most recent first.
pub const WINDOW_SCHEDULE: [WindowOffsets; SUMMARY_SLOT_COUNT] = [
    WindowOffsets {
        start_days_ago: 30,
        end_days_ago: Some(0),
    },
    WindowOffsets {
        start_days_ago: 7,
        end_days_ago: Some(0),
    },
    WindowOffsets {
        start_days_ago: 14,
        end_days_ago: Some(8),
    },
    WindowOffsets {
        start_days_ago: 21,
        end_days_ago: Some(15),
    },
    WindowOffsets {
        start_days_ago: 28,
        end_days_ago: Some(22),
    },
    WindowOffsets {
        start_days_ago: 0,
        end_days_ago: None,
    },
    WindowOffsets {
        start_days_ago: 1,
        end_days_ago: Some(0),
    },
    WindowOffsets {
        start_days_ago: 2,
        end_days_ago: Some(1),
    },
    WindowOffsets {
        start_days_ago: 3,
        end_days_ago: Some(2),
    },
    WindowOffsets {
        start_days_ago: 4,
        end_days_ago: Some(3),
    },
    WindowOffsets {
        start_days_ago: 5,
        end_days_ago: Some(4),
    },
    WindowOffsets {
        start_days_ago: 6,
        end_days_ago: Some(5),
    },
];

/// Resolve the window bounds for a schedule slot.
///
/// Slots beyond the schedule leave both bounds unset; the upstream format
/// never produces an 8-field row that late, but such a row still becomes a
/// record.
pub fn window_for_slot(
    slot: usize,
    reference: DateTime<Utc>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    match WINDOW_SCHEDULE.get(slot) {
        Some(offsets) => (
            Some(reference - Duration::days(offsets.start_days_ago)),
            offsets
                .end_days_ago
                .map(|days| reference - Duration::days(days)),
        ),
        None => (None, None),
    }
}
