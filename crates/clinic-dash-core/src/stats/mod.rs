//! Derived statistics for dashboard cards and charts.
//!
//! Every rate is `count / total` as a whole percentage in `[0, 100]`; a zero
//! total yields 0.

mod appointments;
mod feedback;
mod period;

pub use appointments::*;
pub use feedback::*;
pub use period::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FeedbackRecord, RecordId, ScheduleRecord};

/// Statistics errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Rating {rating} on feedback {feedback_id} is outside 1..=5")]
    InvalidRating { feedback_id: RecordId, rating: i32 },

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type StatsResult<T> = Result<T, StatsError>;

/// `count / total` as a rounded whole percentage, clamped to `[0, 100]`.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (count as f64 / total as f64 * 100.0).round();
    rate.clamp(0.0, 100.0) as u32
}

/// Arithmetic mean; 0 for an empty slice.
pub fn average(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    sum as f64 / values.len() as f64
}

/// Aggregates shown on the statistics dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub appointments: AppointmentStatistics,
    pub feedback: FeedbackStatistics,
}

impl StatisticsSnapshot {
    /// Compute both aggregates from already-fetched collections.
    pub fn compute(schedules: &[ScheduleRecord], feedback: &[FeedbackRecord]) -> StatsResult<Self> {
        Ok(Self {
            appointments: AppointmentStatistics::from_schedules(schedules),
            feedback: FeedbackStatistics::from_feedback(feedback)?,
        })
    }
}
