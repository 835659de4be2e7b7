//! Appointment status aggregates.

use serde::{Deserialize, Serialize};

use super::percentage;
use crate::models::{ScheduleRecord, ScheduleStatus};

/// Status counts and derived rates for a set of appointments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentStatistics {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
    /// Completed share of all appointments, whole percent
    pub completion_rate: u32,
    /// Cancelled share of all appointments, whole percent
    pub cancellation_rate: u32,
}

impl AppointmentStatistics {
    pub fn from_schedules(schedules: &[ScheduleRecord]) -> Self {
        let mut stats = Self {
            total: schedules.len(),
            ..Default::default()
        };
        for schedule in schedules {
            match schedule.status {
                ScheduleStatus::Pending => stats.pending += 1,
                ScheduleStatus::Confirmed => stats.confirmed += 1,
                ScheduleStatus::Cancelled => stats.cancelled += 1,
                ScheduleStatus::Completed => stats.completed += 1,
            }
        }
        stats.completion_rate = percentage(stats.completed, stats.total);
        stats.cancellation_rate = percentage(stats.cancelled, stats.total);
        stats
    }

    pub fn count(&self, status: ScheduleStatus) -> usize {
        match status {
            ScheduleStatus::Pending => self.pending,
            ScheduleStatus::Confirmed => self.confirmed,
            ScheduleStatus::Cancelled => self.cancelled,
            ScheduleStatus::Completed => self.completed,
        }
    }
}

/// Completion rate from raw counts.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    percentage(completed, total)
}
