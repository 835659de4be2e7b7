//! Denormalized schedule rows for table rendering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PaymentStatus, RecordId, ScheduleStatus, PAYMENT_UNKNOWN_LABEL};

/// Patient name shown when the schedule's patient is not in the patient list.
pub const UNKNOWN_PATIENT_NAME: &str = "Chưa rõ tên";

/// Placeholder for any other missing display field.
pub const NOT_AVAILABLE: &str = "N/A";

/// A schedule joined with patient, doctor and payment display fields.
///
/// Rebuilt from scratch on every fetch; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergedRow {
    /// Source schedule ID (always present)
    pub schedule_id: RecordId,
    pub date: NaiveDate,
    pub slot: String,
    pub status: ScheduleStatus,
    /// Patient the schedule points at, whether or not the join matched
    pub patient_id: RecordId,
    pub doctor_id: Option<RecordId>,
    /// Patient full name, or [`UNKNOWN_PATIENT_NAME`]
    pub patient_name: String,
    /// Patient display code, or [`NOT_AVAILABLE`]
    pub display_code: String,
    pub avatar: Option<String>,
    /// Doctor full name, or [`NOT_AVAILABLE`]
    pub doctor_name: String,
    /// `None` when payments were not requested or the lookup failed
    pub payment_status: Option<PaymentStatus>,
}

impl MergedRow {
    /// Composite ordering key: date, then slot.
    pub fn sort_key(&self) -> (NaiveDate, &str) {
        (self.date, self.slot.as_str())
    }

    /// Payment label for display.
    pub fn payment_label(&self) -> &'static str {
        self.payment_status
            .map(|status| status.label())
            .unwrap_or(PAYMENT_UNKNOWN_LABEL)
    }
}
