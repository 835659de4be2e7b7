//! Patient feedback models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// A feedback entry left by a patient after treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Feedback ID
    pub id: RecordId,
    /// Name the patient left the feedback under
    pub patient_name: String,
    /// Star rating; valid values are 1..=5 (not enforced at decode time)
    pub rating: i32,
    /// Free-text comment
    #[serde(default)]
    pub comment: String,
    /// Date the feedback was submitted
    pub date: NaiveDate,
    /// Treatment the feedback refers to
    #[serde(default)]
    pub treatment_type: Option<String>,
}

impl FeedbackRecord {
    /// Create a feedback entry with required fields.
    pub fn new(id: impl Into<RecordId>, patient_name: impl Into<String>, rating: i32, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            patient_name: patient_name.into(),
            rating,
            comment: String::new(),
            date,
            treatment_type: None,
        }
    }
}
