//! Lab test result models.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A lab test result recorded by a lab technician.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: RecordId,
    /// Schedule the test was ordered for
    pub schedule_id: RecordId,
    pub test_name: String,
    pub result: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub reference_range: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload for a test result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResultInput {
    pub schedule_id: RecordId,
    pub test_name: String,
    pub result: String,
    pub unit: Option<String>,
    pub reference_range: Option<String>,
    pub notes: Option<String>,
}
