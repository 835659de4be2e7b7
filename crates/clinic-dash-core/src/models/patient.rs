//! Patient models.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A patient account as listed by `GET /api/user/patient`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Patient ID
    pub id: RecordId,
    /// Full name
    pub full_name: String,
    /// Human-facing patient code shown in tables
    #[serde(default)]
    pub display_code: Option<String>,
    /// Avatar image, base64 text
    #[serde(default)]
    pub avatar: Option<String>,
}

impl PatientRecord {
    /// Create a patient with required fields.
    pub fn new(id: impl Into<RecordId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            display_code: None,
            avatar: None,
        }
    }

    /// Set the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.display_code = Some(code.into());
        self
    }
}
