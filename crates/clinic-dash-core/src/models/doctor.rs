//! Doctor models.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Doctor availability status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoctorStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
}

/// A doctor as listed by `GET /api/user/DOCTOR`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    pub id: RecordId,
    pub full_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub status: DoctorStatus,
    #[serde(default)]
    pub experience_years: u32,
}

impl DoctorRecord {
    pub fn new(id: impl Into<RecordId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            specialty: None,
            status: DoctorStatus::Active,
            experience_years: 0,
        }
    }
}

/// Doctor profile managed through `/api/doctor-profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub id: RecordId,
    pub doctor_id: RecordId,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub qualifications: Option<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub status: DoctorStatus,
}

/// Create/update payload for a doctor profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileInput {
    pub doctor_id: RecordId,
    pub specialty: Option<String>,
    pub qualifications: Option<String>,
    pub experience_years: u32,
    pub biography: Option<String>,
    pub status: DoctorStatus,
}
