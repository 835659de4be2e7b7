//! Appointment schedule models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Appointment status as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    /// Booked, awaiting confirmation
    Pending,
    /// Confirmed by the clinic
    Confirmed,
    /// Cancelled by patient or staff
    Cancelled,
    /// Visit took place
    Completed,
}

impl ScheduleStatus {
    pub const ALL: [ScheduleStatus; 4] = [
        ScheduleStatus::Pending,
        ScheduleStatus::Confirmed,
        ScheduleStatus::Cancelled,
        ScheduleStatus::Completed,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "PENDING",
            ScheduleStatus::Confirmed => "CONFIRMED",
            ScheduleStatus::Cancelled => "CANCELLED",
            ScheduleStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(ScheduleStatus::Pending),
            "CONFIRMED" => Ok(ScheduleStatus::Confirmed),
            "CANCELLED" | "CANCELED" => Ok(ScheduleStatus::Cancelled),
            "COMPLETED" => Ok(ScheduleStatus::Completed),
            other => Err(format!("unknown schedule status: {}", other)),
        }
    }
}

/// Reference to another record nested inside a payload (`{"id": 5, ...}`).
///
/// Only the id is kept; any other nested fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    pub id: RecordId,
}

impl EntityRef {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self { id: id.into() }
    }
}

/// A booked appointment slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// Schedule ID
    pub id: RecordId,
    /// Calendar date of the visit
    pub date: NaiveDate,
    /// Time of day, zero-padded (e.g., "09:00")
    pub slot: String,
    /// Patient the slot is booked for
    #[serde(alias = "patient")]
    pub patient_ref: EntityRef,
    /// Assigned doctor, if any
    #[serde(default, alias = "doctor")]
    pub doctor_ref: Option<EntityRef>,
    /// Current status
    pub status: ScheduleStatus,
}

impl ScheduleRecord {
    /// Create a schedule record with no doctor assigned.
    pub fn new(
        id: impl Into<RecordId>,
        date: NaiveDate,
        slot: impl Into<String>,
        patient_id: impl Into<RecordId>,
        status: ScheduleStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            slot: slot.into(),
            patient_ref: EntityRef::new(patient_id),
            doctor_ref: None,
            status,
        }
    }

    /// Assign a doctor.
    pub fn with_doctor(mut self, doctor_id: impl Into<RecordId>) -> Self {
        self.doctor_ref = Some(EntityRef::new(doctor_id));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_patient() {
        let json = r#"{
            "id": 1,
            "date": "2024-01-01",
            "slot": "09:00",
            "patient": {"id": 5, "fullName": "Nguyen Van A"},
            "status": "CONFIRMED"
        }"#;

        let record: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "1");
        assert_eq!(record.patient_ref.id.as_str(), "5");
        assert!(record.doctor_ref.is_none());
        assert_eq!(record.status, ScheduleStatus::Confirmed);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("completed".parse::<ScheduleStatus>(), Ok(ScheduleStatus::Completed));
        assert_eq!("CANCELED".parse::<ScheduleStatus>(), Ok(ScheduleStatus::Cancelled));
        assert!("ALL".parse::<ScheduleStatus>().is_err());

        for status in ScheduleStatus::ALL {
            assert_eq!(status.as_str().parse::<ScheduleStatus>(), Ok(status));
            assert_eq!(status.to_string().to_lowercase().parse::<ScheduleStatus>(), Ok(status));
        }
    }
}
