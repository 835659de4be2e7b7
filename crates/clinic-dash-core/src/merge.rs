//! Schedule join layer.
//!
//! Combines schedules with the patient, doctor and payment collections that
//! were fetched alongside them. Joins are by normalized id equality and never
//! drop a schedule: a miss fills the row with placeholder values.

use std::collections::HashMap;

use crate::models::{
    DoctorRecord, MergedRow, PatientRecord, PaymentStatus, RecordId, ScheduleRecord,
    NOT_AVAILABLE, UNKNOWN_PATIENT_NAME,
};

/// Joins schedules against already-fetched companion lists.
pub struct ScheduleJoin<'a> {
    patients: HashMap<&'a str, &'a PatientRecord>,
    doctors: HashMap<&'a str, &'a DoctorRecord>,
}

impl<'a> ScheduleJoin<'a> {
    /// Create a join over the given patient list.
    ///
    /// When the list holds the same id twice, the first entry wins.
    pub fn new(patients: &'a [PatientRecord]) -> Self {
        let mut index = HashMap::with_capacity(patients.len());
        for patient in patients {
            index.entry(patient.id.as_str()).or_insert(patient);
        }
        Self {
            patients: index,
            doctors: HashMap::new(),
        }
    }

    /// Also resolve doctor names.
    pub fn with_doctors(mut self, doctors: &'a [DoctorRecord]) -> Self {
        for doctor in doctors {
            self.doctors.entry(doctor.id.as_str()).or_insert(doctor);
        }
        self
    }

    /// Build one row per schedule, in input order.
    pub fn merge(&self, schedules: &[ScheduleRecord]) -> Vec<MergedRow> {
        schedules.iter().map(|s| self.merge_one(s)).collect()
    }

    /// Build the row for a single schedule.
    pub fn merge_one(&self, schedule: &ScheduleRecord) -> MergedRow {
        let patient = self.patients.get(schedule.patient_ref.id.as_str());
        let doctor = schedule
            .doctor_ref
            .as_ref()
            .and_then(|r| self.doctors.get(r.id.as_str()));

        MergedRow {
            schedule_id: schedule.id.clone(),
            date: schedule.date,
            slot: schedule.slot.clone(),
            status: schedule.status,
            patient_id: schedule.patient_ref.id.clone(),
            doctor_id: schedule.doctor_ref.as_ref().map(|r| r.id.clone()),
            patient_name: patient
                .map(|p| p.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_PATIENT_NAME.to_string()),
            display_code: patient
                .and_then(|p| p.display_code.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            avatar: patient.and_then(|p| p.avatar.clone()),
            doctor_name: doctor
                .map(|d| d.full_name.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            payment_status: None,
        }
    }
}

/// Merge schedules with patients only.
pub fn merge_schedules(schedules: &[ScheduleRecord], patients: &[PatientRecord]) -> Vec<MergedRow> {
    ScheduleJoin::new(patients).merge(schedules)
}

/// Attach settled payment lookups to rows.
///
/// `payments` maps schedule id to the lookup outcome; `None` (or a missing
/// key) leaves the row's payment status unknown.
pub fn attach_payments(
    rows: &mut [MergedRow],
    payments: &HashMap<RecordId, Option<PaymentStatus>>,
) {
    for row in rows.iter_mut() {
        row.payment_status = payments.get(&row.schedule_id).copied().flatten();
    }
}
