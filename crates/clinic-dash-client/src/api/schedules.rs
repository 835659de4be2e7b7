//! Appointment schedules.

use chrono::NaiveDate;
use clinic_dash_core::models::{RecordId, Role, ScheduleRecord};
use serde::Serialize;

use super::{ApiClient, ApiResult};

/// Scope of a schedule listing. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ScheduleQuery {
    /// Schedules assigned to one doctor.
    pub fn for_doctor(doctor_id: impl Into<RecordId>) -> Self {
        Self {
            role: Some(Role::Doctor),
            doctor_id: Some(doctor_id.into()),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl ApiClient {
    pub async fn list_schedules(&self, query: &ScheduleQuery) -> ApiResult<Vec<ScheduleRecord>> {
        let schedules: Vec<ScheduleRecord> = self.get_query("/api/schedule", query).await?;
        tracing::debug!(count = schedules.len(), "Fetched schedules");
        Ok(schedules)
    }
}
