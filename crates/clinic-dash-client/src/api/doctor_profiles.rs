//! Doctor profile CRUD.

use clinic_dash_core::models::{DoctorProfile, DoctorProfileInput, RecordId};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Profile of a doctor account.
    pub async fn doctor_profile(&self, doctor_id: &RecordId) -> ApiResult<DoctorProfile> {
        self.get(&format!("/api/doctor-profile/doctor-id/{}", doctor_id)).await
    }

    pub async fn create_doctor_profile(&self, input: &DoctorProfileInput) -> ApiResult<DoctorProfile> {
        tracing::info!(doctor_id = %input.doctor_id, "Creating doctor profile");
        self.post("/api/doctor-profile", input).await
    }

    /// Replace profile `profile_id`.
    pub async fn update_doctor_profile(
        &self,
        profile_id: &RecordId,
        input: &DoctorProfileInput,
    ) -> ApiResult<DoctorProfile> {
        tracing::info!(profile_id = %profile_id, "Updating doctor profile");
        self.put(&format!("/api/doctor-profile/{}", profile_id), input).await
    }
}
