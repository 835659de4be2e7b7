//! Account listings by role.

use clinic_dash_core::models::{AccountStatus, DoctorRecord, PatientRecord, Role, UserAccount};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// All patient accounts.
    pub async fn list_patients(&self) -> ApiResult<Vec<PatientRecord>> {
        self.get("/api/user/patient").await
    }

    /// All doctor accounts.
    pub async fn list_doctors(&self) -> ApiResult<Vec<DoctorRecord>> {
        self.get("/api/user/DOCTOR").await
    }

    pub async fn list_lab_technicians(&self) -> ApiResult<Vec<UserAccount>> {
        self.get("/api/user/LAB_TECHNICIAN").await
    }

    /// Accounts of `role` regardless of status.
    pub async fn list_accounts(&self, role: Role) -> ApiResult<Vec<UserAccount>> {
        self.get(&format!("/api/user/{}", role.path_segment())).await
    }

    /// Accounts of `role` in the given account status.
    pub async fn accounts_by_status(
        &self,
        role: Role,
        status: AccountStatus,
    ) -> ApiResult<Vec<UserAccount>> {
        self.get(&format!(
            "/api/user/{}/account-status/{}",
            role.path_segment(),
            status.as_str()
        ))
        .await
    }

    /// Accounts of `role` whose e-mail is (or is not) verified.
    pub async fn accounts_by_mail_verification(
        &self,
        role: Role,
        verified: bool,
    ) -> ApiResult<Vec<UserAccount>> {
        self.get(&format!(
            "/api/user/{}/mail-verification-status/{}",
            role.path_segment(),
            verified
        ))
        .await
    }
}
