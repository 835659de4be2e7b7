//! Lab test results.

use clinic_dash_core::models::{RecordId, TestResult, TestResultInput};

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn create_test_result(&self, input: &TestResultInput) -> ApiResult<TestResult> {
        tracing::info!(schedule_id = %input.schedule_id, test = %input.test_name, "Recording test result");
        self.post("/api/test-result", input).await
    }

    pub async fn update_test_result(
        &self,
        id: &RecordId,
        input: &TestResultInput,
    ) -> ApiResult<TestResult> {
        self.put(&format!("/api/test-result/{}", id), input).await
    }

    pub async fn delete_test_result(&self, id: &RecordId) -> ApiResult<()> {
        tracing::info!(id = %id, "Deleting test result");
        self.delete(&format!("/api/test-result/{}", id)).await
    }
}
