//! Patient feedback.

use clinic_dash_core::models::FeedbackRecord;

use super::{ApiClient, ApiResult};

impl ApiClient {
    pub async fn list_feedback(&self) -> ApiResult<Vec<FeedbackRecord>> {
        self.get("/api/feedback").await
    }
}
