//! Payment lookups.

use clinic_dash_core::models::{PaymentRecord, RecordId};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Payment attached to a schedule.
    pub async fn payment_for_schedule(&self, schedule_id: &RecordId) -> ApiResult<PaymentRecord> {
        self.get(&format!("/api/payment/schedule/{}", schedule_id)).await
    }
}
