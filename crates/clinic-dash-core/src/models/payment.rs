//! Payment models.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Label shown when a schedule's payment status is unknown.
pub const PAYMENT_UNKNOWN_LABEL: &str = "Chưa cập nhật";

/// Payment state of a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    /// Display label used in schedule tables.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Đã thanh toán",
            PaymentStatus::Unpaid => "Chưa thanh toán",
            PaymentStatus::Pending => "Đang xử lý",
            PaymentStatus::Refunded => "Đã hoàn tiền",
        }
    }
}

/// Payment attached to a schedule (`GET /api/payment/schedule/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Schedule this payment belongs to
    #[serde(alias = "scheduleId")]
    pub schedule_ref: RecordId,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_schedule_id_alias() {
        let payment: PaymentRecord =
            serde_json::from_str(r#"{"scheduleId": 9, "status": "UNPAID"}"#).unwrap();
        assert_eq!(payment.schedule_ref.as_str(), "9");
        assert_eq!(payment.status.label(), "Chưa thanh toán");
    }
}
