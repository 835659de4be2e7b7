//! Feedback table and rating summary.

use clinic_dash_core::models::FeedbackRecord;
use clinic_dash_core::stats::{FeedbackFilter, FeedbackStatistics};
use serde::Serialize;

use super::LoadResult;
use crate::api::ApiClient;

/// Filtered feedback with its aggregates.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub entries: Vec<FeedbackRecord>,
    pub statistics: FeedbackStatistics,
}

/// Fetch feedback, narrow it with `filter` and aggregate what remains.
///
/// Fails if any remaining entry carries a rating outside 1..=5.
pub async fn load_feedback_summary(
    client: &ApiClient,
    filter: &FeedbackFilter,
) -> LoadResult<FeedbackSummary> {
    let feedback = client.list_feedback().await?;
    let fetched = feedback.len();

    let entries = filter.apply(feedback);
    let statistics = FeedbackStatistics::from_feedback(&entries)?;

    tracing::info!(
        fetched,
        kept = entries.len(),
        average = statistics.average_rating,
        "Loaded feedback summary"
    );
    Ok(FeedbackSummary {
        entries,
        statistics,
    })
}
