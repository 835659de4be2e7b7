//! Feedback rating aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{average, StatsError, StatsResult};
use crate::models::FeedbackRecord;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Histogram of ratings; index 0 holds 1-star counts, index 4 holds 5-star.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingDistribution(pub [u32; 5]);

impl RatingDistribution {
    /// Count one rating. Out-of-range ratings are rejected, never indexed.
    pub fn record(&mut self, feedback: &FeedbackRecord) -> StatsResult<()> {
        let bucket = bucket_index(feedback.rating).ok_or_else(|| StatsError::InvalidRating {
            feedback_id: feedback.id.clone(),
            rating: feedback.rating,
        })?;
        self.0[bucket] += 1;
        Ok(())
    }

    /// Count for a star value, 0 for anything outside 1..=5.
    pub fn count(&self, rating: i32) -> u32 {
        bucket_index(rating).map(|i| self.0[i]).unwrap_or(0)
    }

    pub fn as_array(&self) -> [u32; 5] {
        self.0
    }
}

fn bucket_index(rating: i32) -> Option<usize> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Some((rating - MIN_RATING) as usize)
    } else {
        None
    }
}

/// Rating aggregates over a (usually filtered) feedback list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatistics {
    pub total: usize,
    pub average_rating: f64,
    pub distribution: RatingDistribution,
}

impl FeedbackStatistics {
    /// Aggregate ratings; fails on the first rating outside 1..=5.
    pub fn from_feedback(feedback: &[FeedbackRecord]) -> StatsResult<Self> {
        let mut distribution = RatingDistribution::default();
        for entry in feedback {
            distribution.record(entry)?;
        }

        let ratings: Vec<i32> = feedback.iter().map(|f| f.rating).collect();
        Ok(Self {
            total: feedback.len(),
            average_rating: average(&ratings),
            distribution,
        })
    }

    /// Share of feedback with the given star value, as a whole percentage.
    pub fn share_of(&self, rating: i32) -> u32 {
        super::percentage(self.distribution.count(rating) as usize, self.total)
    }
}

/// Narrowing applied to the feedback list before aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFilter {
    pub rating: Option<i32>,
    /// Case-insensitive (Unicode) exact match on treatment type
    pub treatment_type: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl FeedbackFilter {
    pub fn matches(&self, feedback: &FeedbackRecord) -> bool {
        if let Some(rating) = self.rating {
            if feedback.rating != rating {
                return false;
            }
        }
        if let Some(wanted) = &self.treatment_type {
            let wanted = wanted.trim().to_lowercase();
            let matches = feedback
                .treatment_type
                .as_deref()
                .map(|t| t.trim().to_lowercase() == wanted)
                .unwrap_or(false);
            if !matches {
                return false;
            }
        }
        if self.from.is_some_and(|from| feedback.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| feedback.date > to) {
            return false;
        }
        true
    }

    pub fn apply(&self, feedback: Vec<FeedbackRecord>) -> Vec<FeedbackRecord> {
        feedback.into_iter().filter(|f| self.matches(f)).collect()
    }
}
