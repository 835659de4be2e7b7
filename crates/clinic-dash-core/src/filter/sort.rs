//! Chronological ordering of schedule rows.

use serde::{Deserialize, Serialize};

use super::DateMode;
use crate::models::MergedRow;

/// Sort direction over the `(date, slot)` key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first
    Descending,
    /// Soonest first
    Ascending,
}

/// Schedule table flavours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScheduleView {
    /// Visits before today
    History,
    /// Visits from today on
    Upcoming,
}

impl ScheduleView {
    pub fn date_mode(&self) -> DateMode {
        match self {
            ScheduleView::History => DateMode::Past,
            ScheduleView::Upcoming => DateMode::TodayOrFuture,
        }
    }

    /// Both views list the most recent slot first. Upcoming is not flipped to
    /// soonest-first until the dashboard owners confirm that ordering.
    pub fn sort_order(&self) -> SortOrder {
        match self {
            ScheduleView::History | ScheduleView::Upcoming => SortOrder::Descending,
        }
    }
}

/// Stable sort by `(date, slot)`; rows with equal keys keep their order.
pub fn sort_rows(rows: &mut [MergedRow], order: SortOrder) {
    match order {
        SortOrder::Descending => rows.sort_by(|a, b| b.sort_key().cmp(&a.sort_key())),
        SortOrder::Ascending => rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key())),
    }
}
