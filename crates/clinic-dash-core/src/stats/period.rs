//! Period selection for trend charts.
//!
//! The statistics endpoints return series already partitioned by period
//! (`{"30days": [...], "90days": [...], ...}`). A custom range is cut out of
//! the widest series available.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::{StatsError, StatsResult};
use crate::models::{Period, TrendPoint};

/// Period used when a selection cannot be honoured.
pub const DEFAULT_PERIOD: Period = Period::Last30Days;

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> StatsResult<Self> {
        if start > end {
            return Err(StatsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Which series a chart should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSelection {
    pub period: Period,
    /// Only consulted for [`Period::Custom`]
    pub range: Option<DateRange>,
}

impl PeriodSelection {
    pub fn preset(period: Period) -> Self {
        Self { period, range: None }
    }

    pub fn custom(range: DateRange) -> Self {
        Self {
            period: Period::Custom,
            range: Some(range),
        }
    }

    /// The period actually served: custom without a range falls back.
    pub fn effective_period(&self) -> Period {
        match (self.period, self.range) {
            (Period::Custom, None) => DEFAULT_PERIOD,
            (period, _) => period,
        }
    }
}

/// Pre-partitioned trend series keyed by period.
///
/// Decoding skips buckets whose key is not a known period.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct TrendBuckets {
    series: BTreeMap<Period, Vec<TrendPoint>>,
}

impl<'de> Deserialize<'de> for TrendBuckets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Vec<TrendPoint>>::deserialize(deserializer)?;
        let series = raw
            .into_iter()
            .filter_map(|(key, points)| key.parse::<Period>().ok().map(|p| (p, points)))
            .collect();
        Ok(Self { series })
    }
}

impl TrendBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, period: Period, points: Vec<TrendPoint>) {
        self.series.insert(period, points);
    }

    pub fn get(&self, period: Period) -> Option<&[TrendPoint]> {
        self.series.get(&period).map(Vec::as_slice)
    }

    /// Series for the selection.
    ///
    /// Presets return their bucket (empty when missing). Custom ranges are
    /// derived from the widest non-empty bucket; custom without a range serves the
    /// default period.
    pub fn select(&self, selection: &PeriodSelection) -> Vec<TrendPoint> {
        match (selection.period, selection.range) {
            (Period::Custom, Some(range)) => self
                .widest()
                .iter()
                .filter(|p| range.contains(p.date))
                .cloned()
                .collect(),
            _ => self
                .get(selection.effective_period())
                .map(<[TrendPoint]>::to_vec)
                .unwrap_or_default(),
        }
    }

    fn widest(&self) -> &[TrendPoint] {
        if let Some(custom) = self.get(Period::Custom) {
            if !custom.is_empty() {
                return custom;
            }
        }
        Period::PRESETS
            .iter()
            .rev()
            .find_map(|p| self.get(*p).filter(|s| !s.is_empty()))
            .unwrap_or(&[])
    }
}
