//! Server-side statistics reports.

use std::fmt;

use clinic_dash_core::models::StatisticsQuery;
use clinic_dash_core::stats::TrendBuckets;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ApiClient, ApiResult};

/// Report families under `/api/statistics/`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatisticsKind {
    Dashboard,
    Staff,
    Patient,
    Appointment,
    Treatment,
    Financial,
}

impl StatisticsKind {
    pub const ALL: [StatisticsKind; 6] = [
        StatisticsKind::Dashboard,
        StatisticsKind::Staff,
        StatisticsKind::Patient,
        StatisticsKind::Appointment,
        StatisticsKind::Treatment,
        StatisticsKind::Financial,
    ];

    pub fn path_segment(&self) -> &'static str {
        match self {
            StatisticsKind::Dashboard => "dashboard",
            StatisticsKind::Staff => "staff",
            StatisticsKind::Patient => "patient",
            StatisticsKind::Appointment => "appointment",
            StatisticsKind::Treatment => "treatment",
            StatisticsKind::Financial => "financial",
        }
    }
}

impl fmt::Display for StatisticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// A statistics report: trend series by period plus free-form summary fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatisticsReport {
    #[serde(default)]
    pub trends: TrendBuckets,
    #[serde(flatten)]
    pub summary: Map<String, Value>,
}

impl ApiClient {
    /// Fetch a report decoded as `T`.
    pub async fn statistics<T: DeserializeOwned>(
        &self,
        kind: StatisticsKind,
        query: &StatisticsQuery,
    ) -> ApiResult<T> {
        self.get_query(&format!("/api/statistics/{}", kind.path_segment()), query)
            .await
    }

    pub async fn statistics_report(
        &self,
        kind: StatisticsKind,
        query: &StatisticsQuery,
    ) -> ApiResult<StatisticsReport> {
        self.statistics(kind, query).await
    }
}
