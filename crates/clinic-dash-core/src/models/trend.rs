//! Statistics query and trend models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Named time window for trend charts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Period {
    #[default]
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
    #[serde(rename = "180days")]
    Last180Days,
    #[serde(rename = "365days")]
    Last365Days,
    #[serde(rename = "custom")]
    Custom,
}

impl Period {
    /// Predefined windows, narrowest first.
    pub const PRESETS: [Period; 4] = [
        Period::Last30Days,
        Period::Last90Days,
        Period::Last180Days,
        Period::Last365Days,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Last30Days => "30days",
            Period::Last90Days => "90days",
            Period::Last180Days => "180days",
            Period::Last365Days => "365days",
            Period::Custom => "custom",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "30days" => Ok(Period::Last30Days),
            "90days" => Ok(Period::Last90Days),
            "180days" => Ok(Period::Last180Days),
            "365days" => Ok(Period::Last365Days),
            "custom" => Ok(Period::Custom),
            other => Err(format!("unknown period: {}", other)),
        }
    }
}

/// One point of a trend series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Query parameters accepted by every statistics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<RecordId>,
}
