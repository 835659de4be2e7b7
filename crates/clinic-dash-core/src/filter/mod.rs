//! Row filtering for schedule tables.
//!
//! Filters are plain functions over owned row vectors so a view can chain
//! them: name search, then status, then date partition, then sort.

mod sort;

pub use sort::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MergedRow, ScheduleStatus};

/// Status filter; `All` disables the filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ScheduleStatus),
}

impl StatusFilter {
    /// Parse `"ALL"` or a schedule status name.
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            raw.parse().map(StatusFilter::Only)
        }
    }

    pub fn matches(&self, status: ScheduleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Which side of today a view shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DateMode {
    /// Strictly before today
    Past,
    /// Today or later
    TodayOrFuture,
    #[default]
    All,
}

impl DateMode {
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_lowercase().as_str() {
            "past" => Ok(DateMode::Past),
            "today-or-future" | "upcoming" => Ok(DateMode::TodayOrFuture),
            "all" => Ok(DateMode::All),
            other => Err(format!("unknown date mode: {}", other)),
        }
    }

    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateMode::Past => date < today,
            DateMode::TodayOrFuture => date >= today,
            DateMode::All => true,
        }
    }
}

/// Filter criteria for a schedule table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RowFilter {
    /// Case-insensitive search over patient name and display code
    pub name_query: Option<String>,
    pub status: StatusFilter,
    pub date_mode: DateMode,
}

impl RowFilter {
    /// Apply every criterion; row order is preserved.
    pub fn apply(&self, rows: Vec<MergedRow>, today: NaiveDate) -> Vec<MergedRow> {
        let rows = match &self.name_query {
            Some(query) => filter_by_name(rows, query),
            None => rows,
        };
        let rows = filter_by_status(rows, self.status);
        filter_by_date(rows, self.date_mode, today)
    }
}

/// Keep rows whose patient name or display code contains `query`.
///
/// Matching is case-insensitive. A blank query keeps every row.
pub fn filter_by_name(rows: Vec<MergedRow>, query: &str) -> Vec<MergedRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            row.patient_name.to_lowercase().contains(&needle)
                || row.display_code.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Keep rows with the given status.
pub fn filter_by_status(rows: Vec<MergedRow>, status: StatusFilter) -> Vec<MergedRow> {
    if status == StatusFilter::All {
        return rows;
    }
    rows.into_iter().filter(|row| status.matches(row.status)).collect()
}

/// Keep rows on the requested side of `today` (calendar-day granularity).
pub fn filter_by_date(rows: Vec<MergedRow>, mode: DateMode, today: NaiveDate) -> Vec<MergedRow> {
    if mode == DateMode::All {
        return rows;
    }
    rows.into_iter().filter(|row| mode.matches(row.date, today)).collect()
}

/// Split rows into (past, today-or-future), preserving order within each half.
pub fn partition_by_date(rows: Vec<MergedRow>, today: NaiveDate) -> (Vec<MergedRow>, Vec<MergedRow>) {
    rows.into_iter().partition(|row| row.date < today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_schedules;
    use crate::models::{PatientRecord, ScheduleRecord};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_rows() -> Vec<MergedRow> {
        let schedules = vec![
            ScheduleRecord::new(1, date("2024-01-01"), "09:00", 1, ScheduleStatus::Completed),
            ScheduleRecord::new(2, date("2024-01-10"), "10:00", 2, ScheduleStatus::Confirmed),
            ScheduleRecord::new(3, date("2024-01-10"), "08:00", 3, ScheduleStatus::Cancelled),
            ScheduleRecord::new(4, date("2024-01-20"), "09:30", 1, ScheduleStatus::Pending),
        ];
        let patients = vec![
            PatientRecord::new(1, "Nguyễn Văn An").with_code("BN001"),
            PatientRecord::new(2, "Trần Thị Bình").with_code("BN002"),
            PatientRecord::new(3, "Lê Hoàng").with_code("XY777"),
        ];
        merge_schedules(&schedules, &patients)
    }

    fn ids(rows: &[MergedRow]) -> Vec<&str> {
        rows.iter().map(|r| r.schedule_id.as_str()).collect()
    }

    #[test]
    fn test_empty_name_query_is_noop() {
        let rows = make_rows();
        assert_eq!(filter_by_name(rows.clone(), ""), rows);
        assert_eq!(filter_by_name(rows.clone(), "   "), rows);
    }

    #[test]
    fn test_name_query_matches_name_or_code() {
        let by_name = filter_by_name(make_rows(), "nguyễn");
        assert_eq!(ids(&by_name), vec!["1", "4"]);

        let by_code = filter_by_name(make_rows(), "xy7");
        assert_eq!(ids(&by_code), vec!["3"]);
    }

    #[test]
    fn test_status_filter() {
        let rows = make_rows();
        assert_eq!(filter_by_status(rows.clone(), StatusFilter::All), rows);

        let cancelled = filter_by_status(rows, StatusFilter::Only(ScheduleStatus::Cancelled));
        assert_eq!(ids(&cancelled), vec!["3"]);
    }

    #[test]
    fn test_date_partition_boundary() {
        let today = date("2024-01-10");
        let (past, upcoming) = partition_by_date(make_rows(), today);

        assert_eq!(ids(&past), vec!["1"]);
        assert_eq!(ids(&upcoming), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_row_filter_combines_criteria() {
        let filter = RowFilter {
            name_query: Some("bn00".into()),
            status: StatusFilter::All,
            date_mode: DateMode::TodayOrFuture,
        };

        let rows = filter.apply(make_rows(), date("2024-01-05"));
        assert_eq!(ids(&rows), vec!["2", "4"]);
    }

    #[test]
    fn test_parse_criteria() {
        assert_eq!(StatusFilter::parse("all"), Ok(StatusFilter::All));
        assert_eq!(
            StatusFilter::parse("pending"),
            Ok(StatusFilter::Only(ScheduleStatus::Pending))
        );
        assert_eq!(DateMode::parse("today-or-future"), Ok(DateMode::TodayOrFuture));
        assert!(DateMode::parse("tomorrow").is_err());
    }
}
