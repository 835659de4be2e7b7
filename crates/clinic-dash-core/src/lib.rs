//! Clinic Dash Core Library
//!
//! Client-side data layer for the clinic dashboards (admin, manager, doctor and
//! lab-technician views).
//!
//! # Architecture
//!
//! ```text
//!   fetched schedules ──┐
//!   fetched patients  ──┼──► Merge/Join ──► Filter/Sort ──► Paginate ──► tables
//!   fetched doctors   ──┤
//!   payment lookups   ──┘
//!
//!   fetched schedules ──┐
//!   fetched feedback  ──┼──► Aggregation ──► StatisticsSnapshot ──► cards/charts
//!   trend buckets     ──┘
//! ```
//!
//! Everything here is pure: fetching lives in `clinic-dash-client`, and each
//! function runs only once all the collections it needs have been fetched.
//!
//! # Modules
//!
//! - [`models`]: Backend records and derived rows
//! - [`merge`]: Schedule join with placeholder values on misses
//! - [`filter`]: Name/status/date filters and stable chronological sort
//! - [`stats`]: Rating histograms, averages, rates and period selection
//! - [`paginate`]: Page slicing

pub mod filter;
pub mod merge;
pub mod models;
pub mod paginate;
pub mod stats;

// Re-export commonly used types
pub use filter::{DateMode, RowFilter, ScheduleView, SortOrder, StatusFilter};
pub use merge::{attach_payments, merge_schedules, ScheduleJoin};
pub use models::{
    DoctorRecord, FeedbackRecord, MergedRow, PatientRecord, PaymentRecord, PaymentStatus,
    RecordId, ScheduleRecord, ScheduleStatus,
};
pub use paginate::{paginate, total_pages, Page};
pub use stats::{
    AppointmentStatistics, FeedbackStatistics, StatisticsSnapshot, StatsError, StatsResult,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::NaiveDate;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicDashError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),
}

impl From<StatsError> for ClinicDashError {
    fn from(e: StatsError) -> Self {
        match e {
            StatsError::InvalidRating { .. } => ClinicDashError::InvalidRating(e.to_string()),
            StatsError::InvalidDateRange { .. } => ClinicDashError::InvalidInput(e.to_string()),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ClinicDashError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| ClinicDashError::InvalidInput(format!("date '{}': {}", raw, e)))
}

// =========================================================================
// Exported Functions
// =========================================================================

/// Merge, filter, sort and paginate schedules for a table view.
#[uniffi::export]
pub fn build_schedule_page(
    schedules: Vec<FfiScheduleRecord>,
    patients: Vec<FfiPatientRecord>,
    filter: FfiRowFilter,
    today: String,
    page: u32,
    page_size: u32,
) -> Result<FfiRowPage, ClinicDashError> {
    let today = parse_date(&today)?;
    let schedules = schedules
        .into_iter()
        .map(ScheduleRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let patients: Vec<PatientRecord> = patients.into_iter().map(Into::into).collect();
    let row_filter = RowFilter::try_from(&filter)?;

    let rows = merge_schedules(&schedules, &patients);
    let mut rows = row_filter.apply(rows, today);
    filter::sort_rows(&mut rows, SortOrder::Descending);

    let page = Page::from_slice(&rows, page as usize, page_size as usize);
    Ok(page.into())
}

/// Aggregate raw ratings into a histogram and average.
#[uniffi::export]
pub fn rating_statistics(ratings: Vec<i32>) -> Result<FfiFeedbackStatistics, ClinicDashError> {
    let feedback: Vec<FeedbackRecord> = ratings
        .into_iter()
        .enumerate()
        .map(|(i, rating)| FeedbackRecord::new(i as u64, "", rating, NaiveDate::MIN))
        .collect();
    let stats = FeedbackStatistics::from_feedback(&feedback)?;
    Ok(stats.into())
}

/// Whole-percent rate, 0 when `total` is 0.
#[uniffi::export]
pub fn rate_percent(count: u32, total: u32) -> u32 {
    stats::percentage(count as usize, total as usize)
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe schedule record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScheduleRecord {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub slot: String,
    pub patient_id: String,
    pub doctor_id: Option<String>,
    pub status: String,
}

impl TryFrom<FfiScheduleRecord> for ScheduleRecord {
    type Error = ClinicDashError;

    fn try_from(record: FfiScheduleRecord) -> Result<Self, Self::Error> {
        let status = record
            .status
            .parse::<ScheduleStatus>()
            .map_err(ClinicDashError::InvalidInput)?;
        let mut schedule = ScheduleRecord::new(
            record.id,
            parse_date(&record.date)?,
            record.slot,
            record.patient_id,
            status,
        );
        if let Some(doctor_id) = record.doctor_id {
            schedule = schedule.with_doctor(doctor_id);
        }
        Ok(schedule)
    }
}

/// FFI-safe patient record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientRecord {
    pub id: String,
    pub full_name: String,
    pub display_code: Option<String>,
    pub avatar: Option<String>,
}

impl From<FfiPatientRecord> for PatientRecord {
    fn from(record: FfiPatientRecord) -> Self {
        PatientRecord {
            id: RecordId::new(record.id),
            full_name: record.full_name,
            display_code: record.display_code,
            avatar: record.avatar,
        }
    }
}

/// FFI-safe filter criteria.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRowFilter {
    pub name_query: Option<String>,
    /// `ALL` or a schedule status
    pub status: String,
    /// `past`, `today-or-future` or `all`
    pub date_mode: String,
}

impl TryFrom<&FfiRowFilter> for RowFilter {
    type Error = ClinicDashError;

    fn try_from(filter: &FfiRowFilter) -> Result<Self, Self::Error> {
        Ok(RowFilter {
            name_query: filter.name_query.clone(),
            status: StatusFilter::parse(&filter.status).map_err(ClinicDashError::InvalidInput)?,
            date_mode: DateMode::parse(&filter.date_mode).map_err(ClinicDashError::InvalidInput)?,
        })
    }
}

/// FFI-safe merged row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMergedRow {
    pub schedule_id: String,
    pub date: String,
    pub slot: String,
    pub status: String,
    pub patient_name: String,
    pub display_code: String,
    pub avatar: Option<String>,
    pub doctor_name: String,
    pub payment_label: String,
}

impl From<MergedRow> for FfiMergedRow {
    fn from(row: MergedRow) -> Self {
        Self {
            payment_label: row.payment_label().to_string(),
            schedule_id: row.schedule_id.to_string(),
            date: row.date.format("%Y-%m-%d").to_string(),
            slot: row.slot,
            status: row.status.to_string(),
            patient_name: row.patient_name,
            display_code: row.display_code,
            avatar: row.avatar,
            doctor_name: row.doctor_name,
        }
    }
}

/// FFI-safe page of rows.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRowPage {
    pub rows: Vec<FfiMergedRow>,
    pub page: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

impl From<Page<MergedRow>> for FfiRowPage {
    fn from(page: Page<MergedRow>) -> Self {
        Self {
            rows: page.items.into_iter().map(Into::into).collect(),
            page: page.page as u32,
            total_items: page.total_items as u32,
            total_pages: page.total_pages as u32,
        }
    }
}

/// FFI-safe rating statistics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFeedbackStatistics {
    pub total: u32,
    pub average_rating: f64,
    /// Counts for 1..=5 stars
    pub distribution: Vec<u32>,
}

impl From<FeedbackStatistics> for FfiFeedbackStatistics {
    fn from(stats: FeedbackStatistics) -> Self {
        Self {
            total: stats.total as u32,
            average_rating: stats.average_rating,
            distribution: stats.distribution.as_array().to_vec(),
        }
    }
}
