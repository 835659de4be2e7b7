//! Statistics dashboard.

use clinic_dash_core::models::{StatisticsQuery, TrendPoint};
use clinic_dash_core::stats::{AppointmentStatistics, PeriodSelection, StatisticsSnapshot};
use serde::Serialize;

use super::LoadResult;
use crate::api::{ApiClient, ScheduleQuery, StatisticsKind};

/// Cards and chart series for the statistics dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub snapshot: StatisticsSnapshot,
    /// Appointment trend for the selected period
    pub trend: Vec<TrendPoint>,
}

/// Load schedules, feedback and the appointment report together.
///
/// All three fetches must succeed before anything is aggregated.
pub async fn load_dashboard(
    client: &ApiClient,
    schedules: &ScheduleQuery,
    selection: &PeriodSelection,
) -> LoadResult<DashboardData> {
    let query = StatisticsQuery {
        start_date: selection.range.map(|r| r.start()),
        end_date: selection.range.map(|r| r.end()),
        period: Some(selection.effective_period()),
        doctor_id: schedules.doctor_id.clone(),
    };

    let (schedule_list, feedback, report) = tokio::try_join!(
        client.list_schedules(schedules),
        client.list_feedback(),
        client.statistics_report(StatisticsKind::Appointment, &query),
    )?;

    let snapshot = StatisticsSnapshot::compute(&schedule_list, &feedback)?;
    let trend = report.trends.select(selection);

    tracing::info!(
        appointments = snapshot.appointments.total,
        feedback = snapshot.feedback.total,
        period = %selection.effective_period(),
        points = trend.len(),
        "Loaded dashboard"
    );
    Ok(DashboardData { snapshot, trend })
}

/// Appointment counts and rates only.
pub async fn load_appointment_statistics(
    client: &ApiClient,
    query: &ScheduleQuery,
) -> LoadResult<AppointmentStatistics> {
    let schedules = client.list_schedules(query).await?;
    Ok(AppointmentStatistics::from_schedules(&schedules))
}
