//! Schedule tables (history, upcoming, doctor day lists).

use std::collections::HashMap;

use chrono::NaiveDate;
use clinic_dash_core::filter::{sort_rows, ScheduleView, SortOrder};
use clinic_dash_core::models::{DoctorRecord, MergedRow, PaymentStatus, RecordId};
use clinic_dash_core::paginate::Page;
use clinic_dash_core::{attach_payments, RowFilter, ScheduleJoin};
use futures_util::future::join_all;

use super::LoadResult;
use crate::api::{ApiClient, ScheduleQuery};

/// Everything needed to build one page of a schedule table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub query: ScheduleQuery,
    pub filter: RowFilter,
    pub sort: SortOrder,
    /// Reference date for past/upcoming partitioning
    pub today: NaiveDate,
    pub page: usize,
    pub page_size: usize,
    pub include_doctors: bool,
    pub include_payments: bool,
}

impl ScheduleRequest {
    /// Request for a history or upcoming table.
    pub fn for_view(view: ScheduleView, today: NaiveDate, page_size: usize) -> Self {
        Self {
            query: ScheduleQuery::default(),
            filter: RowFilter {
                date_mode: view.date_mode(),
                ..Default::default()
            },
            sort: view.sort_order(),
            today,
            page: 1,
            page_size,
            include_doctors: false,
            include_payments: false,
        }
    }
}

/// Fetch, join and slice one page of schedule rows.
///
/// Schedules and patients (and doctors, if asked) are fetched concurrently
/// and must all succeed. Payment lookups run after the rows are filtered, one
/// per visible schedule; a failed lookup only blanks that row's payment.
pub async fn load_schedule_page(
    client: &ApiClient,
    request: &ScheduleRequest,
) -> LoadResult<Page<MergedRow>> {
    let doctors = async {
        if request.include_doctors {
            client.list_doctors().await
        } else {
            Ok(Vec::<DoctorRecord>::new())
        }
    };
    let (schedules, patients, doctors) = tokio::try_join!(
        client.list_schedules(&request.query),
        client.list_patients(),
        doctors,
    )?;

    let mut rows = ScheduleJoin::new(&patients)
        .with_doctors(&doctors)
        .merge(&schedules);
    let fetched = rows.len();

    rows = request.filter.apply(rows, request.today);
    sort_rows(&mut rows, request.sort);

    let mut page = Page::from_slice(&rows, request.page, request.page_size);
    if request.include_payments {
        let ids: Vec<RecordId> = page.items.iter().map(|r| r.schedule_id.clone()).collect();
        let payments = lookup_payments(client, &ids).await;
        attach_payments(&mut page.items, &payments);
    }

    tracing::info!(
        fetched,
        matched = page.total_items,
        page = page.page,
        total_pages = page.total_pages,
        "Loaded schedule page"
    );
    Ok(page)
}

/// Look up payments concurrently; failures become `None`.
pub async fn lookup_payments(
    client: &ApiClient,
    schedule_ids: &[RecordId],
) -> HashMap<RecordId, Option<PaymentStatus>> {
    let lookups = schedule_ids.iter().map(|id| async move {
        let status = match client.payment_for_schedule(id).await {
            Ok(payment) => Some(payment.status),
            Err(e) => {
                tracing::warn!(schedule_id = %id, error = %e, "Payment lookup failed");
                None
            }
        };
        (id.clone(), status)
    });
    join_all(lookups).await.into_iter().collect()
}

