//! Property tests for the merge, filter and pagination layers.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use clinic_dash_core::filter::{filter_by_name, filter_by_status, partition_by_date, StatusFilter};
use clinic_dash_core::models::{
    MergedRow, PatientRecord, ScheduleRecord, ScheduleStatus, NOT_AVAILABLE, UNKNOWN_PATIENT_NAME,
};
use clinic_dash_core::paginate::{paginate, total_pages};
use clinic_dash_core::stats::average;
use clinic_dash_core::merge_schedules;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn status_strategy() -> impl Strategy<Value = ScheduleStatus> {
    prop_oneof![
        Just(ScheduleStatus::Pending),
        Just(ScheduleStatus::Confirmed),
        Just(ScheduleStatus::Cancelled),
        Just(ScheduleStatus::Completed),
    ]
}

fn schedule_strategy() -> impl Strategy<Value = ScheduleRecord> {
    (0u32..1000, 0i64..60, 7u32..18, 0u32..20, status_strategy()).prop_map(
        |(id, day_offset, hour, patient, status)| {
            ScheduleRecord::new(
                id,
                base_date() + Duration::days(day_offset),
                format!("{:02}:00", hour),
                patient,
                status,
            )
        },
    )
}

fn patient_strategy() -> impl Strategy<Value = PatientRecord> {
    (0u32..20, "[A-Za-z ]{1,12}").prop_map(|(id, name)| PatientRecord::new(id, name))
}

fn rows_strategy() -> impl Strategy<Value = Vec<MergedRow>> {
    (
        prop::collection::vec(schedule_strategy(), 0..40),
        prop::collection::vec(patient_strategy(), 0..20),
    )
        .prop_map(|(schedules, patients)| merge_schedules(&schedules, &patients))
}

proptest! {
    #[test]
    fn merge_emits_one_row_per_schedule(
        schedules in prop::collection::vec(schedule_strategy(), 0..40),
        patients in prop::collection::vec(patient_strategy(), 0..20),
    ) {
        let rows = merge_schedules(&schedules, &patients);
        prop_assert_eq!(rows.len(), schedules.len());
        for (row, schedule) in rows.iter().zip(&schedules) {
            prop_assert_eq!(&row.schedule_id, &schedule.id);
        }
    }

    #[test]
    fn unmatched_patients_get_placeholders(
        schedules in prop::collection::vec(schedule_strategy(), 0..40),
        patients in prop::collection::vec(patient_strategy(), 0..20),
    ) {
        let rows = merge_schedules(&schedules, &patients);
        for row in rows {
            if !patients.iter().any(|p| p.id == row.patient_id) {
                prop_assert_eq!(row.patient_name.as_str(), UNKNOWN_PATIENT_NAME);
                prop_assert_eq!(row.display_code.as_str(), NOT_AVAILABLE);
                prop_assert!(row.avatar.is_none());
            }
        }
    }

    #[test]
    fn empty_name_query_is_identity(rows in rows_strategy()) {
        prop_assert_eq!(filter_by_name(rows.clone(), ""), rows);
    }

    #[test]
    fn status_filter_keeps_only_matching(rows in rows_strategy(), status in status_strategy()) {
        prop_assert_eq!(filter_by_status(rows.clone(), StatusFilter::All), rows.clone());

        let expected = rows.iter().filter(|r| r.status == status).count();
        let kept = filter_by_status(rows, StatusFilter::Only(status));
        prop_assert_eq!(kept.len(), expected);
        prop_assert!(kept.iter().all(|r| r.status == status));
    }

    #[test]
    fn date_partition_is_exhaustive_and_disjoint(rows in rows_strategy(), offset in 0i64..60) {
        let today = base_date() + Duration::days(offset);
        let (past, upcoming) = partition_by_date(rows.clone(), today);

        prop_assert_eq!(past.len() + upcoming.len(), rows.len());
        prop_assert!(past.iter().all(|r| r.date < today));
        prop_assert!(upcoming.iter().all(|r| r.date >= today));
    }

    #[test]
    fn pages_reconstruct_list(items in prop::collection::vec(any::<u16>(), 0..100), size in 1usize..15) {
        let pages = total_pages(items.len(), size);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&items, page, size);
            prop_assert!(slice.len() <= size);
            rebuilt.extend_from_slice(slice);
        }
        prop_assert_eq!(rebuilt, items.clone());
        prop_assert!(paginate(&items, pages + 1, size).is_empty());
    }

    #[test]
    fn average_stays_within_bounds(ratings in prop::collection::vec(1i32..=5, 1..50)) {
        let avg = average(&ratings);
        prop_assert!((1.0..=5.0).contains(&avg));
    }
}
