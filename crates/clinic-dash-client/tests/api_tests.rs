//! HTTP adapter tests against an in-process backend.

mod common;

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use clinic_dash_client::api::{ApiError, ScheduleQuery, StatisticsKind};
use clinic_dash_client::store::TokenStore;
use clinic_dash_core::models::{
    AccountStatus, DoctorProfileInput, DoctorStatus, Period, RecordId, Role, ScheduleStatus,
    StatisticsQuery, TestResultInput,
};

use common::{make_client, spawn_backend};

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

#[tokio::test]
async fn test_enveloped_and_bare_bodies() {
    let router = Router::new()
        .route(
            "/api/user/patient",
            get(|| async {
                Json(json!({"data": [
                    {"id": 1, "fullName": "Nguyen Van A", "displayCode": "BN001"},
                    {"id": "2", "fullName": "Tran Thi B"}
                ]}))
            }),
        )
        .route(
            "/api/feedback",
            get(|| async {
                Json(json!([
                    {"id": 10, "patientName": "Le C", "rating": 5, "date": "2024-05-01"}
                ]))
            }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let patients = client.list_patients().await.unwrap();
    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].display_code.as_deref(), Some("BN001"));
    assert_eq!(patients[1].id, RecordId::from(2));

    let feedback = client.list_feedback().await.unwrap();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].rating, 5);
}

#[tokio::test]
async fn test_login_attaches_bearer_token() {
    let router = Router::new()
        .route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    Json(json!({"data": {
                        "token": "tok-9",
                        "user": {"id": 3, "fullName": "BS. Le Van C", "role": "DOCTOR"}
                    }}))
                    .into_response()
                } else {
                    (StatusCode::BAD_REQUEST, Json(json!({"message": "Sai mật khẩu"})))
                        .into_response()
                }
            }),
        )
        .route(
            "/api/user/DOCTOR",
            get(|headers: HeaderMap| async move {
                match bearer(&headers).as_deref() {
                    Some("tok-9") => Json(json!([{"id": 3, "fullName": "BS. Le Van C"}]))
                        .into_response(),
                    _ => StatusCode::UNAUTHORIZED.into_response(),
                }
            }),
        );
    let base = spawn_backend(router).await;
    let (client, store) = make_client(&base);

    assert!(matches!(client.list_doctors().await, Err(ApiError::Unauthorized)));

    let err = client.login("c@clinic.vn", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "Sai mật khẩu");
    assert!(!client.session().is_authenticated().await);

    let user = client.login("c@clinic.vn", "secret").await.unwrap().unwrap();
    assert_eq!(user.role, Role::Doctor);
    assert_eq!(store.load().unwrap().unwrap().token, "tok-9");

    let doctors = client.list_doctors().await.unwrap();
    assert_eq!(doctors[0].full_name, "BS. Le Van C");

    client.logout().await.unwrap();
    assert!(store.load().unwrap().is_none());
    assert!(matches!(client.list_doctors().await, Err(ApiError::Unauthorized)));
}

#[tokio::test]
async fn test_error_bodies_surface() {
    let router = Router::new()
        .route(
            "/api/doctor-profile",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"message": "Hồ sơ đã tồn tại", "code": "DUPLICATE"})),
                )
            }),
        )
        .route(
            "/api/user/LAB_TECHNICIAN",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let input = DoctorProfileInput {
        doctor_id: RecordId::from(3),
        specialty: Some("Nha khoa".into()),
        qualifications: None,
        experience_years: 5,
        biography: None,
        status: DoctorStatus::Active,
    };
    match client.create_doctor_profile(&input).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 409);
            assert_eq!(body["code"], "DUPLICATE");
        }
        other => panic!("expected status error, got {:?}", other),
    }

    match client.list_lab_technicians().await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, Value::String("upstream unavailable".into()));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (client, _) = make_client(&format!("http://{}", addr));
    assert!(matches!(client.list_patients().await, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn test_schedule_query_and_filtered_accounts() {
    let router = Router::new()
        .route(
            "/api/schedule",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let scoped = params.get("role").map(String::as_str) == Some("DOCTOR")
                    && params.get("doctorId").map(String::as_str) == Some("7")
                    && params.get("date").map(String::as_str) == Some("2024-06-01");
                if scoped {
                    Json(json!([{
                        "id": 100,
                        "date": "2024-06-01",
                        "slot": "08:30",
                        "patient": {"id": 1, "fullName": "Nguyen Van A"},
                        "doctor": {"id": 7},
                        "status": "PENDING"
                    }]))
                } else {
                    Json(json!([]))
                }
            }),
        )
        .route(
            "/api/user/:role/account-status/:status",
            get(|Path((role, status)): Path<(String, String)>| async move {
                Json(json!([{
                    "id": 1,
                    "fullName": format!("{} {}", role, status),
                    "role": "PATIENT",
                    "accountStatus": status
                }]))
            }),
        )
        .route(
            "/api/user/:role/mail-verification-status/:flag",
            get(|Path((_, flag)): Path<(String, bool)>| async move {
                Json(json!([{"id": 2, "fullName": "X", "role": "DOCTOR", "mailVerified": flag}]))
            }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let schedules = client
        .list_schedules(&ScheduleQuery::for_doctor(7).on(date))
        .await
        .unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].status, ScheduleStatus::Pending);
    assert_eq!(schedules[0].doctor_ref.as_ref().unwrap().id.as_str(), "7");

    assert!(client
        .list_schedules(&ScheduleQuery::default())
        .await
        .unwrap()
        .is_empty());

    let banned = client
        .accounts_by_status(Role::Patient, AccountStatus::Banned)
        .await
        .unwrap();
    assert_eq!(banned[0].full_name, "patient BANNED");
    assert_eq!(banned[0].account_status, AccountStatus::Banned);

    let verified = client
        .accounts_by_mail_verification(Role::Doctor, true)
        .await
        .unwrap();
    assert!(verified[0].mail_verified);
}

#[tokio::test]
async fn test_statistics_and_empty_delete() {
    let router = Router::new()
        .route(
            "/api/statistics/:kind",
            get(|Path(kind): Path<String>, Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({"data": {
                    "kind": kind,
                    "period": params.get("period"),
                    "trends": {"90days": [{"date": "2024-04-01", "value": 12.0}]}
                }}))
            }),
        )
        .route(
            "/api/test-result/:id",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let query = StatisticsQuery {
        period: Some(Period::Last90Days),
        ..Default::default()
    };
    let report = client
        .statistics_report(StatisticsKind::Financial, &query)
        .await
        .unwrap();
    assert_eq!(report.summary["kind"], "financial");
    assert_eq!(report.summary["period"], "90days");
    assert_eq!(report.trends.get(Period::Last90Days).map(|p| p.len()), Some(1));

    client.delete_test_result(&RecordId::from(5)).await.unwrap();
}

#[tokio::test]
async fn test_every_statistics_kind_has_its_own_path() {
    let router = Router::new().route(
        "/api/statistics/:kind",
        get(|Path(kind): Path<String>| async move {
            Json(json!({"kind": kind, "trends": {"30days": [], "7days": [{"date": "2024-06-01", "value": 1.0}]}}))
        }),
    );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    for kind in StatisticsKind::ALL {
        let report = client
            .statistics_report(kind, &StatisticsQuery::default())
            .await
            .unwrap();
        assert_eq!(report.summary["kind"], kind.to_string());
        assert_eq!(report.trends.get(Period::Last30Days).map(|p| p.len()), Some(0));
    }
}

#[tokio::test]
async fn test_password_reset_request_and_confirm() {
    let router = Router::new().route(
        "/api/auth/reset-password",
        post(|Json(body): Json<Value>| async move {
            if body == json!({"email": "a@clinic.vn"}) {
                Json(json!({"data": {"message": "sent"}})).into_response()
            } else {
                StatusCode::UNPROCESSABLE_ENTITY.into_response()
            }
        })
        .put(|Json(body): Json<Value>| async move {
            if body == json!({"token": "reset-1", "newPassword": "n3w"}) {
                StatusCode::NO_CONTENT.into_response()
            } else {
                StatusCode::UNPROCESSABLE_ENTITY.into_response()
            }
        }),
    );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    client.request_password_reset("a@clinic.vn").await.unwrap();
    client.confirm_password_reset("reset-1", "n3w").await.unwrap();

    let err = client.confirm_password_reset("reset-1", "").await.unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn test_doctor_profile_lookup_and_update() {
    let router = Router::new()
        .route(
            "/api/doctor-profile/doctor-id/:id",
            get(|Path(id): Path<String>| async move {
                Json(json!({"data": {
                    "id": 40,
                    "doctorId": id,
                    "specialty": "Nha khoa",
                    "experienceYears": 8,
                    "status": "ON_LEAVE"
                }}))
            }),
        )
        .route(
            "/api/doctor-profile/:id",
            put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                if body["doctorId"] != "3" || body["experienceYears"] != 9 {
                    return StatusCode::UNPROCESSABLE_ENTITY.into_response();
                }
                Json(json!({
                    "id": id,
                    "doctorId": body["doctorId"],
                    "specialty": body["specialty"],
                    "experienceYears": body["experienceYears"],
                    "status": body["status"]
                }))
                .into_response()
            }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let profile = client.doctor_profile(&RecordId::from(3)).await.unwrap();
    assert_eq!(profile.id, RecordId::from(40));
    assert_eq!(profile.doctor_id, RecordId::from(3));
    assert_eq!(profile.status, DoctorStatus::OnLeave);
    assert!(profile.biography.is_none());

    let input = DoctorProfileInput {
        doctor_id: RecordId::from(3),
        specialty: Some("Nha khoa".into()),
        qualifications: None,
        experience_years: 9,
        biography: None,
        status: DoctorStatus::Active,
    };
    let updated = client
        .update_doctor_profile(&RecordId::from(40), &input)
        .await
        .unwrap();
    assert_eq!(updated.id, RecordId::from(40));
    assert_eq!(updated.experience_years, 9);
    assert_eq!(updated.status, DoctorStatus::Active);
}

#[tokio::test]
async fn test_test_result_create_and_update() {
    let router = Router::new()
        .route(
            "/api/test-result",
            post(|Json(body): Json<Value>| async move {
                if body["scheduleId"] != "12" || body["testName"] != "Glucose" {
                    return StatusCode::UNPROCESSABLE_ENTITY.into_response();
                }
                let mut created = body.clone();
                created["id"] = json!(501);
                Json(json!({"data": created})).into_response()
            }),
        )
        .route(
            "/api/test-result/:id",
            put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                let mut updated = body.clone();
                updated["id"] = json!(id);
                Json(updated)
            }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let mut input = TestResultInput {
        schedule_id: RecordId::from(12),
        test_name: "Glucose".into(),
        result: "5.4".into(),
        unit: Some("mmol/L".into()),
        reference_range: Some("3.9-6.1".into()),
        notes: None,
    };
    let created = client.create_test_result(&input).await.unwrap();
    assert_eq!(created.id, RecordId::from(501));
    assert_eq!(created.schedule_id, RecordId::from(12));
    assert_eq!(created.reference_range.as_deref(), Some("3.9-6.1"));

    input.result = "6.8".into();
    input.notes = Some("Làm lại xét nghiệm".into());
    let updated = client
        .update_test_result(&created.id, &input)
        .await
        .unwrap();
    assert_eq!(updated.id, RecordId::from(501));
    assert_eq!(updated.result, "6.8");
    assert_eq!(updated.notes.as_deref(), Some("Làm lại xét nghiệm"));
}

#[tokio::test]
async fn test_list_accounts_uses_role_path() {
    let router = Router::new()
        .route(
            "/api/user/patient",
            get(|| async {
                Json(json!([{"id": 1, "fullName": "Nguyen Van A", "role": "PATIENT"}]))
            }),
        )
        .route(
            "/api/user/DOCTOR",
            get(|| async { Json(json!([{"id": 7, "fullName": "BS. Pham D", "role": "DOCTOR"}])) }),
        );
    let base = spawn_backend(router).await;
    let (client, _) = make_client(&base);

    let patients = client.list_accounts(Role::Patient).await.unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].role, Role::Patient);

    let doctors = client.list_accounts(Role::Doctor).await.unwrap();
    assert_eq!(doctors[0].full_name, "BS. Pham D");
}
