use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use company_employee_api::domain::ports::FixedClock;
use company_employee_api::{app, AppState, Directory, SeverancePolicy};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_at(now: DateTime<Utc>, policy: SeverancePolicy) -> Router {
    let directory = Directory::new(Arc::new(FixedClock(now)), policy);
    app(AppState::new(directory))
}

fn new_year_2023() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        (status, Value::Null)
    } else {
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

#[tokio::test]
async fn test_acme_bob_scenario() {
    let app = app_at(new_year_2023(), SeverancePolicy::default());

    let (status, company) = call(&app, "POST", "/companies", Some(json!({"name": "Acme"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(company["id"], 1);

    let (status, bob) = call(
        &app,
        "POST",
        "/employees",
        Some(json!({"name": "Bob", "companyId": 1, "hireDate": "2020-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(bob["id"], 1);
    assert_eq!(bob["hireDate"], "2020-01-01T00:00:00Z");

    let (status, terminated) = call(&app, "POST", "/employees/1/terminate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        terminated,
        json!({
            "id": 1,
            "name": "Bob",
            "hireDate": "2020-01-01T00:00:00Z",
            "terminationDate": "2023-01-01T00:00:00Z",
            "severancePay": 3000
        })
    );

    let (status, _) = call(&app, "GET", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, record) = call(&app, "GET", "/terminated-employees/Bob", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record, terminated);

    let (_, all) = call(&app, "GET", "/terminated-employees", None).await;
    assert_eq!(all, json!([terminated]));

    // Bob no longer blocks the company delete
    let (status, _) = call(&app, "DELETE", "/companies/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_short_tenure_pays_nothing() {
    // 364 days before the fixed clock
    let app = app_at(new_year_2023(), SeverancePolicy::default());
    call(
        &app,
        "POST",
        "/employees",
        Some(json!({"name": "Newbie", "companyId": 1, "hireDate": "2022-01-02T00:00:00Z"})),
    )
    .await;

    let (_, record) = call(&app, "POST", "/employees/1/terminate", None).await;
    assert_eq!(record["severancePay"], 0);
}

#[tokio::test]
async fn test_configured_policy_is_used() {
    let policy = SeverancePolicy {
        days_per_year: 365,
        amount_per_year: 2500,
    };
    let app = app_at(new_year_2023(), policy);
    call(
        &app,
        "POST",
        "/employees",
        Some(json!({"name": "Vet", "companyId": 1, "hireDate": "2021-01-01"})),
    )
    .await;

    let (_, record) = call(&app, "POST", "/employees/1/terminate", None).await;
    assert_eq!(record["severancePay"], 5000);
}

#[tokio::test]
async fn test_terminate_missing_employee_is_404() {
    let app = app_at(new_year_2023(), SeverancePolicy::default());

    let (status, body) = call(&app, "POST", "/employees/3/terminate", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");

    let (_, all) = call(&app, "GET", "/terminated-employees", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_terminated_lookup_by_unknown_name_is_404() {
    let app = app_at(new_year_2023(), SeverancePolicy::default());

    let (status, _) = call(&app, "GET", "/terminated-employees/Nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_terminated_lookup_decodes_path() {
    let app = app_at(new_year_2023(), SeverancePolicy::default());
    call(
        &app,
        "POST",
        "/employees",
        Some(json!({"name": "Ann Lee", "companyId": 1, "hireDate": "2020-01-01"})),
    )
    .await;
    call(&app, "POST", "/employees/1/terminate", None).await;

    let (status, record) = call(&app, "GET", "/terminated-employees/Ann%20Lee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["name"], "Ann Lee");
}

#[tokio::test]
async fn test_employee_crud() {
    let app = app_at(new_year_2023(), SeverancePolicy::default());

    let (status, created) = call(
        &app,
        "POST",
        "/employees",
        Some(json!({"name": "Eve", "companyId": 2, "hireDate": "2019-05-01T09:00:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["hireDate"], "2019-05-01T09:00:00Z");

    let (status, fetched) = call(&app, "GET", "/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = call(
        &app,
        "PUT",
        "/employees/1",
        Some(json!({"name": "Eve Adams", "companyId": 3, "hireDate": "2018-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({
            "id": 1,
            "name": "Eve Adams",
            "companyId": 3,
            "hireDate": "2018-01-01T00:00:00Z"
        })
    );

    let (status, _) = call(
        &app,
        "PUT",
        "/employees/9",
        Some(json!({"name": "Ghost", "companyId": 1, "hireDate": "2018-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = call(&app, "GET", "/employees", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_bad_hire_date_is_bad_request() {
    let app = app_at(new_year_2023(), SeverancePolicy::default());

    let (status, body) = call(
        &app,
        "POST",
        "/employees",
        Some(json!({"name": "Bob", "companyId": 1, "hireDate": "last spring"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "bad_request");
}
