//! Router-level tests
//!
//! Most of these run without a database: validation and id parsing reject
//! the request before the pool is used. The ignored ones need DATABASE_URL.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Days, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

use school_server::{build_router, AppState};

fn offline_app() -> Router {
    build_router(AppState::new(common::unreachable_pool()), false)
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn kayla() -> Value {
    json!({
        "firstName": "Kayla",
        "lastName": "Wilson-Jones",
        "hireDate": "2025-04-02",
        "employeeNumber": "T550",
        "salary": 90.00
    })
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(offline_app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn add_teacher_without_name_is_conflict() {
    let mut draft = kayla();
    draft["firstName"] = json!("");

    let (status, body) = send(offline_app(), "POST", "/api/Teacher/AddTeacher", Some(draft)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
    assert_eq!(body["message"], "first name cannot be empty");
}

#[tokio::test]
async fn add_teacher_with_blank_last_name_is_conflict() {
    let mut draft = kayla();
    draft["lastName"] = json!("   ");

    let (status, _) = send(offline_app(), "POST", "/api/Teacher/AddTeacher", Some(draft)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_with_future_hire_date_is_bad_request() {
    let tomorrow = Local::now().date_naive() + Days::new(1);
    let mut draft = kayla();
    draft["hireDate"] = json!(tomorrow.format("%Y-%m-%d").to_string());

    let (status, body) =
        send(offline_app(), "PUT", "/api/Teacher/UpdateTeacher/12", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "hire date cannot be in the future");
}

#[tokio::test]
async fn update_with_negative_salary_is_bad_request() {
    let mut draft = kayla();
    draft["salary"] = json!("-0.01");

    let (status, body) =
        send(offline_app(), "PUT", "/api/Teacher/UpdateTeacher/12", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "salary must be a non-negative value");
}

#[tokio::test]
async fn update_checks_names_first() {
    let draft = json!({
        "firstName": "Kayla",
        "lastName": "",
        "hireDate": "2999-01-01",
        "salary": -5
    });

    let (status, body) =
        send(offline_app(), "PUT", "/api/Teacher/UpdateTeacher/12", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "last name cannot be empty");
}

#[tokio::test]
async fn malformed_teacher_body_uses_error_envelope() {
    let mut draft = kayla();
    draft["hireDate"] = Value::Null;

    let (status, body) = send(offline_app(), "POST", "/api/Teacher/AddTeacher", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

    let mut draft = kayla();
    draft["hireDate"] = json!("yesterday");
    let (status, body) =
        send(offline_app(), "PUT", "/api/Teacher/UpdateTeacher/12", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn malformed_student_body_uses_error_envelope() {
    let draft = json!({
        "firstName": "Lisa",
        "lastName": "William",
        "studentNumber": "N1888",
        "enrolDate": "April 2nd"
    });

    let (status, body) =
        send(offline_app(), "POST", "/api/Students/AddStudent", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("invalid date"));
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    for uri in [
        "/api/Teacher/FindTeacher/abc",
        "/api/Students/FindStudent/1.5",
        "/api/Courses/FindCourse/one",
    ] {
        let (status, body) = send(offline_app(), "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], "validation_error");
    }

    let (status, _) = send(offline_app(), "DELETE", "/api/Teacher/DeleteTeacher/x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn courses_have_no_write_routes() {
    let (status, _) = send(offline_app(), "POST", "/api/Courses/AddCourse", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(offline_app(), "DELETE", "/api/Courses/FindCourse/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn find_missing_teacher_returns_zero_value() {
    let app = build_router(AppState::new(common::isolated_pool().await), false);

    let (status, body) = send(app, "GET", "/api/Teacher/FindTeacher/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teacherId"], 0);
    assert_eq!(body["firstName"], "");
    assert!(body["salary"].is_number());
    assert_eq!(body["salary"].to_string(), "0");
}

#[tokio::test]
#[ignore = "requires database"]
async fn teacher_lifecycle_over_http() {
    let app = build_router(AppState::new(common::isolated_pool().await), false);

    let mut draft = kayla();
    draft["lastName"] = json!("Wilson");
    draft["salary"] = json!(85.55);
    let (status, id) = send(app.clone(), "POST", "/api/Teacher/AddTeacher", Some(draft)).await;
    assert_eq!(status, StatusCode::OK);
    let id = id.as_i64().expect("id is an integer");
    assert!(id > 0);

    let (status, body) =
        send(app.clone(), "PUT", &format!("/api/Teacher/UpdateTeacher/{}", id), Some(kayla())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["teacherId"], id);
    assert_eq!(body["lastName"], "Wilson-Jones");
    assert!(body["salary"].is_number());
    assert_eq!(body["salary"].to_string(), "90.00");

    let uri = format!("/api/Teacher/DeleteTeacher/{}", id);
    let (status, body) = send(app.clone(), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Teacher with ID {} deleted successfully.", id)
    );

    let (status, body) = send(app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_missing_teacher_is_not_found() {
    let app = build_router(AppState::new(common::isolated_pool().await), false);

    let (status, _) = send(app, "PUT", "/api/Teacher/UpdateTeacher/4040", Some(kayla())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
