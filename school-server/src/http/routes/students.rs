//! Student endpoints under /api/Students

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use super::{or_zero_value, DeletedResponse};
use crate::db::repos::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{Student, StudentDraft};

/// GET /api/Students/ListStudents
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students))
}

/// GET /api/Students/FindStudent/{id}
async fn find_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Student>, ApiError> {
    let student = StudentRepo::new(&state.pool).find(id).await?;
    Ok(Json(or_zero_value(student, "student", id)))
}

/// POST /api/Students/AddStudent - returns the new student id
async fn add_student(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<StudentDraft>,
) -> Result<Json<i32>, ApiError> {
    let id = StudentRepo::new(&state.pool)
        .add(&draft)
        .await
        .map_err(ApiError::rejected_insert)?;

    Ok(Json(id))
}

/// DELETE /api/Students/DeleteStudent/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, ApiError> {
    StudentRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse::new("Student", id)))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/Students/ListStudents", get(list_students))
        .route("/api/Students/FindStudent/{id}", get(find_student))
        .route("/api/Students/AddStudent", post(add_student))
        .route("/api/Students/DeleteStudent/{id}", delete(delete_student))
}
