//! Teacher endpoints under /api/Teacher

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};

use super::{or_zero_value, DeletedResponse};
use crate::db::repos::TeacherRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{Teacher, TeacherDraft};

/// GET /api/Teacher/ListTeachers
async fn list_teachers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Teacher>>, ApiError> {
    let teachers = TeacherRepo::new(&state.pool).list().await?;
    Ok(Json(teachers))
}

/// GET /api/Teacher/FindTeacher/{id}
async fn find_teacher(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Teacher>, ApiError> {
    let teacher = TeacherRepo::new(&state.pool).find(id).await?;
    Ok(Json(or_zero_value(teacher, "teacher", id)))
}

/// POST /api/Teacher/AddTeacher - returns the new teacher id
async fn add_teacher(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<TeacherDraft>,
) -> Result<Json<i32>, ApiError> {
    let id = TeacherRepo::new(&state.pool)
        .add(&draft)
        .await
        .map_err(ApiError::rejected_insert)?;

    Ok(Json(id))
}

/// DELETE /api/Teacher/DeleteTeacher/{id}
async fn delete_teacher(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, ApiError> {
    TeacherRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse::new("Teacher", id)))
}

/// PUT /api/Teacher/UpdateTeacher/{id} - returns the teacher as stored
async fn update_teacher(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    JsonBody(draft): JsonBody<TeacherDraft>,
) -> Result<Json<Teacher>, ApiError> {
    let teacher = TeacherRepo::new(&state.pool).update(id, &draft).await?;
    Ok(Json(teacher))
}

/// Teacher routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/Teacher/ListTeachers", get(list_teachers))
        .route("/api/Teacher/FindTeacher/{id}", get(find_teacher))
        .route("/api/Teacher/AddTeacher", post(add_teacher))
        .route("/api/Teacher/DeleteTeacher/{id}", delete(delete_teacher))
        .route("/api/Teacher/UpdateTeacher/{id}", put(update_teacher))
}
