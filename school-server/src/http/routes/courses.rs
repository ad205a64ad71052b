//! Course endpoints under /api/Courses (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::or_zero_value;
use crate::db::repos::CourseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::Course;

/// GET /api/Courses/ListCourses
async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = CourseRepo::new(&state.pool).list().await?;
    Ok(Json(courses))
}

/// GET /api/Courses/FindCourse/{id}
async fn find_course(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Course>, ApiError> {
    let course = CourseRepo::new(&state.pool).find(id).await?;
    Ok(Json(or_zero_value(course, "course", id)))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/Courses/ListCourses", get(list_courses))
        .route("/api/Courses/FindCourse/{id}", get(find_course))
}
