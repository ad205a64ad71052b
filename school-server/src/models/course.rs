//! Course record (read-only)

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Course row from the `courses` table.
///
/// `teacher_id` refers to a teacher by key only; nothing checks that the
/// teacher exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[sqlx(rename = "courseid")]
    pub course_id: i32,
    #[sqlx(rename = "coursecode")]
    pub course_code: String,
    #[sqlx(rename = "teacherid")]
    pub teacher_id: i32,
    #[sqlx(rename = "startdate")]
    pub start_date: NaiveDate,
    #[sqlx(rename = "finishdate")]
    pub finish_date: NaiveDate,
    #[sqlx(rename = "coursename")]
    pub course_name: String,
}
