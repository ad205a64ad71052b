//! Student record and draft

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::dates;

/// Student row from the `students` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[sqlx(rename = "studentid")]
    pub student_id: i32,
    #[sqlx(rename = "studentfname")]
    pub first_name: String,
    #[sqlx(rename = "studentlname")]
    pub last_name: String,
    #[sqlx(rename = "studentnumber")]
    pub student_number: String,
    #[sqlx(rename = "enroldate")]
    pub enrol_date: NaiveDate,
}

/// Student fields supplied by a client on add. No rules beyond type conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDraft {
    #[serde(alias = "studentFName")]
    pub first_name: String,
    #[serde(alias = "studentLName")]
    pub last_name: String,
    pub student_number: String,
    #[serde(deserialize_with = "dates::deserialize")]
    pub enrol_date: NaiveDate,
}
