//! Teacher record and draft
//!
//! Names are required on add; updates additionally reject a future hire
//! date and a negative salary.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::dates;
use super::validation::{require_text, ValidationError};

/// Teacher row from the `teachers` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[sqlx(rename = "teacherid")]
    pub teacher_id: i32,
    #[sqlx(rename = "teacherfname")]
    pub first_name: String,
    #[sqlx(rename = "teacherlname")]
    pub last_name: String,
    #[sqlx(rename = "hiredate")]
    pub hire_date: NaiveDate,
    #[sqlx(rename = "employeenumber")]
    pub employee_number: String,
    /// Exact decimal, written as a JSON number (`85.55`)
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub salary: Decimal,
}

/// Teacher fields supplied by a client on add/update.
///
/// Any `teacherId` in the body is ignored; the key comes from the database
/// or the request path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherDraft {
    #[serde(alias = "teacherFName")]
    pub first_name: String,
    #[serde(alias = "teacherLName")]
    pub last_name: String,
    #[serde(deserialize_with = "dates::deserialize")]
    pub hire_date: NaiveDate,
    pub employee_number: String,
    /// Accepts a JSON number or a decimal string
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
}

impl TeacherDraft {
    /// Rules checked before an insert.
    pub fn check_names(&self) -> Result<(), ValidationError> {
        require_text("first name", &self.first_name)?;
        require_text("last name", &self.last_name)
    }

    /// Rules checked before an update, evaluated against `today`.
    ///
    /// Hire dates are calendar dates (`DATE` column), so "not in the
    /// future" compares dates only; the time of day is dropped.
    ///
    /// Order matters: names, then hire date, then salary. The first
    /// failure wins.
    pub fn check_for_update(&self, today: NaiveDate) -> Result<(), ValidationError> {
        self.check_names()?;

        if self.hire_date > today {
            return Err(ValidationError::InFuture { field: "hire date" });
        }

        if self.salary < Decimal::ZERO {
            return Err(ValidationError::Negative { field: "salary" });
        }

        Ok(())
    }

    /// [`check_for_update`](Self::check_for_update) against the local calendar date.
    pub fn check_for_update_now(&self) -> Result<(), ValidationError> {
        self.check_for_update(Local::now().date_naive())
    }
}

impl From<Teacher> for TeacherDraft {
    fn from(t: Teacher) -> Self {
        Self {
            first_name: t.first_name,
            last_name: t.last_name,
            hire_date: t.hire_date,
            employee_number: t.employee_number,
            salary: t.salary,
        }
    }
}
