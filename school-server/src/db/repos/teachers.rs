//! Teacher table mapping
//!
//! - add: names required
//! - update: names, hire date not in the future, salary non-negative

use super::{Insert, PgQuery, Removable, Repo, Table, Update};
use crate::models::{Teacher, TeacherDraft, ValidationError};

/// Teacher repository
pub type TeacherRepo<'a> = Repo<'a, Teacher>;

impl Table for Teacher {
    const TABLE: &'static str = "teachers";
    const KEY: &'static str = "teacherid";
    const RESOURCE: &'static str = "teacher";
}

impl Removable for Teacher {}

impl Insert for TeacherDraft {
    type Record = Teacher;

    const COLUMNS: &'static [&'static str] = &[
        "teacherfname",
        "teacherlname",
        "hiredate",
        "employeenumber",
        "salary",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        self.check_names()
    }

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(self.hire_date)
            .bind(&self.employee_number)
            .bind(self.salary)
    }
}

impl Update for TeacherDraft {
    fn validate_update(&self) -> Result<(), ValidationError> {
        self.check_for_update_now()
    }
}
