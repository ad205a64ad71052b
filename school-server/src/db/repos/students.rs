//! Student table mapping. No rules beyond type conversion.

use super::{Insert, PgQuery, Removable, Repo, Table};
use crate::models::{Student, StudentDraft};

/// Student repository
pub type StudentRepo<'a> = Repo<'a, Student>;

impl Table for Student {
    const TABLE: &'static str = "students";
    const KEY: &'static str = "studentid";
    const RESOURCE: &'static str = "student";
}

impl Removable for Student {}

impl Insert for StudentDraft {
    type Record = Student;

    const COLUMNS: &'static [&'static str] =
        &["studentfname", "studentlname", "studentnumber", "enroldate"];

    fn bind<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.student_number)
            .bind(self.enrol_date)
    }
}
