//! Course table mapping. Courses are seeded data: read-only here.

use super::{Repo, Table};
use crate::models::Course;

/// Course repository (list/find only)
pub type CourseRepo<'a> = Repo<'a, Course>;

impl Table for Course {
    const TABLE: &'static str = "courses";
    const KEY: &'static str = "courseid";
    const RESOURCE: &'static str = "course";
}
