//! Route handlers organized by resource

pub mod health;
pub mod teachers;
pub mod students;
pub mod courses;

use serde::Serialize;

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

impl DeletedResponse {
    fn new(entity: &str, id: i32) -> Self {
        Self {
            message: format!("{} with ID {} deleted successfully.", entity, id),
        }
    }
}

/// Find endpoints answer a missing row with the zero-value record.
fn or_zero_value<T: Default>(record: Option<T>, resource: &str, id: i32) -> T {
    record.unwrap_or_else(|| {
        tracing::debug!(resource, id, "No match, returning zero-value record");
        T::default()
    })
}
