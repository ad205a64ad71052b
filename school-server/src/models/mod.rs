//! Record types and the rules applied to client-supplied data
//!
//! Records mirror table rows. Drafts carry client input and are validated
//! before anything reaches the database; invalid input returns
//! ValidationError, not panic.

pub mod validation;
pub mod dates;
pub mod teacher;
pub mod student;
pub mod course;

pub use validation::ValidationError;
pub use teacher::{Teacher, TeacherDraft};
pub use student::{Student, StudentDraft};
pub use course::Course;
