//! school-server: records API for teachers, students and courses
//!
//! Exposes list/find/add/delete/update over HTTP, backed by parameterized
//! statements against PostgreSQL.

pub mod db;
pub mod http;
pub mod models;

pub use db::repos::{DbError, Repo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
