//! Database layer - connection pool, schema, and repositories
//!
//! - Connection pool owned by sqlx; each operation borrows one connection
//!   per statement and hands it back on every exit path
//! - Every value is bound as a parameter; statement text only ever contains
//!   table and column identifiers known at compile time
//! - No transactions: every operation is a single statement, except update,
//!   which re-reads the row it wrote

pub mod pool;
pub mod schema;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
