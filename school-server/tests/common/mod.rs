//! Shared helpers for database-backed tests
//!
//! Each test gets its own Postgres schema so row counts and "empty table"
//! checks never see another test's data.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

static SCHEMA_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Pool whose connections resolve unqualified tables in a brand-new schema.
pub async fn isolated_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let schema = format!(
        "school_test_{}_{}_{}",
        std::process::id(),
        nanos,
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
    );

    let admin = PgPool::connect(&url).await.expect("connect failed");
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .expect("create schema failed");
    admin.close().await;

    let options = PgConnectOptions::from_str(&url)
        .expect("invalid DATABASE_URL")
        .options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("pool creation failed");

    school_server::db::schema::run(&pool)
        .await
        .expect("schema bootstrap failed");
    pool
}

/// Pool that never connects, for requests rejected before any query runs.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://school@127.0.0.1:1/unused")
        .expect("lazy pool")
}
