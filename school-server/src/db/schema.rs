//! Table definitions for teachers, students and courses
//!
//! Column names are lowercase and unquoted; the repositories read them by
//! exactly these names.

use sqlx::PgPool;

const TEACHERS: &str = r#"
    CREATE TABLE IF NOT EXISTS teachers (
        teacherid SERIAL PRIMARY KEY,
        teacherfname VARCHAR(255) NOT NULL,
        teacherlname VARCHAR(255) NOT NULL,
        employeenumber VARCHAR(255) NOT NULL DEFAULT '',
        hiredate DATE NOT NULL DEFAULT CURRENT_DATE,
        salary NUMERIC(10, 2) NOT NULL DEFAULT 0
    )
"#;

const STUDENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        studentid SERIAL PRIMARY KEY,
        studentfname VARCHAR(255) NOT NULL DEFAULT '',
        studentlname VARCHAR(255) NOT NULL DEFAULT '',
        studentnumber VARCHAR(255) NOT NULL DEFAULT '',
        enroldate DATE NOT NULL DEFAULT CURRENT_DATE
    )
"#;

// teacherid is a bare integer: courses keep their teacher reference even
// after the teacher row is deleted.
const COURSES: &str = r#"
    CREATE TABLE IF NOT EXISTS courses (
        courseid SERIAL PRIMARY KEY,
        coursecode VARCHAR(255) NOT NULL DEFAULT '',
        teacherid INTEGER NOT NULL DEFAULT 0,
        startdate DATE NOT NULL DEFAULT CURRENT_DATE,
        finishdate DATE NOT NULL DEFAULT CURRENT_DATE,
        coursename VARCHAR(255) NOT NULL DEFAULT ''
    )
"#;

/// Create any missing tables. Safe to run on every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring school schema...");

    for ddl in [TEACHERS, STUDENTS, COURSES] {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("School schema ready");
    Ok(())
}
