mod v1;
mod v2;

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 2;

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: initial schema");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: created_at columns");
        add_column_if_missing(conn, "blogs", "created_at", "TEXT")?;
        add_column_if_missing(conn, "posts", "created_at", "TEXT")?;
        conn.execute_batch(v2::BACKFILL_SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn add_column_if_missing(
    conn: &Connection,
    table: &str,
    column: &str,
    col_type: &str,
) -> Result<(), rusqlite::Error> {
    if !column_exists(conn, table, column)? {
        conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {col_type}"), [])?;
    }
    Ok(())
}
