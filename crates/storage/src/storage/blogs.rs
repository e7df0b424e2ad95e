use chrono::Utc;
use rusqlite::params;
use termblog_core::{Blog, Result};

use super::{Storage, db_err, get_conn, log_row_error, parse_timestamp};

impl Storage {
    /// All blogs ordered by name.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn list_blogs(&self) -> Result<Vec<Blog>> {
        self.query_blogs("SELECT id, name, created_at FROM blogs ORDER BY name")
    }

    /// All blogs ordered by id, for the numbered picker listing.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn list_blogs_by_id(&self) -> Result<Vec<Blog>> {
        self.query_blogs("SELECT id, name, created_at FROM blogs ORDER BY id")
    }

    /// Whether a blog with the given id exists.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn blog_exists(&self, id: i64) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM blogs WHERE id = ?1", params![id], |row| row.get(0))
            .map_err(db_err)?;
        Ok(count > 0)
    }

    /// Get one blog by id.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn get_blog(&self, id: i64) -> Result<Option<Blog>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn
            .prepare("SELECT id, name, created_at FROM blogs WHERE id = ?1")
            .map_err(db_err)?;
        let mut rows = stmt.query(params![id]).map_err(db_err)?;
        match rows.next().map_err(db_err)? {
            Some(row) => Ok(Some(Self::row_to_blog(row).map_err(db_err)?)),
            None => Ok(None),
        }
    }

    /// Insert a blog and return it with its assigned id.
    ///
    /// # Errors
    /// Returns error if the database insert fails.
    pub fn add_blog(&self, name: &str) -> Result<Blog> {
        let conn = get_conn(&self.pool)?;
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO blogs (name, created_at) VALUES (?1, ?2)",
            params![name, created_at.to_rfc3339()],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, name, "blog row inserted");
        Ok(Blog { id, name: name.to_string(), created_at })
    }

    fn query_blogs(&self, sql: &str) -> Result<Vec<Blog>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(sql).map_err(db_err)?;
        let rows = stmt.query_map([], Self::row_to_blog).map_err(db_err)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    pub(crate) fn row_to_blog(row: &rusqlite::Row<'_>) -> rusqlite::Result<Blog> {
        let created_at_str: String = row.get(2)?;
        Ok(Blog {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: parse_timestamp(&created_at_str)?,
        })
    }
}
