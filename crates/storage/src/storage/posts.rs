use chrono::Utc;
use rusqlite::params;
use termblog_core::{Post, Result};

use super::{Storage, db_err, get_conn, log_row_error, parse_timestamp};

impl Storage {
    /// Posts for one blog ordered by title.
    ///
    /// # Errors
    /// Returns error if the database query fails.
    pub fn list_posts(&self, blog_id: i64) -> Result<Vec<Post>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn
            .prepare(
                "SELECT id, blog_id, title, content, created_at
                   FROM posts WHERE blog_id = ?1 ORDER BY title",
            )
            .map_err(db_err)?;
        let rows = stmt.query_map(params![blog_id], Self::row_to_post).map_err(db_err)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    /// Insert a post and return it with its assigned id.
    ///
    /// The schema enforces `blog_id REFERENCES blogs(id)`, so an insert for a
    /// missing blog fails here even if the existence check was skipped.
    ///
    /// # Errors
    /// Returns error if the database insert fails.
    pub fn add_post(&self, blog_id: i64, title: &str, content: &str) -> Result<Post> {
        let conn = get_conn(&self.pool)?;
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO posts (blog_id, title, content, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![blog_id, title, content, created_at.to_rfc3339()],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, blog_id, title, "post row inserted");
        Ok(Post {
            id,
            blog_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }

    fn row_to_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<Post> {
        let created_at_str: String = row.get(4)?;
        Ok(Post {
            id: row.get(0)?,
            blog_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            created_at: parse_timestamp(&created_at_str)?,
        })
    }
}
