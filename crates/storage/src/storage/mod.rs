//! `SQLite` storage implementation
//!
//! All methods are synchronous; the interactive session is the only caller.

mod blogs;
mod posts;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use termblog_core::{Blog, BlogError, BlogStore, Post, Result, config};

use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping a `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Wrap any database-layer failure into the domain error
pub(crate) fn db_err(e: impl std::fmt::Display) -> BlogError {
    BlogError::Database(e.to_string())
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn> {
    pool.get().map_err(db_err)
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        }
    }
}

/// Parse an RFC 3339 timestamp column, converting the error to a rusqlite error
pub(crate) fn parse_timestamp(s: &str) -> rusqlite::Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&chrono::Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Connection initializer: concurrency pragmas plus enforced foreign keys,
/// so a post can never be inserted for a blog id that does not exist.
fn init_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

impl Storage {
    /// Create a new storage instance with a `SQLite` connection pool,
    /// running pending migrations.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened or migrated. This is
    /// the one startup failure that aborts the program.
    pub fn new(db_path: &Path) -> Result<Self> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = config::db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager).map_err(db_err)?;

        let conn = pool.get().map_err(db_err)?;
        migrations::run_migrations(&conn).map_err(db_err)?;
        drop(conn);

        tracing::info!(pool_size = pool_size, "Storage initialized with connection pool");

        Ok(Self { pool })
    }
}

impl BlogStore for Storage {
    fn list_blogs(&self) -> Result<Vec<Blog>> {
        Storage::list_blogs(self)
    }

    fn list_blogs_by_id(&self) -> Result<Vec<Blog>> {
        Storage::list_blogs_by_id(self)
    }

    fn blog_exists(&self, id: i64) -> Result<bool> {
        Storage::blog_exists(self, id)
    }

    fn get_blog(&self, id: i64) -> Result<Option<Blog>> {
        Storage::get_blog(self, id)
    }

    fn add_blog(&self, name: &str) -> Result<Blog> {
        Storage::add_blog(self, name)
    }

    fn list_posts(&self, blog_id: i64) -> Result<Vec<Post>> {
        Storage::list_posts(self, blog_id)
    }

    fn add_post(&self, blog_id: i64, title: &str, content: &str) -> Result<Post> {
        Storage::add_post(self, blog_id, title, content)
    }
}
