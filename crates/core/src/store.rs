//! Persistence gateway abstraction
//!
//! Single seam between the interactive front end and the database.
//! The SQLite-backed `Storage` implements it for real use; tests drive the
//! prompt and handler layer with an in-memory fake.

use crate::{Blog, Post, Result};

/// Blog/post persistence interface.
///
/// All methods are synchronous; the program is one thread talking to one
/// local database. Listings are re-queried on every call, never cached.
pub trait BlogStore {
    /// All blogs ordered by name.
    fn list_blogs(&self) -> Result<Vec<Blog>>;

    /// All blogs ordered by id, for the numbered picker listing.
    fn list_blogs_by_id(&self) -> Result<Vec<Blog>>;

    /// Whether a blog with the given id exists.
    fn blog_exists(&self, id: i64) -> Result<bool>;

    /// Get one blog by id.
    fn get_blog(&self, id: i64) -> Result<Option<Blog>>;

    /// Insert a blog and return it with its assigned id.
    fn add_blog(&self, name: &str) -> Result<Blog>;

    /// Posts for one blog ordered by title.
    fn list_posts(&self, blog_id: i64) -> Result<Vec<Post>>;

    /// Insert a post and return it with its assigned id.
    fn add_post(&self, blog_id: i64, title: &str, content: &str) -> Result<Post>;
}
