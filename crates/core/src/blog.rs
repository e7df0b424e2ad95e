use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named container for posts. Ids are assigned by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A titled, content-bearing entry belonging to exactly one blog.
///
/// `blog_id` must reference an existing blog at the instant of creation;
/// the interactive layer checks existence before issuing the write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
