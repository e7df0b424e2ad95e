//! In-memory `BlogStore` fakes for prompt/handler/session tests.

use std::cell::RefCell;

use chrono::Utc;
use termblog_core::{Blog, BlogError, BlogStore, Post, Result};

pub struct MemStore {
    blogs: RefCell<Vec<Blog>>,
    posts: RefCell<Vec<Post>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { blogs: RefCell::new(Vec::new()), posts: RefCell::new(Vec::new()) }
    }

    pub fn with_blogs(names: &[&str]) -> Self {
        let store = Self::new();
        for name in names {
            store.add_blog(name).unwrap();
        }
        store
    }

    pub fn blog_count(&self) -> usize {
        self.blogs.borrow().len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.borrow().len()
    }
}

impl BlogStore for MemStore {
    fn list_blogs(&self) -> Result<Vec<Blog>> {
        let mut blogs = self.blogs.borrow().clone();
        blogs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(blogs)
    }

    fn list_blogs_by_id(&self) -> Result<Vec<Blog>> {
        let mut blogs = self.blogs.borrow().clone();
        blogs.sort_by_key(|b| b.id);
        Ok(blogs)
    }

    fn blog_exists(&self, id: i64) -> Result<bool> {
        Ok(self.blogs.borrow().iter().any(|b| b.id == id))
    }

    fn get_blog(&self, id: i64) -> Result<Option<Blog>> {
        Ok(self.blogs.borrow().iter().find(|b| b.id == id).cloned())
    }

    fn add_blog(&self, name: &str) -> Result<Blog> {
        let mut blogs = self.blogs.borrow_mut();
        let id = blogs.len() as i64 + 1;
        let blog = Blog { id, name: name.to_string(), created_at: Utc::now() };
        blogs.push(blog.clone());
        Ok(blog)
    }

    fn list_posts(&self, blog_id: i64) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> =
            self.posts.borrow().iter().filter(|p| p.blog_id == blog_id).cloned().collect();
        posts.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(posts)
    }

    fn add_post(&self, blog_id: i64, title: &str, content: &str) -> Result<Post> {
        if !self.blog_exists(blog_id)? {
            return Err(BlogError::NotFound(format!("no blog with id {blog_id}")));
        }
        let mut posts = self.posts.borrow_mut();
        let id = posts.len() as i64 + 1;
        let post = Post {
            id,
            blog_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        posts.push(post.clone());
        Ok(post)
    }
}

/// Store whose every call fails, for handler-boundary error reporting tests.
pub struct FailStore;

impl BlogStore for FailStore {
    fn list_blogs(&self) -> Result<Vec<Blog>> {
        Err(BlogError::Database("disk full".to_string()))
    }

    fn list_blogs_by_id(&self) -> Result<Vec<Blog>> {
        Err(BlogError::Database("disk full".to_string()))
    }

    fn blog_exists(&self, _id: i64) -> Result<bool> {
        Err(BlogError::Database("disk full".to_string()))
    }

    fn get_blog(&self, _id: i64) -> Result<Option<Blog>> {
        Err(BlogError::Database("disk full".to_string()))
    }

    fn add_blog(&self, _name: &str) -> Result<Blog> {
        Err(BlogError::Database("disk full".to_string()))
    }

    fn list_posts(&self, _blog_id: i64) -> Result<Vec<Post>> {
        Err(BlogError::Database("disk full".to_string()))
    }

    fn add_post(&self, _blog_id: i64, _title: &str, _content: &str) -> Result<Post> {
        Err(BlogError::Database("disk full".to_string()))
    }
}
