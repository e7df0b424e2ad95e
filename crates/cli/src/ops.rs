//! The four menu operations.
//!
//! Handlers are pure orchestration of prompts and `BlogStore` calls, with
//! everything they need passed in as parameters. Storage failures are caught
//! here: logged, reported on the console, and the handler returns to the menu.
//! `EndOfInput` and console write failures propagate to the session loop.

use std::io::{BufRead, Write};

use colored::Colorize;
use termblog_core::{BlogError, BlogStore, Result};

use crate::prompt::Prompter;

/// List every blog ordered by name, preceded by the count.
pub fn view_blogs<S, R, W>(store: &S, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: BlogStore,
    R: BufRead,
    W: Write,
{
    tracing::info!("view blogs start");
    let blogs = match store.list_blogs() {
        Ok(blogs) => blogs,
        Err(e) => return report_failure(prompter, "listing blogs", e),
    };
    prompter.say(format!("Blog Count: {}", blogs.len()).cyan())?;
    if blogs.is_empty() {
        return Ok(());
    }
    prompter.say("All blogs in the database:")?;
    for blog in &blogs {
        prompter.say(blog.name.as_str().cyan())?;
    }
    tracing::info!(count = blogs.len(), "view blogs complete");
    Ok(())
}

/// Collect a non-blank name and create a blog.
pub fn add_blog<S, R, W>(store: &S, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: BlogStore,
    R: BufRead,
    W: Write,
{
    tracing::info!("add blog start");
    let name = prompter.read_filled("name", "blog")?;
    match store.add_blog(&name) {
        Ok(blog) => tracing::info!(id = blog.id, name = %blog.name, "blog added"),
        Err(e) => return report_failure(prompter, "saving the blog", e),
    }
    tracing::info!("add blog complete");
    Ok(())
}

/// Create posts until the user declines the continuation question.
///
/// Each pass validates the target blog id, collects title and content, and
/// issues exactly one write.
pub fn add_post<S, R, W>(store: &S, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: BlogStore,
    R: BufRead,
    W: Write,
{
    tracing::info!("add post start");
    loop {
        prompter.say("Which blog do you wish to post to?:".green())?;
        let blog_id = match prompter.read_blog_id(store) {
            Ok(id) => id,
            Err(e) => return report_failure(prompter, "choosing a blog", e),
        };
        let title = prompter.read_filled("title", "post")?;
        let content = prompter.read_filled("content", "post")?;
        match store.add_post(blog_id, &title, &content) {
            Ok(post) => tracing::info!(id = post.id, blog_id, title = %post.title, "post created"),
            Err(e) => return report_failure(prompter, "saving the post", e),
        }
        if !prompter.confirm("Add another post? [Y/N]:")? {
            break;
        }
    }
    tracing::info!("add post complete");
    Ok(())
}

/// Show every post of one chosen blog, ordered by title.
pub fn view_posts<S, R, W>(store: &S, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: BlogStore,
    R: BufRead,
    W: Write,
{
    tracing::info!("view posts start");
    prompter.say("Which blog's posts do you want to view?".green())?;
    let blog_id = match prompter.read_blog_id(store) {
        Ok(id) => id,
        Err(e) => return report_failure(prompter, "choosing a blog", e),
    };
    let blog = match store.get_blog(blog_id) {
        Ok(Some(blog)) => blog,
        Ok(None) => {
            return report_failure(
                prompter,
                "loading the blog",
                BlogError::NotFound(format!("no blog with id {blog_id}")),
            );
        }
        Err(e) => return report_failure(prompter, "loading the blog", e),
    };
    let posts = match store.list_posts(blog_id) {
        Ok(posts) => posts,
        Err(e) => return report_failure(prompter, "listing posts", e),
    };
    if posts.is_empty() {
        prompter.say("This blog doesn't have any posts.".green())?;
        tracing::info!(blog_id, "view posts complete, blog has no posts");
        return Ok(());
    }
    prompter.say(format!("Posts: {}", posts.len()).cyan())?;
    for post in &posts {
        prompter.say(format!("Blog: {}", blog.name).cyan())?;
        prompter.say(format!("Post Title: {}", post.title).cyan())?;
        prompter.say(post.content.as_str().cyan())?;
        prompter.say("----------")?;
    }
    tracing::info!(blog_id, count = posts.len(), "view posts complete");
    Ok(())
}

/// Handler-boundary failure report: terminal conditions propagate, anything
/// else is logged and shown so the menu keeps running with state unchanged.
fn report_failure<R, W>(prompter: &mut Prompter<R, W>, what: &str, err: BlogError) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    match err {
        BlogError::EndOfInput | BlogError::Io(_) => Err(err),
        other => {
            tracing::error!(error = %other, "failure while {what}");
            prompter.say(format!("Something went wrong while {what}: {other}").red())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FailStore, MemStore};

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn output_of<R>(p: &Prompter<R, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn test_view_blogs_prints_count_and_names_by_name() {
        let store = MemStore::with_blogs(&["Travel", "Cooking"]);
        let mut p = prompter("");

        view_blogs(&store, &mut p).unwrap();

        let out = output_of(&p);
        assert!(out.contains("Blog Count: 2"));
        let cooking = out.find("Cooking").unwrap();
        let travel = out.find("Travel").unwrap();
        assert!(cooking < travel);
    }

    #[test]
    fn test_view_blogs_empty_prints_only_count() {
        let store = MemStore::new();
        let mut p = prompter("");

        view_blogs(&store, &mut p).unwrap();

        let out = output_of(&p);
        assert!(out.contains("Blog Count: 0"));
        assert!(!out.contains("All blogs in the database:"));
    }

    #[test]
    fn test_add_blog_writes_validated_name() {
        let store = MemStore::new();
        let mut p = prompter("\nTech\n");

        add_blog(&store, &mut p).unwrap();

        assert_eq!(store.blog_count(), 1);
        assert!(output_of(&p).contains("The name cannot be blank."));
    }

    #[test]
    fn test_add_blog_storage_failure_returns_to_menu() {
        let mut p = prompter("Tech\n");

        add_blog(&FailStore, &mut p).unwrap();

        assert!(output_of(&p).contains("Something went wrong while saving the blog"));
    }

    #[test]
    fn test_add_post_continuation_creates_one_post_per_pass() {
        let store = MemStore::with_blogs(&["Tech"]);
        let mut p = prompter("1\nFirst\nbody one\ny\n1\nSecond\nbody two\nn\n");

        add_post(&store, &mut p).unwrap();

        assert_eq!(store.post_count(), 2);
    }

    #[test]
    fn test_add_post_uppercase_continuation_accepted() {
        let store = MemStore::with_blogs(&["Tech"]);
        let mut p = prompter("1\nA\na\nY\n1\nB\nb\nn\n");

        add_post(&store, &mut p).unwrap();

        assert_eq!(store.post_count(), 2);
    }

    #[test]
    fn test_add_post_eof_before_write_leaves_store_unchanged() {
        let store = MemStore::with_blogs(&["Tech"]);
        let mut p = prompter("1\nTitle\n");

        let result = add_post(&store, &mut p);

        assert!(matches!(result, Err(termblog_core::BlogError::EndOfInput)));
        assert_eq!(store.post_count(), 0);
    }

    #[test]
    fn test_view_posts_empty_blog_says_so_without_further_prompts() {
        let store = MemStore::with_blogs(&["Tech"]);
        let mut p = prompter("1\n");

        view_posts(&store, &mut p).unwrap();

        let out = output_of(&p);
        assert!(out.contains("This blog doesn't have any posts."));
        assert!(!out.contains("Posts:"));
        assert!(!out.contains("What is the"));
    }

    #[test]
    fn test_view_posts_lists_titles_in_order() {
        let store = MemStore::with_blogs(&["Tech"]);
        store.add_post(1, "Zig", "z").unwrap();
        store.add_post(1, "Ada", "a").unwrap();
        let mut p = prompter("1\n");

        view_posts(&store, &mut p).unwrap();

        let out = output_of(&p);
        assert!(out.contains("Posts: 2"));
        assert!(out.contains("Blog: Tech"));
        let ada = out.find("Post Title: Ada").unwrap();
        let zig = out.find("Post Title: Zig").unwrap();
        assert!(ada < zig);
    }
}
