//! SQLite persistence for termblog
//!
//! Implements the `BlogStore` gateway trait from `termblog-core` over a
//! pooled rusqlite connection with versioned schema migrations.

mod migrations;
mod storage;

pub use storage::Storage;
