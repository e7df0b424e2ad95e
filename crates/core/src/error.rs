use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in termblog
#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Input stream closed")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, BlogError>;
