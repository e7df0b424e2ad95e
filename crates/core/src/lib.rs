//! Core types and traits for termblog
//!
//! This crate contains domain types shared across all other crates.

pub mod config;

mod blog;
mod error;
mod store;

pub use blog::*;
pub use error::*;
pub use store::*;
