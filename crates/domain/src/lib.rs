//! # Habitify Domain
//!
//! Wire types and models for the Habitify API client.
//!
//! This crate contains:
//! - Entity types returned by the API (Habit, Log, Mood, Area, Note, Action)
//! - Request parameter structs, one per operation
//! - The client error taxonomy and `Result` alias
//! - The canonical timestamp normalizer
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No HTTP or I/O dependencies
//! - Pure data structures and deterministic helpers

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
