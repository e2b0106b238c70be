//! # Habitify Client
//!
//! Typed async client for the Habitify habit-tracking API.
//!
//! This crate contains:
//! - The reqwest-backed transport with the uniform envelope pipeline
//! - Client configuration and builder
//! - The injectable logger capability
//! - One method per remote operation (journal, habits, logs, moods, areas,
//!   notes, actions)
//!
//! ```no_run
//! use habitify_client::domain::GetJournalParams;
//! use habitify_client::{HabitifyClient, HabitifyConfig};
//!
//! # async fn run() -> habitify_client::domain::Result<()> {
//! let client = HabitifyClient::new(HabitifyConfig::builder().api_key("my-key").build())?;
//! let habits = client.get_journal(&GetJournalParams::default()).await?;
//! println!("{} habits due today", habits.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod http;
pub mod logging;
mod resources;

// Re-export commonly used items
pub use client::HabitifyClient;
pub use config::{AuthScheme, HabitifyConfig, HabitifyConfigBuilder};
pub use envelope::Envelope;
pub use http::HttpTransport;
pub use logging::{Logger, NoopLogger, TracingLogger};

// Re-export the domain crate so callers need a single dependency.
pub use habitify_domain as domain;
