//! Arisen Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit and integration tests.
//! This crate offers a builder pattern for standing up a local stub HTTP server
//! with canned routes, fixtures for the remote documents the bot reads, and
//! helpers for inspecting Serenity builders.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring stub routes
//! - **TestContext**: Running stub server, torn down when dropped
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: Status-page JSON, rendered HTML and mod database documents
//! - **serenity**: Helpers for asserting on Serenity builders
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_status_check() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_route("/api/v2/status.json", 200, fixture::status_page::operational())
//!         .build()
//!         .await?;
//!
//!     let url = test.url("/api/v2/status.json")?;
//!     // Point the code under test at `url`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
