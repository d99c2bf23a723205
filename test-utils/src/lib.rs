//! X-Press Test Utils
//!
//! Provides shared testing utilities for the catalogue API. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, plus factories for inserting
//! artists, series and issues with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for seeding rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_series() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_catalogue_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let series = factory::create_series(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
