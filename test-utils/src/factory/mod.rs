//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories for child rows take
//! the ids of their parents, so create artists and series before issues.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let artist = factory::create_artist(&db).await?;
//! let series = factory::create_series(&db).await?;
//! let issue = factory::create_issue(&db, artist.id, series.id).await?;
//!
//! // Or in one step
//! let (artist, series, issue) = factory::helpers::create_issue_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let retired = factory::artist::ArtistFactory::new(&db)
//!     .name("Jack Kirby")
//!     .employed(false)
//!     .build()
//!     .await?;
//! ```

pub mod artist;
pub mod helpers;
pub mod issue;
pub mod series;

pub use artist::create_artist;
pub use issue::create_issue;
pub use series::create_series;
