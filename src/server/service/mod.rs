//! Business logic layer.
//!
//! Services sit between the controllers and the repositories. They order the store calls for
//! each operation (write, then re-read the persisted row), enforce the cross-entity rules
//! (an issue needs an existing artist, a series with issues cannot be deleted) and convert
//! entity models into domain models.

pub mod artist;
pub mod issue;
pub mod series;
