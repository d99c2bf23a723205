//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry validated input from the
//! controller into the service layer; building one from a DTO is where required-field
//! validation happens.

pub mod artist;
pub mod issue;
pub mod series;
