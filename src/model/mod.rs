//! JSON request and response bodies for the catalogue API.
//!
//! Requests wrap the entity under a single key (`{"artist": {...}}`) and use camelCase field
//! names. Responses return persisted rows under the same key using the table's column names.

pub mod api;
pub mod artist;
pub mod issue;
pub mod series;
