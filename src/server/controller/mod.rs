//! HTTP request handlers.
//!
//! Controllers extract path context and JSON payloads, convert DTOs into validated
//! parameters, call the matching service and shape the JSON response. Every handler carries a
//! `#[utoipa::path]` annotation that feeds the generated OpenAPI document.

pub mod artist;
pub mod issue;
pub mod series;

#[cfg(test)]
mod test;
