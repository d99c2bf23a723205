//! JSON request body extraction.
//!
//! Wraps `axum::Json` so a body that cannot be read or deserialized (wrong field types, a
//! `null` entity wrapper, malformed JSON, missing content type) is answered like any other
//! invalid payload: 400 with an `{error}` body.

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body whose rejection is converted into `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
