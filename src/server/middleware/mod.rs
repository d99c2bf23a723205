//! Request guards that run before handler logic.

pub mod body;
pub mod resolve;
