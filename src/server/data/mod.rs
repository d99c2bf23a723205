//! Database repository layer for the catalogue tables.
//!
//! Each repository wraps row-level reads and writes for one table and carries no business
//! rules. Repositories take and return SeaORM entity models or parameter models; conversion
//! to domain models happens in the service layer.

pub mod artist;
pub mod issue;
pub mod series;

#[cfg(test)]
mod test;
