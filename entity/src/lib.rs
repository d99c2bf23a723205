//! SeaORM entities for the comics catalogue.

pub mod prelude;

pub mod artist;
pub mod issue;
pub mod series;
