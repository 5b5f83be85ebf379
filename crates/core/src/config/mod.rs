//! Configuration loading and schema definitions
//!
//! Scoring, input and output settings read from `.fuzzrank.toml`.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
