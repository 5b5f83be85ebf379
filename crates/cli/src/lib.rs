//! CLI utilities for the fuzzrank tools
//!
//! Provides shared CLI functionality:
//! - Result rendering (plain, scored, JSON)
//! - Status messages on standard error

#![warn(missing_docs)]

pub mod output;
