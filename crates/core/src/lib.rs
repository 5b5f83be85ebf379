//! Core utilities for the fuzzrank tools
//!
//! This crate provides functionality shared by the ranking library and the CLI:
//!
//! - **Error handling**: errors with codes, context, recovery suggestions and exit codes
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use fuzzrank_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("max line length: {}", config.schema.input.max_line_length);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, OutputFormat, OverlongPolicy, ScoringProfile};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
