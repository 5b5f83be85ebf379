//! Configuration schema definitions
//!
//! Every section is optional in the file; missing keys fall back to defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default per-line buffer limit, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl ConfigSchema {
    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> Result<()> {
        if self.input.max_line_length == 0 {
            return Err(Error::invalid_config_value(
                "input.max_line_length",
                "must be at least 1 byte",
            ));
        }
        if self.output.limit == Some(0) {
            return Err(Error::invalid_config_value("output.limit", "must be at least 1"));
        }
        self.scoring.validate()
    }
}

/// Named scoring weight presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// Streak, path-boundary and camel-case bonuses with a mild length penalty
    #[default]
    Balanced,
    /// Small base score with a slowly growing streak bonus only
    Streak,
}

impl FromStr for ScoringProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "balanced" => Ok(Self::Balanced),
            "streak" => Ok(Self::Streak),
            other => Err(format!("unknown profile `{}` (expected balanced or streak)", other)),
        }
    }
}

impl fmt::Display for ScoringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Balanced => "balanced",
            Self::Streak => "streak",
        })
    }
}

/// Scoring configuration: a profile plus per-weight overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    #[serde(default)]
    pub profile: ScoringProfile,

    /// Points for every matched character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<i64>,

    /// Added per position of the current consecutive run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_step: Option<i64>,

    /// Match right after `/` or `\`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_bonus: Option<i64>,

    /// Match on a lowercase-to-uppercase step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camel_bonus: Option<i64>,

    /// One point off per this many characters of candidate text (0 disables)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_penalty_divisor: Option<i64>,

    /// Score given to every candidate when the query is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_query_score: Option<i64>,
}

impl ScoringConfig {
    fn validate(&self) -> Result<()> {
        let overrides = [
            ("scoring.base", self.base),
            ("scoring.consecutive_step", self.consecutive_step),
            ("scoring.boundary_bonus", self.boundary_bonus),
            ("scoring.camel_bonus", self.camel_bonus),
            ("scoring.length_penalty_divisor", self.length_penalty_divisor),
            ("scoring.empty_query_score", self.empty_query_score),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                if v < 0 {
                    return Err(Error::invalid_config_value(field, "must not be negative"));
                }
            }
        }
        if self.empty_query_score == Some(0) {
            return Err(Error::invalid_config_value(
                "scoring.empty_query_score",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// What to do with a line longer than the buffer limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlongPolicy {
    /// Keep the leading bytes up to the limit
    #[default]
    Truncate,
    /// Drop the line
    Skip,
}

impl FromStr for OverlongPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown policy `{}` (expected truncate or skip)", other)),
        }
    }
}

/// Input reading configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Maximum buffered bytes of a single line, terminator excluded
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    #[serde(default)]
    pub overlong: OverlongPolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            overlong: OverlongPolicy::default(),
        }
    }
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

/// Output rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line
    #[default]
    Text,
    /// A single JSON array of results
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format `{}` (expected text or json)", other)),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix each text line with its score and a tab
    #[serde(default)]
    pub show_score: bool,

    /// Keep only the best N results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}
