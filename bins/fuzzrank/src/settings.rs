//! Effective settings: built-in defaults, then the config file, then flags.

use clap::builder::RangedU64ValueParser;
use clap::Args;
use fuzzrank_cli::output::RenderOptions;
use fuzzrank_core::prelude::*;
use fuzzrank_search::{ReaderOptions, ScoreWeights};

/// Command-line flags that override the config file
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Scoring profile (balanced, streak)
    #[arg(short, long)]
    pub profile: Option<ScoringProfile>,

    /// Print only the best N matches
    #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Prefix every line with its score and a tab
    #[arg(short, long)]
    pub show_score: bool,

    /// Output format (text, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Longest accepted input line in bytes
    #[arg(long, value_name = "BYTES", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_line_length: Option<usize>,

    /// What to do with longer lines (truncate, skip)
    #[arg(long)]
    pub overlong: Option<OverlongPolicy>,
}

impl Overrides {
    /// Apply the flags that were given on top of `schema`.
    pub fn apply(&self, mut schema: ConfigSchema) -> Result<ConfigSchema> {
        if let Some(profile) = self.profile {
            schema.scoring.profile = profile;
        }
        if let Some(limit) = self.limit {
            schema.output.limit = Some(limit);
        }
        if self.show_score {
            schema.output.show_score = true;
        }
        if let Some(format) = self.format {
            schema.output.format = format;
        }
        if let Some(max) = self.max_line_length {
            schema.input.max_line_length = max;
        }
        if let Some(policy) = self.overlong {
            schema.input.overlong = policy;
        }
        schema.validate()?;
        Ok(schema)
    }
}

/// Settings in the form the ranking and rendering code takes them
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub weights: ScoreWeights,
    pub reader: ReaderOptions,
    pub render: RenderOptions,
    pub limit: Option<usize>,
}

impl Settings {
    pub fn from_schema(schema: &ConfigSchema) -> Result<Self> {
        Ok(Self {
            weights: ScoreWeights::from_config(&schema.scoring)?,
            reader: ReaderOptions {
                max_line_length: schema.input.max_line_length,
                overlong: schema.input.overlong,
            },
            render: RenderOptions {
                format: schema.output.format,
                show_score: schema.output.show_score,
            },
            limit: schema.output.limit,
        })
    }
}
