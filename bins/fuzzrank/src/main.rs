//! fuzzrank: rank lines from standard input by fuzzy match against a query.
//!
//! ```text
//! git ls-files | fuzzrank srvmain
//! ```

use clap::Parser;
use fuzzrank_cli::output::{format_count, write_results, Status};
use fuzzrank_core::prelude::*;
use fuzzrank_search::{rank_reader, Ranker};
use fuzzrank_telemetry::{TelemetryConfig, Timer};
use std::io::{self, BufWriter};
use std::process::ExitCode;

mod settings;

use settings::{Overrides, Settings};

/// Rank lines from standard input by fuzzy match against a query
#[derive(Parser)]
#[command(name = "fuzzrank")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Characters to find in order, ignoring case (empty string lists everything)
    ///
    /// A query that starts with '-' must follow `--`, as in `fuzzrank -- -rs`.
    query: Option<String>,

    #[command(flatten)]
    overrides: Overrides,

    /// Path to a config file (default: .fuzzrank.toml in the working directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Log debug output and a summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                exit(exit_codes::FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    if let Err(e) = fuzzrank_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.code == ErrorCode::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = %e.code, "Exiting with error");
            Status::error(&e.to_string());
            exit(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let query = cli
        .query
        .as_deref()
        .ok_or_else(|| Error::invalid_arguments("missing required argument <QUERY>"))?;

    let config = Config::load(cli.config.as_deref())?;
    let schema = cli.overrides.apply(config.schema)?;
    let settings = Settings::from_schema(&schema)?;

    let ranker = Ranker::new(query, settings.weights).with_limit(settings.limit);

    let timer = Timer::start("rank");
    let ranking = rank_reader(io::stdin().lock(), &ranker, &settings.reader)
        .map_err(Error::from)
        .context("While reading candidates from standard input")?;
    let elapsed = timer.stop();

    if cli.verbose {
        Status::info(&format!(
            "{} from {} in {}ms ({} truncated, {} skipped)",
            format_count(ranking.results.len(), "match", "matches"),
            format_count(ranking.stats.lines, "line", "lines"),
            elapsed.as_millis(),
            ranking.stats.truncated,
            ranking.stats.skipped,
        ));
    }

    let mut out = BufWriter::new(io::stdout().lock());
    write_results(&mut out, &ranking.results, settings.render)?;
    Ok(())
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
