//! Terminal output utilities
//!
//! Ranked results go to standard output; status messages go to standard
//! error so they never mix with results in a pipe.

use fuzzrank_core::config::OutputFormat;
use fuzzrank_search::ScoredCandidate;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!(
            "{} {}",
            "✗".if_supports_color(Stream::Stderr, |s| s.red()),
            message
        );
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!(
            "{} {}",
            "⚠".if_supports_color(Stream::Stderr, |s| s.yellow()),
            message
        );
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!(
            "{} {}",
            "ℹ".if_supports_color(Stream::Stderr, |s| s.blue()),
            message
        );
    }
}

/// How ranked results are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Plain lines or a JSON array
    pub format: OutputFormat,
    /// Prefix text lines with `score<TAB>`
    pub show_score: bool,
}

/// Write ranked results.
///
/// Text output ends every line, the last one included, with a single LF.
/// JSON output is one array of `{index, text, score}` objects and a LF.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[ScoredCandidate],
    options: RenderOptions,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Text => {
            for result in results {
                if options.show_score {
                    writeln!(out, "{}\t{}", result.score, result.text)?;
                } else {
                    writeln!(out, "{}", result.text)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<ScoredCandidate> {
        vec![
            ScoredCandidate {
                index: 2,
                text: "foo/bar.c".to_string(),
                score: 108,
            },
            ScoredCandidate {
                index: 0,
                text: "foobar.c".to_string(),
                score: 58,
            },
        ]
    }

    fn render(results: &[ScoredCandidate], options: RenderOptions) -> String {
        let mut out = Vec::new();
        write_results(&mut out, results, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render(&results(), RenderOptions::default()), "foo/bar.c\nfoobar.c\n");
    }

    #[test]
    fn test_text_output_with_scores() {
        let options = RenderOptions {
            show_score: true,
            ..RenderOptions::default()
        };
        assert_eq!(render(&results(), options), "108\tfoo/bar.c\n58\tfoobar.c\n");
    }

    #[test]
    fn test_empty_text_output() {
        assert_eq!(render(&[], RenderOptions::default()), "");
    }

    #[test]
    fn test_json_output() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            show_score: false,
        };
        let rendered = render(&results(), options);
        assert!(rendered.ends_with("]\n"));

        let parsed: Vec<ScoredCandidate> = serde_json::from_str(rendered.trim_end()).unwrap();
        assert_eq!(parsed, results());
    }

    #[test]
    fn test_empty_json_output() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            show_score: false,
        };
        assert_eq!(render(&[], options), "[]\n");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "match", "matches"), "1 match");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "line", "lines"), "5 lines");
    }
}
