//! # sloc
//!
//! A CLI tool for counting code, comment, and blank lines in source trees.
//!
//! ## Overview
//!
//! sloc is built on top of sloclib. It walks every path given on the command
//! line, scans each file with the configured suffix, and prints one table
//! with a row per file and a TOTAL footer.
//!
//! ## Usage
//!
//! ```bash
//! # Count Go sources under the current directory
//! sloc .
//!
//! # Several roots, walked concurrently
//! sloc --parallel cmd/ pkg/ internal/
//!
//! # Other languages with C-style comments
//! sloc --suffix .rs src/
//!
//! # Skip generated code, output as JSON
//! sloc . --exclude "**/gen/**" --output json
//!
//! # Verbose diagnostics on stderr
//! sloc . --loglevel DEBUG
//! ```

mod logging;
mod render;

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use sloclib::{count_paths, CommentSyntax, CountOptions, FilterConfig, LogLevel, ReportTable};

use crate::render::OutputMode;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count code, comment, and blank lines in source files")
        .arg(
            Arg::new("paths")
                .help("Files or directories to scan")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .default_value("INFO")
                .help("Log level, upper case: CRITICAL, ERROR, WARNING, NOTICE, INFO, DEBUG"),
        )
        .arg(
            Arg::new("suffix")
                .short('s')
                .long("suffix")
                .default_value(sloclib::filter::DEFAULT_SUFFIX)
                .help("Only scan files whose name ends with this suffix"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("line-comment")
                .long("line-comment")
                .default_value("//")
                .help("Line comment marker"),
        )
        .arg(
            Arg::new("block-open")
                .long("block-open")
                .default_value("/*")
                .help("Block comment opening marker"),
        )
        .arg(
            Arg::new("block-close")
                .long("block-close")
                .default_value("*/")
                .help("Block comment closing marker"),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Walk root paths concurrently (row order becomes arrival order)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("table")
                .value_parser(clap::value_parser!(OutputMode))
                .help("Output format"),
        )
}

/// Fetch a string argument that has a default value
fn arg_str<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new().suffix(arg_str(matches, "suffix"));

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Build comment markers from matches
fn build_syntax(matches: &ArgMatches) -> CommentSyntax {
    CommentSyntax::new(
        arg_str(matches, "line-comment"),
        arg_str(matches, "block-open"),
        arg_str(matches, "block-close"),
    )
}

/// Count every path and render the report
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let level = LogLevel::from_str(arg_str(matches, "loglevel"))?;
    logging::init(level);
    log::debug!("log level {level}");

    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let mode = matches
        .get_one::<OutputMode>("output")
        .copied()
        .unwrap_or_default();

    let options = CountOptions::new()
        .filter(build_filter(matches)?)
        .syntax(build_syntax(matches))
        .parallel(matches.get_flag("parallel"));

    let report = count_paths(&paths, &options)?;
    log::info!(
        "{} files: code={} comments={} blank={}",
        report.file_count(),
        report.total.code,
        report.total.comments,
        report.total.blank
    );

    let table = ReportTable::from_report(&report);
    render::render(&table, mode).context("failed to render report")
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        build_command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let m = matches(&["sloc", "."]);

        assert_eq!(arg_str(&m, "loglevel"), "INFO");
        assert_eq!(arg_str(&m, "suffix"), ".go");
        assert_eq!(m.get_one::<OutputMode>("output"), Some(&OutputMode::Table));
        assert!(!m.get_flag("parallel"));
        assert_eq!(build_syntax(&m), CommentSyntax::default());
    }

    #[test]
    fn test_paths_required() {
        assert!(build_command().try_get_matches_from(["sloc"]).is_err());
    }

    #[test]
    fn test_multiple_paths() {
        let m = matches(&["sloc", "a", "b", "c"]);
        let paths: Vec<&String> = m.get_many::<String>("paths").unwrap().collect();

        assert_eq!(paths, ["a", "b", "c"]);
    }

    #[test]
    fn test_build_filter() {
        let m = matches(&["sloc", ".", "-s", ".rs", "-e", "**/gen/**", "-e", "**/target/**"]);
        let filter = build_filter(&m).unwrap();

        assert_eq!(filter.suffix, ".rs");
        assert_eq!(filter.exclude.len(), 2);
    }

    #[test]
    fn test_build_filter_invalid_glob() {
        let m = matches(&["sloc", ".", "--exclude", "[invalid"]);

        assert!(build_filter(&m).is_err());
    }

    #[test]
    fn test_output_mode_parsed() {
        let m = matches(&["sloc", ".", "-o", "csv"]);

        assert_eq!(m.get_one::<OutputMode>("output"), Some(&OutputMode::Csv));
    }

    #[test]
    fn test_invalid_output_rejected() {
        assert!(build_command()
            .try_get_matches_from(["sloc", ".", "--output", "xml"])
            .is_err());
    }
}
