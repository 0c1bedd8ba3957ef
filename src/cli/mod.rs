//! CLI module for the Zeru frontend
//!
//! This module provides the command-line interface for the scanner and parser.
//!
//! ## Usage
//!
//! - `zeru <file>` - Check a file for lexical and syntax errors
//! - `zeru --lex <file>` - Dump the token stream (debug)
//! - `zeru --parse <file>` - Print the syntax tree outline (debug)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and parser for the Zeru programming language
#[derive(Parser, Debug)]
#[command(name = "zeru")]
#[command(version = VERSION)]
#[command(about = "Scanner and parser for the Zeru programming language", long_about = None)]
pub struct Cli {
    /// File to check for lexical and syntax errors
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the syntax tree (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub parse_file: Option<PathBuf>,

    /// Print at most N diagnostics
    #[arg(long = "max-errors", value_name = "N")]
    pub max_errors: Option<usize>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let limit = cli.max_errors;

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), limit);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), limit);
    }

    match cli.file {
        Some(file) => commands::check_file(&file.to_string_lossy(), limit),
        None => Err(CliError::failure("Error: no input file (try `zeru --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["zeru", "main.zr"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("main.zr")));
        assert!(cli.max_errors.is_none());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["zeru", "--lex", "main.zr"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["zeru", "--parse", "main.zr", "--max-errors", "3"]).unwrap();
        assert!(cli.parse_file.is_some());
        assert_eq!(cli.max_errors, Some(3));
    }

    #[test]
    fn test_cli_rejects_conflicting_modes() {
        assert!(Cli::try_parse_from(["zeru", "a.zr", "--lex", "b.zr"]).is_err());
        assert!(Cli::try_parse_from(["zeru", "--lex", "a.zr", "--parse", "b.zr"]).is_err());
        assert!(Cli::try_parse_from(["zeru", "--max-errors", "many", "a.zr"]).is_err());
    }

    #[test]
    fn test_missing_file_is_a_failure() {
        let cli = Cli::try_parse_from(["zeru"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.to_string().contains("no input file"));
    }
}
