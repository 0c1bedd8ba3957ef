//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use zeru_syntax::diagnostics::{CompileError, LineIndex};
use zeru_syntax::lexer::{Lexer, Token};
use zeru_syntax::{parse_source, printer};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str, max_errors: Option<usize>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (tokens, errors) = Lexer::new(&source).tokenize();
    print!("{}", dump_tokens(&source, &tokens));
    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(diagnostics_error(file_path, &source, &errors, max_errors))
    }
}

/// Parse and display the syntax tree outline.
///
/// The (possibly partial) tree is printed even when there are diagnostics.
pub fn parse_file(file_path: &str, max_errors: Option<usize>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = parse_source(&source);
    print!("{}", printer::render(&output.program));
    if output.has_errors() {
        Err(diagnostics_error(file_path, &source, &output.diagnostics, max_errors))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Check a file for lexical and syntax errors.
pub fn check_file(file_path: &str, max_errors: Option<usize>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    check_source(file_path, &source, max_errors)?;
    println!("✓ No syntax errors in {}", file_path);
    Ok(ExitCode::SUCCESS)
}

/// Scan and parse `source`, failing with rendered diagnostics if there are any.
pub fn check_source(file_path: &str, source: &str, max_errors: Option<usize>) -> CliResult<()> {
    let output = parse_source(source);
    tracing::info!(
        file = file_path,
        declarations = output.program.declarations.len(),
        diagnostics = output.diagnostics.len(),
        "checked source"
    );
    if output.has_errors() {
        return Err(diagnostics_error(file_path, source, &output.diagnostics, max_errors));
    }
    Ok(())
}

// ============================================================================
// Output formatting
// ============================================================================

/// One line per token: `line:col kind`.
pub fn dump_tokens(source: &str, tokens: &[Token]) -> String {
    let index = LineIndex::new(source);
    let mut out = String::new();
    for token in tokens {
        let (line, col) = index.line_col(token.span.start);
        out.push_str(&format!("{}:{} {}\n", line, col, token.kind));
    }
    out
}

/// Render diagnostics as graphical reports against the source, using the terminal's color support.
pub fn render_diagnostics(
    file_path: &str,
    source: &str,
    diagnostics: &[CompileError],
    max_errors: Option<usize>,
) -> String {
    render_with_theme(file_path, source, diagnostics, max_errors, GraphicalTheme::default())
}

fn render_with_theme(
    file_path: &str,
    source: &str,
    diagnostics: &[CompileError],
    max_errors: Option<usize>,
    theme: GraphicalTheme,
) -> String {
    let handler = GraphicalReportHandler::new_themed(theme);
    let shown = max_errors.unwrap_or(diagnostics.len()).min(diagnostics.len());

    let mut out = String::new();
    for err in &diagnostics[..shown] {
        let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        if handler.render_report(&mut out, &*report).is_err() {
            let (line, col) = LineIndex::new(source).line_col(err.span.start);
            out.push_str(&format!("{}:{}:{}: {}: {}\n", file_path, line, col, err.kind, err.message));
        }
    }

    let hidden = diagnostics.len() - shown;
    if hidden > 0 {
        out.push_str(&format!("... and {} more diagnostic(s)\n", hidden));
    }
    out.push_str(&format!("{} error(s) in {}", diagnostics.len(), file_path));
    out
}

fn diagnostics_error(
    file_path: &str,
    source: &str,
    diagnostics: &[CompileError],
    max_errors: Option<usize>,
) -> CliError {
    CliError::failure(render_diagnostics(file_path, source, diagnostics, max_errors))
}

// ============================================================================
// Tests
// ============================================================================
