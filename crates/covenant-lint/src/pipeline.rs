//! Lint orchestration: run the policy check and an external checker over one
//! source unit, then merge, filter, and deduplicate their findings.
//!
//! The external general-purpose checker stays behind the
//! [`ExternalChecker`] seam; this module only parses its output shape.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use covenant_core::config::LintConfig;
use covenant_core::types::{Diagnostic, Violation};
use covenant_parse::parser::{syntax_error, ContractParser};

use crate::walker::Walker;

/// A general-purpose diagnostic tool run alongside the policy check.
///
/// Implementations emit raw diagnostic text, one finding per line, in the
/// shape `<string>:{line}:{col}: {message}` with 1-based positions.
pub trait ExternalChecker: Sync {
    fn check(&self, source: &str) -> Result<String, ExternalError>;
}

/// Failure inside an external checker; converted to a single message-only
/// diagnostic at the boundary.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ExternalError(pub String);

/// External checker that reports nothing: the policy engine runs alone.
pub struct NoExternalChecker;

impl ExternalChecker for NoExternalChecker {
    fn check(&self, _source: &str) -> Result<String, ExternalError> {
        Ok(String::new())
    }
}

/// Run all checks over one source unit and merge their findings.
///
/// Never panics and never returns an error: any failure surfaces as a single
/// message-only diagnostic, local to this source unit. An empty result means
/// the contract was accepted.
pub fn lint_source(
    source: &str,
    config: &LintConfig,
    external: &dyn ExternalChecker,
) -> Vec<Diagnostic> {
    if source.len() > config.max_source_size {
        return vec![Diagnostic::message_only(format!(
            "source exceeds maximum size of {} bytes",
            config.max_source_size
        ))];
    }

    // Both checkers always run to completion; results merge only afterwards,
    // policy violations first.
    let (policy, external_output) =
        rayon::join(|| run_policy_check(source, config), || external.check(source));

    let mut merged = match policy {
        Ok(diagnostics) => diagnostics,
        Err(message) => vec![Diagnostic::message_only(message)],
    };
    match external_output {
        Ok(text) => merged.extend(parse_external_output(&text, &config.whitelist_patterns)),
        Err(e) => merged.push(Diagnostic::message_only(e.to_string())),
    }

    deduplicate(merged)
}

fn run_policy_check(source: &str, config: &LintConfig) -> Result<Vec<Diagnostic>, String> {
    let mut parser = ContractParser::new().map_err(|e| e.to_string())?;
    let tree = parser.parse(source).map_err(|e| e.to_string())?;

    // Broken input surfaces as exactly one record carrying the parser's own
    // position; the walker never runs over a broken tree.
    if let Some(err) = syntax_error(&tree) {
        return Ok(vec![Diagnostic::positioned(
            "invalid syntax",
            err.line - 1,
            err.column - 1,
        )]);
    }

    let mut walker = Walker::with_max_depth(config.max_depth);
    let violations = walker.check(&tree, source.as_bytes());
    Ok(violations.iter().map(to_diagnostic).collect())
}

/// Policy violations use 1-based lines internally; 0 means "no location".
fn to_diagnostic(v: &Violation) -> Diagnostic {
    if v.line == 0 {
        Diagnostic::message_only(v.message())
    } else {
        Diagnostic::positioned(v.message(), v.line - 1, 0)
    }
}

fn external_line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^<string>:(\d+):(\d+):\s*(.+)$").unwrap())
}

fn location_suffix_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(<unknown>,\s*line\s*\d+\)$").unwrap())
}

/// Parse external-checker output, dropping messages about sandbox-injected
/// names. The whitelist never applies to policy violations.
fn parse_external_output(output: &str, whitelist: &[String]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = external_line_pattern().captures(line) else {
            continue;
        };
        let message = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
        if whitelist.iter().any(|p| message.contains(p.as_str())) {
            continue;
        }
        let row: u32 = caps[1].parse().unwrap_or(0);
        let col: u32 = caps[2].parse().unwrap_or(0);
        diagnostics.push(Diagnostic::positioned(
            message,
            row.saturating_sub(1),
            col.saturating_sub(1),
        ));
    }
    diagnostics
}

/// Strip a trailing `(<unknown>, line N)` location suffix.
fn standardize_message(message: &str) -> String {
    location_suffix_pattern().replace(message, "").to_string()
}

/// Remove duplicates by (message, line, col), preserving first-seen order.
fn deduplicate(diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut seen: HashSet<(String, Option<u32>, Option<u32>)> = HashSet::new();
    let mut unique = Vec::with_capacity(diagnostics.len());
    for mut d in diagnostics {
        d.message = standardize_message(&d.message);
        if seen.insert((d.message.clone(), d.line, d.col)) {
            unique.push(d);
        }
    }
    unique
}
