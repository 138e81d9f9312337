//! covenant CLI — load-time policy linting for contract source.
//!
//! Lints each given file (directories are walked for `.py` sources) against
//! the contracting policy and prints diagnostics in human or JSON form.
//! Exit code 1 when any diagnostic was produced.

use clap::Parser;
use rayon::prelude::*;

mod cli_args;
mod output;
mod source_walker;

use cli_args::Cli;
use covenant_core::config::LintConfig;
use covenant_core::types::{Diagnostic, LintReport};
use covenant_lint::{lint_source, NoExternalChecker};

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LintConfig::load(path),
        None => LintConfig::default(),
    };

    let formatter: Box<dyn output::OutputFormatter> = if cli.json {
        Box::new(output::JsonFormatter)
    } else {
        Box::new(output::HumanFormatter)
    };

    let files = source_walker::collect_sources(&cli.paths);
    if files.is_empty() {
        eprintln!("covenant: warning: no contract sources found");
        std::process::exit(2);
    }

    // Each source unit lints independently; one failure never affects
    // another.
    let reports: Vec<LintReport> = files
        .par_iter()
        .map(|path| {
            let display = path.display().to_string();
            let source = match std::fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    return LintReport::new(
                        display,
                        vec![Diagnostic::message_only(format!("failed to read source: {e}"))],
                    );
                }
            };
            let diagnostics = lint_source(&source, &config, &NoExternalChecker);
            LintReport::new(display, diagnostics)
        })
        .collect();

    let mut exit_code = 0;
    for report in &reports {
        let rendered = formatter.format_report(report);
        if !rendered.is_empty() {
            print!("{rendered}");
        }
        if report.status != "ok" {
            exit_code = 1;
        }
    }
    if cli.verbose && exit_code == 0 {
        eprintln!("covenant: {} file(s) clean", reports.len());
    }

    std::process::exit(exit_code);
}
