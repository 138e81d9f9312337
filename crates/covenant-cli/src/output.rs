use covenant_core::types::LintReport;

pub trait OutputFormatter {
    fn format_report(&self, report: &LintReport) -> String;
}

/// Editor-style `file:line:col: message` lines plus a summary.
/// Diagnostics carry zero-based positions; terminal output is 1-based.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &LintReport) -> String {
        if report.diagnostics.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for d in &report.diagnostics {
            match (d.line, d.col) {
                (Some(line), Some(col)) => out.push_str(&format!(
                    "{}:{}:{}: {}\n",
                    report.file,
                    line + 1,
                    col + 1,
                    d.message
                )),
                _ => out.push_str(&format!("{}: {}\n", report.file, d.message)),
            }
        }
        out.push_str(&format!(
            "{} issue(s) in {}\n",
            report.diagnostics.len(),
            report.file
        ));
        out
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &LintReport) -> String {
        let mut out = serde_json::to_string_pretty(report).unwrap_or_default();
        out.push('\n');
        out
    }
}
