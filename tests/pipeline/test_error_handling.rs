use covenant_core::config::LintConfig;
use covenant_lint::pipeline::ExternalError;
use covenant_lint::{lint_source, ExternalChecker, NoExternalChecker};

struct PanickyChecker;

impl ExternalChecker for PanickyChecker {
    fn check(&self, _source: &str) -> Result<String, ExternalError> {
        Err(ExternalError("general checker exploded".to_string()))
    }
}

#[test]
fn test_unparsable_source_is_one_positioned_record() {
    let diagnostics = lint_source(
        "def broken(:\n    pass\n",
        &LintConfig::default(),
        &NoExternalChecker,
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "invalid syntax");
    assert_eq!(diagnostics[0].line, Some(0));
    assert!(diagnostics[0].col.is_some());
}

#[test]
fn test_external_failure_is_one_message_only_record() {
    let source = "@export\ndef f(a: int):\n    pass\n";
    let diagnostics = lint_source(source, &LintConfig::default(), &PanickyChecker);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "general checker exploded");
    assert_eq!(diagnostics[0].line, None);
    assert_eq!(diagnostics[0].col, None);
}

#[test]
fn test_external_failure_never_masks_policy_findings() {
    let diagnostics = lint_source("x = rt\n", &LintConfig::default(), &PanickyChecker);
    assert!(diagnostics.iter().any(|d| d.message.contains("S14-")));
    assert!(diagnostics
        .iter()
        .any(|d| d.message == "general checker exploded"));
}

#[test]
fn test_oversized_source_is_rejected_up_front() {
    let config = LintConfig {
        max_source_size: 64,
        ..LintConfig::default()
    };
    let source = format!("@export\ndef f():\n    x = {}\n", "'a' + ".repeat(64) + "'a'");
    let diagnostics = lint_source(&source, &config, &NoExternalChecker);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("maximum size"));
}

#[test]
fn test_adversarially_deep_source_terminates_with_rejection() {
    let config = LintConfig {
        max_depth: 64,
        ..LintConfig::default()
    };
    let source = format!(
        "@export\ndef f():\n    x = {}1{}\n",
        "(".repeat(256),
        ")".repeat(256)
    );
    let diagnostics = lint_source(&source, &config, &NoExternalChecker);
    assert!(diagnostics
        .iter()
        .any(|d| d.message.contains("maximum nesting depth exceeded")));
}

#[test]
fn test_empty_source_only_misses_an_export() {
    let diagnostics = lint_source("", &LintConfig::default(), &NoExternalChecker);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("S13-"));
}
