use covenant_core::config::LintConfig;
use covenant_lint::{lint_source, ExternalChecker, NoExternalChecker};
use covenant_lint::pipeline::ExternalError;

struct FixedChecker(String);

impl ExternalChecker for FixedChecker {
    fn check(&self, _source: &str) -> Result<String, ExternalError> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_accepted_contract_yields_empty_result() {
    let source = "\
balances = Hash()

@export
def transfer(amount: float, to: str):
    balances[to] = amount
";
    let diagnostics = lint_source(source, &LintConfig::default(), &NoExternalChecker);
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_policy_first_then_external_in_discovery_order() {
    let external = FixedChecker(
        "<string>:5:1: undefined name 'frobnicate'\n<string>:2:3: local variable unused\n"
            .to_string(),
    );
    let source = "x = rt\n_y = 1\n";
    let diagnostics = lint_source(source, &LintConfig::default(), &external);

    // Everything before the split is policy output; everything after comes
    // from the external checker in its own order.
    let split = diagnostics
        .iter()
        .position(|d| !d.message.starts_with('S'))
        .unwrap_or(diagnostics.len());
    assert!(split >= 3, "policy violations must lead the merged list");
    assert!(diagnostics[0].message.contains("S14-"));
    assert!(diagnostics[1].message.contains("S2-"));
    let external_messages: Vec<&str> = diagnostics[split..]
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        external_messages,
        vec!["undefined name 'frobnicate'", "local variable unused"]
    );
}

#[test]
fn test_identical_findings_deduplicate_to_one() {
    // The policy engine reports an illegal builtin call twice (call site and
    // name reference); the merged result carries it once.
    let source = "\
@export
def f():
    eval('1')
";
    let diagnostics = lint_source(source, &LintConfig::default(), &NoExternalChecker);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("S14-"));
    assert_eq!(diagnostics[0].line, Some(2));
}

#[test]
fn test_whitelist_applies_only_to_external_output() {
    let external = FixedChecker(
        "<string>:1:1: undefined name 'Variable'\n<string>:1:1: undefined name 'frob'\n"
            .to_string(),
    );
    let source = "v = Variable\n\n@export\ndef f():\n    pass\n";
    let diagnostics = lint_source(source, &LintConfig::default(), &external);

    // The policy violation about `Variable` survives even though "Variable"
    // is a whitelist substring; the external one is filtered.
    assert!(diagnostics.iter().any(|d| d.message.contains("S14-")));
    assert!(diagnostics
        .iter()
        .all(|d| d.message != "undefined name 'Variable'"));
    assert!(diagnostics
        .iter()
        .any(|d| d.message == "undefined name 'frob'"));
}

#[test]
fn test_results_are_byte_identical_across_runs() {
    let source = "\
class Token:
    pass

_x = rt

@construct
def seed():
    import os
";
    let config = LintConfig::default();
    let first = lint_source(source, &config, &NoExternalChecker);
    let second = lint_source(source, &config, &NoExternalChecker);
    assert!(!first.is_empty());
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}
