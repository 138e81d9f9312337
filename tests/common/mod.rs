#![allow(dead_code)]

use covenant_core::rules::Rule;
use covenant_core::types::Violation;
use covenant_lint::Walker;
use covenant_parse::parser::ContractParser;

/// Parse and policy-check one source unit.
pub fn check(source: &str) -> Vec<Violation> {
    let mut parser = ContractParser::new().unwrap();
    let tree = parser.parse(source).unwrap();
    Walker::new().check(&tree, source.as_bytes())
}

pub fn count_rule(violations: &[Violation], rule: Rule) -> usize {
    violations.iter().filter(|v| v.rule == rule).count()
}

pub fn has_rule(violations: &[Violation], rule: Rule) -> bool {
    count_rule(violations, rule) > 0
}
