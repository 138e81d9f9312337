use crate::common::{check, count_rule, has_rule};
use covenant_core::rules::Rule;

#[test]
fn test_class_anywhere_in_tree_is_rejected() {
    let top_level = "class Token:\n    pass\n";
    assert!(has_rule(&check(top_level), Rule::ClassDefinition));

    let nested = "\
if upgradable:
    class Patch:
        pass
";
    assert!(has_rule(&check(nested), Rule::ClassDefinition));
}

#[test]
fn test_forbidden_construct_nested_deep_is_caught() {
    let source = "\
@export
def f(flag: bool):
    if flag:
        while flag:
            x = lambda: 1
";
    assert!(has_rule(&check(source), Rule::IllegalSyntax));
}

#[test]
fn test_selective_import_is_exactly_one_violation() {
    for source in [
        "from os import path\n",
        "from token_interface import transfer\n",
        "from . import sibling\n",
    ] {
        let violations = check(source);
        assert_eq!(
            count_rule(&violations, Rule::ImportFrom),
            1,
            "expected exactly one selective-import violation for {source:?}"
        );
    }
}

#[test]
fn test_nested_import_reported_at_containing_block() {
    let source = "\
if ready:
    import helper_contract
";
    let violations = check(source);
    assert!(violations
        .iter()
        .any(|v| v.rule == Rule::NestedImport && v.line == 1));
}

#[test]
fn test_module_level_import_is_not_nested() {
    let source = "import token_interface\n\n@export\ndef f():\n    pass\n";
    assert!(!has_rule(&check(source), Rule::NestedImport));
}

#[test]
fn test_async_constructs_rejected() {
    let violations = check("async def poll():\n    pass\n");
    assert!(has_rule(&violations, Rule::AsyncFunction));

    let violations = check("@export\ndef f(xs: list):\n    for x in xs:\n        pass\n");
    assert!(!has_rule(&violations, Rule::IllegalSyntax));
}

#[test]
fn test_closures_rejected() {
    let source = "\
@export
def outer(a: int):
    def helper():
        pass
    helper()
";
    assert_eq!(count_rule(&check(source), Rule::NestedFunction), 1);
}

#[test]
fn test_wire_messages_carry_line_and_description() {
    let violations = check("class Token:\n    pass\n");
    let wire: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
    assert!(wire
        .iter()
        .any(|m| m == "Line 1: S6- Illicit use of classes"));
}
