use crate::common::{check, count_rule};
use covenant_core::rules::Rule;

#[test]
fn test_minimal_contract_is_accepted() {
    let source = "\
@export
def transfer(amount: float, to: str):
    balances[to] = amount
";
    assert_eq!(check(source), vec![]);
}

#[test]
fn test_zero_exports_is_exactly_one_violation() {
    let source = "\
def helper():
    pass

@construct
def seed():
    pass
";
    let violations = check(source);
    assert_eq!(count_rule(&violations, Rule::NoExportDecorator), 1);
    let v = violations
        .iter()
        .find(|v| v.rule == Rule::NoExportDecorator)
        .unwrap();
    assert_eq!(v.line, 0);
    assert_eq!(
        v.message(),
        "S13- No valid contracting decorator found"
    );
}

#[test]
fn test_more_than_one_export_is_tolerated() {
    let source = "\
@export
def a():
    pass

@export
def b():
    pass
";
    assert_eq!(check(source), vec![]);
}

#[test]
fn test_decorator_count_in_message() {
    let source = "\
@export
@construct
@export
def f():
    pass
";
    let violations = check(source);
    assert_eq!(count_rule(&violations, Rule::MultipleDecorators), 1);
    let v = violations
        .iter()
        .find(|v| v.rule == Rule::MultipleDecorators)
        .unwrap();
    assert!(v.message().contains("Detected: 3 MAX limit: 1"));
}

#[test]
fn test_second_constructor_anywhere_is_rejected() {
    let source = "\
@construct
def seed():
    pass

@export
def act():
    pass

@construct
def reseed():
    pass
";
    assert_eq!(count_rule(&check(source), Rule::MultipleConstructors), 1);
}

#[test]
fn test_unknown_decorator_names_rejected() {
    for bad in ["property", "exported", "owner_only"] {
        let source = format!("@{bad}\ndef f():\n    pass\n\n@export\ndef g():\n    pass\n");
        let violations = check(&source);
        assert_eq!(
            count_rule(&violations, Rule::InvalidDecorator),
            1,
            "decorator @{bad} must be rejected"
        );
    }
}
