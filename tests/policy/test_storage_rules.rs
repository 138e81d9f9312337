use crate::common::{check, count_rule, has_rule};
use covenant_core::rules::Rule;

#[test]
fn test_accepted_bindings_are_silent() {
    let source = "\
balances = Hash()
owner = Variable()
other = ForeignVariable(contract='registry', name='owner')
transfers = LogEvent(event='Transfer')

@export
def f():
    pass
";
    assert_eq!(check(source), vec![]);
}

#[test]
fn test_explicit_contract_keyword_rejected() {
    let violations = check("x = Variable(contract='foo')\n");
    assert_eq!(count_rule(&violations, Rule::OrmKeywordOverload), 1);
}

#[test]
fn test_explicit_name_keyword_rejected() {
    for source in [
        "x = Variable(name='foo')\n",
        "h = Hash(name='foo')\n",
        "e = LogEvent(name='foo')\n",
    ] {
        assert_eq!(
            count_rule(&check(source), Rule::OrmKeywordOverload),
            1,
            "expected keyword rejection for {source:?}"
        );
    }
}

#[test]
fn test_multiple_targets_rejected() {
    let violations = check("x, y = Hash()\n");
    assert_eq!(count_rule(&violations, Rule::OrmMultipleTargets), 1);

    let violations = check("pair = Hash(), Variable()\n");
    assert_eq!(count_rule(&violations, Rule::OrmMultipleTargets), 1);
}

#[test]
fn test_bare_constructor_reference_is_builtin_misuse() {
    let violations = check("h = Hash\n");
    assert!(has_rule(&violations, Rule::IllegalBuiltin));
}

#[test]
fn test_argument_reusing_storage_name_rejected_at_argument_line() {
    let source = "\
balances = Hash()
owner = Variable()

@export
def transfer(amount: float, balances: dict):
    pass
";
    let violations = check(source);
    assert_eq!(count_rule(&violations, Rule::OrmNameReuse), 1);
    assert!(violations
        .iter()
        .any(|v| v.rule == Rule::OrmNameReuse && v.line == 5));
}

#[test]
fn test_reuse_applies_to_unexported_functions_too() {
    let source = "\
owner = Variable()

@export
def f():
    pass

def helper(owner):
    pass
";
    assert_eq!(count_rule(&check(source), Rule::OrmNameReuse), 1);
}

#[test]
fn test_non_storage_assignments_untouched() {
    let source = "\
supply = 1000000
rate = compute(supply)

@export
def f():
    pass
";
    let violations = check(source);
    assert!(!has_rule(&violations, Rule::OrmKeywordOverload));
    assert!(!has_rule(&violations, Rule::OrmMultipleTargets));
}
