use crate::common::{check, count_rule};
use covenant_core::rules::Rule;

#[test]
fn test_every_whitelisted_spelling_is_accepted() {
    let spellings = [
        "dict",
        "list",
        "str",
        "int",
        "float",
        "bool",
        "datetime.timedelta",
        "datetime.datetime",
        "Any",
    ];
    for spelling in spellings {
        let source = format!("@export\ndef f(a: {spelling}):\n    pass\n");
        assert_eq!(check(&source), vec![], "annotation {spelling} must pass");
    }
}

#[test]
fn test_unlisted_spelling_rejected_with_detail() {
    let violations = check("@export\ndef f(a: bytes):\n    pass\n");
    assert_eq!(count_rule(&violations, Rule::IllegalAnnotation), 1);
    let v = violations
        .iter()
        .find(|v| v.rule == Rule::IllegalAnnotation)
        .unwrap();
    assert_eq!(
        v.message(),
        "S16- Illegal argument annotation used : bytes"
    );
}

#[test]
fn test_subscripted_annotation_rejected() {
    let violations = check("@export\ndef f(a: dict[str, int]):\n    pass\n");
    assert_eq!(count_rule(&violations, Rule::IllegalAnnotation), 1);
}

#[test]
fn test_missing_annotation_rejected() {
    let violations = check("@export\ndef f(amount):\n    pass\n");
    assert_eq!(count_rule(&violations, Rule::MissingAnnotation), 1);
}

#[test]
fn test_return_annotation_rejected() {
    let violations = check("@export\ndef f(a: int) -> bool:\n    pass\n");
    assert_eq!(count_rule(&violations, Rule::ReturnAnnotation), 1);
    let v = violations
        .iter()
        .find(|v| v.rule == Rule::ReturnAnnotation)
        .unwrap();
    assert!(v.message().ends_with(": bool"));
}

#[test]
fn test_unexported_functions_are_exempt() {
    let source = "\
@export
def f(a: int):
    pass

def helper(mystery) -> bytes:
    pass

@construct
def seed(initial):
    pass
";
    let violations = check(source);
    assert_eq!(count_rule(&violations, Rule::MissingAnnotation), 0);
    assert_eq!(count_rule(&violations, Rule::IllegalAnnotation), 0);
    assert_eq!(count_rule(&violations, Rule::ReturnAnnotation), 0);
}

#[test]
fn test_defaulted_arguments_follow_the_same_policy() {
    let violations = check("@export\ndef f(a: int = 1, b=2):\n    pass\n");
    assert_eq!(count_rule(&violations, Rule::MissingAnnotation), 1);
    assert_eq!(count_rule(&violations, Rule::IllegalAnnotation), 0);
}
