//! Structural classification of grammar node kinds.
//!
//! The permitted subset is a fixed catalog: a kind is either on the
//! allow-list, on the explicit deny-list (constructs called out for clearer
//! diagnostics), or unknown. Unknown and denied kinds are both rejected;
//! denied kinds report the bare catalog message while unknown kinds report
//! the construct name alongside it.

use tree_sitter::Node;

/// Structural verdict for a single grammar node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Allowed,
    Denied,
    Unknown,
}

pub fn classify(kind: &str) -> NodeClass {
    match kind {
        // Explicitly banned constructs.
        "class_definition"
        | "lambda"
        | "lambda_parameters"
        | "yield"
        | "await"
        | "try_statement"
        | "with_statement"
        | "with_clause"
        | "with_item"
        | "generator_expression"
        | "global_statement"
        | "nonlocal_statement"
        | "ellipsis" => NodeClass::Denied,

        // The permitted construct set.
        "module"
        | "comment"
        | "line_continuation"
        // imports (simple form; the selective form is intercepted upstream)
        | "import_statement"
        | "dotted_name"
        | "aliased_import"
        // statements
        | "expression_statement"
        | "assignment"
        | "augmented_assignment"
        | "assert_statement"
        | "return_statement"
        | "pass_statement"
        | "if_statement"
        | "elif_clause"
        | "else_clause"
        | "for_statement"
        | "while_statement"
        | "block"
        // function definitions
        | "function_definition"
        | "decorated_definition"
        | "decorator"
        | "parameters"
        | "typed_parameter"
        | "default_parameter"
        | "typed_default_parameter"
        | "list_splat_pattern"
        | "dictionary_splat_pattern"
        | "keyword_separator"
        | "positional_separator"
        | "type"
        // expressions
        | "call"
        | "argument_list"
        | "keyword_argument"
        | "list_splat"
        | "dictionary_splat"
        | "attribute"
        | "subscript"
        | "slice"
        | "identifier"
        | "binary_operator"
        | "unary_operator"
        | "not_operator"
        | "boolean_operator"
        | "comparison_operator"
        | "parenthesized_expression"
        | "pattern_list"
        | "expression_list"
        // literals and containers
        | "integer"
        | "float"
        | "true"
        | "false"
        | "none"
        | "string"
        | "string_start"
        | "string_content"
        | "string_end"
        | "escape_sequence"
        | "concatenated_string"
        | "tuple"
        | "list"
        | "set"
        | "dictionary"
        | "pair"
        // comprehensions (list form only)
        | "list_comprehension"
        | "for_in_clause"
        | "if_clause" => NodeClass::Allowed,

        _ => NodeClass::Unknown,
    }
}

/// True when the construct carries the `async` keyword.
///
/// The grammar marks async defs, loops and context blocks with a leading
/// token rather than a distinct node kind.
pub fn has_async_keyword(node: Node) -> bool {
    let mut cursor = node.walk();
    let has_async = node.children(&mut cursor).any(|c| c.kind() == "async");
    has_async
}

/// Operator token text of a binary or augmented-assignment node.
pub fn operator_text<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("operator")
        .and_then(|op| op.utf8_text(source).ok())
}

/// 1-based start line of a node.
pub fn node_line(node: Node) -> u32 {
    node.start_position().row as u32 + 1
}

pub fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}
