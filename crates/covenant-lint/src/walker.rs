//! The policy walker: one depth-first pass over a parsed tree, dispatching
//! per-kind checks and accumulating state for the aggregation phase.

use tree_sitter::{Node, Tree};

use covenant_core::catalog;
use covenant_core::rules::Rule;
use covenant_core::types::Violation;
use covenant_parse::kind::{
    classify, has_async_keyword, node_line, node_text, operator_text, NodeClass,
};

use crate::final_checks;
use crate::state::WalkerState;

pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Single-threaded, synchronous policy walker.
///
/// One walker performs exactly one check at a time; `check` resets the
/// accumulated state before every run, so an instance can be reused
/// sequentially but never shared across concurrent checks.
pub struct Walker {
    max_depth: usize,
    state: WalkerState,
}

impl Walker {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            state: WalkerState::new(),
        }
    }

    /// Run one full policy check over a parsed tree.
    ///
    /// Returns violations in discovery order; an empty list means the
    /// contract was accepted.
    pub fn check(&mut self, tree: &Tree, source: &[u8]) -> Vec<Violation> {
        self.state.reset();
        collect_declared_names(tree.root_node(), source, &mut self.state.declared_names);
        self.visit(tree.root_node(), source, 0);
        final_checks::run(&mut self.state);
        std::mem::take(&mut self.state.violations)
    }

    fn visit(&mut self, node: Node, source: &[u8], depth: usize) {
        if depth > self.max_depth {
            self.state.push(Violation::with_detail(
                Rule::IllegalSyntax,
                node_line(node),
                "maximum nesting depth exceeded",
            ));
            return;
        }

        match node.kind() {
            // Selective imports are rejected outright and not descended into.
            "import_from_statement" => {
                self.state
                    .push(Violation::new(Rule::ImportFrom, node_line(node)));
            }
            "import_statement" => self.check_import(node, source),
            "decorated_definition" => self.visit_decorated(node, source, depth),
            "function_definition" => self.visit_function(node, source, depth, &[]),
            "class_definition" => self.visit_class(node, source, depth),
            "assignment" => {
                self.check_storage_assignment(node, source);
                self.visit_children(node, source, depth);
            }
            "binary_operator" | "augmented_assignment" => {
                self.check_matrix_operator(node, source);
                self.visit_children(node, source, depth);
            }
            "call" => {
                self.check_call(node, source);
                self.visit_children(node, source, depth);
            }
            "attribute" => {
                // The attribute name is checked in place; only the object
                // side is a name reference in its own right.
                if let Some(attr) = node.child_by_field_name("attribute") {
                    self.check_attribute_name(node_text(attr, source), node_line(node));
                }
                if let Some(object) = node.child_by_field_name("object") {
                    self.visit(object, source, depth + 1);
                }
            }
            "identifier" => self.check_identifier(node_text(node, source), node_line(node)),
            "keyword_argument" => {
                // The keyword name itself is not a name reference.
                if let Some(value) = node.child_by_field_name("value") {
                    self.visit(value, source, depth + 1);
                }
            }
            "if_statement" | "elif_clause" => {
                if let Some(consequence) = node.child_by_field_name("consequence") {
                    self.check_block_imports(node_line(node), consequence);
                }
                self.visit_children(node, source, depth);
            }
            "else_clause" => {
                if let Some(body) = node.child_by_field_name("body") {
                    self.check_block_imports(node_line(node), body);
                }
                self.visit_children(node, source, depth);
            }
            "for_statement" => {
                if has_async_keyword(node) {
                    self.state
                        .push(Violation::new(Rule::IllegalSyntax, node_line(node)));
                }
                if let Some(body) = node.child_by_field_name("body") {
                    self.check_block_imports(node_line(node), body);
                }
                self.visit_children(node, source, depth);
            }
            "while_statement" => {
                if let Some(body) = node.child_by_field_name("body") {
                    self.check_block_imports(node_line(node), body);
                }
                self.visit_children(node, source, depth);
            }
            kind => {
                match classify(kind) {
                    NodeClass::Allowed => {}
                    NodeClass::Denied => self
                        .state
                        .push(Violation::new(Rule::IllegalSyntax, node_line(node))),
                    NodeClass::Unknown => self.state.push(Violation::with_detail(
                        Rule::IllegalSyntax,
                        node_line(node),
                        kind,
                    )),
                }
                self.visit_children(node, source, depth);
            }
        }
    }

    fn visit_children(&mut self, node: Node, source: &[u8], depth: usize) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child, source, depth + 1);
        }
    }

    // -- Identifier policy --

    fn check_identifier(&mut self, name: &str, line: u32) {
        self.check_system_name(name, line);
        if name == catalog::RUNTIME_HANDLE {
            self.state.push(Violation::new(Rule::IllegalBuiltin, line));
        }
        // `float` stays reachable for rounding-safe arithmetic.
        if catalog::illegal_builtins().contains(name) && name != "float" {
            self.state.push(Violation::new(Rule::IllegalBuiltin, line));
        }
    }

    fn check_attribute_name(&mut self, name: &str, line: u32) {
        self.check_system_name(name, line);
        if name == catalog::RUNTIME_HANDLE {
            self.state.push(Violation::new(Rule::IllegalBuiltin, line));
        }
    }

    fn check_system_name(&mut self, name: &str, line: u32) {
        if catalog::is_system_name(name) {
            self.state
                .push(Violation::with_detail(Rule::SystemVariable, line, name));
        }
    }

    // -- Imports --

    /// Simple imports may only name modules outside the host's standard
    /// library; sandbox-injected modules are re-admitted downstream by the
    /// boundary whitelist. Alias identifiers are not name references, so the
    /// statement is not descended into.
    fn check_import(&mut self, node: Node, source: &[u8]) {
        let line = node_line(node);
        let mut cursor = node.walk();
        for child in node.children_by_field_name("name", &mut cursor) {
            let module = match child.kind() {
                "dotted_name" => node_text(child, source),
                "aliased_import" => child
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source))
                    .unwrap_or(""),
                _ => continue,
            };
            if catalog::stdlib_modules().contains(module) {
                self.state.push(Violation::new(Rule::IllegalBuiltin, line));
            }
        }
    }

    fn check_block_imports(&mut self, container_line: u32, block: Node) {
        let mut cursor = block.walk();
        for stmt in block.named_children(&mut cursor) {
            if matches!(stmt.kind(), "import_statement" | "import_from_statement") {
                self.state
                    .push(Violation::new(Rule::NestedImport, container_line));
            }
        }
    }

    // -- Calls and operators --

    fn check_call(&mut self, node: Node, source: &[u8]) {
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };
        if callee.kind() != "identifier" {
            return;
        }
        let name = node_text(callee, source);
        if catalog::illegal_builtins().contains(name) && name != "float" {
            self.state
                .push(Violation::new(Rule::IllegalBuiltin, node_line(node)));
        }
    }

    /// The grammar has no distinct kind for the matrix-multiply operator.
    fn check_matrix_operator(&mut self, node: Node, source: &[u8]) {
        if let Some(op) = operator_text(node, source) {
            if op == "@" || op == "@=" {
                self.state
                    .push(Violation::new(Rule::IllegalSyntax, node_line(node)));
            }
        }
    }

    // -- Storage assignments --

    fn check_storage_assignment(&mut self, node: Node, source: &[u8]) {
        let line = node_line(node);
        let Some(right) = node.child_by_field_name("right") else {
            return;
        };

        // A storage constructor used as a value rather than called.
        if right.kind() == "identifier" {
            let name = node_text(right, source);
            if catalog::KEYWORD_GUARDED_CONSTRUCTORS.contains(&name) {
                self.state.push(Violation::new(Rule::IllegalBuiltin, line));
            }
            return;
        }

        // A tuple of direct constructor calls can never be a single binding.
        if matches!(right.kind(), "tuple" | "expression_list") {
            let mut cursor = right.walk();
            let has_storage_call = right
                .named_children(&mut cursor)
                .any(|c| storage_constructor_name(c, source).is_some());
            if has_storage_call {
                self.state
                    .push(Violation::new(Rule::OrmMultipleTargets, line));
            }
            return;
        }

        let Some(ctor) = storage_constructor_name(right, source) else {
            return;
        };

        if catalog::KEYWORD_GUARDED_CONSTRUCTORS.contains(&ctor)
            && call_has_reserved_keyword(right, source)
        {
            self.state
                .push(Violation::new(Rule::OrmKeywordOverload, line));
        }

        if let Some(left) = node.child_by_field_name("left") {
            match left.kind() {
                "pattern_list" | "tuple" => {
                    self.state
                        .push(Violation::new(Rule::OrmMultipleTargets, line));
                }
                "identifier" => {
                    // Recorded even when the binding was flagged, so later
                    // argument names still collide with it.
                    self.state
                        .storage_names
                        .insert(node_text(left, source).to_string());
                }
                _ => {} // attribute/subscript targets are not storage bindings
            }
        }
    }

    // -- Definitions --

    fn visit_decorated(&mut self, node: Node, source: &[u8], depth: usize) {
        let mut decorators = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "decorator" {
                decorators.push(child);
            }
        }
        match node.child_by_field_name("definition") {
            Some(def) if def.kind() == "function_definition" => {
                self.visit_function(def, source, depth, &decorators);
            }
            Some(def) => {
                for d in &decorators {
                    self.visit(*d, source, depth + 1);
                }
                self.visit(def, source, depth + 1);
            }
            None => self.visit_children(node, source, depth),
        }
    }

    fn visit_class(&mut self, node: Node, source: &[u8], depth: usize) {
        let line = node_line(node);
        self.state.push(Violation::new(Rule::ClassDefinition, line));
        self.state.push(Violation::new(Rule::IllegalSyntax, line));

        // The class name is a definition, not a reference; everything else
        // inside the illegal class is still traversed.
        let name_id = node.child_by_field_name("name").map(|n| n.id());
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if Some(child.id()) == name_id {
                continue;
            }
            self.visit(child, source, depth + 1);
        }
    }

    fn visit_function(&mut self, node: Node, source: &[u8], depth: usize, decorators: &[Node]) {
        let line = node_line(node);

        if has_async_keyword(node) {
            self.state.push(Violation::new(Rule::AsyncFunction, line));
            self.state.push(Violation::new(Rule::IllegalSyntax, line));
            // No decorator machine and no signature collection inside an
            // async definition; only the generic per-node checks apply.
            for d in decorators {
                self.visit(*d, source, depth + 1);
            }
            if let Some(params) = node.child_by_field_name("parameters") {
                self.collect_parameters(params, source, depth, line, false, false);
            }
            if let Some(ret) = node.child_by_field_name("return_type") {
                self.visit(ret, source, depth + 1);
            }
            if let Some(body) = node.child_by_field_name("body") {
                self.visit(body, source, depth + 1);
            }
            return;
        }

        if decorators.len() > 1 {
            self.state.push(Violation::with_detail(
                Rule::MultipleDecorators,
                line,
                format!("Detected: {} MAX limit: 1", decorators.len()),
            ));
        }

        let mut exported = false;
        for d in decorators {
            let Some(expr) = d.named_child(0) else { continue };
            if expr.kind() != "identifier" {
                continue;
            }
            let name = node_text(expr, source);
            if !catalog::is_valid_decorator(name) {
                self.state.push(Violation::with_detail(
                    Rule::InvalidDecorator,
                    line,
                    format!(
                        "valid list: {{{}, {}}}",
                        catalog::EXPORT_DECORATOR,
                        catalog::CONSTRUCT_DECORATOR
                    ),
                ));
            }
            if name == catalog::EXPORT_DECORATOR {
                self.state.saw_export = true;
                exported = true;
            }
            if name == catalog::CONSTRUCT_DECORATOR {
                if self.state.saw_constructor {
                    self.state
                        .push(Violation::new(Rule::MultipleConstructors, line));
                }
                self.state.saw_constructor = true;
            }
        }

        for d in decorators {
            self.visit(*d, source, depth + 1);
        }

        let body = node.child_by_field_name("body");
        if let Some(body) = body {
            self.check_block_imports(line, body);
            self.check_nested_functions(line, body);
        }

        if let Some(params) = node.child_by_field_name("parameters") {
            self.collect_parameters(params, source, depth, line, true, exported);
        }

        if let Some(ret) = node.child_by_field_name("return_type") {
            if exported {
                self.state
                    .return_annotations
                    .insert((node_text(ret, source).to_string(), line));
            }
            self.visit(ret, source, depth + 1);
        }

        if let Some(body) = body {
            self.visit(body, source, depth + 1);
        }
    }

    /// No closures: a function body may not directly contain another
    /// function definition.
    fn check_nested_functions(&mut self, fn_line: u32, block: Node) {
        let mut cursor = block.walk();
        for stmt in block.named_children(&mut cursor) {
            let inner = match stmt.kind() {
                "function_definition" => Some(stmt),
                "decorated_definition" => stmt
                    .child_by_field_name("definition")
                    .filter(|d| d.kind() == "function_definition"),
                _ => None,
            };
            if let Some(def) = inner {
                if !has_async_keyword(def) {
                    self.state
                        .push(Violation::new(Rule::NestedFunction, fn_line));
                }
            }
        }
    }

    /// Walk a parameter list: record positional (argument, line) pairs and —
    /// for exported functions — annotation spellings, then visit annotation
    /// and default-value expressions. Parameter names themselves are
    /// definitions, not name references.
    fn collect_parameters(
        &mut self,
        params: Node,
        source: &[u8],
        depth: usize,
        fn_line: u32,
        record: bool,
        exported: bool,
    ) {
        let mut keyword_only = false;
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            match param.kind() {
                "keyword_separator" => keyword_only = true,
                "identifier" => {
                    if record && !keyword_only {
                        let name = node_text(param, source).to_string();
                        self.state.visited_args.insert((name, fn_line));
                        if exported {
                            self.state.arg_annotations.insert((None, fn_line));
                        }
                    }
                }
                "typed_parameter" => {
                    let annotation = param.child_by_field_name("type");
                    let name = param.named_child(0).filter(|n| n.kind() == "identifier");
                    if record && !keyword_only {
                        if let Some(name) = name {
                            self.state
                                .visited_args
                                .insert((node_text(name, source).to_string(), fn_line));
                            if exported {
                                self.state.arg_annotations.insert((
                                    annotation.map(|a| node_text(a, source).to_string()),
                                    fn_line,
                                ));
                            }
                        }
                    }
                    if let Some(a) = annotation {
                        self.visit(a, source, depth + 1);
                    }
                }
                "default_parameter" => {
                    let name = param
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "identifier");
                    if record && !keyword_only {
                        if let Some(name) = name {
                            self.state
                                .visited_args
                                .insert((node_text(name, source).to_string(), fn_line));
                            if exported {
                                self.state.arg_annotations.insert((None, fn_line));
                            }
                        }
                    }
                    if let Some(value) = param.child_by_field_name("value") {
                        self.visit(value, source, depth + 1);
                    }
                }
                "typed_default_parameter" => {
                    let annotation = param.child_by_field_name("type");
                    let name = param
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "identifier");
                    if record && !keyword_only {
                        if let Some(name) = name {
                            self.state
                                .visited_args
                                .insert((node_text(name, source).to_string(), fn_line));
                            if exported {
                                self.state.arg_annotations.insert((
                                    annotation.map(|a| node_text(a, source).to_string()),
                                    fn_line,
                                ));
                            }
                        }
                    }
                    if let Some(a) = annotation {
                        self.visit(a, source, depth + 1);
                    }
                    if let Some(value) = param.child_by_field_name("value") {
                        self.visit(value, source, depth + 1);
                    }
                }
                // *args / **kwargs are not positional arguments.
                "list_splat_pattern" | "dictionary_splat_pattern" => {}
                _ => {}
            }
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

fn storage_constructor_name<'a>(call: Node<'a>, source: &'a [u8]) -> Option<&'a str> {
    if call.kind() != "call" {
        return None;
    }
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "identifier" {
        return None;
    }
    let name = node_text(callee, source);
    catalog::is_storage_constructor(name).then_some(name)
}

fn call_has_reserved_keyword(call: Node, source: &[u8]) -> bool {
    let Some(args) = call.child_by_field_name("arguments") else {
        return false;
    };
    let mut cursor = args.walk();
    let has_reserved = args.named_children(&mut cursor).any(|arg| {
        arg.kind() == "keyword_argument"
            && arg.child_by_field_name("name").is_some_and(|n| {
                catalog::RESERVED_STORAGE_KEYWORDS.contains(&node_text(n, source))
            })
    });
    has_reserved
}

/// Pre-pass over the whole tree: function names plus import aliases.
/// The collection contract predates this walker; no check consumes it.
fn collect_declared_names(root: Node, source: &[u8], out: &mut Vec<String>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.kind() {
            "function_definition" => {
                if let Some(name) = node.child_by_field_name("name") {
                    out.push(node_text(name, source).to_string());
                }
            }
            "import_statement" | "import_from_statement" => {
                let mut cursor = node.walk();
                for child in node.children_by_field_name("name", &mut cursor) {
                    match child.kind() {
                        "aliased_import" => {
                            if let Some(alias) = child.child_by_field_name("alias") {
                                out.push(node_text(alias, source).to_string());
                            }
                        }
                        "dotted_name" => {
                            if let Some(last) = node_text(child, source).rsplit('.').next() {
                                out.push(last.to_string());
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            stack.push(child);
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
