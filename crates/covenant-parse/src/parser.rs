use tree_sitter::{Node, Parser, Tree};

pub struct ContractParser {
    parser: Parser,
}

impl ContractParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
}

/// Location of the first syntax error in a tree, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// Find the first ERROR or MISSING node, depth-first.
///
/// Tree-sitter recovers from broken input by inserting such nodes rather
/// than failing the parse; callers surface the location as a single
/// positioned violation and never run the policy walker over the tree.
pub fn syntax_error(tree: &Tree) -> Option<SyntaxErrorLocation> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(location_of(node));
        }
        // Only subtrees flagged as erroneous can contain the error node.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                // The error flag was set but no ERROR/MISSING node was
                // reachable; fall back to the root position.
                return Some(location_of(root));
            }
        }
    }
}

fn location_of(node: Node) -> SyntaxErrorLocation {
    let pos = node.start_position();
    SyntaxErrorLocation {
        line: pos.row as u32 + 1,
        column: pos.column as u32 + 1,
    }
}
