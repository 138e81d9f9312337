//! Tree-sitter parsing and node classification for covenant.
//!
//! - [`parser`] — The [`ContractParser`](parser::ContractParser) wrapper over
//!   the Python grammar, plus syntax-error location extraction
//! - [`kind`] — Structural classification of grammar node kinds against the
//!   permitted subset

pub mod kind;
pub mod parser;
