use std::collections::BTreeSet;

use covenant_core::types::Violation;

/// Mutable accumulation state for one policy check.
///
/// One instance serves exactly one check at a time; reuse requires a
/// [`reset`](WalkerState::reset). The violation list is append-only and kept
/// in traversal discovery order. The set-valued fields are ordered so the
/// aggregation phase — and therefore the final violation list — is
/// byte-identical across runs over the same tree.
#[derive(Debug)]
pub struct WalkerState {
    pub success: bool,
    pub violations: Vec<Violation>,
    /// Names bound to storage constructors at the top level.
    pub storage_names: BTreeSet<String>,
    /// Every (argument name, definition line) across all function definitions.
    pub visited_args: BTreeSet<(String, u32)>,
    /// (annotation spelling, definition line) per exported-function argument;
    /// `None` marks a missing annotation.
    pub arg_annotations: BTreeSet<(Option<String>, u32)>,
    /// (annotation spelling, definition line) per exported function carrying
    /// a return annotation.
    pub return_annotations: BTreeSet<(String, u32)>,
    pub saw_export: bool,
    pub saw_constructor: bool,
    /// Function names and import aliases gathered by the pre-pass.
    /// The collection contract predates this walker; no check consumes it.
    pub declared_names: Vec<String>,
}

impl WalkerState {
    pub fn new() -> Self {
        Self {
            success: true,
            violations: Vec::new(),
            storage_names: BTreeSet::new(),
            visited_args: BTreeSet::new(),
            arg_annotations: BTreeSet::new(),
            return_annotations: BTreeSet::new(),
            saw_export: false,
            saw_constructor: false,
            declared_names: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn push(&mut self, violation: Violation) {
        self.success = false;
        self.violations.push(violation);
    }
}

impl Default for WalkerState {
    fn default() -> Self {
        Self::new()
    }
}
