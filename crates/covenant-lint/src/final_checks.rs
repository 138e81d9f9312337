//! Aggregate invariants evaluated strictly after traversal.
//!
//! These checks consume only the accumulated [`WalkerState`]: several of
//! them (storage-name shadowing, the single-export requirement) are only
//! decidable once the entire tree has been seen.

use covenant_core::catalog;
use covenant_core::rules::Rule;
use covenant_core::types::Violation;

use crate::state::WalkerState;

pub fn run(state: &mut WalkerState) {
    // An argument name must never shadow a storage binding.
    let collisions: Vec<u32> = state
        .visited_args
        .iter()
        .filter(|(name, _)| state.storage_names.contains(name))
        .map(|(_, line)| *line)
        .collect();
    for line in collisions {
        state.push(Violation::new(Rule::OrmNameReuse, line));
    }

    // At least one exported entry point must exist. The rejection has no
    // specific location; line 0 marks a message-only record outward.
    if !state.saw_export {
        state.push(Violation::new(Rule::NoExportDecorator, 0));
    }

    let annotations: Vec<(Option<String>, u32)> =
        state.arg_annotations.iter().cloned().collect();
    for (annotation, line) in annotations {
        match annotation {
            None => state.push(Violation::new(Rule::MissingAnnotation, line)),
            Some(spelling) if !catalog::allowed_annotations().contains(spelling.as_str()) => {
                state.push(Violation::with_detail(Rule::IllegalAnnotation, line, spelling));
            }
            Some(_) => {}
        }
    }

    // Exported functions must not declare a return type at all.
    let returns: Vec<(String, u32)> = state.return_annotations.iter().cloned().collect();
    for (spelling, line) in returns {
        state.push(Violation::with_detail(Rule::ReturnAnnotation, line, spelling));
    }
}
