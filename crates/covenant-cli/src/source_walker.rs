use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Expand CLI path arguments into the list of contract sources to lint.
///
/// Directory arguments are walked gitignore-aware; a `.covenantignore` file
/// adds project-specific exclusions. The result is sorted so lint output is
/// stable across runs.
pub fn collect_sources(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            sources.extend(walk_dir(path));
        } else {
            sources.push(path.clone());
        }
    }
    sources.sort();
    sources.dedup();
    sources
}

fn walk_dir(root: &Path) -> Vec<PathBuf> {
    let mut entries = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .add_custom_ignore_filename(".covenantignore")
        .build();

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.into_path();
        if path.extension().and_then(|e| e.to_str()) == Some("py") {
            entries.push(path);
        }
    }

    entries
}
