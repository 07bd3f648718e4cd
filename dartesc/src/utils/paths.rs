//! Path utilities for dartesc.
//!
//! This module consolidates path-related logic for:
//! - Cross-platform path normalization for display
//! - Directory exclusion matching
//! - Source file discovery

use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use dartesc::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\lib\\main.dart")), "lib/main.dart");
/// assert_eq!(normalize_display_path(Path::new("./lib/main.dart")), "lib/main.dart");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| {
        if let Some(suffix) = exclude.strip_prefix('*').filter(|s| s.starts_with('.')) {
            name.ends_with(suffix)
        } else {
            name == exclude
        }
    })
}

/// Collects files with the given extension under `root`, recursively.
///
/// Hidden files and directories are included. Ignore files (`.gitignore`,
/// `.ignore`, `.git/info/exclude`, global gitignore) are only honoured when
/// `respect_gitignore` is set. Directories whose name matches `exclude` are
/// not descended into. A `root` that is itself a matching file is returned
/// as the only candidate.
///
/// # Arguments
/// * `root` - Root directory to search
/// * `extension` - File extension without the leading dot (e.g. `dart`)
/// * `exclude` - Directory exclusion patterns
/// * `respect_gitignore` - Whether ignore files prune the walk
/// * `verbose` - Whether to print walk errors to stderr
///
/// # Returns
/// Matching file paths, sorted.
#[must_use]
pub fn collect_source_files(
    root: &Path,
    extension: &str,
    exclude: &[String],
    respect_gitignore: bool,
    verbose: bool,
) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let excludes_for_filter = exclude.to_vec();
    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(respect_gitignore)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .parents(respect_gitignore)
        .require_git(false)
        .filter_entry(move |entry| {
            // Always allow the root directory
            if entry.path() == root_for_filter {
                return true;
            }

            // Only filter directories - files are checked by extension below
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !is_excluded(name, &excludes_for_filter))
        })
        .build();

    let mut files = Vec::new();

    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == extension) {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                // Ignore walk errors silently unless verbose
                if verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files.sort();
    files
}
