//! File collection for scanning
//!
//! Enumerates the regular files under a root in lexical path order. The order
//! is part of the output contract: the first file declaring a description
//! wins, so traversal must be deterministic.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{trace, warn};

/// Traversal options
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Maximum recursion depth (0 = only the root directory's own files)
    pub max_depth: Option<usize>,
    /// Skip dot-files and dot-directories
    pub skip_hidden: bool,
}

/// Collect all regular files under `root`.
///
/// Siblings are visited sorted by file name, so the result is in lexical
/// path order. No file-name filtering happens unless `skip_hidden` is set;
/// symlinks are not followed. Unreadable entries are logged and skipped.
pub fn collect_files(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(options.skip_hidden)
        .follow_links(false)
        .max_depth(options.max_depth.map(|depth| depth.saturating_add(1)))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    trace!("collected {}", entry.path().display());
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!("skipping unreadable entry: {}", e),
        }
    }
    files
}
