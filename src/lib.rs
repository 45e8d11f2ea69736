//! Tutorial metadata extractor
//!
//! Scans a directory tree whose files all belong to one tutorial and recovers
//! the tutorial's description and keywords from the comment block at the top
//! of each file:
//!
//! ```text
//! ## Tutorial #1: Tutorial example
//! ## KWords: example, installation
//! ```
//!
//! Every file's leading comments are classified with the comment syntax of its
//! language, matched for `Tutorial` and `KWords` declarations, and merged into
//! one [`TutorialReport`].
//!
//! # Example
//!
//! ```ignore
//! use tutorial_metadata::{scan_tree, KeywordOrder, WalkOptions};
//! use std::path::Path;
//!
//! let report = scan_tree(Path::new("tutorial/"), &WalkOptions::default())?;
//! println!("{}", report.render_text(KeywordOrder::FirstSeen));
//! ```

pub mod classify;
pub mod cli;
pub mod commands;
pub mod error;
pub mod extract;
pub mod indexing;
pub mod lang;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use classify::{classify, CommentPayload};
pub use cli::{Cli, OutputFormat};
pub use commands::{run_scan, scan_tree};
pub use error::{Result, TutorialMetaError};
pub use extract::{extract, extract_file, extract_lines, FileResult, RawLine};
pub use indexing::{collect_files, WalkOptions};
pub use lang::{profile_for, BlockMarkers, Lang, LangFamily, LanguageProfile};
pub use matcher::{Declaration, DeclarationMatcher, MatchState};
pub use report::{KeywordOrder, MergeOutcome, TutorialReport};
