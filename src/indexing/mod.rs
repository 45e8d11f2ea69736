//! Tree traversal
//!
//! The scan visits files strictly one at a time, in the order produced here.
//!
//! # Example
//!
//! ```ignore
//! use tutorial_metadata::indexing::{collect_files, WalkOptions};
//!
//! let files = collect_files(&root, &WalkOptions::default());
//! println!("{} files to scan", files.len());
//! ```

mod files;

pub use files::{collect_files, WalkOptions};
