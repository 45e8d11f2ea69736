//! Command handlers

pub mod scan;

pub use scan::{run_scan, scan_tree};
