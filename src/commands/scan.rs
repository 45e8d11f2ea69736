//! Scan command handler - walk a tree and aggregate its tutorial metadata

use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, TutorialMetaError};
use crate::extract::extract_file;
use crate::indexing::{collect_files, WalkOptions};
use crate::report::{MergeOutcome, TutorialReport};

/// Run the scan command and return the rendered report
pub fn run_scan(cli: &Cli) -> Result<String> {
    let report = scan_tree(&cli.dir, &cli.walk_options())?;

    match cli.format {
        OutputFormat::Text => Ok(report.render_text(cli.keyword_order())),
        OutputFormat::Json => report.render_json(cli.keyword_order()),
    }
}

/// Scan every file under `root`, one at a time in lexical path order.
pub fn scan_tree(root: &Path, options: &WalkOptions) -> Result<TutorialReport> {
    if !root.is_dir() {
        return Err(TutorialMetaError::InvalidRootPath {
            path: root.display().to_string(),
        });
    }

    let files = collect_files(root, options);
    info!("scanning {} files under {}", files.len(), root.display());

    let mut report = TutorialReport::new();
    let mut contributing = 0usize;
    for path in &files {
        let result = match extract_file(path) {
            Ok(result) => result,
            Err(e) if e.is_recoverable() => {
                warn!("skipping file: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };
        if result.is_empty() {
            continue;
        }

        match report.merge(&result) {
            MergeOutcome::Accepted => {
                contributing += 1;
                if result.description.is_some()
                    && report.description() != result.description.as_deref()
                {
                    debug!(
                        "{}: description ignored, already set by an earlier file",
                        path.display()
                    );
                }
            }
            MergeOutcome::Rejected { expected, found } => {
                warn!(
                    "{}: declares tutorial #{} but the tree is tutorial #{}, file ignored",
                    path.display(),
                    found,
                    expected
                );
            }
        }
    }

    info!("{} files contributed tutorial metadata", contributing);
    if report.description().is_some() && report.keywords().is_empty() {
        warn!("failed to find any tutorial keywords");
    }
    Ok(report)
}
