//! Aggregated tutorial report
//!
//! One report accumulates the [`FileResult`]s of a whole tree: the first
//! non-empty description wins, keywords are unioned in first-seen order, and
//! files declaring a different tutorial number than the one already pinned are
//! discarded entirely.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::extract::FileResult;

/// Order in which keywords are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordOrder {
    /// Order of first appearance in traversal order
    #[default]
    FirstSeen,
    /// Alphabetical (byte-wise)
    Alphabetical,
}

/// What [`TutorialReport::merge`] did with a file's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Accepted,
    /// The file belongs to another tutorial; nothing was merged
    Rejected { expected: u64, found: u64 },
}

/// Tutorial metadata accumulated over a whole tree
#[derive(Debug, Clone, Default)]
pub struct TutorialReport {
    description: Option<String>,
    tutorial_number: Option<u64>,
    keywords: Vec<String>,
    seen: HashSet<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    description: Option<&'a str>,
    tutorial_number: Option<u64>,
    keywords: Vec<&'a str>,
}

impl TutorialReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tutorial_number(&self) -> Option<u64> {
        self.tutorial_number
    }

    /// Keywords in first-seen order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.keywords.is_empty()
    }

    /// Merge one file's result into the report.
    ///
    /// Merging the same result twice leaves the report unchanged.
    pub fn merge(&mut self, result: &FileResult) -> MergeOutcome {
        if let (Some(expected), Some(found)) = (self.tutorial_number, result.tutorial_number) {
            if expected != found {
                return MergeOutcome::Rejected { expected, found };
            }
        }

        if self.tutorial_number.is_none() {
            self.tutorial_number = result.tutorial_number;
        }

        if self.description.is_none() {
            if let Some(description) = result.description.as_ref().filter(|d| !d.is_empty()) {
                self.description = Some(description.clone());
            }
        }

        for keyword in &result.keywords {
            if !keyword.is_empty() && self.seen.insert(keyword.clone()) {
                self.keywords.push(keyword.clone());
            }
        }

        MergeOutcome::Accepted
    }

    /// Keywords in the requested order
    pub fn ordered_keywords(&self, order: KeywordOrder) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        if order == KeywordOrder::Alphabetical {
            keywords.sort_unstable();
        }
        keywords
    }

    /// The two-line text report, both lines always present
    pub fn render_text(&self, order: KeywordOrder) -> String {
        format!(
            "Tutorial: {}\nKWords: {}",
            self.description().unwrap_or(""),
            self.ordered_keywords(order).join(", ")
        )
    }

    pub fn render_json(&self, order: KeywordOrder) -> Result<String> {
        let report = JsonReport {
            description: self.description(),
            tutorial_number: self.tutorial_number,
            keywords: self.ordered_keywords(order),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
