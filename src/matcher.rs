//! Declaration matching
//!
//! A per-file state machine fed with classified lines. It recognizes the
//! `Tutorial` heading, its continuation lines, and the `KWords` lines that
//! follow, and stops at the end of the leading comment block.
//!
//! ```text
//! Scanning --tutorial--> InTutorial --kwords--> InKwords
//!     |                      |                     |
//!     +--------- non-comment / second heading -----+--> Done
//! ```
//!
//! Empty comment lines such as a lone `##` never change the state.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{trace, warn};

use crate::classify::CommentPayload;
use crate::utils::{normalize_whitespace, truncate_with_ellipsis};

/// `Tutorial`, optional `#2` numbering, then separator punctuation.
///
/// A bare number (`Tutorial 2024: ...`) is part of the text.
static TUTORIAL_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:tutorial)\b\s*(?:#\s*(?P<number>\d+))?\s*[:\-#]*\s*(?P<rest>.*)$")
        .expect("tutorial marker regex is valid")
});

static KWORDS_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:kwords)\b\s*(?:#\s*\d+)?\s*[:\-#]*\s*(?P<rest>.*)$")
        .expect("kwords marker regex is valid")
});

/// Characters that on their own never make a keyword
const COMMENT_PUNCTUATION: &str = "#/*;%-\\()";

/// Matcher state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    /// Looking for the tutorial heading
    #[default]
    Scanning,
    /// Collecting description lines
    InTutorial,
    /// Collecting keyword lines
    InKwords,
    /// Leading comment block is over
    Done,
}

/// A declaration recovered from the leading comment block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Tutorial { number: Option<u64>, text: String },
    Kwords(Vec<String>),
}

/// Stateful matcher for one file
#[derive(Debug, Default)]
pub struct DeclarationMatcher {
    state: MatchState,
    number: Option<u64>,
    fragments: Vec<String>,
    keywords: Vec<String>,
    declarations: Vec<Declaration>,
}

impl DeclarationMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == MatchState::Done
    }

    /// Feed the next line: `None` for a non-comment line.
    pub fn feed(&mut self, payload: Option<CommentPayload<'_>>) -> MatchState {
        let next = match (self.state, payload) {
            (MatchState::Done, _) => MatchState::Done,
            (_, None) => MatchState::Done,
            (MatchState::Scanning, Some(p)) => self.scanning(p.text()),
            (MatchState::InTutorial, Some(p)) => self.in_tutorial(p.text()),
            (MatchState::InKwords, Some(p)) => self.in_kwords(p.text()),
        };

        if next == MatchState::Done {
            self.close();
        }
        if next != self.state {
            trace!(from = ?self.state, to = ?next, "matcher transition");
        }
        self.state = next;
        next
    }

    /// Close any open declaration and return everything matched.
    pub fn finish(mut self) -> Vec<Declaration> {
        self.close();
        self.declarations
    }

    fn scanning(&mut self, text: &str) -> MatchState {
        if let Some(caps) = TUTORIAL_MARKER.captures(text) {
            self.number = tutorial_number(&caps);
            self.push_fragment(&caps["rest"]);
            MatchState::InTutorial
        } else if KWORDS_MARKER.is_match(text) {
            warn!(
                "keywords before any tutorial line, ignored: '{}'",
                truncate_with_ellipsis(text, 60)
            );
            MatchState::Scanning
        } else {
            MatchState::Scanning
        }
    }

    fn in_tutorial(&mut self, text: &str) -> MatchState {
        if text.is_empty() {
            return MatchState::InTutorial;
        }
        if TUTORIAL_MARKER.is_match(text) {
            return MatchState::Done;
        }

        match KWORDS_MARKER.captures(text) {
            Some(caps) => {
                self.close();
                self.push_keywords(&caps["rest"]);
                MatchState::InKwords
            }
            None => {
                self.push_fragment(text);
                MatchState::InTutorial
            }
        }
    }

    fn in_kwords(&mut self, text: &str) -> MatchState {
        if text.is_empty() {
            return MatchState::InKwords;
        }
        if TUTORIAL_MARKER.is_match(text) {
            return MatchState::Done;
        }

        match KWORDS_MARKER.captures(text) {
            Some(caps) => self.push_keywords(&caps["rest"]),
            None => self.push_keywords(text),
        }
        MatchState::InKwords
    }

    fn push_fragment(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.fragments.push(text.to_string());
        }
    }

    fn push_keywords(&mut self, list: &str) {
        for keyword in list.split(',').map(normalize_whitespace) {
            if is_meaningful(&keyword) && !self.keywords.contains(&keyword) {
                self.keywords.push(keyword);
            }
        }
    }

    /// Emit the declaration of the current state, if one is open.
    fn close(&mut self) {
        match self.state {
            MatchState::InTutorial => {
                let text = normalize_whitespace(&self.fragments.join(" "));
                self.fragments.clear();
                self.declarations.push(Declaration::Tutorial {
                    number: self.number,
                    text,
                });
            }
            MatchState::InKwords => {
                let keywords = std::mem::take(&mut self.keywords);
                self.declarations.push(Declaration::Kwords(keywords));
            }
            MatchState::Scanning | MatchState::Done => {}
        }
    }
}

/// Digits only, so parsing can only fail on overflow: saturate.
fn tutorial_number(caps: &Captures<'_>) -> Option<u64> {
    caps.name("number").map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

fn is_meaningful(keyword: &str) -> bool {
    !keyword.is_empty() && !keyword.chars().all(|c| COMMENT_PUNCTUATION.contains(c))
}
