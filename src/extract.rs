//! Per-file extraction
//!
//! Resolves a file's comment profile, drives the line classifier and the
//! declaration matcher over the leading comment block, and folds the matched
//! declarations into a [`FileResult`]. Reading stops as soon as the block ends.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, debug_span, trace, warn};

use crate::classify::classify;
use crate::error::{Result, TutorialMetaError};
use crate::lang::{Lang, LanguageProfile};
use crate::matcher::{Declaration, DeclarationMatcher};

/// Tutorial metadata declared by one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub description: Option<String>,
    pub tutorial_number: Option<u64>,
    pub keywords: Vec<String>,
}

impl FileResult {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.tutorial_number.is_none() && self.keywords.is_empty()
    }

    fn from_declarations(declarations: Vec<Declaration>) -> Self {
        let mut result = Self::default();
        let mut has_heading = false;
        for declaration in declarations {
            match declaration {
                Declaration::Tutorial { number, text } if !has_heading => {
                    has_heading = true;
                    result.tutorial_number = number;
                    result.description = Some(text).filter(|t| !t.is_empty());
                }
                Declaration::Tutorial { .. } => {}
                Declaration::Kwords(keywords) => {
                    for keyword in keywords {
                        if !result.keywords.contains(&keyword) {
                            result.keywords.push(keyword);
                        }
                    }
                }
            }
        }
        result
    }
}

/// One physical line and its zero-based position in the file
#[derive(Debug, Clone, Copy)]
pub struct RawLine<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Extract the tutorial metadata of `path`.
///
/// Never fails: files without a known comment syntax give an empty result,
/// unreadable files are logged and give an empty result too.
pub fn extract(path: &Path) -> FileResult {
    match extract_file(path) {
        Ok(result) => result,
        Err(e) => {
            warn!("skipping file: {}", e);
            FileResult::default()
        }
    }
}

/// Fallible variant of [`extract`], reporting unreadable files.
pub fn extract_file(path: &Path) -> Result<FileResult> {
    let span = debug_span!("extract", file = %path.display());
    let _enter = span.enter();

    let by_name = Lang::from_path(path);
    if by_name.is_none() && path.extension().is_some() {
        trace!("unknown extension, not scanned");
        return Ok(FileResult::default());
    }

    let file = File::open(path).map_err(|source| unreadable(path, source))?;
    let mut lines = BufReader::new(file).lines().peekable();

    let lang = match by_name {
        Some(lang) => Some(lang),
        None => match lines.peek() {
            Some(Ok(first)) => Lang::from_shebang(strip_bom(first)),
            _ => None,
        },
    };
    let Some(lang) = lang else {
        trace!("no extension and no known interpreter, not scanned");
        return Ok(FileResult::default());
    };
    debug!("detected language: {} ({})", lang.name(), lang.profile().name);

    let declarations =
        match_block(lines, lang.profile()).map_err(|source| unreadable(path, source))?;
    let result = FileResult::from_declarations(declarations);
    if !result.is_empty() {
        debug!(
            description = ?result.description,
            number = ?result.tutorial_number,
            keywords = result.keywords.len(),
            "tutorial metadata found"
        );
    }
    Ok(result)
}

/// Extract from in-memory lines with a known profile.
pub fn extract_lines<'a, I>(lines: I, profile: &LanguageProfile) -> FileResult
where
    I: IntoIterator<Item = &'a str>,
{
    let lines = lines
        .into_iter()
        .map(|line| Ok::<_, io::Error>(line.to_string()));
    match match_block(lines, profile) {
        Ok(declarations) => FileResult::from_declarations(declarations),
        Err(_) => FileResult::default(),
    }
}

fn match_block<I>(lines: I, profile: &LanguageProfile) -> io::Result<Vec<Declaration>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut matcher = DeclarationMatcher::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.contains('\0') {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "binary content"));
        }

        let raw = RawLine {
            index,
            text: if index == 0 { strip_bom(&line) } else { line.as_str() },
        };
        matcher.feed(classify(raw.text, profile));
        trace!(line = raw.index + 1, state = ?matcher.state(), "classified");
        if matcher.is_done() {
            break;
        }
    }
    Ok(matcher.finish())
}

fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

fn unreadable(path: &Path, source: io::Error) -> TutorialMetaError {
    TutorialMetaError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    }
}
