//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::indexing::WalkOptions;
use crate::report::KeywordOrder;

/// Tutorial metadata extractor
#[derive(Parser, Debug)]
#[command(name = "tutorial-metadata")]
#[command(
    about = "Browses a file tree for files whose opening comments carry tutorial metadata, then prints the tutorial's description and keywords"
)]
#[command(version)]
pub struct Cli {
    /// Root directory of the tutorial to scan
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Print keywords in alphabetical order instead of first-seen order
    #[arg(long)]
    pub sort_keywords: bool,

    /// Maximum directory depth to descend (0 = only files directly in DIR)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Log progress on stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Tutorial:` and `KWords:` lines
    #[default]
    Text,
    /// JSON object with description, tutorial number and keywords
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.max_depth,
            skip_hidden: self.skip_hidden,
        }
    }

    pub fn keyword_order(&self) -> KeywordOrder {
        if self.sort_keywords {
            KeywordOrder::Alphabetical
        } else {
            KeywordOrder::FirstSeen
        }
    }
}
