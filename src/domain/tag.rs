use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::CommitMessage;

/// Matches `[1.2.3]`, `[v1.2.3]`, `(1.2.3)` or `(V1.2.3)` anywhere in a line.
/// ASCII digits only.
const BUMP_TAG_PATTERN: &str = r"\[[vV]?[0-9]+\.[0-9]+\.[0-9]+\]|\([vV]?[0-9]+\.[0-9]+\.[0-9]+\)";

/// Where the version tag goes in the commit header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPosition {
    #[default]
    Start,
    End,
}

/// Which brackets wrap the version tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketStyle {
    Square,
    #[default]
    Paren,
}

/// How a version tag is written into a commit header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagStyle {
    pub bracket: BracketStyle,
    pub position: TagPosition,
}

impl TagStyle {
    /// Create a new tag style
    pub fn new(bracket: BracketStyle, position: TagPosition) -> Self {
        TagStyle { bracket, position }
    }

    /// Format a version as a tag
    /// Example: square, "1.2.3" -> "[v1.2.3]"
    pub fn format(&self, version: &str) -> String {
        match self.bracket {
            BracketStyle::Square => format!("[v{}]", version),
            BracketStyle::Paren => format!("(v{})", version),
        }
    }

    /// Insert the tag into a header line
    pub fn apply(&self, header: &str, version: &str) -> String {
        let tag = self.format(version);
        match self.position {
            TagPosition::Start => format!("{} {}", tag, header),
            TagPosition::End => format!("{} {}", header, tag),
        }
    }
}

/// Returns true if the text already carries a bracketed or parenthesized
/// `D.D.D` version, with an optional `v` prefix.
pub fn has_bump_tag(text: &str) -> bool {
    Regex::new(BUMP_TAG_PATTERN)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

/// Build the amended commit message: the header gets the version tag, every
/// body line is passed through untouched.
///
/// The version is inserted as given; resolving it is the caller's job.
pub fn format_new_header(commit: &CommitMessage, version: &str, style: &TagStyle) -> CommitMessage {
    commit.with_header(style.apply(commit.header(), version))
}
