//! Domain logic - pure commit-message rules independent of git operations

pub mod commit;
pub mod decision;
pub mod keyword;
pub mod tag;
pub mod version;

pub use commit::CommitMessage;
pub use decision::{BumpDecision, NoBumpReason};
pub use keyword::{has_keyword, KeywordSet};
pub use tag::{format_new_header, has_bump_tag, BracketStyle, TagPosition, TagStyle};
pub use version::VersionBump;
