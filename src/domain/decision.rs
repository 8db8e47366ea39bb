use std::fmt;

use crate::domain::VersionBump;

/// Why a commit does not get a version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoBumpReason {
    /// Header starts with `Merge`
    MergeCommit,
    /// Header starts with a skip keyword
    SkipKeyword,
    /// Header already carries a version tag
    AlreadyTagged,
    /// No bump keyword at the start of the header
    NoKeywordMatch,
}

impl fmt::Display for NoBumpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NoBumpReason::MergeCommit => "merge commit",
            NoBumpReason::SkipKeyword => "skip keyword found",
            NoBumpReason::AlreadyTagged => "already bumped",
            NoBumpReason::NoKeywordMatch => "keyword not found",
        };
        f.write_str(reason)
    }
}

/// Outcome of classifying a single commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpDecision {
    Patch,
    Minor,
    Major,
    NoBumpNeeded(NoBumpReason),
}

impl BumpDecision {
    /// The bump to apply, if any
    pub fn bump(&self) -> Option<VersionBump> {
        match self {
            BumpDecision::Patch => Some(VersionBump::Patch),
            BumpDecision::Minor => Some(VersionBump::Minor),
            BumpDecision::Major => Some(VersionBump::Major),
            BumpDecision::NoBumpNeeded(_) => None,
        }
    }

    /// The bump to apply, or why there is none
    pub fn into_bump(self) -> Result<VersionBump, NoBumpReason> {
        match self {
            BumpDecision::NoBumpNeeded(reason) => Err(reason),
            decision => decision.bump().ok_or(NoBumpReason::NoKeywordMatch),
        }
    }
}

impl From<VersionBump> for BumpDecision {
    fn from(bump: VersionBump) -> Self {
        match bump {
            VersionBump::Patch => BumpDecision::Patch,
            VersionBump::Minor => BumpDecision::Minor,
            VersionBump::Major => BumpDecision::Major,
        }
    }
}
