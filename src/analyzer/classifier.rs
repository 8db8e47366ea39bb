use crate::config::Config;
use crate::domain::{has_bump_tag, has_keyword, BumpDecision, CommitMessage, KeywordSet, NoBumpReason};
use tracing::debug;

/// Decide whether a commit needs a version bump, and which one.
///
/// Checks run in a fixed order and the first hit wins:
/// merge commit, skip keyword, existing version tag, then the patch, minor
/// and major keyword lists. Only the header is inspected.
pub fn classify<S: AsRef<str>>(
    commit: &CommitMessage,
    keywords: &KeywordSet,
    skip_keywords: &[S],
) -> BumpDecision {
    let header = commit.header();

    if header.starts_with("Merge") {
        return BumpDecision::NoBumpNeeded(NoBumpReason::MergeCommit);
    }

    if has_keyword(skip_keywords, header) {
        return BumpDecision::NoBumpNeeded(NoBumpReason::SkipKeyword);
    }

    if has_bump_tag(header) {
        return BumpDecision::NoBumpNeeded(NoBumpReason::AlreadyTagged);
    }

    if has_keyword(&keywords.patch, header) {
        BumpDecision::Patch
    } else if has_keyword(&keywords.minor, header) {
        BumpDecision::Minor
    } else if has_keyword(&keywords.major, header) {
        BumpDecision::Major
    } else {
        BumpDecision::NoBumpNeeded(NoBumpReason::NoKeywordMatch)
    }
}

/// Classifies commits against a fixed keyword configuration
pub struct Classifier {
    keywords: KeywordSet,
    skip_keywords: Vec<String>,
}

impl Classifier {
    /// Create a new classifier
    pub fn new(keywords: KeywordSet, skip_keywords: Vec<String>) -> Self {
        Classifier {
            keywords,
            skip_keywords,
        }
    }

    /// Create a classifier from the resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Classifier::new(config.keyword_set(), config.skip.clone())
    }

    /// Classify a raw commit message
    pub fn classify_message(&self, message: &str) -> BumpDecision {
        let commit = CommitMessage::parse(message);
        let decision = classify(&commit, &self.keywords, &self.skip_keywords);
        debug!(header = commit.header(), ?decision, "classified commit");
        decision
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(message: &str) -> BumpDecision {
        Classifier::default().classify_message(message)
    }

    #[test]
    fn test_classify_patch() {
        assert_eq!(decide("fix: null pointer"), BumpDecision::Patch);
        assert_eq!(decide("[patch] typo"), BumpDecision::Patch);
    }

    #[test]
    fn test_classify_minor() {
        assert_eq!(decide("feature: dark mode"), BumpDecision::Minor);
        assert_eq!(decide("[config]: new default port"), BumpDecision::Minor);
    }

    #[test]
    fn test_classify_major() {
        assert_eq!(decide("breaking: drop node 14"), BumpDecision::Major);
        assert_eq!(decide("[release] 2.0"), BumpDecision::Major);
    }

    #[test]
    fn test_merge_commit_first() {
        assert_eq!(
            decide("Merge branch 'fix: thing'"),
            BumpDecision::NoBumpNeeded(NoBumpReason::MergeCommit)
        );
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        assert_eq!(
            decide("merge: not a merge commit"),
            BumpDecision::NoBumpNeeded(NoBumpReason::NoKeywordMatch)
        );
    }

    #[test]
    fn test_merge_must_be_at_position_zero() {
        assert_eq!(
            decide(" Merge: leading space"),
            BumpDecision::NoBumpNeeded(NoBumpReason::NoKeywordMatch)
        );
    }

    #[test]
    fn test_skip_keyword() {
        assert_eq!(
            decide("wip: half done"),
            BumpDecision::NoBumpNeeded(NoBumpReason::SkipKeyword)
        );
        assert_eq!(
            decide("[skip] fix: later"),
            BumpDecision::NoBumpNeeded(NoBumpReason::SkipKeyword)
        );
    }

    #[test]
    fn test_skip_before_tag_check() {
        assert_eq!(
            decide("skip: (v1.0.0) already"),
            BumpDecision::NoBumpNeeded(NoBumpReason::SkipKeyword)
        );
    }

    #[test]
    fn test_already_tagged() {
        assert_eq!(
            decide("(v1.0.1) fix: bug"),
            BumpDecision::NoBumpNeeded(NoBumpReason::AlreadyTagged)
        );
        assert_eq!(
            decide("feature: thing [2.1.0]"),
            BumpDecision::NoBumpNeeded(NoBumpReason::AlreadyTagged)
        );
    }

    #[test]
    fn test_patch_wins_over_major() {
        let keywords = KeywordSet::new(
            vec!["fix".to_string()],
            vec![],
            vec!["fix".to_string(), "breaking".to_string()],
        );
        let commit = CommitMessage::parse("fix: also breaking");
        let none: Vec<String> = Vec::new();
        assert_eq!(classify(&commit, &keywords, &none), BumpDecision::Patch);
    }

    #[test]
    fn test_body_is_not_inspected() {
        assert_eq!(
            decide("update docs\n\nfix: this is in the body (v1.0.0)"),
            BumpDecision::NoBumpNeeded(NoBumpReason::NoKeywordMatch)
        );
    }

    #[test]
    fn test_body_after_mixed_line_endings_is_not_inspected() {
        assert_eq!(decide("fix: bug\nbody (v1.0.0)\r\n"), BumpDecision::Patch);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_tag() {
        assert_eq!(decide("fix: arabic (\u{661}.\u{662}.\u{663})"), BumpDecision::Patch);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            decide(""),
            BumpDecision::NoBumpNeeded(NoBumpReason::NoKeywordMatch)
        );
    }

    #[test]
    fn test_empty_keyword_lists() {
        let keywords = KeywordSet::new(vec![], vec![], vec![]);
        let commit = CommitMessage::parse("fix: bug");
        let none: Vec<String> = Vec::new();
        assert_eq!(
            classify(&commit, &keywords, &none),
            BumpDecision::NoBumpNeeded(NoBumpReason::NoKeywordMatch)
        );
    }
}
