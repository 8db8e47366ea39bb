use regex::Regex;

/// Default keywords that trigger a patch bump
pub const DEFAULT_PATCH_KEYWORDS: &[&str] = &["fix", "patch"];

/// Default keywords that trigger a minor bump
pub const DEFAULT_MINOR_KEYWORDS: &[&str] = &["feature", "config", "minor"];

/// Default keywords that trigger a major bump
pub const DEFAULT_MAJOR_KEYWORDS: &[&str] = &["breaking", "major", "release"];

/// Default keywords that suppress bumping entirely
pub const DEFAULT_SKIP_KEYWORDS: &[&str] = &["skip", "wip"];

/// Keyword lists for each bump severity, checked patch first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    pub patch: Vec<String>,
    pub minor: Vec<String>,
    pub major: Vec<String>,
}

impl KeywordSet {
    /// Create a keyword set from explicit lists
    pub fn new(patch: Vec<String>, minor: Vec<String>, major: Vec<String>) -> Self {
        KeywordSet {
            patch,
            minor,
            major,
        }
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        KeywordSet {
            patch: to_owned_list(DEFAULT_PATCH_KEYWORDS),
            minor: to_owned_list(DEFAULT_MINOR_KEYWORDS),
            major: to_owned_list(DEFAULT_MAJOR_KEYWORDS),
        }
    }
}

/// Convert a static keyword table into owned strings
pub fn to_owned_list(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

/// Returns true if the trimmed text starts with one of the keywords, written
/// either as `[keyword]` or as `keyword:`.
///
/// Matching is case-insensitive. Whitespace is allowed inside the brackets and
/// before the colon. Keywords are literal, so `fixed:` never matches `fix`.
pub fn has_keyword<S: AsRef<str>>(keywords: &[S], text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    keywords.iter().any(|keyword| {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            return false;
        }

        let escaped = regex::escape(keyword);
        Regex::new(&format!(r"(?i)^(?:\[\s*{escaped}\s*\]|{escaped}\s*:)"))
            .map(|re| re.is_match(trimmed))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_form() {
        assert!(has_keyword(&["fix"], "fix: does a thing"));
        assert!(has_keyword(&["fix"], "fix : does a thing"));
    }

    #[test]
    fn test_bracket_form() {
        assert!(has_keyword(&["fix"], "[fix] does a thing"));
        assert!(has_keyword(&["fix"], "[ fix ]: does a thing"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_keyword(&["fix"], "FIX: shouting"));
        assert!(has_keyword(&["Feature"], "[feature] lower"));
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        assert!(has_keyword(&["fix"], "   fix: indented"));
    }

    #[test]
    fn test_not_anchored_fails() {
        assert!(!has_keyword(&["fix"], "does a thing [fix]"));
        assert!(!has_keyword(&["fix"], "does a thing fix: later"));
    }

    #[test]
    fn test_bare_keyword_fails() {
        assert!(!has_keyword(&["fix"], "fix does a thing"));
    }

    #[test]
    fn test_whole_token_only() {
        assert!(!has_keyword(&["fix"], "fixed: something"));
        assert!(!has_keyword(&["fix"], "[fixes] something"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(has_keyword(&["c++"], "c++: compiler flags"));
        assert!(!has_keyword(&["f.x"], "fix: dot is not a wildcard"));
    }

    #[test]
    fn test_empty_inputs_never_match() {
        let none: [&str; 0] = [];
        assert!(!has_keyword(&none, "fix: bug"));
        assert!(!has_keyword(&[""], "[] empty brackets"));
        assert!(!has_keyword(&["fix"], ""));
        assert!(!has_keyword(&["fix"], "   "));
    }

    #[test]
    fn test_default_keyword_set() {
        let set = KeywordSet::default();
        assert_eq!(set.patch, vec!["fix", "patch"]);
        assert_eq!(set.minor, vec!["feature", "config", "minor"]);
        assert_eq!(set.major, vec!["breaking", "major", "release"]);
    }
}
