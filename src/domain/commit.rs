use std::fmt;

/// A commit message split into its header and the text that follows it.
///
/// The header runs up to the first `\n`, with a trailing `\r` dropped. The
/// break after the header and everything behind it are kept verbatim, so a
/// rewritten message joins back exactly as it came in even when line endings
/// are mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    header: String,
    line_break: &'static str,
    body: String,
}

impl CommitMessage {
    /// Split a raw commit message at its first line break
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('\n') {
            Some((first, rest)) => {
                let (header, line_break) = match first.strip_suffix('\r') {
                    Some(header) => (header, "\r\n"),
                    None => (first, "\n"),
                };
                CommitMessage {
                    header: header.to_string(),
                    line_break,
                    body: rest.to_string(),
                }
            }
            None => CommitMessage {
                header: raw.to_string(),
                line_break: "",
                body: String::new(),
            },
        }
    }

    /// The first line of the message, empty for an empty message
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Everything after the header's line break, untouched
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Lines of the body, split on `\n` or `\r\n`
    pub fn body_lines(&self) -> Vec<&str> {
        if self.line_break.is_empty() {
            return Vec::new();
        }
        self.body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }

    /// The line break that ends the header, empty for a single-line message
    pub fn line_break(&self) -> &'static str {
        self.line_break
    }

    /// Return a copy of this message with the header replaced
    pub fn with_header(&self, header: impl Into<String>) -> Self {
        CommitMessage {
            header: header.into(),
            line_break: self.line_break,
            body: self.body.clone(),
        }
    }
}

impl From<&str> for CommitMessage {
    fn from(raw: &str) -> Self {
        CommitMessage::parse(raw)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.header, self.line_break, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        let commit = CommitMessage::parse("fix: bug");
        assert_eq!(commit.header(), "fix: bug");
        assert_eq!(commit.body(), "");
        assert!(commit.body_lines().is_empty());
    }

    #[test]
    fn test_parse_multiline() {
        let commit = CommitMessage::parse("fix: bug\n\ndetails here");
        assert_eq!(commit.header(), "fix: bug");
        assert_eq!(commit.body(), "\ndetails here");
        assert_eq!(commit.body_lines(), vec!["", "details here"]);
    }

    #[test]
    fn test_parse_empty() {
        let commit = CommitMessage::parse("");
        assert_eq!(commit.header(), "");
        assert_eq!(commit.to_string(), "");
    }

    #[test]
    fn test_crlf_preserved() {
        let raw = "fix: bug\r\n\r\nbody";
        let commit = CommitMessage::parse(raw);
        assert_eq!(commit.header(), "fix: bug");
        assert_eq!(commit.line_break(), "\r\n");
        assert_eq!(commit.to_string(), raw);
    }

    #[test]
    fn test_mixed_line_endings() {
        let raw = "fix: bug\nbody line\r\nmore";
        let commit = CommitMessage::parse(raw);
        assert_eq!(commit.header(), "fix: bug");
        assert_eq!(commit.line_break(), "\n");
        assert_eq!(commit.body(), "body line\r\nmore");
        assert_eq!(commit.body_lines(), vec!["body line", "more"]);
        assert_eq!(commit.to_string(), raw);

        let rewritten = commit.with_header("fix: bug (v1.0.1)");
        assert_eq!(rewritten.to_string(), "fix: bug (v1.0.1)\nbody line\r\nmore");
    }

    #[test]
    fn test_trailing_newline_round_trips() {
        let raw = "feature: thing\n";
        assert_eq!(CommitMessage::parse(raw).to_string(), raw);
    }

    #[test]
    fn test_with_header_keeps_body() {
        let commit = CommitMessage::parse("fix: bug\n\nbody line");
        let rewritten = commit.with_header("(v1.0.1) fix: bug");
        assert_eq!(rewritten.to_string(), "(v1.0.1) fix: bug\n\nbody line");
        assert_eq!(commit.header(), "fix: bug");
    }
}
