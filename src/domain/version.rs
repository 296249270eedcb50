use std::cmp::Ordering;
use std::fmt;

/// Version extracted from a milestone title, e.g. "v1.4.2" -> [1, 4, 2].
///
/// Ordering is lexicographic over the components: the first differing
/// component decides, and a sequence that is a strict prefix of another
/// sorts before it (`1.2` < `1.2.0`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedVersion {
    components: Vec<u64>,
}

impl ParsedVersion {
    /// Create a version from its components, most significant first
    pub fn new(components: Vec<u64>) -> Self {
        ParsedVersion { components }
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

/// Normalised form: components joined with `.` whatever separator the
/// title used, so `Release 1-10` displays as `1.10`. Log the milestone
/// title alongside it when the original spelling matters.
impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Compares two parsed versions.
///
/// Equivalent to `a.cmp(b)`; kept as a free function for callers that
/// sort by key pairs.
pub fn compare(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    a.components.cmp(&b.components)
}

/// Recognises version labels built from a literal prefix and a component separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParser {
    prefix: String,
    separator: String,
}

impl VersionParser {
    /// Create a parser for titles such as `{prefix}1{separator}2{separator}3`
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        VersionParser {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parses a title into a version.
    ///
    /// Returns `None` when the title does not start with the prefix or when
    /// any separated segment is not a plain run of ASCII digits. Whitespace
    /// is never trimmed, so `"v1. 2"` does not match.
    ///
    /// # Example
    /// ```
    /// # use auto_milestone::domain::{ParsedVersion, VersionParser};
    /// let parser = VersionParser::new("v", ".");
    /// assert_eq!(parser.parse("v1.4.2"), Some(ParsedVersion::new(vec![1, 4, 2])));
    /// assert_eq!(parser.parse("v1.x.2"), None);
    /// assert_eq!(parser.parse("Backlog"), None);
    /// ```
    pub fn parse(&self, title: &str) -> Option<ParsedVersion> {
        let remainder = title.strip_prefix(self.prefix.as_str())?;

        let segments: Vec<&str> = if self.separator.is_empty() {
            vec![remainder]
        } else {
            remainder.split(self.separator.as_str()).collect()
        };

        let components = segments
            .into_iter()
            .map(parse_component)
            .collect::<Option<Vec<u64>>>()?;

        Some(ParsedVersion::new(components))
    }
}

// `u64::from_str` accepts a leading '+', which is not a version component.
fn parse_component(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u64>().ok()
}
