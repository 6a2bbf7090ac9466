use crate::ConfigError;
use regex::Regex;
use serde::{Serialize, Serializer};

/// A compiled link-match rule
///
/// A pattern is a regular expression searched anywhere in a URL. A leading
/// `!` negates the rule, so `!^https://` matches every URL that does not
/// start with `https://`.
///
/// The `strict` flag is carried for the link checker: strict rules
/// (from `ignore`) skip a URL entirely, non-strict ones (from `nofollow`)
/// still check it but do not recurse into it.
///
/// # Examples
///
/// ```
/// use linkcheck_config::url::LinkPattern;
///
/// let rule = LinkPattern::compile(r"\.pdf$", true).unwrap();
/// assert!(rule.matches("https://example.com/manual.pdf"));
/// assert!(!rule.matches("https://example.com/index.html"));
///
/// let negated = LinkPattern::compile("!^https://", false).unwrap();
/// assert!(negated.matches("ftp://example.com/"));
/// assert!(!negated.matches("https://example.com/"));
/// ```
#[derive(Debug, Clone)]
pub struct LinkPattern {
    regex: Regex,
    negate: bool,
    strict: bool,
}

impl LinkPattern {
    /// Compiles a link pattern
    ///
    /// # Arguments
    ///
    /// * `pattern` - Regular expression, optionally prefixed with `!`
    /// * `strict` - Whether matching URLs are skipped entirely
    ///
    /// # Returns
    ///
    /// * `Ok(LinkPattern)` - The compiled rule
    /// * `Err(ConfigError::InvalidRegex)` - The expression did not compile
    pub fn compile(pattern: &str, strict: bool) -> Result<Self, ConfigError> {
        let (expr, negate) = match pattern.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (pattern, false),
        };
        let regex = Regex::new(expr).map_err(|source| ConfigError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            negate,
            strict,
        })
    }

    /// Checks whether a URL matches this rule
    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url) != self.negate
    }

    /// Returns the regular expression without the negation prefix
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl PartialEq for LinkPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.negate == other.negate && self.strict == other.strict
    }
}

impl Serialize for LinkPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("LinkPattern", 3)?;
        state.serialize_field("pattern", self.as_str())?;
        state.serialize_field("negate", &self.negate)?;
        state.serialize_field("strict", &self.strict)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pattern_matches_anywhere() {
        let rule = LinkPattern::compile("example", false).unwrap();
        assert!(rule.matches("https://example.com/"));
        assert!(rule.matches("http://www.example.org/page"));
        assert!(!rule.matches("https://other.com/"));
    }

    #[test]
    fn test_anchored_pattern() {
        let rule = LinkPattern::compile("^mailto:", true).unwrap();
        assert!(rule.matches("mailto:someone@example.com"));
        assert!(!rule.matches("https://example.com/mailto:x"));
    }

    #[test]
    fn test_negated_pattern() {
        let rule = LinkPattern::compile("!example\\.com", false).unwrap();
        assert!(rule.is_negated());
        assert_eq!(rule.as_str(), "example\\.com");
        assert!(!rule.matches("https://example.com/"));
        assert!(rule.matches("https://other.org/"));
    }

    #[test]
    fn test_strict_flag_is_kept() {
        assert!(LinkPattern::compile("x", true).unwrap().is_strict());
        assert!(!LinkPattern::compile("x", false).unwrap().is_strict());
    }

    #[test]
    fn test_invalid_regex() {
        let err = LinkPattern::compile("(unclosed", true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_invalid_negated_regex_reports_full_pattern() {
        let err = LinkPattern::compile("![", false).unwrap_err();
        assert!(err.to_string().contains("`!['"));
    }

    #[test]
    fn test_equality_ignores_compiled_state() {
        let a = LinkPattern::compile("!foo", true).unwrap();
        let b = LinkPattern::compile("!foo", true).unwrap();
        let c = LinkPattern::compile("!foo", false).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
