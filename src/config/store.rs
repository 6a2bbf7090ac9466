//! Raw section/key store
//!
//! The readers only ever see configuration through the [`RawStore`] trait.
//! [`IniStore`] is the implementation used for files: a line-oriented
//! reader for the classic INI layout with indented continuation lines.

use crate::config::values::{parse_bool, parse_int};
use crate::ConfigError;
use std::collections::BTreeMap;
use std::path::Path;

/// Read access to parsed configuration sections
pub trait RawStore {
    /// Returns true if the section exists (even if empty)
    fn has_section(&self, section: &str) -> bool;

    /// Returns the raw value of an option, if present
    fn get(&self, section: &str, key: &str) -> Option<&str>;

    /// Returns all options of a section as (key, value) pairs
    fn options(&self, section: &str) -> Vec<(&str, &str)>;

    /// Returns true if the option exists in the section
    fn has_option(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Returns an option parsed as an integer
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, ConfigError> {
        self.get(section, key)
            .map(|value| parse_int(section, key, value))
            .transpose()
    }

    /// Returns an option parsed as a boolean
    fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
        self.get(section, key)
            .map(|value| parse_bool(section, key, value))
            .transpose()
    }
}

/// In-memory INI store
///
/// Section names are case-sensitive; option names are lowercased. Reading
/// several sources merges them: sections are united and later values
/// replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct IniStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl IniStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and merges one configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The file was read and merged
    /// * `Err(ConfigError::Io)` - The file could not be read
    /// * `Err(ConfigError::Parse)` - The file is not valid INI
    pub fn read_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.read_str(&path.display().to_string(), &content)
    }

    /// Reads and merges configuration text
    ///
    /// `source_name` is only used in error messages.
    pub fn read_str(&mut self, source_name: &str, content: &str) -> Result<(), ConfigError> {
        let parse_error = |line: usize, message: &str| ConfigError::Parse {
            source_name: source_name.to_string(),
            line,
            message: message.to_string(),
        };

        let mut section: Option<String> = None;
        let mut last_key: Option<String> = None;

        for (index, raw) in content.lines().enumerate() {
            let line_number = index + 1;

            // Skip comments and empty lines
            if raw.trim().is_empty() || raw.starts_with('#') || raw.starts_with(';') {
                continue;
            }

            if raw.starts_with(char::is_whitespace) {
                let (Some(name), Some(key)) = (&section, &last_key) else {
                    return Err(parse_error(line_number, "unexpected indented line"));
                };
                if let Some(value) = self
                    .sections
                    .get_mut(name)
                    .and_then(|options| options.get_mut(key))
                {
                    value.push('\n');
                    value.push_str(raw.trim());
                }
                continue;
            }

            let line = raw.trim_end();

            if let Some(rest) = line.strip_prefix('[') {
                let Some(end) = rest.find(']') else {
                    return Err(parse_error(line_number, "unterminated section header"));
                };
                let name = &rest[..end];
                if name.is_empty() {
                    return Err(parse_error(line_number, "empty section name"));
                }
                self.sections.entry(name.to_string()).or_default();
                section = Some(name.to_string());
                last_key = None;
                continue;
            }

            let Some(name) = &section else {
                return Err(parse_error(line_number, "option outside of a section"));
            };

            let Some(separator) = line.find(|c| c == '=' || c == ':') else {
                return Err(parse_error(line_number, "expected 'key = value'"));
            };
            let key = line[..separator].trim().to_lowercase();
            if key.is_empty() {
                return Err(parse_error(line_number, "missing option name"));
            }
            let value = strip_inline_comment(line[separator + 1..].trim());

            self.sections
                .entry(name.clone())
                .or_default()
                .insert(key.clone(), value.to_string());
            last_key = Some(key);
        }

        Ok(())
    }

    /// Returns the names of all sections
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Sets an option, creating the section if needed
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_lowercase(), value.to_string());
    }
}

impl RawStore for IniStore {
    fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|options| options.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    fn options(&self, section: &str) -> Vec<(&str, &str)> {
        self.sections
            .get(section)
            .map(|options| {
                options
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Removes a `;` comment that follows whitespace at the end of a value
fn strip_inline_comment(value: &str) -> &str {
    let mut previous_whitespace = false;
    for (index, c) in value.char_indices() {
        if c == ';' && previous_whitespace {
            return value[..index].trim_end();
        }
        previous_whitespace = c.is_whitespace();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(content: &str) -> IniStore {
        let mut store = IniStore::new();
        store.read_str("test.ini", content).unwrap();
        store
    }

    #[test]
    fn test_sections_and_options() {
        let store = store("[output]\nlog = html\nverbose: yes\n\n[checking]\nthreads=5\n");
        assert!(store.has_section("output"));
        assert!(store.has_section("checking"));
        assert!(!store.has_section("filtering"));
        assert_eq!(store.get("output", "log"), Some("html"));
        assert_eq!(store.get("output", "verbose"), Some("yes"));
        assert_eq!(store.get("checking", "threads"), Some("5"));
        assert!(store.has_option("checking", "threads"));
        assert!(!store.has_option("checking", "timeout"));
    }

    #[test]
    fn test_keys_are_case_insensitive_sections_are_not() {
        let store = store("[Output]\nLOG = text\n");
        assert_eq!(store.get("Output", "log"), Some("text"));
        assert_eq!(store.get("Output", "Log"), Some("text"));
        assert!(!store.has_section("output"));
    }

    #[test]
    fn test_first_separator_wins() {
        let store = store("[authentication]\nloginurl = https://example.com/login\nfield: a=b\n");
        assert_eq!(
            store.get("authentication", "loginurl"),
            Some("https://example.com/login")
        );
        assert_eq!(store.get("authentication", "field"), Some("a=b"));
    }

    #[test]
    fn test_continuation_lines() {
        let store = store(
            "[authentication]\nentry =\n  example.com alice secret\n  # disabled\n\n  other.org bob\nloginuserfield = user\n",
        );
        assert_eq!(
            store.get("authentication", "entry"),
            Some("\nexample.com alice secret\n# disabled\nother.org bob")
        );
        assert_eq!(store.get("authentication", "loginuserfield"), Some("user"));
    }

    #[test]
    fn test_comments_are_skipped() {
        let store = store("# header comment\n; another\n[output]\n# log = html\nlog = text ; trailing\n");
        assert_eq!(store.get("output", "log"), Some("text"));
        assert_eq!(store.options("output").len(), 1);
    }

    #[test]
    fn test_semicolon_without_whitespace_is_kept() {
        let store = store("[checking]\nuseragent = Agent;1.0\n");
        assert_eq!(store.get("checking", "useragent"), Some("Agent;1.0"));
    }

    #[test]
    fn test_later_values_override() {
        let mut store = store("[checking]\nthreads = 5\ntimeout = 10\n");
        store
            .read_str("second.ini", "[checking]\nthreads = 20\n[output]\nlog = csv\n")
            .unwrap();
        assert_eq!(store.get("checking", "threads"), Some("20"));
        assert_eq!(store.get("checking", "timeout"), Some("10"));
        assert_eq!(store.get("output", "log"), Some("csv"));
    }

    #[test]
    fn test_option_before_section_fails() {
        let mut store = IniStore::new();
        let err = store.read_str("bad.ini", "log = html\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("bad.ini"));
    }

    #[test]
    fn test_malformed_line_fails() {
        let mut store = IniStore::new();
        let err = store
            .read_str("bad.ini", "[output]\nthis is not an option\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_unterminated_header_fails() {
        let mut store = IniStore::new();
        assert!(store.read_str("bad.ini", "[output\nlog = x\n").is_err());
    }

    #[test]
    fn test_empty_section_exists() {
        let store = store("[html]\n");
        assert!(store.has_section("html"));
        assert!(store.options("html").is_empty());
    }

    #[test]
    fn test_typed_accessors() {
        let store = store("[checking]\nthreads = 7\nanchors = on\nbad = x\n");
        assert_eq!(store.get_int("checking", "threads").unwrap(), Some(7));
        assert_eq!(store.get_bool("checking", "anchors").unwrap(), Some(true));
        assert_eq!(store.get_int("checking", "missing").unwrap(), None);
        assert!(store.get_int("checking", "bad").is_err());
        assert!(store.get_bool("checking", "bad").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut store = IniStore::new();
        let err = store
            .read_file(Path::new("/nonexistent/linkcheckerrc"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_set() {
        let mut store = IniStore::new();
        store.set("output", "Log", "html");
        assert_eq!(store.get("output", "log"), Some("html"));
        assert_eq!(store.sections().collect::<Vec<_>>(), vec!["output"]);
    }
}
