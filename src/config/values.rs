//! Typed parsing of raw option values
//!
//! Every reader goes through these helpers instead of coercing strings
//! inline, so a bad value always produces the same kind of error.

use crate::ConfigError;

/// Parses a boolean option value
///
/// Accepts `1`, `yes`, `true`, `on` and `0`, `no`, `false`, `off`,
/// ignoring case and surrounding whitespace.
pub fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Validation(format!(
            "not a boolean: '{}' (option '{}' in section [{}])",
            value, key, section
        ))),
    }
}

/// Parses a decimal integer option value
pub fn parse_int(section: &str, key: &str, value: &str) -> Result<i64, ConfigError> {
    value.trim().parse::<i64>().map_err(|_| {
        ConfigError::Validation(format!(
            "invalid integer value '{}' (option '{}' in section [{}])",
            value, key, section
        ))
    })
}

/// Splits a comma separated value into trimmed, non-empty items
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`split_list`], but lowercases every item
pub fn split_list_lowercase(value: &str) -> Vec<String> {
    split_list(value)
        .into_iter()
        .map(|item| item.to_lowercase())
        .collect()
}

/// Iterates over the meaningful lines of a multi-line value
///
/// Lines are trimmed; empty lines and lines starting with `#` are
/// skipped. The returned iterator is lazy and can be cloned to restart it.
pub fn read_multiline(value: &str) -> impl Iterator<Item = &str> + Clone {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepted_values() {
        for value in ["1", "yes", "true", "on", "TRUE", " Yes "] {
            assert!(parse_bool("s", "k", value).unwrap(), "{}", value);
        }
        for value in ["0", "no", "false", "off", "Off", "NO"] {
            assert!(!parse_bool("s", "k", value).unwrap(), "{}", value);
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_values() {
        let err = parse_bool("output", "verbose", "maybe").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let message = err.to_string();
        assert!(message.contains("maybe"));
        assert!(message.contains("verbose"));
        assert!(message.contains("[output]"));
        assert!(parse_bool("s", "k", "").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("s", "k", "42").unwrap(), 42);
        assert_eq!(parse_int("s", "k", " -3 ").unwrap(), -3);
        assert_eq!(parse_int("s", "k", "+7").unwrap(), 7);
        assert!(parse_int("s", "k", "abc").is_err());
        assert!(parse_int("s", "k", "1.5").is_err());
        assert!(parse_int("s", "k", "").is_err());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list(" Mixed , Case"), vec!["Mixed", "Case"]);
        assert_eq!(split_list("a,,b,"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_split_list_lowercase() {
        assert_eq!(
            split_list_lowercase("URL, Result ,REALURL"),
            vec!["url", "result", "realurl"]
        );
    }

    #[test]
    fn test_read_multiline_skips_blank_and_comment_lines() {
        let value = "\nfirst line\n   \n  # a comment\n\tsecond  \n#another\nthird";
        let lines: Vec<&str> = read_multiline(value).collect();
        assert_eq!(lines, vec!["first line", "second", "third"]);
    }

    #[test]
    fn test_read_multiline_is_restartable() {
        let lines = read_multiline("a\nb");
        let first: Vec<&str> = lines.clone().collect();
        let second: Vec<&str> = lines.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_multiline_keeps_inner_hash() {
        let lines: Vec<&str> = read_multiline("a#b\n c # d").collect();
        assert_eq!(lines, vec!["a#b", "c # d"]);
    }
}
