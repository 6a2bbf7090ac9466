use crate::config::types::AuthEntry;
use crate::url::is_http_url;
use crate::ConfigError;
use regex::Regex;

/// Validates a timeout value in seconds
pub fn validate_timeout(timeout: i64) -> Result<u64, ConfigError> {
    u64::try_from(timeout).map_err(|_| {
        ConfigError::Validation(format!(
            "invalid negative value for timeout: {}",
            timeout
        ))
    })
}

/// Clamps a thread count to the supported range
pub fn clamp_threads(threads: i64) -> u32 {
    threads.clamp(0, i64::from(u32::MAX)) as u32
}

/// Validates a login URL, returning it trimmed
///
/// Only HTTP and HTTPS URLs can be used to log in.
pub fn validate_login_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim();
    if !is_http_url(url) {
        return Err(ConfigError::Validation(format!(
            "invalid login URL `{}'. Only HTTP and HTTPS URLs are supported.",
            url
        )));
    }
    Ok(url.to_string())
}

/// Compiles the warning regex, or returns `None` for an empty pattern
pub fn compile_warning_regex(pattern: &str) -> Result<Option<Regex>, ConfigError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern)
        .map(Some)
        .map_err(|source| ConfigError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })
}

/// Parses one `entry` line of the authentication section
///
/// The line holds a URL pattern, a user name and optionally a password,
/// separated by whitespace.
pub fn parse_auth_entry(line: &str) -> Result<AuthEntry, ConfigError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [pattern, user, password] => Ok(AuthEntry {
            pattern: pattern.to_string(),
            user: user.to_string(),
            password: Some(password.to_string()),
        }),
        [pattern, user] => Ok(AuthEntry {
            pattern: pattern.to_string(),
            user: user.to_string(),
            password: None,
        }),
        _ => Err(ConfigError::Syntax(format!(
            "missing auth part in entry '{}'",
            line
        ))),
    }
}

/// Parses one `loginextrafields` line into a field name and value
pub fn parse_extra_field(line: &str) -> Result<(String, String), ConfigError> {
    line.split_once(':')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| {
            ConfigError::Syntax(format!(
                "missing ':' in login extra field '{}'",
                line
            ))
        })
}
