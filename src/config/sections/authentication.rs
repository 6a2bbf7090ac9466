//! Reader for the `[authentication]` section

use super::{apply_options, OptionSpec, Setter};
use crate::config::store::RawStore;
use crate::config::types::Configuration;
use crate::config::validation::{parse_auth_entry, parse_extra_field, validate_login_url};
use crate::config::values::read_multiline;
use crate::ConfigError;

pub const SECTION: &str = "authentication";

const OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("entry", Setter::Str(add_entries)),
    OptionSpec::new("loginurl", Setter::Str(set_login_url)),
    OptionSpec::new("loginuserfield", Setter::Str(|c, v| {
        c.loginuserfield = v.to_string();
        Ok(())
    })),
    OptionSpec::new("loginpasswordfield", Setter::Str(|c, v| {
        c.loginpasswordfield = v.to_string();
        Ok(())
    })),
    OptionSpec::new("loginextrafields", Setter::Str(set_extra_fields)),
];

/// Reads credentials and login form settings
pub fn read(store: &dyn RawStore, config: &mut Configuration) -> Result<(), ConfigError> {
    apply_options(store, SECTION, OPTIONS, config)?;
    tracing::debug!(
        entries = config.authentication.len(),
        login = config.loginurl.is_some(),
        "read authentication configuration"
    );
    Ok(())
}

fn add_entries(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    for line in read_multiline(value) {
        let entry = parse_auth_entry(line)?;
        config.add_auth(&entry.pattern, &entry.user, entry.password.as_deref());
    }
    Ok(())
}

/// Logging in needs the session cookie, so cookies are switched on too
fn set_login_url(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    config.loginurl = Some(validate_login_url(value)?);
    config.storecookies = true;
    config.sendcookies = true;
    Ok(())
}

fn set_extra_fields(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    for line in read_multiline(value) {
        let (name, value) = parse_extra_field(line)?;
        config.loginextrafields.insert(name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(content: &str) -> Result<Configuration, ConfigError> {
        let mut store = crate::config::store::IniStore::new();
        store.read_str("test.ini", content)?;
        let mut config = Configuration::default();
        read(&store, &mut config)?;
        Ok(config)
    }

    #[test]
    fn test_single_entry() {
        let config = read_str("[authentication]\nentry = example.com alice secret\n").unwrap();
        assert_eq!(config.authentication.len(), 1);
        let entry = &config.authentication[0];
        assert_eq!(entry.pattern, "example.com");
        assert_eq!(entry.user, "alice");
        assert_eq!(entry.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_multiline_entries_in_order() {
        let config = read_str(
            "[authentication]\nentry =\n  ^https://a\\.example/ alice secret\n  # ^https://old/ nobody\n  ^https://b\\.example/ bob\n  ^https://a\\.example/ alice secret\n",
        )
        .unwrap();
        let users: Vec<&str> = config
            .authentication
            .iter()
            .map(|e| e.user.as_str())
            .collect();
        assert_eq!(users, vec!["alice", "bob", "alice"]);
        assert_eq!(config.authentication[1].password, None);
    }

    #[test]
    fn test_entry_with_four_tokens_fails() {
        let err = read_str("[authentication]\nentry = example.com alice secret extra\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax(_)));
        assert!(err.to_string().contains("example.com alice secret extra"));
    }

    #[test]
    fn test_entry_with_one_token_fails() {
        let err = read_str("[authentication]\nentry =\n  a b\n  lonely\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax(_)));
    }

    #[test]
    fn test_login_url_enables_cookies() {
        let config = read_str("[authentication]\nloginurl =  https://x.com/login \n").unwrap();
        assert_eq!(config.loginurl.as_deref(), Some("https://x.com/login"));
        assert!(config.storecookies);
        assert!(config.sendcookies);
    }

    #[test]
    fn test_login_url_requires_http() {
        let err = read_str("[authentication]\nloginurl = ftp://x.com\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("ftp://x.com"));
    }

    #[test]
    fn test_login_fields() {
        let config = read_str(
            "[authentication]\nloginuserfield = user\nloginpasswordfield = pass\nloginextrafields =\n  lang:en\n  remember:1\n  lang:de\n",
        )
        .unwrap();
        assert_eq!(config.loginuserfield, "user");
        assert_eq!(config.loginpasswordfield, "pass");
        assert_eq!(config.loginextrafields.len(), 2);
        assert_eq!(config.loginextrafields.get("lang").map(String::as_str), Some("de"));
        assert_eq!(config.loginextrafields.get("remember").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_extra_field_without_colon_fails() {
        let err = read_str("[authentication]\nloginextrafields =\n  novalue\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax(_)));
    }
}
