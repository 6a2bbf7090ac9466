use crate::output::{FileOutputLogger, LoggerKind, LoggerSettings};
use crate::url::LinkPattern;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Main configuration structure for the link checker
///
/// Created with defaults and then updated in place by
/// [`ingest`](crate::config::ingest); readers only ever change individual
/// fields.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    /// Output mode: a registered logger name or `"none"`
    pub output: String,

    /// Print warnings
    pub warnings: bool,

    /// Log all checked URLs, not only errors
    pub verbose: bool,

    /// Log every URL including duplicates
    pub complete: bool,

    /// Suppress all console output
    pub quiet: bool,

    /// Print check status messages
    pub status: bool,

    /// Debug logger names enabled via [`Configuration::set_debug`]
    pub debug: Vec<String>,

    /// Number of checker threads
    pub threads: u32,

    /// Network timeout in seconds
    pub timeout: u64,

    /// Check HTML anchors
    pub anchors: bool,

    /// Maximum recursion depth, negative for unlimited
    pub recursionlevel: i64,

    /// Warn if page content matches this expression
    #[serde(serialize_with = "serialize_regex")]
    pub warningregex: Option<Regex>,

    /// Warn if content size exceeds this many bytes
    pub warnsizebytes: Option<i64>,

    /// Default NNTP server for `news:` links
    pub nntpserver: Option<String>,

    /// User agent sent with HTTP requests
    pub useragent: String,

    pub checkhtml: bool,
    pub checkcss: bool,
    pub checkhtmlw3: bool,
    pub checkcssw3: bool,
    pub scanvirus: bool,
    pub clamavconf: bool,
    pub sendcookies: bool,
    pub storecookies: bool,

    /// Login form URL
    pub loginurl: Option<String>,

    /// Name of the login form's user field
    pub loginuserfield: String,

    /// Name of the login form's password field
    pub loginpasswordfield: String,

    /// Additional login form fields
    pub loginextrafields: BTreeMap<String, String>,

    /// Warning names that are not reported
    pub ignorewarnings: Vec<String>,

    /// Links matching these rules are not checked or not followed
    pub externlinks: Vec<LinkPattern>,

    /// Links matching these rules are treated as internal
    pub internlinks: Vec<LinkPattern>,

    /// Credentials by URL pattern, in configuration order
    pub authentication: Vec<AuthEntry>,

    /// Loggers writing to files
    pub fileoutput: Vec<FileOutputLogger>,

    /// Settings per logger name
    pub loggers: BTreeMap<String, LoggerSettings>,
}

/// Credentials for URLs matching a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthEntry {
    /// URL pattern the credentials apply to
    pub pattern: String,

    /// User name
    pub user: String,

    /// Password; `None` means ask at runtime
    #[serde(serialize_with = "serialize_password")]
    pub password: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        let loggers = LoggerKind::ALL
            .iter()
            .map(|kind| (kind.name().to_string(), LoggerSettings::for_kind(*kind)))
            .collect();

        Self {
            output: LoggerKind::Text.name().to_string(),
            warnings: true,
            verbose: false,
            complete: false,
            quiet: false,
            status: false,
            debug: Vec::new(),
            threads: 10,
            timeout: 60,
            anchors: false,
            recursionlevel: -1,
            warningregex: None,
            warnsizebytes: None,
            nntpserver: None,
            useragent: format!("LinkChecker/{}", env!("CARGO_PKG_VERSION")),
            checkhtml: false,
            checkcss: false,
            checkhtmlw3: false,
            checkcssw3: false,
            scanvirus: false,
            clamavconf: false,
            sendcookies: false,
            storecookies: false,
            loginurl: None,
            loginuserfield: "login".to_string(),
            loginpasswordfield: "password".to_string(),
            loginextrafields: BTreeMap::new(),
            ignorewarnings: Vec::new(),
            externlinks: Vec::new(),
            internlinks: Vec::new(),
            authentication: Vec::new(),
            fileoutput: Vec::new(),
            loggers,
        }
    }
}

impl Configuration {
    /// Creates a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a credential entry
    pub fn add_auth(&mut self, pattern: &str, user: &str, password: Option<&str>) {
        self.authentication.push(AuthEntry {
            pattern: pattern.to_string(),
            user: user.to_string(),
            password: password.map(str::to_string),
        });
    }

    /// Sets the enabled debug loggers
    ///
    /// Duplicates are dropped; `all` supersedes every other name.
    pub fn set_debug(&mut self, parts: Vec<String>) {
        if parts.iter().any(|part| part == "all") {
            self.debug = vec!["all".to_string()];
            return;
        }
        let mut debug: Vec<String> = Vec::with_capacity(parts.len());
        for part in parts {
            if !debug.contains(&part) {
                debug.push(part);
            }
        }
        self.debug = debug;
    }

    /// Creates a file output logger from the logger's current settings
    pub fn new_file_output_logger(&self, kind: LoggerKind) -> FileOutputLogger {
        let settings = self
            .loggers
            .get(kind.name())
            .cloned()
            .unwrap_or_else(|| LoggerSettings::for_kind(kind));
        FileOutputLogger::new(kind, settings)
    }

    /// Returns the settings of a logger, creating defaults if missing
    pub fn logger_settings_mut(&mut self, kind: LoggerKind) -> &mut LoggerSettings {
        self.loggers
            .entry(kind.name().to_string())
            .or_insert_with(|| LoggerSettings::for_kind(kind))
    }

    /// Returns the settings of a logger by name
    pub fn logger_settings(&self, name: &str) -> Option<&LoggerSettings> {
        self.loggers.get(name)
    }

    /// Returns the console logger, or `None` when output is disabled or unknown
    pub fn output_kind(&self) -> Option<LoggerKind> {
        LoggerKind::from_name(&self.output).filter(|kind| *kind != LoggerKind::None)
    }
}

fn serialize_regex<S: Serializer>(regex: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error> {
    match regex {
        Some(regex) => serializer.serialize_some(regex.as_str()),
        None => serializer.serialize_none(),
    }
}

fn serialize_password<S: Serializer>(
    password: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match password {
        Some(_) => serializer.serialize_some("********"),
        None => serializer.serialize_none(),
    }
}
