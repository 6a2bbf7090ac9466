//! Per-logger settings and file output loggers

use crate::output::LoggerKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Options configured for one logger
///
/// Everything from the logger's own section lands in `options` verbatim,
/// except `parts`, which is kept as a list of lowercased tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerSettings {
    /// Raw option values keyed by option name
    pub options: BTreeMap<String, String>,

    /// Which parts of each result the logger prints
    pub parts: Vec<String>,
}

impl LoggerSettings {
    /// Creates the default settings for a logger
    pub fn for_kind(kind: LoggerKind) -> Self {
        let mut options = BTreeMap::new();
        if let Some(filename) = kind.default_filename() {
            options.insert("filename".to_string(), filename.to_string());
        }
        Self {
            options,
            parts: vec!["all".to_string()],
        }
    }

    /// Returns a raw option value
    pub fn get(&self, option: &str) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }
}

/// A logger instance that writes its report to a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutputLogger {
    /// Which output format this logger produces
    pub kind: LoggerKind,

    /// Snapshot of the logger's settings at construction time
    pub settings: LoggerSettings,
}

impl FileOutputLogger {
    /// Creates a file output logger from the given settings
    pub fn new(kind: LoggerKind, settings: LoggerSettings) -> Self {
        Self { kind, settings }
    }

    /// Returns the file this logger will write to
    pub fn filename(&self) -> Option<&str> {
        self.settings.get("filename")
    }
}
