//! Logger registry
//!
//! Enumerates the output formats a link checker can report in. The
//! configuration reader only needs the names and per-format defaults; the
//! loggers themselves live elsewhere.

use serde::Serialize;
use std::fmt;

/// A registered output logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    Text,
    Html,
    Sql,
    Csv,
    Gml,
    Dot,
    Xml,
    Gxml,
    CustomXml,
    Blacklist,
    None,
}

impl LoggerKind {
    /// Every registered logger, in registry order
    pub const ALL: [LoggerKind; 11] = [
        LoggerKind::Text,
        LoggerKind::Html,
        LoggerKind::Sql,
        LoggerKind::Csv,
        LoggerKind::Gml,
        LoggerKind::Dot,
        LoggerKind::Xml,
        LoggerKind::Gxml,
        LoggerKind::CustomXml,
        LoggerKind::Blacklist,
        LoggerKind::None,
    ];

    /// Returns the registry name of this logger
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Sql => "sql",
            Self::Csv => "csv",
            Self::Gml => "gml",
            Self::Dot => "dot",
            Self::Xml => "xml",
            Self::Gxml => "gxml",
            Self::CustomXml => "customxml",
            Self::Blacklist => "blacklist",
            Self::None => "none",
        }
    }

    /// Looks up a logger by its registry name (case-sensitive, lowercase)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Default output file for this logger, if it writes to a file at all
    pub fn default_filename(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("linkchecker-out.txt"),
            Self::Html => Some("linkchecker-out.html"),
            Self::Sql => Some("linkchecker-out.sql"),
            Self::Csv => Some("linkchecker-out.csv"),
            Self::Gml => Some("linkchecker-out.gml"),
            Self::Dot => Some("linkchecker-out.dot"),
            Self::Xml | Self::CustomXml => Some("linkchecker-out.xml"),
            Self::Gxml => Some("linkchecker-out.gxml"),
            Self::Blacklist => Some("~/.linkchecker/blacklist"),
            Self::None => None,
        }
    }

    /// Returns true if this logger may be used for file output
    ///
    /// The blacklist logger always writes to its own file and the none
    /// logger writes nothing, so neither is accepted in `fileoutput`.
    pub fn supports_file_output(&self) -> bool {
        !matches!(self, Self::Blacklist | Self::None)
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterates over the names of all registered loggers
pub fn logger_names() -> impl Iterator<Item = &'static str> {
    LoggerKind::ALL.iter().map(|kind| kind.name())
}
