//! Output module for logger configuration
//!
//! This module handles:
//! - The registry of known output loggers
//! - Per-logger settings read from configuration sections
//! - File output logger instances

mod registry;
mod settings;

pub use registry::{logger_names, LoggerKind};
pub use settings::{FileOutputLogger, LoggerSettings};
