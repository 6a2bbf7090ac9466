//! Configuration module for linkcheck-config
//!
//! This module reads INI configuration files and applies them, section by
//! section, to a [`Configuration`].
//!
//! # Example
//!
//! ```no_run
//! use linkcheck_config::config::{ingest, Configuration};
//!
//! let mut config = Configuration::default();
//! ingest(&mut config, &["linkcheckerrc"]).unwrap();
//! println!("Checker will use {} threads", config.threads);
//! ```

mod ingest;
pub mod sections;
mod store;
mod types;
mod validation;
pub mod values;

// Re-export types
pub use store::{IniStore, RawStore};
pub use types::{AuthEntry, Configuration};

// Re-export ingestion functions
pub use ingest::{fingerprint, ingest, ingest_store, ingest_str};
