use crate::config::sections::{authentication, checking, filtering, output};
use crate::config::store::{IniStore, RawStore};
use crate::config::types::Configuration;
use crate::{ConfigError, LinkCheckError};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Reads configuration files into an existing configuration
///
/// All files are merged into one store first (later files override
/// scalar options of earlier ones), then the output, checking,
/// authentication and filtering sections are applied in that order.
///
/// # Arguments
///
/// * `config` - The configuration to update
/// * `files` - Paths of the INI files to read, in order
///
/// # Returns
///
/// * `Ok(())` - Every file was read and applied
/// * `Err(LinkCheckError::Config)` - Reading or applying failed; sections
///   after the failing one are not applied
///
/// # Example
///
/// ```no_run
/// use linkcheck_config::config::{ingest, Configuration};
///
/// let mut config = Configuration::default();
/// ingest(&mut config, &["/etc/linkchecker/linkcheckerrc"]).unwrap();
/// println!("Using {} threads", config.threads);
/// ```
pub fn ingest<P: AsRef<Path>>(config: &mut Configuration, files: &[P]) -> Result<(), LinkCheckError> {
    let mut store = IniStore::new();
    for file in files {
        let path = file.as_ref();
        tracing::debug!("Reading configuration file: {}", path.display());
        store.read_file(path)?;
    }
    ingest_store(config, &store)
}

/// Reads configuration text into an existing configuration
pub fn ingest_str(config: &mut Configuration, content: &str) -> Result<(), LinkCheckError> {
    let mut store = IniStore::new();
    store.read_str("<string>", content)?;
    ingest_store(config, &store)
}

/// Applies an already populated store to a configuration
pub fn ingest_store(config: &mut Configuration, store: &dyn RawStore) -> Result<(), LinkCheckError> {
    read_sections(store, config)?;
    tracing::info!("Configuration ingested (output: {})", config.output);
    Ok(())
}

fn read_sections(store: &dyn RawStore, config: &mut Configuration) -> Result<(), ConfigError> {
    output::read(store, config)?;
    checking::read(store, config)?;
    authentication::read(store, config)?;
    filtering::read(store, config)?;
    Ok(())
}

/// Computes a SHA-256 fingerprint of the configuration sources
///
/// This is used to detect if the configuration has changed between runs.
/// The files are hashed in the given order.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file contents
/// * `Err(ConfigError)` - Failed to read one of the files
pub fn fingerprint<P: AsRef<Path>>(files: &[P]) -> Result<String, ConfigError> {
    let mut hasher = Sha256::new();
    for file in files {
        let path = file.as_ref();
        let content = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        hasher.update(&content);
    }
    Ok(hex::encode(hasher.finalize()))
}
