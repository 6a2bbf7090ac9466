//! Section readers
//!
//! Each section is described by a table of options. A reader walks its
//! table in order and applies every option present in the store; absent
//! options are skipped and the first error stops the walk.

pub mod authentication;
pub mod checking;
pub mod filtering;
pub mod output;

use crate::config::store::RawStore;
use crate::config::types::Configuration;
use crate::ConfigError;

/// How an option's raw value is typed and applied
#[derive(Clone, Copy)]
pub enum Setter {
    Bool(fn(&mut Configuration, bool)),
    Int(fn(&mut Configuration, i64) -> Result<(), ConfigError>),
    Str(fn(&mut Configuration, &str) -> Result<(), ConfigError>),
}

/// One option of a section
#[derive(Clone, Copy)]
pub struct OptionSpec {
    pub key: &'static str,
    pub setter: Setter,
}

impl OptionSpec {
    pub const fn new(key: &'static str, setter: Setter) -> Self {
        Self { key, setter }
    }
}

/// Applies every option of `table` found in `section`
pub fn apply_options(
    store: &dyn RawStore,
    section: &str,
    table: &[OptionSpec],
    config: &mut Configuration,
) -> Result<(), ConfigError> {
    for option in table {
        match option.setter {
            Setter::Bool(set) => {
                if let Some(value) = store.get_bool(section, option.key)? {
                    set(config, value);
                }
            }
            Setter::Int(set) => {
                if let Some(value) = store.get_int(section, option.key)? {
                    set(config, value)?;
                }
            }
            Setter::Str(set) => {
                if let Some(value) = store.get(section, option.key) {
                    set(config, value)?;
                }
            }
        }
    }
    Ok(())
}
