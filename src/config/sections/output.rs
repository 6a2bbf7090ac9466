//! Reader for the `[output]` section and the per-logger sections

use super::{apply_options, OptionSpec, Setter};
use crate::config::store::RawStore;
use crate::config::types::Configuration;
use crate::config::values::split_list_lowercase;
use crate::output::LoggerKind;
use crate::ConfigError;

pub const SECTION: &str = "output";

const OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("warnings", Setter::Bool(|c, v| c.warnings = v)),
    OptionSpec::new("verbose", Setter::Bool(|c, v| c.verbose = v)),
    OptionSpec::new("complete", Setter::Bool(|c, v| c.complete = v)),
    OptionSpec::new("quiet", Setter::Bool(|c, v| c.quiet = v)),
    OptionSpec::new("debug", Setter::Str(set_debug)),
    OptionSpec::new("status", Setter::Bool(|c, v| c.status = v)),
    OptionSpec::new("log", Setter::Str(set_log)),
    OptionSpec::new("fileoutput", Setter::Str(add_file_outputs)),
];

/// Reads logger sections and the `[output]` section
pub fn read(store: &dyn RawStore, config: &mut Configuration) -> Result<(), ConfigError> {
    read_logger_sections(store, config);
    apply_options(store, SECTION, OPTIONS, config)?;
    apply_cascades(config);
    tracing::debug!(
        output = %config.output,
        verbose = config.verbose,
        warnings = config.warnings,
        fileoutput = config.fileoutput.len(),
        "read output configuration"
    );
    Ok(())
}

/// Copies every option of each `[<logger>]` section into its settings
fn read_logger_sections(store: &dyn RawStore, config: &mut Configuration) {
    for kind in LoggerKind::ALL {
        if !store.has_section(kind.name()) {
            continue;
        }
        let settings = config.logger_settings_mut(kind);
        for (key, value) in store.options(kind.name()) {
            if key == "parts" {
                settings.parts = split_list_lowercase(value);
            } else {
                settings.options.insert(key.to_string(), value.to_string());
            }
        }
    }
}

/// Applies the flags implied by other flags
///
/// `complete` implies `verbose`, `verbose` implies `warnings`, and `quiet`
/// turns console output off whatever `log` says.
fn apply_cascades(config: &mut Configuration) {
    if config.complete {
        config.verbose = true;
    }
    if config.verbose {
        config.warnings = true;
    }
    if config.quiet {
        config.output = LoggerKind::None.name().to_string();
    }
}

fn set_debug(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    config.set_debug(split_list_lowercase(value));
    Ok(())
}

fn set_log(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    config.output = value.trim().to_lowercase();
    Ok(())
}

fn add_file_outputs(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    for name in split_list_lowercase(value) {
        match LoggerKind::from_name(&name) {
            Some(kind) if kind.supports_file_output() => {
                let logger = config.new_file_output_logger(kind);
                config.fileoutput.push(logger);
            }
            Some(_) => {
                tracing::debug!(logger = %name, "logger does not support file output");
            }
            None => {
                tracing::warn!(logger = %name, "ignoring unknown file output logger");
            }
        }
    }
    Ok(())
}
