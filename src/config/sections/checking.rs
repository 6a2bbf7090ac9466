//! Reader for the `[checking]` section

use super::{apply_options, OptionSpec, Setter};
use crate::config::store::RawStore;
use crate::config::types::Configuration;
use crate::config::validation::{clamp_threads, compile_warning_regex, validate_timeout};
use crate::ConfigError;

pub const SECTION: &str = "checking";

const OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("threads", Setter::Int(|c, v| {
        c.threads = clamp_threads(v);
        Ok(())
    })),
    OptionSpec::new("timeout", Setter::Int(|c, v| {
        c.timeout = validate_timeout(v)?;
        Ok(())
    })),
    OptionSpec::new("anchors", Setter::Bool(|c, v| c.anchors = v)),
    OptionSpec::new("recursionlevel", Setter::Int(|c, v| {
        c.recursionlevel = v;
        Ok(())
    })),
    OptionSpec::new("warningregex", Setter::Str(set_warning_regex)),
    OptionSpec::new("warnsizebytes", Setter::Int(|c, v| {
        c.warnsizebytes = Some(v);
        Ok(())
    })),
    OptionSpec::new("nntpserver", Setter::Str(|c, v| {
        c.nntpserver = Some(v.to_string());
        Ok(())
    })),
    OptionSpec::new("useragent", Setter::Str(|c, v| {
        c.useragent = v.to_string();
        Ok(())
    })),
];

/// Boolean feature toggles, also read from `[checking]`
const CHECK_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("checkhtml", Setter::Bool(|c, v| c.checkhtml = v)),
    OptionSpec::new("checkcss", Setter::Bool(|c, v| c.checkcss = v)),
    OptionSpec::new("checkhtmlw3", Setter::Bool(|c, v| c.checkhtmlw3 = v)),
    OptionSpec::new("checkcssw3", Setter::Bool(|c, v| c.checkcssw3 = v)),
    OptionSpec::new("scanvirus", Setter::Bool(|c, v| c.scanvirus = v)),
    OptionSpec::new("clamavconf", Setter::Bool(|c, v| c.clamavconf = v)),
    OptionSpec::new("cookies", Setter::Bool(|c, v| {
        c.sendcookies = v;
        c.storecookies = v;
    })),
];

/// Reads the `[checking]` section, then the check toggles
pub fn read(store: &dyn RawStore, config: &mut Configuration) -> Result<(), ConfigError> {
    apply_options(store, SECTION, OPTIONS, config)?;
    read_check_options(store, config)?;
    tracing::debug!(
        threads = config.threads,
        timeout = config.timeout,
        recursionlevel = config.recursionlevel,
        "read checking configuration"
    );
    Ok(())
}

/// Reads the `check*` toggles and `cookies`
pub fn read_check_options(store: &dyn RawStore, config: &mut Configuration) -> Result<(), ConfigError> {
    apply_options(store, SECTION, CHECK_OPTIONS, config)
}

/// An empty pattern leaves the current value alone
fn set_warning_regex(config: &mut Configuration, value: &str) -> Result<(), ConfigError> {
    if let Some(regex) = compile_warning_regex(value)? {
        config.warningregex = Some(regex);
    }
    Ok(())
}
