//! Reader for the `[filtering]` section

use super::{apply_options, OptionSpec, Setter};
use crate::config::store::RawStore;
use crate::config::types::Configuration;
use crate::config::values::{read_multiline, split_list};
use crate::url::LinkPattern;
use crate::ConfigError;

pub const SECTION: &str = "filtering";

// `ignore` comes before `nofollow`, so its rules always come first in
// `externlinks`.
const OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("ignorewarnings", Setter::Str(|c, v| {
        c.ignorewarnings = split_list(v);
        Ok(())
    })),
    OptionSpec::new("ignore", Setter::Str(|c, v| add_extern_links(c, v, true))),
    OptionSpec::new("nofollow", Setter::Str(|c, v| add_extern_links(c, v, false))),
    OptionSpec::new("internlinks", Setter::Str(|c, v| {
        c.internlinks.push(LinkPattern::compile(v, false)?);
        Ok(())
    })),
];

/// Reads link filters and ignored warnings
pub fn read(store: &dyn RawStore, config: &mut Configuration) -> Result<(), ConfigError> {
    apply_options(store, SECTION, OPTIONS, config)?;
    tracing::debug!(
        externlinks = config.externlinks.len(),
        internlinks = config.internlinks.len(),
        "read filtering configuration"
    );
    Ok(())
}

fn add_extern_links(config: &mut Configuration, value: &str, strict: bool) -> Result<(), ConfigError> {
    for line in read_multiline(value) {
        config.externlinks.push(LinkPattern::compile(line, strict)?);
    }
    Ok(())
}
