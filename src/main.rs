//! linkcheck-config main entry point
//!
//! Command-line front end that reads link checker configuration files and
//! reports the effective configuration.

use anyhow::Context;
use clap::Parser;
use linkcheck_config::config::{fingerprint, ingest, Configuration};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// linkcheck-config: read and check link checker configuration files
///
/// Files are applied in the order given; later files override scalar
/// options of earlier ones and extend list options.
#[derive(Parser, Debug)]
#[command(name = "linkcheck-config")]
#[command(version)]
#[command(about = "Read and check link checker configuration files", long_about = None)]
struct Cli {
    /// Paths to INI configuration files
    #[arg(value_name = "CONFIG", required = true)]
    configs: Vec<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the effective configuration as TOML
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = Configuration::default();
    for path in &cli.configs {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    if let Err(e) = ingest(&mut config, cli.configs.as_slice()) {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    let hash = fingerprint(cli.configs.as_slice())?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if cli.dump {
        let dumped = toml::to_string(&config).context("failed to serialize configuration")?;
        println!("{}", dumped);
    } else {
        print_summary(&config);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkcheck_config=warn"),
            1 => EnvFilter::new("linkcheck_config=info,warn"),
            2 => EnvFilter::new("linkcheck_config=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a human readable overview of the configuration
fn print_summary(config: &Configuration) {
    println!("Output:");
    println!("  Console logger: {}", config.output);
    println!(
        "  Warnings: {}, verbose: {}, complete: {}, quiet: {}",
        config.warnings, config.verbose, config.complete, config.quiet
    );
    if !config.debug.is_empty() {
        println!("  Debug: {}", config.debug.join(", "));
    }
    println!("  File output ({}):", config.fileoutput.len());
    for logger in &config.fileoutput {
        println!("    - {} -> {}", logger.kind, logger.filename().unwrap_or("-"));
    }

    println!("\nChecking:");
    println!("  Threads: {}", config.threads);
    println!("  Timeout: {}s", config.timeout);
    println!("  Recursion level: {}", config.recursionlevel);
    println!("  User agent: {}", config.useragent);
    if let Some(regex) = &config.warningregex {
        println!("  Warning regex: {}", regex.as_str());
    }
    println!(
        "  Cookies: send={}, store={}",
        config.sendcookies, config.storecookies
    );

    println!("\nAuthentication ({} entries):", config.authentication.len());
    for entry in &config.authentication {
        let password = if entry.password.is_some() { "set" } else { "prompt" };
        println!("  - {} user={} password={}", entry.pattern, entry.user, password);
    }
    if let Some(url) = &config.loginurl {
        println!("  Login URL: {}", url);
    }

    println!("\nFiltering:");
    println!("  Extern links: {}", config.externlinks.len());
    for rule in &config.externlinks {
        let kind = if rule.is_strict() { "ignore" } else { "nofollow" };
        let negate = if rule.is_negated() { "!" } else { "" };
        println!("    - [{}] {}{}", kind, negate, rule.as_str());
    }
    println!("  Intern links: {}", config.internlinks.len());
    if !config.ignorewarnings.is_empty() {
        println!("  Ignored warnings: {}", config.ignorewarnings.join(", "));
    }

    println!("\n✓ Configuration is valid");
}
