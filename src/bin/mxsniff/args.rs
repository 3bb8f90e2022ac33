use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use mxsniff::{PoolOptions, ProbeOptions, SniffOptions};

#[derive(Parser)]
#[command(
    name = "mxsniff",
    about = "Identify email service providers given an email address, URL or domain name"
)]
pub struct Cli {
    /// email or URL to look up; use @filename to load from a file
    #[arg(value_name = "EMAIL_OR_URL", required = true)]
    pub names: Vec<String>,

    /// return verbose results in JSON
    #[arg(short, long)]
    pub verbose: bool,

    /// ignore DNS lookup errors and continue with next item
    #[arg(short, long)]
    pub ignore_errors: bool,

    /// DNS timeout in seconds
    #[arg(short, long, value_name = "T", default_value_t = 30)]
    pub timeout: u64,

    /// probe whether target email address exists (needs your email to perform the test)
    #[arg(short, long, value_name = "YOUR_EMAIL")]
    pub probe: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The CLI always queries DNS, even for well-known mailbox domains.
    pub fn sniff_options(&self) -> SniffOptions {
        SniffOptions {
            ignore_errors: self.ignore_errors,
            use_static_domains: false,
            ..SniffOptions::default()
        }
        .with_timeout_secs(self.timeout)
    }

    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions::default().with_timeout(Duration::from_secs(self.timeout))
    }

    /// Probing keeps one SMTP conversation at a time.
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            workers: if self.probe.is_some() {
                1
            } else {
                PoolOptions::DEFAULT_WORKERS
            },
            preserve_order: false,
        }
    }
}

/// Replaces every `@path` argument by the non-empty lines of that file.
pub fn expand_names(names: &[String]) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        match name.strip_prefix('@') {
            Some(path) => {
                let content =
                    fs::read_to_string(path).with_context(|| format!("read {path}"))?;
                out.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_string),
                );
            }
            None => out.push(name.clone()),
        }
    }
    Ok(out)
}
