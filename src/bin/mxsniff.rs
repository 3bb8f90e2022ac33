#[path = "mxsniff/args.rs"]
mod args;
#[path = "mxsniff/output.rs"]
mod output;

use std::io;

use anyhow::{Context, Result, anyhow};
use mxsniff::{SniffAndProbe, Sniffer, fan_out, sniff_and_probe};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, expand_names};
use crate::output::RowWriter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let names = expand_names(&cli.names)?;

    let sniff_options = cli.sniff_options();
    let probe_options = cli.probe_options();
    let sender = cli.probe.as_deref();

    let stdout = io::stdout().lock();
    let mut writer = if cli.verbose {
        RowWriter::json(stdout)?
    } else {
        RowWriter::csv(stdout)
    };

    // première erreur rencontrée; les autres lignes sont quand même écrites
    let mut failure: Option<anyhow::Error> = None;

    fan_out(
        names,
        &cli.pool_options(),
        |_| Sniffer::new(sniff_options.clone()),
        |sniffer, name: String| -> Result<SniffAndProbe> {
            let sniffer = sniffer.as_ref().map_err(|err| anyhow!("{err}"))?;
            sniff_and_probe(sniffer, &name, sender, &probe_options)
                .with_context(|| format!("lookup of {name:?} failed"))
        },
        |_, outcome| {
            let written = outcome.and_then(|row| writer.write(&row));
            if let Err(err) = written {
                error!("{err:#}");
                failure.get_or_insert(err);
            }
        },
    );

    writer.finish()?;
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
