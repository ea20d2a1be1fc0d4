use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// JSON document (`{"rates": [...]}`) ingested once at startup.
    #[clap(long, env = "RATES_FILE", default_value = "static/rates.json", global = true)]
    pub rates_file: PathBuf,

    /// Indent JSON output.
    #[clap(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the ingested rates.
    #[clap(name = "rates")]
    Rates,

    /// Resolve the price for a time window.
    #[clap(name = "price")]
    Price(PriceArgs),

    /// Replace the ingested rates with a new document and print the stored set.
    #[clap(name = "update")]
    Update(UpdateArgs),

    /// Validate the rates file and report how many rates it holds.
    #[clap(name = "check")]
    Check,
}

#[derive(clap::Args)]
pub struct PriceArgs {
    /// Window start, ISO-8601 with a UTC offset (e.g. `2024-02-12T09:05:00-06:00`).
    #[clap(long, default_value = "")]
    pub start: String,

    /// Window end, same format and offset as `--start`.
    #[clap(long, default_value = "")]
    pub end: String,

    /// Print the resolution outcome instead of the collapsed price.
    #[clap(long)]
    pub explain: bool,
}

#[derive(clap::Args)]
pub struct UpdateArgs {
    /// Rates document to store; read from stdin when omitted.
    #[clap(long)]
    pub file: Option<PathBuf>,
}
