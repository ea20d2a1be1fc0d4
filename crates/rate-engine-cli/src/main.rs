mod cli;

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{crate_version, Parser};
use rate_engine::{
    ingest_file, parse_document, Ingestion, PriceOutput, PriceQuery, PriceResolver, RateStore,
    RatesOutput,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command, PriceArgs, UpdateArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    let store = RateStore::new();
    let ingestion = ingest_file(&store, &args.rates_file)
        .with_context(|| format!("failed to ingest rates from {}", args.rates_file.display()))?;

    match args.command {
        Command::Rates => print(&RatesOutput::from_rates(&store.all()), args.pretty),
        Command::Price(price_args) => price(&store, &price_args, args.pretty),
        Command::Update(update_args) => update(&store, &update_args, args.pretty),
        Command::Check => match ingestion {
            Ingestion::Loaded(count) => {
                println!("{count} rates valid");
                Ok(())
            }
            Ingestion::Missing => bail!("rates file not found: {}", args.rates_file.display()),
        },
    }
}

fn price(store: &RateStore, args: &PriceArgs, pretty: bool) -> Result<()> {
    let query = PriceQuery::parse(&args.start, &args.end)?;
    let result = PriceResolver::new(store).resolve(query.start, query.end)?;
    info!(?result, "price resolved");
    if args.explain {
        print(&result, pretty)
    } else {
        print(&PriceOutput::from(result), pretty)
    }
}

fn update(store: &RateStore, args: &UpdateArgs, pretty: bool) -> Result<()> {
    let document = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rates from {}", path.display()))?,
        None => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("failed to read rates from stdin")?;
            document
        }
    };
    let rates = parse_document(&document)?;
    warn!(count = rates.len(), "overwriting existing rates");
    let snapshot = store.replace(rates);
    print(&RatesOutput::from_rates(&snapshot), pretty)
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
