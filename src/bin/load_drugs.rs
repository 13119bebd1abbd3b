//! CLI: fetch drug pages, assemble records, load them in one transaction.
//!
//! Assumes a first-time load into empty tables; re-running against a
//! populated schema fails on the surrogate-id primary key.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drugbank_extract::fetch::Fetcher;
use drugbank_extract::load::{load_records, StoreConfig};
use drugbank_extract::{assemble_records, Options};

/// Identifiers loaded when none are given on the command line.
const DEFAULT_IDENTIFIERS: [&str; 11] = [
    "DB00006", "DB00619", "DB01048", "DB14093", "DB00173", "DB00734", "DB00218", "DB05196",
    "DB09095", "DB01053", "DB00274",
];

#[derive(Debug, Parser)]
#[command(name = "load_drugs", about = "Extract DrugBank records and load them into PostgreSQL")]
struct Args {
    /// Database user.
    #[arg(long, default_value = "postgres")]
    user: String,

    /// Database password.
    #[arg(long, default_value = "password")]
    password: String,

    /// Database host.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Database port.
    #[arg(long, default_value_t = 5432)]
    port: u16,

    /// Database name.
    #[arg(long, default_value = "postgres")]
    dbname: String,

    /// Connection timeout in seconds.
    #[arg(long, default_value_t = 10)]
    connect_timeout: u64,

    /// Print assembled records as JSON instead of loading them.
    #[arg(long)]
    dry_run: bool,

    /// DrugBank identifiers to process, in load order.
    identifiers: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let identifiers: Vec<String> = if args.identifiers.is_empty() {
        DEFAULT_IDENTIFIERS.iter().map(ToString::to_string).collect()
    } else {
        args.identifiers.clone()
    };

    let fetcher = Fetcher::new()?;
    let options = Options::default();
    let records = assemble_records(&fetcher, &identifiers, &options)
        .context("record assembly failed")?;

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let config = StoreConfig {
        user: args.user,
        password: args.password,
        host: args.host,
        port: args.port,
        dbname: args.dbname,
        connect_timeout: Duration::from_secs(args.connect_timeout),
    };
    let mut client = config.connect().context("database connection failed")?;
    let inserted = load_records(&mut client, &records).context("batch load failed")?;
    tracing::info!(records = records.len(), inserted, "load complete");

    Ok(())
}
