//! `fnrecord` — record, update, list and export function records.
//!
//! # Usage
//!
//! ```text
//! fnrecord add --date 2024-05-01 --name "Annual Day" --participants 150
//! fnrecord update 3 --name "Annual Day" --participants 180
//! fnrecord list
//! fnrecord export reports/functions.xlsx
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use fnrecord_cli::{Command, Settings, run};
use fnrecord_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Function record store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "fnrecord.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let store = SqliteStore::open(&settings.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.store_path))?;

  let mut stdout = std::io::stdout().lock();
  run(cli.command, &store, &settings, &mut stdout).await
}
