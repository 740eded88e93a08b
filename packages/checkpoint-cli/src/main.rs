//! Gravity checkpoint CLI
//!
//! - `gravity-checkpoint checkpoint <FILE>` -> one checkpoint per transaction
//! - `gravity-checkpoint inspect <FILE>`    -> JSON report per transaction
//! - `gravity-checkpoint index <FILE>`      -> store index per transaction

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;

use gravity_checkpoint::{read_transactions, Config, LogFormat, TxReport};
use gravity_rs::OutgoingTx;

#[derive(Parser)]
#[command(name = "gravity-checkpoint")]
#[command(about = "Checkpoint and store index tool for Gravity bridge outgoing transactions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the checkpoint of every transaction in FILE
    Checkpoint {
        /// JSON file with one transaction or an array of them
        file: PathBuf,

        /// Domain separator (overrides GRAVITY_ID)
        #[arg(long)]
        gravity_id: Option<String>,
    },

    /// Print a JSON report (type, store index, nonce, height, checkpoint)
    Inspect {
        /// JSON file with one transaction or an array of them
        file: PathBuf,

        /// Domain separator (overrides GRAVITY_ID); checkpoint omitted if unset
        #[arg(long)]
        gravity_id: Option<String>,
    },

    /// Print the store index of every transaction in FILE
    Index {
        /// JSON file with one transaction or an array of them
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Install color-eyre for better error reporting
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(config.log_format, cli.verbose);

    tracing::debug!(log_format = %config.log_format, "Configuration loaded");

    match cli.command {
        Commands::Checkpoint { file, gravity_id } => {
            let gravity_id = config.resolve_gravity_id(gravity_id.as_deref())?;
            for tx in read_transactions(&file)? {
                let checkpoint = tx
                    .checkpoint(&gravity_id)
                    .wrap_err_with(|| format!("{} nonce {}", tx.kind(), tx.nonce()))?;
                println!("{}", checkpoint);
            }
        }
        Commands::Inspect { file, gravity_id } => {
            let gravity_id = match gravity_id.as_deref().or(config.gravity_id.as_deref()) {
                Some(id) => Some(config.resolve_gravity_id(Some(id))?),
                None => None,
            };
            for tx in read_transactions(&file)? {
                let report = TxReport::build(&tx, gravity_id.as_deref())
                    .wrap_err_with(|| format!("{} nonce {}", tx.kind(), tx.nonce()))?;
                println!("{}", serde_json::to_string(&report)?);
            }
        }
        Commands::Index { file } => {
            for tx in read_transactions(&file)? {
                println!("0x{}", hex::encode(tx.store_index()));
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries command output
fn init_logging(format: LogFormat, verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose {
        "info,gravity_rs=debug,gravity_checkpoint=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
