//! dpos-params — operator tool for the node's DPoS consensus parameters.

mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use dpos_consensus::{read_params, write_params, DposConfig};
use dpos_store_lmdb::LmdbKvStore;
use dpos_types::{DposParams, Timestamp};
use dpos_utils::LogFormat;

#[derive(Parser)]
#[command(name = "dpos-params", about = "Inspect, initialise and encode DPoS consensus parameters")]
struct Cli {
    /// Data directory of the node's parameter store.
    #[arg(long, default_value = "./dpos_data", env = "DPOS_DATA_DIR", global = true)]
    data_dir: PathBuf,

    /// Store key the parameter record lives under.
    #[arg(long, default_value = "dpos_params", env = "DPOS_PARAMS_KEY", global = true)]
    key: String,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "DPOS_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "DPOS_LOG_FORMAT", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the default parameters as TOML.
    Defaults,

    /// Validate parameters and write them to the store.
    Init {
        /// TOML file overriding default values.
        #[arg(long)]
        params: Option<PathBuf>,

        /// Overwrite an existing record.
        #[arg(long)]
        force: bool,
    },

    /// Print the stored parameters and their derived schedule.
    Show,

    /// Print slot, epoch and producer offset for a timestamp.
    Schedule {
        /// Unix time in milliseconds (defaults to now).
        #[arg(long)]
        at_ms: Option<u64>,

        /// Use default parameters instead of the stored record.
        #[arg(long)]
        defaults: bool,
    },

    /// Print the canonical encoding of the parameters as hex.
    Encode {
        /// TOML file overriding default values.
        #[arg(long)]
        params: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dpos_utils::init_logging(cli.log_format, &cli.log_level);

    let key = cli.key.as_bytes();

    match cli.command {
        Command::Defaults => {
            print!("{}", config::params_to_toml_string(&DposParams::default())?);
        }
        Command::Init { params, force } => {
            let params = params_or_default(params.as_deref())?;
            let config = DposConfig::new(params).context("refusing to store invalid parameters")?;
            let store = open_store(&cli.data_dir)?;

            if !force {
                match read_params(&store, key) {
                    Ok(_) => bail!(
                        "parameters already stored under '{}' in {}; pass --force to overwrite",
                        cli.key,
                        cli.data_dir.display()
                    ),
                    Err(e) if e.is_not_found() => {}
                    Err(e) => return Err(e).context("failed to check for existing parameters"),
                }
            }

            write_params(&store, key, config.params())?;
            tracing::info!(data_dir = %cli.data_dir.display(), key = %cli.key, "stored dpos params");
            print!("{}", report::schedule_summary(&config));
        }
        Command::Show => {
            let config = stored_config(&cli.data_dir, key)?;
            print!("{}", config::params_to_toml_string(config.params())?);
            println!();
            print!("{}", report::schedule_summary(&config));
        }
        Command::Schedule { at_ms, defaults } => {
            let config = if defaults {
                DposConfig::new(DposParams::default())?
            } else {
                stored_config(&cli.data_dir, key)?
            };
            let at = at_ms.map(Timestamp::from_millis).unwrap_or_else(Timestamp::now);
            print!("{}", report::timing_report(&config, at));
        }
        Command::Encode { params } => {
            let params = params_or_default(params.as_deref())?;
            println!("{}", hex::encode(params.encode()?));
        }
    }

    Ok(())
}

fn params_or_default(path: Option<&Path>) -> anyhow::Result<DposParams> {
    match path {
        Some(path) => {
            let params = config::params_from_toml_file(path)?;
            tracing::info!(path = %path.display(), "loaded parameters");
            Ok(params)
        }
        None => Ok(DposParams::default()),
    }
}

fn open_store(data_dir: &Path) -> anyhow::Result<LmdbKvStore> {
    LmdbKvStore::open(data_dir)
        .with_context(|| format!("failed to open parameter store at {}", data_dir.display()))
}

fn stored_config(data_dir: &Path, key: &[u8]) -> anyhow::Result<DposConfig> {
    let store = open_store(data_dir)?;
    let params = read_params(&store, key)?;
    DposConfig::new(params).context("stored parameters are invalid")
}
