mod command;
mod config;
mod input;
mod logging;
mod theme;

pub use command::{ClassifyCommand, SummaryCommand};
pub use config::*;

use anyhow::Result;
use clap::Parser;
use ixmodel_core::InvalidRecordPolicy;
use std::path::{Path, PathBuf};

/// Index classification CLI
pub struct IxmodelCli;

impl IxmodelCli {
    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run() -> Result<()> {
        IxmodelCli::run(Cli::parse())
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        IxmodelCli::run(Cli::parse_from(args))
    }

    fn run(cli: Cli) -> Result<()> {
        logging::init(cli.verbose);

        let config = resolve_config(
            cli.config.as_deref(),
            Path::new(Config::DEFAULT_PATH),
            cli.on_invalid,
        )?;
        tracing::debug!(?config, "resolved configuration");

        let mut stdout = std::io::stdout().lock();
        match cli.command {
            Command::Classify(cmd) => cmd.run(&config, &mut stdout),
            Command::Summary(cmd) => cmd.run(&config, &mut stdout),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ixmodel")]
#[command(about = "Classify document-database index descriptors")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./ixmodel.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// What to do with descriptors that cannot be modeled
    #[arg(long, global = true, value_parser = parse_policy)]
    on_invalid: Option<InvalidRecordPolicy>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the classified indexes as JSON
    Classify(ClassifyCommand),

    /// Print one line per index
    Summary(SummaryCommand),
}

/// An explicit `--config` must exist; the default file is optional. A
/// `--on-invalid` flag wins over either.
fn resolve_config(
    path: Option<&Path>,
    default_path: &Path,
    on_invalid: Option<InvalidRecordPolicy>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(default_path)?,
    };
    if let Some(policy) = on_invalid {
        config = config.on_invalid(policy);
    }
    Ok(config)
}

fn parse_policy(s: &str) -> Result<InvalidRecordPolicy, String> {
    match s {
        "skip" => Ok(InvalidRecordPolicy::Skip),
        "abort" => Ok(InvalidRecordPolicy::Abort),
        other => Err(format!("expected `skip` or `abort`, got `{other}`")),
    }
}
