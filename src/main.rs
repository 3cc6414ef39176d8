use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mixtape_changes::config::{AppConfig, CliConfig, FileConfig};
use mixtape_changes::{run_with_config, InvalidChangePolicy, StdoutReporter};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the input mixtape JSON file [default: mixtape.json].
    #[clap(short = 'i', long = "input")]
    pub mixtape_path: Option<PathBuf>,

    /// Path to the changes JSON file [default: changes.json].
    #[clap(short = 'c', long = "changes")]
    pub changes_path: Option<PathBuf>,

    /// Where to write the updated mixtape [default: output.json].
    #[clap(short = 'o', long = "output")]
    pub output_path: Option<PathBuf>,

    /// What to do when a change record doesn't validate.
    #[clap(long, default_value_t = InvalidChangePolicy::Abort)]
    pub on_invalid_change: InvalidChangePolicy,

    /// Path to a TOML config file, its values override the CLI ones.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // Logs go to stderr, stdout only carries the report.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        mixtape_path: cli_args.mixtape_path,
        changes_path: cli_args.changes_path,
        output_path: cli_args.output_path,
        on_invalid_change: cli_args.on_invalid_change,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Applying {:?} to {:?}, output to {:?} (on invalid change: {})",
        config.changes_path, config.mixtape_path, config.output_path, config.on_invalid_change
    );

    let mut reporter = StdoutReporter::default();
    if let Err(err) = run_with_config(&config, &mut reporter) {
        error!("Run aborted: {:#}", err);
        return Err(err);
    }
    Ok(())
}
