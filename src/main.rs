use std::{fs, path::Path};

use clap::Parser;
use deplist::cli::{commands, flags::Cli};
use deplist::core::error::DeplistError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    if let Err(err) = commands::run(cli).await {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<(), DeplistError> {
    let level = match (cli.quiet, cli.debug) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let file_layer = match &cli.log_file {
        Some(log_path) => Some(
            fmt::layer()
                .with_writer(open_log_file(log_path)?)
                .with_ansi(false)
                .with_target(false)
                .boxed(),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| DeplistError::Config(e.to_string()))
}

fn open_log_file(log_path: &Path) -> Result<fs::File, DeplistError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DeplistError::Config(e.to_string()))?;
        }
    }
    if let Ok(meta) = fs::metadata(log_path) {
        if meta.len() > 1_000_000 {
            let rotated = log_path.with_extension("log.1");
            let _ = fs::rename(log_path, rotated);
        }
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| DeplistError::Config(e.to_string()))
}
