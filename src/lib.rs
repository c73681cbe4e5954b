pub mod cli;
pub mod transport;
pub mod viewer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::transport::errors::ViewerError;
use crate::viewer::ChannelViewer;

#[cfg(debug_assertions)]
fn log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

#[cfg(not(debug_assertions))]
fn log_level() -> log::LevelFilter {
    log::LevelFilter::Warn
}

/// `RUST_LOG` wins over the build default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level().to_string().to_lowercase()));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        log::debug!("logging already initialised: {err}");
    }
}

pub fn run() -> Result<(), ViewerError> {
    init_logging();
    let cli = Cli::parse();
    let output = cli.output.clone();
    let config = cli.into_config()?;

    let markup = ChannelViewer::new(config).render()?;

    match output {
        Some(path) => {
            std::fs::write(&path, markup)?;
            log::info!("wrote markup to {}", path.display());
        }
        None => println!("{markup}"),
    }
    Ok(())
}
