//! ptt-dl command line entry point
//!
//! Usage: `ptt-dl [CONFIG.json]`
//!
//! Without a config file the built-in defaults are used. Log verbosity
//! follows `RUST_LOG` (default `info`).
//!
//! Exit status is 0 on success, 2 when the site refuses the age confirmation
//! and 1 for any other failure.

use ptt_dl::{Config, PttDownloader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_authentication() => {
            error!(error = %e, "site refused the session");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ptt_dl::Result<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            Config::from_file(&path).await?
        }
        None => Config::default(),
    };

    let downloader = PttDownloader::new(config).await?;
    let summary = downloader.run().await?;
    info!(
        images_saved = summary.images_saved,
        images_skipped = summary.images_skipped,
        "done"
    );
    Ok(())
}
