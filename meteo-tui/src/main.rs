//! Binary crate for the `meteo` demo app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive single-screen UI
//! - Human-friendly one-shot output

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use meteo_core::Config;

mod app;
mod cli;
mod tui;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    // In interactive mode stderr belongs to the alternate screen, so logs
    // go to a file under the platform data dir.
    let _guard = init_tracing(cmd.command.is_none())?;

    cmd.run().await
}

fn init_tracing(interactive: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if interactive {
        let dir = Config::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, "meteo.log"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}
