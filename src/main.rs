use anyhow::Context;
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::Level;

use staticd::config::{Config, LogConfig};
use staticd::http::files::StaticFiles;
use staticd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    init_tracing(&cfg.log)?;

    let files = Arc::new(StaticFiles::from_config(&cfg));
    tracing::info!(root = %files.root().display(), "Serving files");

    tokio::select! {
        res = server::listener::run(&cfg.server, files) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn init_tracing(cfg: &LogConfig) -> anyhow::Result<()> {
    let level = Level::from_str(&cfg.level)
        .with_context(|| format!("invalid log level {:?}", cfg.level))?;

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level);

    match &cfg.file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.init(),
    }

    Ok(())
}
