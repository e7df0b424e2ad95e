use std::path::PathBuf;

use anyhow::Result;
use termblog_core::config;
use termblog_storage::Storage;
use tracing_subscriber::EnvFilter;

mod ops;
mod prompt;
mod session;
#[cfg(test)]
mod testutil;

fn main() -> Result<()> {
    let db_path = config::db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Logs go to a file next to the database, not the interactive console.
    let log_dir = db_path.parent().map_or_else(|| PathBuf::from("."), PathBuf::from);
    let appender = tracing_appender::rolling::never(log_dir, "termblog.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("program started");
    let storage = Storage::new(&db_path)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = prompt::Prompter::new(stdin.lock(), stdout.lock());
    session::run(&storage, &mut prompter)?;

    tracing::info!("program ended");
    Ok(())
}
