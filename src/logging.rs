//! Tracing setup.
//!
//! Logs go to a file under the user data directory; stdout belongs to the
//! TUI. The filter defaults to `velt=info` and can be overridden with
//! `RUST_LOG`.

use std::fs::OpenOptions;
use std::sync::Arc;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::EnvFilter;

/// Log file name under the data directory.
pub const LOG_FILE: &str = "velt.log";

/// Initialize the global tracing subscriber writing to the log file.
pub fn init() -> Result<()> {
    let dir = dirs::data_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("could not determine user data directory"))?
        .join("velt");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).wrap_err("Failed to create data directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .wrap_err("Failed to open log file")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("velt=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
