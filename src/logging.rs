//! Logging setup
//!
//! The terminal belongs to the UI, so log output goes to a file in the data
//! directory instead of stdout.

use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE: &str = "tripview.log";
/// Checked before `RUST_LOG`
pub const LOG_ENV: &str = "TRIPVIEW_LOG";

/// Platform data directory (`~/.local/share/tripview/` on Linux)
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tripview").map(|dirs| dirs.data_local_dir().to_path_buf())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))))
}

/// Opens `directory/tripview.log` for appending, creating both if needed
pub fn open_log_file(directory: &Path) -> io::Result<File> {
    fs::create_dir_all(directory)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(directory.join(LOG_FILE))
}

/// Installs a global subscriber writing to `directory/tripview.log`
pub fn initialize_logging(directory: &Path) -> io::Result<()> {
    let log_file = open_log_file(directory)?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log_file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_subscriber)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
