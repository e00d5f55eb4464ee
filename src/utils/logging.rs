//! Logging system initialization
//!
//! Writes `kardoo.log` next to the executable by default, the same portable
//! placement as the configuration file. The previous sessions' logs are
//! shifted on startup so the last few sessions stay available.

use crate::error::{KardooError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "kardoo.log";

/// Number of previous sessions kept (`kardoo.log.1` ..= `kardoo.log.5`)
const KEPT_SESSIONS: u8 = 5;

/// Directory holding the log file: the executable's directory, else `.`
pub fn default_log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Install the global tracing subscriber writing to `<log_dir>/kardoo.log`
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// Returns `KardooError::Io` if the directory cannot be prepared and
/// `KardooError::Logging` if the appender or subscriber cannot be installed.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir).map_err(|e| KardooError::io(log_dir, e))?;
    rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME), KEPT_SESSIONS)?;

    // Rotation happens per session above, never by time
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|e| KardooError::Logging(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| KardooError::Logging(Box::new(e)))?;

    tracing::info!("Kardoo backend v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Shift `log` to `log.1`, `log.1` to `log.2`, ... dropping `log.<keep>`
fn rotate_logs_on_startup(log_path: &Path, keep: u8) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let numbered = |n: u8| {
        let mut name = log_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    };

    let oldest = numbered(keep);
    if oldest.exists() {
        std::fs::remove_file(&oldest).map_err(|e| KardooError::io(&oldest, e))?;
    }

    for n in (1..keep).rev() {
        let from = numbered(n);
        if from.exists() {
            let to = numbered(n + 1);
            std::fs::rename(&from, &to).map_err(|e| KardooError::io(&from, e))?;
        }
    }

    let first = numbered(1);
    std::fs::rename(log_path, &first).map_err(|e| KardooError::io(log_path, e))?;
    Ok(())
}
