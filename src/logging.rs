//! Logging setup
//!
//! The interactive panel owns the terminal, so records go to a log file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{CalcError, CalcResult};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> CalcResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CalcError::Io(format!("cannot open log file '{}': {}", path.display(), e)))
}

/// Install the global subscriber, appending to `log_file`. Call once at startup.
///
/// Level comes from `RUST_LOG`, defaulting to `info`. Returns an error only
/// if the log file cannot be opened; a second call is ignored.
pub fn init_logging(log_file: &Path) -> CalcResult<()> {
    let file = open_log_file(log_file)?;
    let result = tracing_subscriber::registry()
        .with(make_filter())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("ecocalc.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("ecocalc.log");

        assert!(init_logging(&log_file).is_ok());
        assert!(init_logging(&log_file).is_ok());
        assert!(log_file.exists());
    }
}
