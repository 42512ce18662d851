use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};

const APP_DIR: &str = "hookah";
const LOG_FILE: &str = "hookah.log";
const KEEP_LOG_FILES: usize = 7;

/// `<cache dir>/hookah`, or the temp dir when there is no cache dir.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Logs to stderr for the one-shot commands.
pub fn init_stderr(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Daily-rotated `hookah.log.<date>` files under `dir`, written off the
/// calling thread. Lines are flushed until the guard is dropped.
pub fn file_writer(dir: &Path) -> eyre::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .max_log_files(KEEP_LOG_FILES)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Logs to files so the terminal UI is not drawn over. Hold the guard for as
/// long as the UI runs.
pub fn init_file(level: Level) -> eyre::Result<(PathBuf, WorkerGuard)> {
    let dir = log_dir();
    let (writer, guard) = file_writer(&dir)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok((dir, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};

    #[test]
    fn writes_rotated_file_under_dir() {
        let dir = std::env::temp_dir().join(format!("hookah-log-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let (mut writer, guard) = file_writer(&dir).unwrap();
        writer.write_all(b"limit order placed\n").unwrap();
        drop(guard);

        let files: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);

        let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("hookah.log."), "unexpected file {name}");
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "limit order placed\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
