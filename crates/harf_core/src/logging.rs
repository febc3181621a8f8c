//! Optional file logging for hosts embedding the codec.
//!
//! # Responsibility
//! - Start a size-rotated file logger once per process.
//! - Keep codec events metadata-only (`event=... module=... status=...`).
//!
//! # Invariants
//! - Initialization with an identical config is idempotent.
//! - A conflicting re-initialization is rejected, never applied.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "harf";
const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_MAX_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    config: ResolvedConfig,
    _logger: LoggerHandle,
}

/// Logging configuration supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rotated log files.
    pub log_dir: PathBuf,
    /// Rotation threshold per file.
    pub max_file_bytes: u64,
    /// Rotated files kept on disk.
    pub max_files: usize,
}

impl LogConfig {
    /// Config with default rotation limits.
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedConfig {
    level: &'static str,
    log_dir: PathBuf,
    max_file_bytes: u64,
    max_files: usize,
}

/// Starts file logging.
///
/// # Errors
/// - Unsupported level, empty or relative directory, zero rotation limits.
/// - Logging already active with a different config.
/// - Directory creation or logger backend failure.
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let resolved = resolve(config)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(&resolved.log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                resolved.log_dir.display()
            )
        })?;

        let logger = Logger::try_with_str(resolved.level)
            .map_err(|err| format!("invalid log level `{}`: {err}", resolved.level))?
            .log_to_file(
                FileSpec::default()
                    .directory(resolved.log_dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(resolved.max_file_bytes),
                Naming::Numbers,
                Cleanup::KeepLogFiles(resolved.max_files),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=logging_init module=core status=ok level={} log_dir={} version={}",
            resolved.level,
            resolved.log_dir.display(),
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            config: resolved.clone(),
            _logger: logger,
        })
    })?;

    if state.config != resolved {
        return Err(format!(
            "logging already initialized (level `{}`, dir `{}`); refusing to switch to level `{}`, dir `{}`",
            state.config.level,
            state.config.log_dir.display(),
            resolved.level,
            resolved.log_dir.display()
        ));
    }
    Ok(())
}

/// Active `(level, log_dir)`, or `None` before initialization.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.config.level, state.config.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn resolve(config: &LogConfig) -> Result<ResolvedConfig, String> {
    if config.max_file_bytes == 0 || config.max_files == 0 {
        return Err("log rotation limits must be non-zero".to_string());
    }
    Ok(ResolvedConfig {
        level: normalize_level(&config.level)?,
        log_dir: normalize_log_dir(&config.log_dir)?,
        max_file_bytes: config.max_file_bytes,
        max_files: config.max_files,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, String> {
    if log_dir.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if !log_dir.is_absolute() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            log_dir.display()
        ));
    }
    Ok(log_dir.to_path_buf())
}
