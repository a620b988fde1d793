//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start one process-wide `flexi_logger` backend, either as rolling log
//!   files (UI host) or on stderr (CLI probe).
//! - Capture panics as single-line log events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Re-initialization with a different level or target is rejected.
//! - Initialization never panics.
//!
//! Event lines use `event=<name> module=<module> status=<status> key=value`.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Once;

const LOG_FILE_BASENAME: &str = "folio";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_PAYLOAD_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: Once = Once::new();

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Size-rotated files under an absolute directory.
    Directory(PathBuf),
    Stderr,
}

impl LogTarget {
    fn describe(&self) -> String {
        match self {
            Self::Directory(dir) => dir.display().to_string(),
            Self::Stderr => "stderr".to_string(),
        }
    }
}

struct ActiveLogger {
    level: LevelFilter,
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Starts file logging under `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - Logging is already active with another level or target.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let target = LogTarget::Directory(absolute_log_dir(log_dir)?);
    activate(level, target)
}

/// Starts stderr logging, used by the CLI probe.
pub fn init_stderr_logging(level: &str) -> Result<(), String> {
    activate(parse_level(level)?, LogTarget::Stderr)
}

/// Returns `(level, target)` when logging is active.
pub fn logging_status() -> Option<(LevelFilter, LogTarget)> {
    ACTIVE
        .get()
        .map(|active| (active.level, active.target.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn activate(level: LevelFilter, target: LogTarget) -> Result<(), String> {
    let active = ACTIVE.get_or_try_init(|| start(level, target.clone()))?;
    if active.target != target {
        return Err(format!(
            "logging already writes to `{}`; refusing to switch to `{}`",
            active.target.describe(),
            target.describe()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already runs at `{}`; refusing to switch to `{}`",
            active.level, level
        ));
    }
    Ok(())
}

fn start(level: LevelFilter, target: LogTarget) -> Result<ActiveLogger, String> {
    let logger = Logger::with(LogSpecification::builder().default(level).build());
    let logger = match &target {
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("cannot create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        LogTarget::Stderr => logger.log_to_stderr().format(flexi_logger::default_format),
    };
    let handle = logger
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    PANIC_HOOK.call_once(install_panic_hook);
    info!(
        "event=logging_init module=core status=ok level={} target={} version={}",
        level,
        target.describe(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        target,
        _handle: handle,
    })
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let lowered = raw.trim().to_ascii_lowercase();
    let name = if lowered == "warning" { "warn" } else { lowered.as_str() };
    match LevelFilter::from_str(name) {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            raw.trim()
        )),
        Ok(level) => Ok(level),
    }
}

fn absolute_log_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log_dir must not be blank".to_string());
    }
    let path = Path::new(trimmed);
    if path.is_relative() {
        return Err(format!("log_dir must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let location = panic.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            one_line(&payload_text(panic.payload()), PANIC_PAYLOAD_MAX_CHARS)
        );
        previous(panic);
    }));
}

fn payload_text(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// Flattens line breaks and caps length so one event stays on one line.
fn one_line(value: &str, max_chars: usize) -> String {
    let mut flattened: String = value
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .take(max_chars)
        .collect();
    if value.chars().count() > max_chars {
        flattened.push_str("...");
    }
    flattened
}
