//! Operator-facing progress and alert reporting.
//!
//! Export runs are usually watched by a human who just clicked or typed
//! "export"; each step reports what it found and a fetch failure must be
//! loudly visible. Messages go to stderr so command output on stdout
//! stays clean for piping.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Severity of a report line.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// Process-wide reporter.
static REPORTER: Lazy<Reporter> = Lazy::new(Reporter::new);

/// Writes leveled report lines to stderr unless silenced.
pub struct Reporter {
    quiet: AtomicBool,
}

impl Reporter {
    fn new() -> Self {
        Self {
            quiet: AtomicBool::new(false),
        }
    }

    fn emit(&self, level: LogLevel, message: &str) {
        // Errors stay visible even in quiet mode.
        if self.quiet.load(Ordering::Relaxed) && !matches!(level, LogLevel::Error) {
            return;
        }
        eprintln!("{} {}", level.prefix(), message);
    }
}

/// Silence everything below error level (for scripting).
pub fn set_quiet(quiet: bool) {
    REPORTER.quiet.store(quiet, Ordering::Relaxed);
}

pub fn log_info(msg: impl AsRef<str>) {
    REPORTER.emit(LogLevel::Info, msg.as_ref());
}

pub fn log_success(msg: impl AsRef<str>) {
    REPORTER.emit(LogLevel::Success, msg.as_ref());
}

pub fn log_warning(msg: impl AsRef<str>) {
    REPORTER.emit(LogLevel::Warning, msg.as_ref());
}

pub fn log_error(msg: impl AsRef<str>) {
    REPORTER.emit(LogLevel::Error, msg.as_ref());
}
