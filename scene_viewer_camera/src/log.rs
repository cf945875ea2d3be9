//! Internal logging system for the scene viewer camera
//!
//! This module provides a small pluggable logging layer with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) and a global minimum severity
//! - Colored console output by default
//! - Thread-safe logger registry with RwLock
//! - File and line information for detailed ERROR logs
//!
//! Camera mutations that are skipped because of invalid input are reported
//! at DEBUG severity, which the default minimum severity (Info) filters out.

use colored::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route camera diagnostics elsewhere (file, host UI console, ...).
///
/// # Example
///
/// ```no_run
/// use scene_viewer_camera::camera3d::log::{Logger, LogEntry};
///
/// struct ConsoleCapture;
///
/// impl Logger for ConsoleCapture {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "camera3d::Camera", "camera3d::math")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (per-event gesture tracing)
    Trace,

    /// Development/debugging information (skipped mutations, fallbacks)
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL REGISTRY =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Process-wide logger registry used by the `camera_*!` macros
pub struct Log;

impl Log {
    /// Replace the current logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scene_viewer_camera::camera3d::log::{Log, Logger, LogEntry};
    ///
    /// struct Silent;
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Log::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the minimum severity forwarded to the logger
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn min_severity() -> LogSeverity {
        LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether an entry of this severity would reach the logger
    pub fn enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Log a message without file:line information
    ///
    /// Used by macros like camera_info!, camera_debug!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log a message with file:line information
    ///
    /// Used by the camera_error! macro to include the source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::enabled(severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-event detail)
#[macro_export]
macro_rules! camera_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// use scene_viewer_camera::camera_debug;
///
/// let axis = scene_viewer_camera::glam::Vec3::ZERO;
/// camera_debug!("camera3d::Camera", "rotate skipped: axis {:?} is not finite", axis);
/// ```
#[macro_export]
macro_rules! camera_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! camera_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! camera_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! camera_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::Log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an error and build it, without returning
///
/// The first argument is the `Error` variant constructor taking a `String`.
///
/// ```no_run
/// use scene_viewer_camera::camera_err;
/// use scene_viewer_camera::camera3d::Error;
///
/// let near = -1.0;
/// let err = camera_err!(Error::InvalidArgument, "camera3d::projection", "near = {}", near);
/// ```
#[macro_export]
macro_rules! camera_err {
    ($variant:path, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::camera_error!($source, "{}", message);
        $variant(message)
    }};
}

/// Log an error and return it from the current function
#[macro_export]
macro_rules! camera_bail {
    ($variant:path, $source:expr, $($arg:tt)*) => {
        return Err($crate::camera_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
