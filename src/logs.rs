//! Leveled diagnostic output for the pipeline.
//!
//! All diagnostics go to stderr with a level prefix, keeping stdout free
//! for data output. These messages are observability only, never part of
//! the data contract.

/// Log level for diagnostic display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// Emit a single diagnostic line.
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    eprintln!("{} {}", level.prefix(), message.as_ref());
}

/// Convenient logging functions
pub fn log_info(msg: impl AsRef<str>) {
    log(LogLevel::Info, msg);
}

pub fn log_success(msg: impl AsRef<str>) {
    log(LogLevel::Success, msg);
}

pub fn log_warning(msg: impl AsRef<str>) {
    log(LogLevel::Warning, msg);
}

pub fn log_error(msg: impl AsRef<str>) {
    log(LogLevel::Error, msg);
}

/// Emit a multi-line block (e.g. a table preview) indented under the
/// current diagnostic flow.
pub fn log_block(block: &str) {
    for line in block.lines() {
        eprintln!("   {}", line);
    }
}
