//! Line-oriented leveled logging sink.
//!
//! [`Logger`] implements [`log::Log`], so the four severity channels are
//! the facade macros (`debug!`, `info!`, `warn!`, `error!`), gated by a
//! process-wide minimum level. Each emitted line can carry a timestamp,
//! a caller annotation (module path, truncated with a leading ellipsis
//! when over-length), and the source location, independently toggled
//! through a bitmask-style [`Flags`] value. Output goes to a
//! configurable stream and is optionally colorized per level.
//!
//! The traversal engine never depends on this crate; it reaches logging
//! only through the facade.

use chrono::Local;
use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};
use std::sync::Mutex;

/// Display width of the caller annotation column.
const CALLER_WIDTH: usize = 32;

/// Bitmask of per-line annotation toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// No annotations: bare message lines.
    pub const NONE: Flags = Flags(0);
    /// Prefix each line with a formatted local timestamp.
    pub const TIMESTAMP: Flags = Flags(1);
    /// Annotate with the calling module path.
    pub const CALLER_INFO: Flags = Flags(1 << 1);
    /// Annotate with the calling source `file:line`.
    pub const SOURCE_INFO: Flags = Flags(1 << 2);

    /// True when every bit of `other` is set in `self`.
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

/// Leveled, stream-configurable line logger.
///
/// Configure with the builder-style setters, then [`install`](Self::install)
/// it as the global logger. The stream sits behind a mutex because the
/// facade may log from any thread.
pub struct Logger {
    level: LevelFilter,
    flags: Flags,
    time_format: String,
    colorize: bool,
    stream: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// A logger with the defaults: debug level, timestamps on, stderr,
    /// colorized except on Windows.
    pub fn new() -> Self {
        Self {
            level: LevelFilter::Debug,
            flags: Flags::TIMESTAMP,
            time_format: "%Y-%m-%d@%H:%M:%S%.3f".to_string(),
            colorize: !cfg!(windows),
            stream: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Set the minimum level; records below it are dropped.
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Set the annotation flags.
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the `chrono` format string used for the timestamp prefix.
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Toggle per-level colorization of the severity tag.
    pub fn colorize(mut self, on: bool) -> Self {
        self.colorize = on;
        self
    }

    /// Redirect output to an arbitrary stream.
    pub fn stream(mut self, stream: Box<dyn Write + Send>) -> Self {
        self.stream = Mutex::new(stream);
        self
    }

    /// Register as the global logger for the `log` facade.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Render one record to its output line, without the trailing newline.
    fn compose(&self, record: &Record<'_>) -> String {
        let mut line = String::new();
        if self.flags.contains(Flags::TIMESTAMP) {
            line.push_str(&Local::now().format(&self.time_format).to_string());
            line.push(' ');
        }
        line.push_str(&self.severity_tag(record.level()));
        line.push(' ');
        if self.flags.contains(Flags::CALLER_INFO) {
            let caller = record.module_path().unwrap_or("?");
            line.push_str(&truncate_caller(caller, CALLER_WIDTH));
            line.push(' ');
        }
        if self.flags.contains(Flags::SOURCE_INFO) {
            line.push_str(&format!(
                "{}:{} ",
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
            ));
        }
        line.push_str(&record.args().to_string());
        line
    }

    fn severity_tag(&self, level: Level) -> String {
        let tag = match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        };
        if !self.colorize {
            return tag.to_string();
        }
        match level {
            Level::Error => tag.red().to_string(),
            Level::Warn => tag.yellow().to_string(),
            Level::Info => tag.green().to_string(),
            Level::Debug => tag.blue().to_string(),
            Level::Trace => tag.cyan().to_string(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.compose(record);
        if let Ok(mut stream) = self.stream.lock() {
            let _ = writeln!(stream, "{line}");
        }
    }

    fn flush(&self) {
        if let Ok(mut stream) = self.stream.lock() {
            let _ = stream.flush();
        }
    }
}

/// Fit a caller label into `width` columns: pad when short, keep the
/// tail behind a leading ellipsis when over-length.
fn truncate_caller(caller: &str, width: usize) -> String {
    let count = caller.chars().count();
    if count <= width {
        return format!("{caller:<width$}");
    }
    let tail: String = caller
        .chars()
        .skip(count - (width - 1))
        .collect();
    format!("…{tail}")
}
