//! Timestamped terminal logging.
//!
//! The logger is an explicitly constructed value that gets passed to the
//! runner and the check probes. Its lifecycle is scoped to the process that
//! built it; there is no global logging state to configure or tear down.
//! Each line carries a timestamp, a severity tag, and a message.

use time::OffsetDateTime;
use time::macros::format_description;

// ANSI color codes for terminal output
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Fixed-width tag printed after the timestamp.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Error => "ERROR",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => GREEN,
            Level::Warn => YELLOW,
            Level::Error => RED,
        }
    }
}

/// Terminal logger writing timestamped severity-tagged lines to stdout.
#[derive(Debug, Clone)]
pub struct Logger {
    color: bool,
}

impl Logger {
    /// Creates a logger with colored output.
    pub fn new() -> Self {
        Logger { color: true }
    }

    /// Creates a logger without ANSI escapes, for non-terminal output.
    pub fn plain() -> Self {
        Logger { color: false }
    }

    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn emit(&self, level: Level, message: &str) {
        let timestamp = current_timestamp();
        if self.color {
            println!(
                "{}{}{} {}{}{} {}",
                DIM,
                timestamp,
                RESET,
                level.color(),
                level.tag(),
                RESET,
                message
            );
        } else {
            println!("{} {} {}", timestamp, level.tag(), message);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn current_timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| String::from("????-??-?? ??:??:??"))
}
