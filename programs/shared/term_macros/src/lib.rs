use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use std::fmt;
use std::io::{IsTerminal, Write};

pub use log;

/// Logs a single error line through the installed logger and exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        ::std::process::exit(1)
    }};
}

/// Installs the stderr logger for a tool. Every line is prefixed with `tool`.
///
/// Does nothing if a logger was already installed.
pub fn init_logger(tool: &'static str, level: LevelFilter) {
    let logger = StderrLogger {
        tool,
        colored: std::io::stderr().is_terminal(),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

struct StderrLogger {
    tool: &'static str,
    colored: bool,
}

impl StderrLogger {
    fn line(&self, level: Level, args: &fmt::Arguments) -> String {
        match level {
            Level::Error if self.colored => format!("{}: {}", self.tool.red().bold(), args),
            Level::Error => format!("{}: {}", self.tool, args),
            level => format!("{}: {}: {}", self.tool, self.label(level), args),
        }
    }

    fn label(&self, level: Level) -> String {
        let name = level.as_str().to_lowercase();
        if !self.colored {
            return name;
        }
        match level {
            Level::Error => name.red().bold().to_string(),
            Level::Warn => name.yellow().bold().to_string(),
            Level::Info => name.green().to_string(),
            Level::Debug => name.blue().to_string(),
            Level::Trace => name.dimmed().to_string(),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.line(record.level(), record.args());
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
