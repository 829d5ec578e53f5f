//! Decode-time logging capability (spec.md §9's design note on verbosity).
//!
//! The original source gated diagnostic output behind a global mutable
//! verbosity flag. This crate instead injects a [`DecodeLog`] capability
//! into the decoder: callers that want structured output (the CLI's JSON
//! log lines) implement the trait, and callers that don't pass [`NullLog`].
//! The core never decides what happens to a log line, and it never calls
//! `process::exit` — only a caller's own `fatal` implementation may do that.

use std::fmt;

/// Severity of a single log event, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        write!(f, "{s}")
    }
}

/// A log sink the decoder reports pipeline-stage events to.
///
/// `subsystem` names the stage emitting the event (`"header"`, `"vis"`,
/// `"sync"`, `"raster"`, `"color"`), mirroring the per-stage tagging the
/// original source's logger used.
pub trait DecodeLog {
    fn log(&self, level: LogLevel, subsystem: &'static str, message: &str);

    fn debug(&self, subsystem: &'static str, message: &str) {
        self.log(LogLevel::Debug, subsystem, message);
    }
    fn info(&self, subsystem: &'static str, message: &str) {
        self.log(LogLevel::Info, subsystem, message);
    }
    fn warn(&self, subsystem: &'static str, message: &str) {
        self.log(LogLevel::Warn, subsystem, message);
    }
    fn error(&self, subsystem: &'static str, message: &str) {
        self.log(LogLevel::Error, subsystem, message);
    }
    fn fatal(&self, subsystem: &'static str, message: &str) {
        self.log(LogLevel::Fatal, subsystem, message);
    }
}

/// A log sink that discards every event. The default for callers (and
/// tests) that don't care about decode diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl DecodeLog for NullLog {
    fn log(&self, _level: LogLevel, _subsystem: &'static str, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLog {
        events: RefCell<Vec<(LogLevel, &'static str, String)>>,
    }

    impl DecodeLog for RecordingLog {
        fn log(&self, level: LogLevel, subsystem: &'static str, message: &str) {
            self.events
                .borrow_mut()
                .push((level, subsystem, message.to_string()));
        }
    }

    #[test]
    fn null_log_accepts_every_call_silently() {
        let log = NullLog;
        log.debug("header", "probing");
        log.info("raster", "demodulating row 0");
        log.fatal("vis", "unreachable");
    }

    #[test]
    fn recording_log_captures_level_and_subsystem() {
        let log = RecordingLog::default();
        log.info("header", "found calibration header");
        log.warn("sync", "lost lock");
        let events = log.events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, LogLevel::Info);
        assert_eq!(events[0].1, "header");
        assert_eq!(events[1].0, LogLevel::Warn);
    }
}
