//! Structured JSON logging of decode pipeline-stage events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sstv_core::{DecodeLog, LogLevel};
use std::cell::Cell;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct LogLine<'a> {
    timestamp: DateTime<Utc>,
    level: &'static str,
    subsystem: &'static str,
    message: &'a str,
}

fn level_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
        LogLevel::Fatal => "fatal",
    }
}

/// Writes one JSON object per log line to stderr, so stdout stays free for
/// any piped image data. `verbose` gates whether `Debug`-level events are
/// emitted at all.
pub struct StructuredLogger {
    verbose: bool,
    start: DateTime<Utc>,
    event_count: Cell<usize>,
}

impl StructuredLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            start: Utc::now(),
            event_count: Cell::new(0),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        (Utc::now() - self.start).num_milliseconds() as f64 / 1000.0
    }

    pub fn event_count(&self) -> usize {
        self.event_count.get()
    }
}

impl DecodeLog for StructuredLogger {
    fn log(&self, level: LogLevel, subsystem: &'static str, message: &str) {
        if level == LogLevel::Debug && !self.verbose {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: level_label(level),
            subsystem,
            message,
        };

        self.event_count.set(self.event_count.get() + 1);

        if let Ok(json) = serde_json::to_string(&line) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }
}
