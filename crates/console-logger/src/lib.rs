//! Console Logger
//!
//! `log` backend for code running inside a browser page.
//! Every record is formatted once, written to a sink (the devtools console by
//! default) and kept in a bounded circular history that can be read back later.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of formatted lines kept when no capacity is given
pub const DEFAULT_HISTORY: usize = 200;

/// Destination for formatted log lines
pub trait LogSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Sink that forwards to `console.error/warn/info/debug`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn write(&self, level: Level, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

/// Prefixed, level-filtered logger with a circular history
pub struct ConsoleLogger {
    prefix: String,
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
    sink: Box<dyn LogSink>,
}

impl ConsoleLogger {
    pub fn new(prefix: &str, level: LevelFilter) -> Self {
        Self::with_sink(prefix, level, DEFAULT_HISTORY, Box::new(BrowserConsole))
    }

    pub fn with_sink(prefix: &str, level: LevelFilter, capacity: usize, sink: Box<dyn LogSink>) -> Self {
        Self {
            prefix: prefix.to_string(),
            level,
            capacity,
            history: Mutex::new(VecDeque::with_capacity(capacity)),
            sink,
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.prefix,
            record.args()
        )
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut history = match self.history.lock() {
            Ok(history) => history,
            Err(poisoned) => poisoned.into_inner(),
        };
        while history.len() >= self.capacity {
            history.pop_front();
        }
        history.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        self.sink.write(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

/// Install a `ConsoleLogger` as the global `log` backend.
///
/// The logger is leaked so the returned reference stays valid for the rest of
/// the page; a second call fails with `SetLoggerError`.
pub fn init_logger(prefix: &str, level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(prefix, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Default, Clone)]
    struct MemorySink(Arc<Mutex<Vec<(Level, String)>>>);

    impl LogSink for MemorySink {
        fn write(&self, level: Level, line: &str) {
            self.0.lock().unwrap().push((level, line.to_string()));
        }
    }

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(&Record::builder().level(level).args(format_args!("{}", msg)).build());
    }

    #[test]
    fn test_level_filter() {
        let sink = MemorySink::default();
        let logger = ConsoleLogger::with_sink("Widget", LevelFilter::Warn, 10, Box::new(sink.clone()));

        emit(&logger, Level::Info, "skipped");
        emit(&logger, Level::Error, "kept");

        let written = sink.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, Level::Error);
        assert!(written[0].1.ends_with("ERROR Widget: kept"));
        assert_eq!(logger.recent_lines().len(), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let logger = ConsoleLogger::with_sink("W", LevelFilter::Trace, 3, Box::new(MemorySink::default()));
        for i in 0..5 {
            emit(&logger, Level::Debug, &format!("line {}", i));
        }

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let sink = MemorySink::default();
        let logger = ConsoleLogger::with_sink("W", LevelFilter::Info, 0, Box::new(sink.clone()));
        emit(&logger, Level::Info, "hello");

        assert!(logger.recent_lines().is_empty());
        assert_eq!(sink.0.lock().unwrap().len(), 1);
    }
}
