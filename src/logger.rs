//! `log` backend filtered by a level bitmask.
//!
//! Entries go to an attached channel when there is one (a host UI pumps the
//! receiver), to stderr otherwise.

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::Sender;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::Result;

// Bitflags for log levels
pub const LOG_LEVEL_ERROR: u8 = 1;
pub const LOG_LEVEL_WARN: u8 = 2;
pub const LOG_LEVEL_INFO: u8 = 4;
pub const LOG_LEVEL_TRACE: u8 = 8;

pub const LOG_LEVEL_NONE: u8 = 0;
pub const LOG_LEVEL_ALL: u8 = LOG_LEVEL_ERROR | LOG_LEVEL_WARN | LOG_LEVEL_INFO | LOG_LEVEL_TRACE;
pub const LOG_LEVEL_DEFAULT: u8 = LOG_LEVEL_ERROR | LOG_LEVEL_WARN | LOG_LEVEL_INFO;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 1,
    Warning = 2,
    Info = 4,
    Trace = 8,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Trace => "TRACE",
        }
    }

    /// `debug!` shares the trace bit.
    pub fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub message: String,
    pub thread_id: u32,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<5} [{}] {}", self.timestamp, self.level.as_str(), self.thread_id, self.message)
    }
}

/// Parses a mask: a number (`7`, `0xF`) or a comma list of
/// `error,warn,info,trace,all,none`.
pub fn parse_mask(s: &str) -> Option<u8> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).ok();
    }
    if let Ok(n) = s.parse::<u8>() {
        return Some(n);
    }
    s.split(',').try_fold(LOG_LEVEL_NONE, |mask, part| {
        let bit = match part.trim().to_ascii_lowercase().as_str() {
            "error" => LOG_LEVEL_ERROR,
            "warn" | "warning" => LOG_LEVEL_WARN,
            "info" => LOG_LEVEL_INFO,
            "trace" | "debug" => LOG_LEVEL_TRACE,
            "all" => LOG_LEVEL_ALL,
            "none" => LOG_LEVEL_NONE,
            _ => return None,
        };
        Some(mask | bit)
    })
}

/// Most verbose `log` filter the mask lets through, so disabled levels are
/// rejected before any formatting happens.
pub fn max_level_filter(mask: u8) -> LevelFilter {
    if mask & LOG_LEVEL_TRACE != 0 {
        LevelFilter::Trace
    } else if mask & LOG_LEVEL_INFO != 0 {
        LevelFilter::Info
    } else if mask & LOG_LEVEL_WARN != 0 {
        LevelFilter::Warn
    } else if mask & LOG_LEVEL_ERROR != 0 {
        LevelFilter::Error
    } else {
        LevelFilter::Off
    }
}

// Linked directly: resolving through the proc tables would log from inside
// the logger.
fn current_thread_id() -> u32 {
    #[cfg(windows)]
    {
        unsafe { windows_sys::Win32::System::Threading::GetCurrentThreadId() }
    }
    #[cfg(not(windows))]
    {
        0
    }
}

pub struct Logger {
    mask: AtomicU8,
    sender: Mutex<Option<Sender<LogEntry>>>,
}

impl Logger {
    pub const fn new(mask: u8) -> Self {
        Self { mask: AtomicU8::new(mask), sender: Mutex::new(None) }
    }

    pub fn set_mask(&self, mask: u8) {
        self.mask.store(mask, Ordering::Relaxed);
    }

    pub fn mask(&self) -> u8 {
        self.mask.load(Ordering::Relaxed)
    }

    pub fn attach(&self, tx: Sender<LogEntry>) {
        if let Ok(mut slot) = self.sender.lock() {
            *slot = Some(tx);
        }
    }

    fn dispatch(&self, entry: LogEntry) {
        let Ok(mut slot) = self.sender.lock() else {
            eprintln!("{entry}");
            return;
        };
        match slot.as_ref() {
            Some(tx) => {
                if let Err(e) = tx.send(entry) {
                    // Receiver gone; fall back to stderr from now on.
                    *slot = None;
                    eprintln!("{}", e.0);
                }
            }
            None => eprintln!("{entry}"),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.mask() & LogLevel::from_log(metadata.level()) as u8 != 0
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.dispatch(LogEntry {
            timestamp,
            level: LogLevel::from_log(record.level()),
            message: record.args().to_string(),
            thread_id: current_thread_id(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger::new(LOG_LEVEL_DEFAULT);

/// Installs the logger as the `log` backend, writing to stderr.
pub fn init(mask: u8) -> Result<()> {
    log::set_logger(&LOGGER)?;
    set_log_level(mask);
    Ok(())
}

/// Like [`init`], with entries sent to `tx`. A failed call leaves the
/// installed logger's channel alone.
pub fn init_with_sender(mask: u8, tx: Sender<LogEntry>) -> Result<()> {
    init(mask)?;
    LOGGER.attach(tx);
    Ok(())
}

pub fn set_log_level(mask: u8) {
    LOGGER.set_mask(mask);
    log::set_max_level(max_level_filter(mask));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn record(level: log::Level, msg: &str, f: impl FnOnce(&Record<'_>)) {
        f(&Record::builder().level(level).args(format_args!("{msg}")).build());
    }

    #[test]
    fn test_mask_filters_levels() {
        let logger = Logger::new(LOG_LEVEL_ERROR | LOG_LEVEL_TRACE);
        let (tx, rx) = mpsc::channel();
        logger.attach(tx);

        record(log::Level::Error, "boom", |r| logger.log(r));
        record(log::Level::Info, "hidden", |r| logger.log(r));
        record(log::Level::Debug, "detail", |r| logger.log(r));

        let got: Vec<_> = rx.try_iter().map(|e| (e.level, e.message)).collect();
        assert_eq!(got, vec![(LogLevel::Error, "boom".to_string()), (LogLevel::Trace, "detail".to_string())]);

        logger.set_mask(LOG_LEVEL_NONE);
        record(log::Level::Error, "muted", |r| logger.log(r));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_falls_back() {
        let logger = Logger::new(LOG_LEVEL_ALL);
        let (tx, rx) = mpsc::channel();
        logger.attach(tx);
        drop(rx);
        record(log::Level::Warn, "to stderr", |r| logger.log(r));
        assert!(logger.sender.lock().unwrap().is_none());
    }

    #[test]
    fn test_parse_mask() {
        assert_eq!(parse_mask("7"), Some(7));
        assert_eq!(parse_mask("0xF"), Some(LOG_LEVEL_ALL));
        assert_eq!(parse_mask("error, warn"), Some(LOG_LEVEL_ERROR | LOG_LEVEL_WARN));
        assert_eq!(parse_mask("ALL"), Some(LOG_LEVEL_ALL));
        assert_eq!(parse_mask("none"), Some(0));
        assert_eq!(parse_mask("loud"), None);
        assert_eq!(parse_mask("info,"), None);
    }

    #[test]
    fn test_max_level_filter() {
        assert_eq!(max_level_filter(LOG_LEVEL_DEFAULT), LevelFilter::Info);
        assert_eq!(max_level_filter(LOG_LEVEL_ERROR), LevelFilter::Error);
        assert_eq!(max_level_filter(LOG_LEVEL_TRACE), LevelFilter::Trace);
        assert_eq!(max_level_filter(LOG_LEVEL_NONE), LevelFilter::Off);
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry { timestamp: 10, level: LogLevel::Warning, message: "m".into(), thread_id: 3 };
        assert_eq!(entry.to_string(), "[10] WARN  [3] m");
    }
}
