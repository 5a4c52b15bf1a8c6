//! Utilities: logging (dynamic level), monotonic timing, simple error
//! context trait, and the terminal progress bar used by `hello`.
//!
//! Key items:
//!   init_logging / derive_level
//!   monotonic_ms
//!   ProgressBar

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Logging helpers.
pub mod logging {
    use super::*;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
    pub enum LogLevel {
        Error = 0,
        Info = 1,
        Debug = 2,
        Trace = 3,
    }

    impl LogLevel {
        pub fn as_str(&self) -> &'static str {
            match self {
                LogLevel::Error => "ERROR",
                LogLevel::Info => "INFO",
                LogLevel::Debug => "DEBUG",
                LogLevel::Trace => "TRACE",
            }
        }
    }

    static GLOBAL_LEVEL: OnceLock<AtomicU8> = OnceLock::new();

    fn inner_cell() -> &'static AtomicU8 {
        GLOBAL_LEVEL.get_or_init(|| AtomicU8::new(LogLevel::Info as u8))
    }

    pub fn init_logging(level: LogLevel) {
        set_log_level(level);
    }

    pub fn set_log_level(level: LogLevel) {
        inner_cell().store(level as u8, Ordering::Relaxed);
    }

    pub fn current_log_level() -> LogLevel {
        match inner_cell().load(Ordering::Relaxed) {
            0 => LogLevel::Error,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn derive_level(verbose: u8, quiet: bool) -> LogLevel {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    fn timestamp() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }

    fn should_emit(level: LogLevel) -> bool {
        level <= current_log_level()
    }

    pub fn log(level: LogLevel, msg: impl AsRef<str>) {
        if should_emit(level) {
            eprintln!("[{}][{}] {}", level.as_str(), timestamp(), msg.as_ref());
        }
    }

    pub fn error(msg: impl AsRef<str>) {
        log(LogLevel::Error, msg);
    }
    pub fn info(msg: impl AsRef<str>) {
        log(LogLevel::Info, msg);
    }
    pub fn debug(msg: impl AsRef<str>) {
        log(LogLevel::Debug, msg);
    }
    pub fn trace(msg: impl AsRef<str>) {
        log(LogLevel::Trace, msg);
    }

    #[macro_export]
    macro_rules! log_error {
        ($($t:tt)*) => { $crate::utils::logging::error(format!($($t)*)) };
    }
    #[macro_export]
    macro_rules! log_info {
        ($($t:tt)*) => { $crate::utils::logging::info(format!($($t)*)) };
    }
    #[macro_export]
    macro_rules! log_debug {
        ($($t:tt)*) => { $crate::utils::logging::debug(format!($($t)*)) };
    }
    #[macro_export]
    macro_rules! log_trace {
        ($($t:tt)*) => { $crate::utils::logging::trace(format!($($t)*)) };
    }
}

pub use logging::{derive_level, init_logging};

/// Generic error enrichment helper (lightweight inline alternative to anyhow::Context).
pub trait ContextExt<T> {
    fn ctx(self, msg: &'static str) -> anyhow::Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ContextExt<T> for Result<T, E> {
    fn ctx(self, msg: &'static str) -> anyhow::Result<T> {
        self.map_err(|e| anyhow::anyhow!("{}: {}", msg, e))
    }
}

/// Simple time utility: monotonic milliseconds (NOT wall clock).
pub fn monotonic_ms() -> u128 {
    use std::time::Instant;
    static START: OnceLock<Instant> = OnceLock::new();
    let base = START.get_or_init(Instant::now);
    base.elapsed().as_millis()
}

/// Fixed-total terminal progress bar. Redraws in place on stderr with a
/// carriage return; purely cosmetic (no rate math, no ETA).
pub struct ProgressBar {
    total: u64,
    current: u64,
    width: usize,
}

impl ProgressBar {
    pub fn new(total: u64) -> Self {
        Self {
            total: total.max(1),
            current: 0,
            width: 40,
        }
    }

    pub fn inc(&mut self) {
        if self.current < self.total {
            self.current += 1;
        }
        self.draw();
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.total
    }

    /// Render the current state as a bar string, e.g. `[=====>    ]  25%`.
    pub fn render(&self) -> String {
        let ratio = self.current as f64 / self.total as f64;
        let filled = (ratio * self.width as f64) as usize;
        let head = if filled < self.width { ">" } else { "" };
        format!(
            "[{}{}{}] {:>3}%",
            "=".repeat(filled),
            head,
            " ".repeat(self.width.saturating_sub(filled + head.len())),
            (ratio * 100.0) as u64
        )
    }

    fn draw(&self) {
        use std::io::Write;
        let mut err = std::io::stderr();
        let _ = write!(err, "\r{}", self.render());
        if self.is_done() {
            let _ = writeln!(err);
        }
        let _ = err.flush();
    }
}
