//! Minimal file logger.
//!
//! ```no_run
//! filelog::init_logger("logs/app.log")?;
//! filelog::info!("listening on port {}", 8080);
//! filelog::close()?;
//! # Ok::<(), filelog::LogError>(())
//! ```
//!
//! Each call appends one line of the form
//! `2024-03-01 09:05:07 [INFO] (4242)main.rs:12 main - listening on port 8080`.

pub mod caller;
pub mod error;
pub mod global;
pub mod level;
pub mod logging;

pub use caller::CallSite;
pub use error::{LogError, Result};
pub use global::{close, global, init_logger};
pub use level::LogLevel;
pub use logging::{render_line, LogFacility};

/// Logs at an explicit [`LogLevel`].
///
/// `log!(LogLevel::Warn, "...")` writes to the process-wide facility,
/// `log!(logger: &facility, LogLevel::Warn, "...")` to the given one.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        ($logger).log_args($level, $crate::call_site!(), format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $level, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $crate::LogLevel::Error, $($arg)+)
    };
}
