use chrono::Local;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::caller::CallSite;
use crate::error::{LogError, Result};
use crate::level::LogLevel;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct Target {
    path: PathBuf,
    writer: LineWriter<File>,
}

impl Target {
    fn finish(self) -> Result<()> {
        let path = self.path;
        self.writer
            .into_inner()
            .map(drop)
            .map_err(|e| LogError::Close {
                path,
                source: e.into_error(),
            })
    }
}

/// A single append-mode log file plus the line formatter.
///
/// Until [`initialize`](Self::initialize) succeeds every message is dropped
/// without an error. Lines are written under a lock with a single
/// `write_all`, so concurrent callers never produce interleaved lines.
pub struct LogFacility {
    target: Mutex<Option<Target>>,
    dropped: AtomicU64,
}

impl Default for LogFacility {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFacility {
    pub fn new() -> Self {
        Self {
            target: Mutex::new(None),
            dropped: AtomicU64::new(0),
        }
    }

    /// Creates the parent directories of `path` and opens it for appending.
    ///
    /// A previously opened file is flushed and closed first.
    pub fn initialize(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| LogError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let previous = self.lock().replace(Target {
            path: path.to_path_buf(),
            writer: LineWriter::new(file),
        });
        if let Some(previous) = previous {
            // The new target is already live; a failed flush of the old one
            // has nowhere useful to go.
            let _ = previous.finish();
        }
        Ok(())
    }

    /// Releases the open file. Calling it when nothing is open is a no-op.
    ///
    /// Only a failed flush of pending output is reported as
    /// [`LogError::Close`]; the OS close itself happens on drop and its
    /// result is not observable.
    pub fn close(&self) -> Result<()> {
        let target = self.lock().take();
        match target {
            Some(target) => target.finish(),
            None => Ok(()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().is_some()
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.lock().as_ref().map(|target| target.path.clone())
    }

    /// Number of messages discarded because the facility was not
    /// initialized or the write failed.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn log(&self, level: LogLevel, site: CallSite, message: &str) {
        let mut guard = self.lock();
        let Some(target) = guard.as_mut() else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        };

        let timestamp = Local::now().format(TIME_FORMAT).to_string();
        let line = render_line(&timestamp, level, std::process::id(), &site, message);
        if target.writer.write_all(line.as_bytes()).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Entry point used by the leveled macros.
    pub fn log_args(&self, level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) {
        if !self.is_initialized() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.log(level, site, &fmt::format(args));
    }

    fn lock(&self) -> MutexGuard<'_, Option<Target>> {
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Formats one newline-terminated log line:
/// `<timestamp> [<LEVEL>] (<pid>)<file>:<line> <func> - <message>`.
pub fn render_line(
    timestamp: &str,
    level: LogLevel,
    pid: u32,
    site: &CallSite,
    message: &str,
) -> String {
    format!(
        "{} [{}] ({}){}:{} {} - {}\n",
        timestamp,
        level.as_str(),
        pid,
        site.short_file(),
        site.line,
        site.short_function(),
        message
    )
}
