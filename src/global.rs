//! Process-wide facility used by the macros that take no `logger:` argument.

use lazy_static::lazy_static;
use std::path::Path;

use crate::error::Result;
use crate::logging::LogFacility;

lazy_static! {
    static ref GLOBAL: LogFacility = LogFacility::new();
}

pub fn global() -> &'static LogFacility {
    &GLOBAL
}

pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    GLOBAL.initialize(path)
}

pub fn close() -> Result<()> {
    GLOBAL.close()
}
