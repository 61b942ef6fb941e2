//! Startup error types
//!
//! Setup failures are fatal: `main` prints them and exits with status 1.
//! Recording failures live next to the history in
//! [`HistoryError`](crate::snapshot::HistoryError).

use std::fmt;
use std::io;

/// The step of terminal setup that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStage {
    LogFile,
    RawMode,
    AlternateScreen,
    Terminal,
}

impl fmt::Display for SetupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SetupStage::LogFile => "open log file",
            SetupStage::RawMode => "enable raw mode",
            SetupStage::AlternateScreen => "enter alternate screen",
            SetupStage::Terminal => "create terminal",
        };
        f.write_str(name)
    }
}

/// A display or logging resource could not be acquired
#[derive(Debug)]
pub struct SetupError {
    pub stage: SetupStage,
    pub source: io::Error,
}

impl SetupError {
    pub fn new(stage: SetupStage, source: io::Error) -> Self {
        SetupError { stage, source }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {}: {}", self.stage, self.source)
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
