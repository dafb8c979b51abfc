//! Data types and error definitions for process tree management.

use thiserror::Error;

/// Name recorded for a process whose name could not be read.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One row of the process table, captured at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub parent_pid: u32,
    pub name: String,
}

impl ProcessRecord {
    /// Build a record, substituting [`UNKNOWN_NAME`] for an empty name.
    pub fn new(pid: u32, parent_pid: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            pid,
            parent_pid,
            name: if name.trim().is_empty() {
                UNKNOWN_NAME.to_string()
            } else {
                name
            },
        }
    }
}

/// Result of a single kill attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<Result<(), ProcError>> for Outcome {
    fn from(result: Result<(), ProcError>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

/// Outcome of one pid visited during a tree kill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationResult {
    pub pid: u32,
    pub outcome: Outcome,
}

/// What a tree kill should do with a pid that exists but has no children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildlessPolicy {
    /// Report the pid as not found and kill nothing.
    #[default]
    ReportNotFound,
    /// Kill the pid on its own.
    KillProcess,
}

/// Errors that can occur during process management.
#[derive(Error, Debug)]
pub enum ProcError {
    #[error("Process enumeration unavailable: {0}")]
    EnumerationUnavailable(String),
    #[error("Permission denied for PID {0}")]
    PermissionDenied(u32),
    #[error("Process {0} not found")]
    NotFound(u32),
    #[error("Refusing to signal PID {0}: {1}")]
    InvalidPid(u32, String),
    #[error("Failed to send signal to PID {0}: {1}")]
    SignalError(u32, String),
}
