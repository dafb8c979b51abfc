//! Process listing functionality.

use crate::types::{ProcError, ProcessRecord};
use tracing::{debug, warn};

/// Source of process table snapshots.
pub trait SnapshotProvider {
    /// Capture every live process once, in enumeration order.
    fn snapshot(&self) -> Result<Vec<ProcessRecord>, ProcError>;
}

/// Reads the live process table from `/proc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcfsSnapshot;

impl SnapshotProvider for ProcfsSnapshot {
    fn snapshot(&self) -> Result<Vec<ProcessRecord>, ProcError> {
        let all_procs = procfs::process::all_processes()
            .map_err(|e| ProcError::EnumerationUnavailable(format!("Failed to read /proc: {}", e)))?;

        let mut records = Vec::new();
        for proc_result in all_procs {
            let proc = match proc_result {
                Ok(p) => p,
                Err(_) => continue,
            };

            match proc.stat() {
                Ok(stat) => records.push(ProcessRecord::new(
                    stat.pid as u32,
                    stat.ppid as u32,
                    stat.comm,
                )),
                // Exited between listing and reading its stat
                Err(procfs::ProcError::NotFound(_)) => continue,
                Err(e) => {
                    warn!(pid = proc.pid, error = %e, "could not read process stat");
                    // Keep the parent link if status is readable; the name is lost.
                    if let Ok(status) = proc.status() {
                        records.push(ProcessRecord::new(proc.pid as u32, status.ppid as u32, ""));
                    }
                }
            }
        }

        debug!(process_count = records.len(), "enumerated processes");
        Ok(records)
    }
}

/// Fixed snapshot, returned unchanged on every call.
impl SnapshotProvider for Vec<ProcessRecord> {
    fn snapshot(&self) -> Result<Vec<ProcessRecord>, ProcError> {
        Ok(self.clone())
    }
}

/// List all processes currently visible in `/proc`.
pub fn list_processes() -> Result<Vec<ProcessRecord>, ProcError> {
    ProcfsSnapshot.snapshot()
}
