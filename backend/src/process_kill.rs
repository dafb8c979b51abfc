//! Process killing functionality.

use crate::process_tree::ProcessTree;
use crate::types::{ChildlessPolicy, Outcome, ProcError, TerminationResult};
use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tracing::{debug, info, warn};

/// Issues forced termination requests for single pids.
pub trait ProcessKiller {
    fn kill(&self, pid: u32) -> Outcome;
}

/// Kills processes with `SIGKILL`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalKiller;

impl ProcessKiller for SignalKiller {
    fn kill(&self, pid: u32) -> Outcome {
        kill_pid(pid).into()
    }
}

/// Kill a process by PID with `SIGKILL`.
/// Returns once the kernel has accepted or rejected the signal.
pub fn kill_pid(pid: u32) -> Result<(), ProcError> {
    // kill(2) treats 0 and negative values as process groups
    if pid == 0 {
        return Err(ProcError::InvalidPid(pid, "PID 0 addresses the caller's process group".into()));
    }
    let raw = i32::try_from(pid)
        .map_err(|_| ProcError::InvalidPid(pid, "PID out of range".into()))?;
    if pid == std::process::id() {
        return Err(ProcError::InvalidPid(pid, "PID belongs to this process".into()));
    }

    match signal::kill(Pid::from_raw(raw), Signal::SIGKILL) {
        Ok(()) => Ok(()),
        Err(Errno::ESRCH) => Err(ProcError::NotFound(pid)),
        Err(Errno::EPERM) => Err(ProcError::PermissionDenied(pid)),
        Err(e) => Err(ProcError::SignalError(pid, e.to_string())),
    }
}

/// Kill a process and all its descendants, leaves first and `pid` last.
///
/// Returns `None` without killing anything when `pid` has no entry in the
/// tree. Under [`ChildlessPolicy::KillProcess`] a pid that was captured in
/// the snapshot but has no children is killed on its own instead.
/// A failed kill is recorded and the walk continues.
pub fn kill_tree<K>(
    tree: &ProcessTree,
    pid: u32,
    killer: &K,
    policy: ChildlessPolicy,
) -> Option<Vec<TerminationResult>>
where
    K: ProcessKiller + ?Sized,
{
    if !tree.has_children(pid) {
        match policy {
            ChildlessPolicy::KillProcess if tree.contains(pid) => {}
            _ => {
                debug!(pid, "no tracked children, nothing to kill");
                return None;
            }
        }
    }

    let order = tree.post_order(pid);
    debug!(pid, count = order.len(), "killing process tree");

    let results = order
        .into_iter()
        .map(|target| {
            let outcome = killer.kill(target);
            match &outcome {
                Outcome::Success => info!(pid = target, "process killed"),
                Outcome::Failed(reason) => warn!(pid = target, %reason, "failed to kill process"),
            }
            TerminationResult { pid: target, outcome }
        })
        .collect();

    Some(results)
}
