//! Command dispatch over one process table snapshot.

use crate::process_kill::{kill_tree, ProcessKiller, SignalKiller};
use crate::process_list::{ProcfsSnapshot, SnapshotProvider};
use crate::process_tree::ProcessTree;
use crate::types::{ChildlessPolicy, ProcError, ProcessRecord, TerminationResult};
use tracing::debug;

/// A parsed request from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListProcesses,
    ShowTree(u32),
    KillTree(u32),
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Processes(Vec<ProcessRecord>),
    Children { pid: u32, children: Vec<u32> },
    Terminated { pid: u32, results: Vec<TerminationResult> },
    /// The pid has no tracked children in the snapshot.
    NotFound(u32),
}

pub struct ProcessManager<S, K> {
    snapshots: S,
    killer: K,
    policy: ChildlessPolicy,
}

impl ProcessManager<ProcfsSnapshot, SignalKiller> {
    /// Manager backed by `/proc` and `SIGKILL`.
    pub fn system() -> Self {
        Self::new(ProcfsSnapshot, SignalKiller)
    }
}

impl<S, K> ProcessManager<S, K> {
    pub fn new(snapshots: S, killer: K) -> Self {
        Self {
            snapshots,
            killer,
            policy: ChildlessPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ChildlessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ChildlessPolicy {
        self.policy
    }

    pub fn killer(&self) -> &K {
        &self.killer
    }
}

impl<S, K> ProcessManager<S, K>
where
    S: SnapshotProvider,
    K: ProcessKiller,
{
    /// Run one command. Each call takes exactly one snapshot, so a kill
    /// pass acts on the same tree it reports.
    pub fn execute(&self, command: Command) -> Result<Response, ProcError> {
        let records = self.snapshots.snapshot()?;
        debug!(?command, process_count = records.len(), "executing command");

        let response = match command {
            Command::ListProcesses => Response::Processes(records),
            Command::ShowTree(pid) => {
                let tree = ProcessTree::build(&records);
                match tree.children_of(pid) {
                    [] => Response::NotFound(pid),
                    children => Response::Children {
                        pid,
                        children: children.to_vec(),
                    },
                }
            }
            Command::KillTree(pid) => {
                let tree = ProcessTree::build(&records);
                match kill_tree(&tree, pid, &self.killer, self.policy) {
                    Some(results) => Response::Terminated { pid, results },
                    None => Response::NotFound(pid),
                }
            }
        };

        Ok(response)
    }
}
