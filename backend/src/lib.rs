//! UI-agnostic process tree library for Linux.
//!
//! Provides functions for listing processes, building the parent/child tree from
//! a snapshot, and killing a process together with all its descendants.
//! Uses `procfs` to read the process table and `nix` to send signals.

mod manager;
mod process_kill;
mod process_list;
mod process_tree;
mod types;

pub use manager::{Command, ProcessManager, Response};
pub use process_kill::{kill_pid, kill_tree, ProcessKiller, SignalKiller};
pub use process_list::{list_processes, ProcfsSnapshot, SnapshotProvider};
pub use process_tree::ProcessTree;
pub use types::{
    ChildlessPolicy, Outcome, ProcError, ProcessRecord, TerminationResult, UNKNOWN_NAME,
};
