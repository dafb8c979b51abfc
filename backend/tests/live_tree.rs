//! Kills real process trees through `/proc` and `SIGKILL`.

use backend::{Command, Outcome, ProcessManager, ProcessTree, Response, list_processes};
use std::process::{Child, Command as Spawn};
use std::thread;
use std::time::Duration;

/// Spawns `sh` with one sleeping child. Tree: sh -> sleep.
fn spawn_process_tree() -> Child {
    let child = Spawn::new("/bin/sh")
        .arg("-c")
        .arg("sleep 300 & wait")
        .spawn()
        .expect("failed to spawn shell");
    // Give the shell time to fork the sleep
    thread::sleep(Duration::from_millis(500));
    child
}

#[test_log::test]
fn snapshot_sees_spawned_children() {
    let mut child = spawn_process_tree();
    let pid = child.id();

    let records = list_processes().expect("enumerate failed");
    let tree = ProcessTree::build(&records);
    assert!(tree.contains(pid));
    assert_eq!(tree.children_of(std::process::id()).iter().filter(|p| **p == pid).count(), 1);
    assert_eq!(tree.children_of(pid).len(), 1, "expected the sleep child of {pid}");

    let _ = child.kill();
    for grandchild in tree.children_of(pid) {
        let _ = backend::kill_pid(*grandchild);
    }
    let _ = child.wait();
}

#[test_log::test]
fn kill_tree_terminates_descendants_then_root() {
    let mut child = spawn_process_tree();
    let pid = child.id();

    let response = ProcessManager::system()
        .execute(Command::KillTree(pid))
        .expect("kill tree failed");
    let Response::Terminated { pid: root, results } = response else {
        panic!("expected terminated response, got {response:?}");
    };

    assert_eq!(root, pid);
    assert_eq!(results.len(), 2);
    assert_eq!(results.last().map(|r| r.pid), Some(pid));
    assert!(results.iter().all(|r| r.outcome == Outcome::Success), "{results:?}");

    let status = child.wait().expect("wait failed");
    assert!(!status.success());
}

#[test]
fn kill_tree_of_unknown_pid_is_not_found() {
    let response = ProcessManager::system()
        .execute(Command::KillTree(i32::MAX as u32))
        .expect("enumerate failed");
    assert_eq!(response, Response::NotFound(i32::MAX as u32));
}
