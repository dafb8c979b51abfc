//! Parent to children mapping built from a single snapshot.

use crate::types::ProcessRecord;
use std::collections::{HashMap, HashSet};

/// Map: parent PID -> direct child PIDs, in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessTree {
    children: HashMap<u32, Vec<u32>>,
    known: HashSet<u32>,
}

impl ProcessTree {
    /// Build the tree from one snapshot. Parent pids without a record of
    /// their own are kept as keys.
    pub fn build(records: &[ProcessRecord]) -> Self {
        let mut tree = ProcessTree::default();
        for record in records {
            tree.children
                .entry(record.parent_pid)
                .or_default()
                .push(record.pid);
            tree.known.insert(record.pid);
        }
        tree
    }

    /// Direct children of `pid`. Empty both when `pid` is childless and when
    /// it is absent from the snapshot.
    pub fn children_of(&self, pid: u32) -> &[u32] {
        self.children.get(&pid).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `pid` was captured as a record in the snapshot.
    pub fn contains(&self, pid: u32) -> bool {
        self.known.contains(&pid)
    }

    /// Whether `pid` was seen as the parent of at least one record.
    pub fn has_children(&self, pid: u32) -> bool {
        self.children.contains_key(&pid)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of distinct parent pids.
    pub fn parent_count(&self) -> usize {
        self.children.len()
    }

    /// `pid` and all its descendants, each subtree emitted before its root
    /// and `pid` last. Children are visited in tree order.
    pub fn post_order(&self, pid: u32) -> Vec<u32> {
        let mut order = Vec::new();
        // A corrupt snapshot can contain a cycle (e.g. a pid that is its own parent)
        let mut visited = HashSet::from([pid]);
        let mut stack: Vec<(u32, usize)> = vec![(pid, 0)];

        while let Some(&(current, next)) = stack.last() {
            match self.children_of(current).get(next) {
                Some(&child) => {
                    let top = stack.len() - 1;
                    stack[top].1 += 1;
                    if visited.insert(child) {
                        stack.push((child, 0));
                    }
                }
                None => {
                    order.push(current);
                    stack.pop();
                }
            }
        }

        order
    }
}
