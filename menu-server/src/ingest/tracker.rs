//! Option group traversal state

use std::collections::HashSet;

/// Outcome of reaching an option group during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// First time seen; descend into it
    Enter,
    /// Already on the current descent path
    Cycle,
    /// Fully ingested earlier in this run
    AlreadyProcessed,
}

/// Tracks which option groups are being descended and which are done.
///
/// Ids move from the in-progress stack to the completed set when their
/// descent finishes, so a group reachable from two products is descended
/// once while a group that contains itself is caught.
#[derive(Debug, Default)]
pub struct TraversalTracker {
    stack: Vec<String>,
    in_progress: HashSet<String>,
    completed: HashSet<String>,
}

impl TraversalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a group; on `Enter` it is pushed onto the descent path.
    pub fn begin(&mut self, id: &str) -> Visit {
        if self.in_progress.contains(id) {
            return Visit::Cycle;
        }
        if self.completed.contains(id) {
            return Visit::AlreadyProcessed;
        }
        self.in_progress.insert(id.to_string());
        self.stack.push(id.to_string());
        Visit::Enter
    }

    /// Pop the group entered last and mark it completed.
    pub fn finish(&mut self, id: &str) {
        debug_assert_eq!(self.stack.last().map(String::as_str), Some(id));
        if let Some(top) = self.stack.pop() {
            self.in_progress.remove(&top);
            self.completed.insert(top);
        }
    }

    /// Current descent path ending at `next`, e.g. `OG1 > OG2 > OG1`.
    pub fn path_to(&self, next: &str) -> String {
        let mut path = self.stack.join(" > ");
        if !path.is_empty() {
            path.push_str(" > ");
        }
        path.push_str(next);
        path
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
