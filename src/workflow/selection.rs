//! Toggleable set of candidate member IDs for team creation

use std::collections::HashSet;

/// The member IDs picked for a new team.
///
/// Owned exclusively by the creation flow for the duration of one form
/// session. Backed by a `HashSet` so membership tests and toggles are O(1)
/// and duplicates are impossible.
#[derive(Debug, Clone, Default)]
pub struct MemberSelection {
    selected: HashSet<String>,
}

impl MemberSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the ID if absent, remove it if present. Returns whether the ID
    /// is selected afterwards.
    pub fn toggle(&mut self, member_id: &str) -> bool {
        if self.selected.remove(member_id) {
            false
        } else {
            self.selected.insert(member_id.to_string());
            true
        }
    }

    /// Empty the selection (after a successful team creation).
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Bulk-set the selection from external data.
    pub fn replace(&mut self, members: HashSet<String>) {
        self.selected = members;
    }

    pub fn contains(&self, member_id: &str) -> bool {
        self.selected.contains(member_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected IDs as a sorted list, for deterministic request bodies.
    pub fn members(&self) -> Vec<String> {
        let mut members: Vec<String> = self.selected.iter().cloned().collect();
        members.sort();
        members
    }
}
