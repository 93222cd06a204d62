//! Plan (proposed schedule) model.
//!
//! A plan is an ordered sequence of (project, contributor list) entries.
//! Entry order is significant: the replay engine processes entries exactly
//! as listed and never re-sorts them.

use serde::{Deserialize, Serialize};

/// A single staffing decision: one project and the contributors filling
/// its role slots, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Project to run.
    pub project_id: String,
    /// Contributor ids, position i filling role slot i.
    pub contributors: Vec<String>,
}

impl PlanEntry {
    /// Creates a plan entry.
    pub fn new(project_id: impl Into<String>, contributors: Vec<String>) -> Self {
        Self {
            project_id: project_id.into(),
            contributors,
        }
    }
}

/// An ordered sequence of plan entries.
///
/// Each project id must appear at most once across the sequence; the
/// replay engine rejects duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Entries in execution order.
    pub entries: Vec<PlanEntry>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry (builder form).
    pub fn with_entry(mut self, entry: PlanEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter()
    }
}
