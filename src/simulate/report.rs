//! Replay outcome reports.
//!
//! A completed replay yields one outcome record per project plus the two
//! aggregate figures the problem is scored on: total score and total
//! mentorship skill-ups. Summary accessors cover the usual schedule
//! quality questions (makespan, lateness, on-time rate).
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

/// How a single project fared during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOutcome {
    /// Replayed project id.
    pub project_id: String,
    /// Day the project started (all contributors free).
    pub starting_day: i64,
    /// Day the project completed.
    pub completion_day: i64,
    /// Days past best-before (0 if on time).
    pub penalty: i64,
    /// Score awarded: base score minus penalty, floored at 0.
    pub awarded: i64,
}

impl ProjectOutcome {
    /// Whether the project completed by its best-before day.
    pub fn on_time(&self) -> bool {
        self.penalty == 0
    }
}

/// Result of replaying a full plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Sum of awarded scores across all projects.
    pub total_score: i64,
    /// Total skill levels granted through mentorship.
    pub skill_increase: i64,
    /// Final position of the monotone day cursor.
    pub final_day: i64,
    /// Per-project outcomes, in replay order.
    pub outcomes: Vec<ProjectOutcome>,
}

impl SimulationReport {
    /// Latest completion day across all projects (0 for an empty plan).
    pub fn makespan(&self) -> i64 {
        self.outcomes
            .iter()
            .map(|o| o.completion_day)
            .max()
            .unwrap_or(0)
    }

    /// Sum of lateness penalties across all projects.
    pub fn total_penalty(&self) -> i64 {
        self.outcomes.iter().map(|o| o.penalty).sum()
    }

    /// Number of projects that completed by their best-before day.
    pub fn on_time_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.on_time()).count()
    }

    /// Fraction of projects completing on time (1.0 for an empty plan).
    pub fn on_time_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            1.0
        } else {
            self.on_time_count() as f64 / self.outcomes.len() as f64
        }
    }

    /// Number of replayed projects.
    pub fn project_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Finds the outcome for a given project.
    pub fn outcome_for(&self, project_id: &str) -> Option<&ProjectOutcome> {
        self.outcomes.iter().find(|o| o.project_id == project_id)
    }
}
