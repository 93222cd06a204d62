//! Error types for plan parsing, validation, and replay.

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Everything that can go wrong with a staffing plan.
///
/// Structural and semantic violations are typed results, never aborting
/// assertions, so callers choose whether to halt or continue. Every
/// variant names the offending project/contributor/skill where feasible.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("project '{project_id}' appears more than once in the plan")]
    DuplicateProject { project_id: String },

    #[error("plan references unknown project '{project_id}'")]
    UnknownProject { project_id: String },

    #[error("project '{project_id}' references unknown contributor '{contributor_id}'")]
    UnknownContributor {
        project_id: String,
        contributor_id: String,
    },

    #[error("project '{project_id}' has {expected} role slots but the plan staffs {actual}")]
    RoleCountMismatch {
        project_id: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "contributor '{contributor_id}' has {skill} level {have}, \
         role in project '{project_id}' requires {required}"
    )]
    UnqualifiedContributor {
        project_id: String,
        contributor_id: String,
        skill: String,
        required: i64,
        have: i64,
    },

    #[error(
        "contributor '{contributor_id}' needs a mentor with {skill} level >= {required} \
         on project '{project_id}', none assigned"
    )]
    NoMentorAvailable {
        project_id: String,
        contributor_id: String,
        skill: String,
        required: i64,
    },
}

impl PlanError {
    /// Whether this error is a missing-file condition, recoverable at the
    /// batch layer (skip the case, keep going).
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlanError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}
