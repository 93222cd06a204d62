//! Staffing domain models.
//!
//! Core data types for project-staffing validation: who can work
//! (`Contributor`, `Roster`), what needs doing (`Project`,
//! `ProjectCatalog`, `RoleRequirement`), and the proposed answer
//! (`Plan`, `PlanEntry`).

mod contributor;
mod plan;
mod project;

pub use contributor::{Contributor, Roster};
pub use plan::{Plan, PlanEntry};
pub use project::{Project, ProjectCatalog, RoleRequirement};
