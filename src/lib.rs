//! Validation and scoring for project-staffing plans.
//!
//! Given a roster of contributors with per-skill proficiency levels and a
//! catalog of projects requiring ordered sequences of skilled roles, this
//! crate replays a proposed (project → contributors) plan entry by entry,
//! enforces eligibility and mentorship rules, and scores each completed
//! project against its best-before day. It validates plans; it never
//! constructs them.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Contributor`, `Roster`, `Project`,
//!   `ProjectCatalog`, `RoleRequirement`, `Plan`, `PlanEntry`
//! - **`simulate`**: The replay/scoring engine and its reports
//! - **`validation`**: Structural plan checks (duplicates, unknown refs,
//!   role-count mismatches), collected rather than fail-fast
//! - **`io`**: Flat-file readers for problems and plans
//! - **`runner`**: Batch execution over (input, plan) file pairs
//!
//! # Example
//!
//! ```
//! use staffval::models::{Contributor, Plan, PlanEntry, Project, ProjectCatalog, Roster};
//! use staffval::simulate::simulate;
//!
//! let mut roster = Roster::new()
//!     .with_contributor(Contributor::new("anna").with_skill("cpp", 2));
//! let catalog = ProjectCatalog::new()
//!     .with_project(Project::new("logging", 5, 100, 10).with_role("cpp", 2));
//! let plan = Plan::new()
//!     .with_entry(PlanEntry::new("logging", vec!["anna".into()]));
//!
//! let report = simulate(&mut roster, &catalog, &plan).unwrap();
//! assert_eq!(report.total_score, 100);
//! ```

pub mod error;
pub mod io;
pub mod models;
pub mod runner;
pub mod simulate;
pub mod validation;

pub use error::{PlanError, Result};
pub use simulate::{simulate, SimulationReport};
