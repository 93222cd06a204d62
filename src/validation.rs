//! Structural plan validation.
//!
//! Checks a plan against its roster and catalog before replay. Detects:
//! - Duplicate project entries
//! - References to unknown projects or contributors
//! - Contributor lists that don't match a project's role-slot count
//!
//! Unlike the replay engine, which stops at the first violation, this
//! pass collects every defect so a whole plan can be diagnosed at once.

use std::collections::HashSet;

use crate::error::PlanError;
use crate::models::{Plan, ProjectCatalog, Roster};

/// Validation result: `Ok(())` or all detected defects.
pub type ValidationResult = Result<(), Vec<PlanError>>;

/// Validates the structure of a plan.
///
/// Checks:
/// 1. No project appears twice in the plan
/// 2. Every referenced project exists in the catalog
/// 3. Every entry staffs exactly as many contributors as the project has roles
/// 4. Every referenced contributor exists in the roster
///
/// Eligibility and mentorship are replay concerns: they depend on skill
/// levels evolving entry by entry, so only [`crate::simulate`] can judge
/// them.
pub fn validate_plan(roster: &Roster, catalog: &ProjectCatalog, plan: &Plan) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for entry in plan.iter() {
        if !seen.insert(entry.project_id.as_str()) {
            errors.push(PlanError::DuplicateProject {
                project_id: entry.project_id.clone(),
            });
        }

        match catalog.get(&entry.project_id) {
            None => errors.push(PlanError::UnknownProject {
                project_id: entry.project_id.clone(),
            }),
            Some(project) => {
                if project.role_count() != entry.contributors.len() {
                    errors.push(PlanError::RoleCountMismatch {
                        project_id: entry.project_id.clone(),
                        expected: project.role_count(),
                        actual: entry.contributors.len(),
                    });
                }
            }
        }

        for contributor_id in &entry.contributors {
            if !roster.contains(contributor_id) {
                errors.push(PlanError::UnknownContributor {
                    project_id: entry.project_id.clone(),
                    contributor_id: contributor_id.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributor, PlanEntry, Project};

    fn sample_roster() -> Roster {
        Roster::new()
            .with_contributor(Contributor::new("anna").with_skill("cpp", 2))
            .with_contributor(Contributor::new("bob").with_skill("html", 5))
    }

    fn sample_catalog() -> ProjectCatalog {
        ProjectCatalog::new()
            .with_project(Project::new("logging", 5, 10, 5).with_role("cpp", 2))
            .with_project(
                Project::new("webserver", 7, 10, 7)
                    .with_role("html", 3)
                    .with_role("cpp", 2),
            )
    }

    fn entry(project: &str, contributors: &[&str]) -> PlanEntry {
        PlanEntry::new(project, contributors.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_valid_plan() {
        let plan = Plan::new()
            .with_entry(entry("logging", &["anna"]))
            .with_entry(entry("webserver", &["bob", "anna"]));

        assert!(validate_plan(&sample_roster(), &sample_catalog(), &plan).is_ok());
    }

    #[test]
    fn test_duplicate_project() {
        let plan = Plan::new()
            .with_entry(entry("logging", &["anna"]))
            .with_entry(entry("logging", &["anna"]));

        let errors = validate_plan(&sample_roster(), &sample_catalog(), &plan).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, PlanError::DuplicateProject { project_id } if project_id == "logging")));
    }

    #[test]
    fn test_unknown_project() {
        let plan = Plan::new().with_entry(entry("search", &["anna"]));

        let errors = validate_plan(&sample_roster(), &sample_catalog(), &plan).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, PlanError::UnknownProject { project_id } if project_id == "search")));
    }

    #[test]
    fn test_unknown_contributor() {
        let plan = Plan::new().with_entry(entry("logging", &["maria"]));

        let errors = validate_plan(&sample_roster(), &sample_catalog(), &plan).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            PlanError::UnknownContributor { contributor_id, .. } if contributor_id == "maria"
        )));
    }

    #[test]
    fn test_role_count_mismatch() {
        let plan = Plan::new().with_entry(entry("webserver", &["bob"]));

        let errors = validate_plan(&sample_roster(), &sample_catalog(), &plan).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            PlanError::RoleCountMismatch { expected: 2, actual: 1, .. }
        )));
    }

    #[test]
    fn test_multiple_errors_collected() {
        // Duplicate + unknown contributor + role-count mismatch in one pass
        let plan = Plan::new()
            .with_entry(entry("logging", &["maria"]))
            .with_entry(entry("logging", &["anna"]))
            .with_entry(entry("webserver", &["bob"]));

        let errors = validate_plan(&sample_roster(), &sample_catalog(), &plan).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_empty_plan_is_valid() {
        let plan = Plan::new();
        assert!(validate_plan(&sample_roster(), &sample_catalog(), &plan).is_ok());
    }
}
