//! Project and catalog models.
//!
//! A project is a unit of work with a fixed duration, a base score, a
//! best-before day, and an ordered sequence of skilled role slots. The
//! slot sequence is fixed at definition time; position i of a plan
//! entry's contributor list fills slot i.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A (skill, required level) role slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Required skill name.
    pub skill: String,
    /// Required proficiency level (≥ 1 by convention; a level-0 slot is
    /// trivially satisfied).
    pub level: i64,
}

impl RoleRequirement {
    /// Creates a role slot.
    pub fn new(skill: impl Into<String>, level: i64) -> Self {
        Self {
            skill: skill.into(),
            level,
        }
    }
}

/// A project to be staffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Duration in whole days (> 0).
    pub days: i64,
    /// Base score awarded on completion (≥ 0).
    pub score: i64,
    /// Best-before day. Completing later costs one score point per day.
    pub best_before: i64,
    /// Ordered role slots, immutable after definition.
    pub roles: Vec<RoleRequirement>,
}

impl Project {
    /// Creates a project with no roles.
    pub fn new(id: impl Into<String>, days: i64, score: i64, best_before: i64) -> Self {
        Self {
            id: id.into(),
            days,
            score,
            best_before,
            roles: Vec::new(),
        }
    }

    /// Appends a role slot.
    pub fn with_role(mut self, skill: impl Into<String>, level: i64) -> Self {
        self.roles.push(RoleRequirement::new(skill, level));
        self
    }

    /// Number of role slots.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

/// An owned collection of projects with by-id lookup.
///
/// The catalog never mutates during a replay; only the roster does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCatalog {
    projects: HashMap<String, Project>,
}

impl ProjectCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project, replacing any existing one with the same id.
    pub fn insert(&mut self, project: Project) {
        self.projects.insert(project.id.clone(), project);
    }

    /// Adds a project (builder form).
    pub fn with_project(mut self, project: Project) -> Self {
        self.insert(project);
        self
    }

    /// Looks up a project by id.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    /// Whether a project with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.projects.contains_key(id)
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterates over all projects (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let p = Project::new("webserver", 7, 10, 7)
            .with_role("html", 3)
            .with_role("cpp", 2);

        assert_eq!(p.id, "webserver");
        assert_eq!(p.days, 7);
        assert_eq!(p.score, 10);
        assert_eq!(p.best_before, 7);
        assert_eq!(p.role_count(), 2);
        assert_eq!(p.roles[0], RoleRequirement::new("html", 3));
        assert_eq!(p.roles[1], RoleRequirement::new("cpp", 2));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ProjectCatalog::new()
            .with_project(Project::new("logging", 5, 10, 5).with_role("cpp", 3))
            .with_project(Project::new("webchat", 10, 20, 20));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("logging"));
        assert!(!catalog.contains("search"));
        assert_eq!(catalog.get("logging").map(|p| p.role_count()), Some(1));
        assert!(catalog.get("search").is_none());
    }

    #[test]
    fn test_catalog_insert_replaces() {
        let mut catalog = ProjectCatalog::new();
        catalog.insert(Project::new("logging", 5, 10, 5));
        catalog.insert(Project::new("logging", 6, 12, 8));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("logging").map(|p| p.days), Some(6));
    }
}
