//! Contributor and roster models.
//!
//! Contributors are the people staffed onto project roles. Each carries a
//! skill→level mapping and a busy-until day. Both mutate as a plan is
//! replayed: mentorship raises skill levels, assignments push busy-until
//! forward. Skills a contributor has never practiced are level 0.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contributor who can be staffed onto project roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    /// Unique contributor identifier.
    pub id: String,
    /// Skill proficiency levels. Absent skills are level 0.
    pub skills: HashMap<String, i64>,
    /// Earliest day this contributor is free to start a new project.
    pub busy_until: i64,
}

impl Contributor {
    /// Creates a contributor with no skills, free from day 0.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            skills: HashMap::new(),
            busy_until: 0,
        }
    }

    /// Adds a skill at the given proficiency level.
    pub fn with_skill(mut self, name: impl Into<String>, level: i64) -> Self {
        self.skills.insert(name.into(), level);
        self
    }

    /// Whether this contributor has a given skill at level ≥ 1.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skill_level(name) > 0
    }

    /// Returns the proficiency level for a skill (0 if not found).
    pub fn skill_level(&self, name: &str) -> i64 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    /// Raises a skill by exactly one level, entering at 1 if absent.
    pub fn grow_skill(&mut self, name: &str) {
        *self.skills.entry(name.to_string()).or_insert(0) += 1;
    }
}

/// An owned collection of contributors with by-id lookup.
///
/// Cloneable so each validation run owns its own mutation: the replay
/// engine takes the roster by exclusive reference and writes skill growth
/// and busy-until updates back into it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    contributors: HashMap<String, Contributor>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contributor, replacing any existing one with the same id.
    pub fn insert(&mut self, contributor: Contributor) {
        self.contributors.insert(contributor.id.clone(), contributor);
    }

    /// Adds a contributor (builder form).
    pub fn with_contributor(mut self, contributor: Contributor) -> Self {
        self.insert(contributor);
        self
    }

    /// Looks up a contributor by id.
    pub fn get(&self, id: &str) -> Option<&Contributor> {
        self.contributors.get(id)
    }

    /// Looks up a contributor mutably by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Contributor> {
        self.contributors.get_mut(id)
    }

    /// Whether a contributor with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.contributors.contains_key(id)
    }

    /// Number of contributors.
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// Iterates over all contributors (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Contributor> {
        self.contributors.values()
    }
}
