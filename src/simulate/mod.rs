//! Plan replay and scoring engine.
//!
//! Replays a proposed staffing plan entry by entry, carrying contributor
//! state (skill levels, busy-until days) forward, and scores each project
//! against its best-before day.
//!
//! # Algorithm
//!
//! 1. Reject any plan that lists a project twice, before touching state.
//! 2. Replay entries strictly in plan order. An entry starts on the day
//!    its last-busy contributor becomes free; a monotone day cursor
//!    tracks the latest start seen.
//! 3. Check role slots in slot order. A contributor exactly one level
//!    short is mentored by any same-entry contributor at the required
//!    level and levels up immediately, so the raise is visible to later
//!    slots of the same entry and to all later entries.
//! 4. Mark every assigned contributor busy until the completion day, then
//!    award the base score minus one point per day past best-before,
//!    floored at zero.
//!
//! Entry order is load-bearing: busy-until and skill state flow forward,
//! so the fold is sequential and deterministic. Callers wanting an
//! untouched roster clone it first; the engine mutates in place.
//!
//! # Complexity
//! O(e · r · c) where e = entries, r = roles/entry, c = contributors/entry.

mod report;

pub use report::{ProjectOutcome, SimulationReport};

use std::collections::HashSet;

use crate::error::{PlanError, Result};
use crate::models::{Plan, ProjectCatalog, Roster};

/// Replays `plan` against `roster` and `catalog`.
///
/// Returns the scored report, or the first rule violation encountered in
/// replay order. Contributor skill levels and busy-until days are mutated
/// in place as a record of the simulated end state.
pub fn simulate(
    roster: &mut Roster,
    catalog: &ProjectCatalog,
    plan: &Plan,
) -> Result<SimulationReport> {
    // Duplicate scan up front: replay state would be half-mutated if a
    // duplicate surfaced mid-plan.
    let mut seen: HashSet<&str> = HashSet::with_capacity(plan.len());
    for entry in plan.iter() {
        if !seen.insert(entry.project_id.as_str()) {
            return Err(PlanError::DuplicateProject {
                project_id: entry.project_id.clone(),
            });
        }
    }

    let mut day: i64 = 0;
    let mut total_score: i64 = 0;
    let mut skill_increase: i64 = 0;
    let mut outcomes = Vec::with_capacity(plan.len());

    for entry in plan.iter() {
        let project = catalog
            .get(&entry.project_id)
            .ok_or_else(|| PlanError::UnknownProject {
                project_id: entry.project_id.clone(),
            })?;

        if entry.contributors.len() != project.role_count() {
            return Err(PlanError::RoleCountMismatch {
                project_id: entry.project_id.clone(),
                expected: project.role_count(),
                actual: entry.contributors.len(),
            });
        }

        // The project starts once every assigned contributor is free.
        let mut starting_day: i64 = 0;
        for contributor_id in &entry.contributors {
            let contributor = roster
                .get(contributor_id)
                .ok_or_else(|| unknown_contributor(entry.project_id.as_str(), contributor_id))?;
            starting_day = starting_day.max(contributor.busy_until);
        }
        day = day.max(starting_day);

        for (slot_index, slot) in project.roles.iter().enumerate() {
            let contributor_id = &entry.contributors[slot_index];
            let have = roster
                .get(contributor_id)
                .ok_or_else(|| unknown_contributor(entry.project_id.as_str(), contributor_id))?
                .skill_level(&slot.skill);

            // Phrased as have+1 so a level-0 slot is trivially satisfied
            // without a negative threshold.
            if have + 1 < slot.level {
                return Err(PlanError::UnqualifiedContributor {
                    project_id: entry.project_id.clone(),
                    contributor_id: contributor_id.clone(),
                    skill: slot.skill.clone(),
                    required: slot.level,
                    have,
                });
            }

            if have + 1 == slot.level {
                // Mentorship: any same-entry contributor at the required
                // level, judged on current (possibly just-raised) levels.
                // No identity exclusion; the scan covers every position.
                let mentored = entry.contributors.iter().any(|id| {
                    roster
                        .get(id)
                        .is_some_and(|c| c.skill_level(&slot.skill) >= slot.level)
                });
                if !mentored {
                    return Err(PlanError::NoMentorAvailable {
                        project_id: entry.project_id.clone(),
                        contributor_id: contributor_id.clone(),
                        skill: slot.skill.clone(),
                        required: slot.level,
                    });
                }

                let mentee = roster
                    .get_mut(contributor_id)
                    .ok_or_else(|| unknown_contributor(entry.project_id.as_str(), contributor_id))?;
                mentee.grow_skill(&slot.skill);
                skill_increase += 1;
                tracing::trace!(
                    project = %entry.project_id,
                    contributor = %contributor_id,
                    skill = %slot.skill,
                    level = slot.level,
                    "mentored skill-up"
                );
            }
        }

        let completion_day = starting_day + project.days;
        for contributor_id in &entry.contributors {
            let contributor = roster
                .get_mut(contributor_id)
                .ok_or_else(|| unknown_contributor(entry.project_id.as_str(), contributor_id))?;
            contributor.busy_until = completion_day;
        }

        let penalty = (completion_day - project.best_before).max(0);
        let awarded = (project.score - penalty).max(0);
        total_score += awarded;

        tracing::debug!(
            project = %entry.project_id,
            starting_day,
            completion_day,
            penalty,
            awarded,
            "replayed entry"
        );

        outcomes.push(ProjectOutcome {
            project_id: entry.project_id.clone(),
            starting_day,
            completion_day,
            penalty,
            awarded,
        });
    }

    Ok(SimulationReport {
        total_score,
        skill_increase,
        final_day: day,
        outcomes,
    })
}

fn unknown_contributor(project_id: &str, contributor_id: &str) -> PlanError {
    PlanError::UnknownContributor {
        project_id: project_id.to_string(),
        contributor_id: contributor_id.to_string(),
    }
}
