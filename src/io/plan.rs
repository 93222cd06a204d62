//! Plan (proposed schedule) reader.
//!
//! Format:
//!
//! ```text
//! <nr_entries>
//! <project name>
//! <contributor> <contributor> ...   (one per role slot, in slot order)
//! ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::models::{Plan, PlanEntry};

use super::Scanner;

/// Reads a plan. Exactly the declared number of entries must follow the
/// count line; fewer is a parse error.
pub fn read_plan<R: BufRead>(reader: R) -> Result<Plan> {
    let mut scanner = Scanner::new(reader);

    let header = scanner.next_line()?;
    let field = header.trim();
    let nr_entries = scanner.count(field)?;

    let mut plan = Plan::new();
    for _ in 0..nr_entries {
        let project_line = scanner.next_line()?;
        let project_id = project_line.trim();
        if project_id.is_empty() {
            return Err(scanner.error("expected project name"));
        }
        let project_id = project_id.to_string();

        let contributor_line = scanner.next_line()?;
        let contributors = contributor_line
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        plan.push(PlanEntry::new(project_id, contributors));
    }

    Ok(plan)
}

/// Opens and reads a plan file.
pub fn read_plan_file(path: impl AsRef<Path>) -> Result<Plan> {
    let file = File::open(path)?;
    read_plan(BufReader::new(file))
}
