//! Problem description reader.
//!
//! Format:
//!
//! ```text
//! <nr_contributors> <nr_projects>
//! <contributor name> <nr_skills>
//! <skill> <level>          (nr_skills lines)
//! ...
//! <project name> <days> <score> <best_before> <nr_roles>
//! <skill> <level>          (nr_roles lines)
//! ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::models::{Contributor, Project, ProjectCatalog, Roster};

use super::Scanner;

/// Reads a problem description into a roster and project catalog.
pub fn read_problem<R: BufRead>(reader: R) -> Result<(Roster, ProjectCatalog)> {
    let mut scanner = Scanner::new(reader);

    let header = scanner.next_line()?;
    let mut fields = header.split_whitespace();
    let nr_contributors = scanner.count(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected contributor count"))?,
    )?;
    let nr_projects = scanner.count(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected project count"))?,
    )?;

    let mut roster = Roster::new();
    for _ in 0..nr_contributors {
        roster.insert(read_contributor(&mut scanner)?);
    }

    let mut catalog = ProjectCatalog::new();
    for _ in 0..nr_projects {
        catalog.insert(read_project(&mut scanner)?);
    }

    Ok((roster, catalog))
}

/// Opens and reads a problem description file.
pub fn read_problem_file(path: impl AsRef<Path>) -> Result<(Roster, ProjectCatalog)> {
    let file = File::open(path)?;
    read_problem(BufReader::new(file))
}

fn read_contributor<R: BufRead>(scanner: &mut Scanner<R>) -> Result<Contributor> {
    let line = scanner.next_line()?;
    let mut fields = line.split_whitespace();
    let name = fields
        .next()
        .ok_or_else(|| scanner.error("expected contributor name"))?
        .to_string();
    let nr_skills = scanner.count(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected skill count"))?,
    )?;

    let mut contributor = Contributor::new(name);
    for _ in 0..nr_skills {
        let (skill, level) = read_skill_line(scanner)?;
        contributor = contributor.with_skill(skill, level);
    }
    Ok(contributor)
}

fn read_project<R: BufRead>(scanner: &mut Scanner<R>) -> Result<Project> {
    let line = scanner.next_line()?;
    let mut fields = line.split_whitespace();
    let name = fields
        .next()
        .ok_or_else(|| scanner.error("expected project name"))?
        .to_string();
    let days = scanner.int(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected project duration"))?,
    )?;
    let score = scanner.int(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected project score"))?,
    )?;
    let best_before = scanner.int(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected best-before day"))?,
    )?;
    let nr_roles = scanner.count(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected role count"))?,
    )?;

    let mut project = Project::new(name, days, score, best_before);
    for _ in 0..nr_roles {
        let (skill, level) = read_skill_line(scanner)?;
        project = project.with_role(skill, level);
    }
    Ok(project)
}

fn read_skill_line<R: BufRead>(scanner: &mut Scanner<R>) -> Result<(String, i64)> {
    let line = scanner.next_line()?;
    let mut fields = line.split_whitespace();
    let skill = fields
        .next()
        .ok_or_else(|| scanner.error("expected skill name"))?
        .to_string();
    let level = scanner.int(
        fields
            .next()
            .ok_or_else(|| scanner.error("expected skill level"))?,
    )?;
    Ok((skill, level))
}
