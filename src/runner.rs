//! Batch execution over (input, plan) file pairs.
//!
//! The file list is explicit configuration handed to [`run_cases`], not
//! module state. Every case parses its own roster, so runs are
//! independent and a batch could be fanned out concurrently; at this
//! scale the runner stays sequential.
//!
//! A missing plan file is a recoverable per-case outcome: the case is
//! reported and the batch keeps going. Parse and validation failures are
//! likewise recorded per case.

use std::path::{Path, PathBuf};

use crate::error::PlanError;
use crate::io::{read_plan_file, read_problem_file};
use crate::simulate::{simulate, SimulationReport};

/// One validation case: a problem file and the plan proposed for it.
#[derive(Debug, Clone)]
pub struct Case {
    /// Problem description path.
    pub input: PathBuf,
    /// Proposed plan path.
    pub plan: PathBuf,
}

impl Case {
    /// Creates a case from explicit paths.
    pub fn new(input: impl Into<PathBuf>, plan: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            plan: plan.into(),
        }
    }

    /// Pairs an input file with `<plans_dir>/<input stem>.out`.
    pub fn paired(input: impl Into<PathBuf>, plans_dir: &Path) -> Self {
        let input = input.into();
        let stem = input
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();
        let mut plan = plans_dir.join(stem);
        plan.set_extension("out");
        Self { input, plan }
    }

    /// Short case label: the input file stem.
    pub fn label(&self) -> String {
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// How a single case ended.
#[derive(Debug)]
pub enum CaseOutcome {
    /// Plan replayed cleanly; scored report attached.
    Scored(SimulationReport),
    /// Plan file absent. Recoverable: the case is skipped.
    MissingPlan,
    /// Input unreadable, plan unparseable, or a rule violated.
    Failed(PlanError),
}

/// A case together with its outcome.
#[derive(Debug)]
pub struct CaseReport {
    pub case: Case,
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// Whether this case counts against the batch (a missing plan does
    /// not).
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Failed(_))
    }
}

/// Runs a single case on its own freshly parsed roster.
pub fn run_case(case: &Case) -> CaseReport {
    let outcome = execute(case);
    CaseReport {
        case: case.clone(),
        outcome,
    }
}

/// Runs every case in order, never stopping early.
pub fn run_cases(cases: &[Case]) -> Vec<CaseReport> {
    cases.iter().map(run_case).collect()
}

fn execute(case: &Case) -> CaseOutcome {
    let (mut roster, catalog) = match read_problem_file(&case.input) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(input = %case.input.display(), error = %e, "unreadable input");
            return CaseOutcome::Failed(e);
        }
    };

    let plan = match read_plan_file(&case.plan) {
        Ok(plan) => plan,
        Err(e) if e.is_not_found() => {
            tracing::warn!(plan = %case.plan.display(), "plan file not found, skipping case");
            return CaseOutcome::MissingPlan;
        }
        Err(e) => return CaseOutcome::Failed(e),
    };

    match simulate(&mut roster, &catalog, &plan) {
        Ok(report) => CaseOutcome::Scored(report),
        Err(e) => CaseOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const PROBLEM: &str = "\
2 2
anna 1
cpp 2
bob 1
html 3
logging 5 10 10 1
cpp 2
website 3 30 2 1
html 3
";

    const PLAN: &str = "\
2
logging
anna
website
bob
";

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_scored_case() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "tiny.in", PROBLEM);
        let plan = write(dir.path(), "tiny.out", PLAN);

        let report = run_case(&Case::new(input, plan));
        assert!(!report.is_failure());
        match report.outcome {
            CaseOutcome::Scored(ref r) => {
                // logging: done day 5, on time, 10 points.
                // website: done day 3, best-before 2, 30 - 1 = 29.
                assert_eq!(r.total_score, 39);
                assert_eq!(r.skill_increase, 0);
            }
            ref other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_missing_plan_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "tiny.in", PROBLEM);

        let report = run_case(&Case::paired(&input, dir.path()));
        assert!(!report.is_failure());
        assert!(matches!(report.outcome, CaseOutcome::MissingPlan));
    }

    #[test]
    fn test_malformed_plan_fails_case() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "tiny.in", PROBLEM);
        let plan = write(dir.path(), "tiny.out", "not-a-count\n");

        let report = run_case(&Case::new(input, plan));
        assert!(report.is_failure());
        assert!(matches!(
            report.outcome,
            CaseOutcome::Failed(PlanError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_rule_violation_fails_case() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "tiny.in", PROBLEM);
        // anna is two levels short of html 3.
        let plan = write(dir.path(), "tiny.out", "1\nwebsite\nanna\n");

        let report = run_case(&Case::new(input, plan));
        assert!(report.is_failure());
        assert!(matches!(
            report.outcome,
            CaseOutcome::Failed(PlanError::UnqualifiedContributor { .. })
        ));
    }

    #[test]
    fn test_batch_keeps_going_after_failures() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "tiny.in", PROBLEM);
        let good_plan = write(dir.path(), "good.out", PLAN);
        let bad_plan = write(dir.path(), "bad.out", "1\nghost\nanna\n");

        let cases = vec![
            Case::new(&input, &bad_plan),
            Case::new(&input, dir.path().join("absent.out")),
            Case::new(&input, &good_plan),
        ];

        let reports = run_cases(&cases);
        assert_eq!(reports.len(), 3);
        assert!(reports[0].is_failure());
        assert!(matches!(reports[1].outcome, CaseOutcome::MissingPlan));
        assert!(matches!(reports[2].outcome, CaseOutcome::Scored(_)));
    }

    #[test]
    fn test_paired_plan_path() {
        let case = Case::paired("inputs/a_example.in", Path::new("plans/sol1"));
        assert_eq!(case.plan, Path::new("plans/sol1/a_example.out"));
        assert_eq!(case.label(), "a_example");
    }
}
