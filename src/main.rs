//! staffval - validate and score project staffing plans.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use staffval::io::{read_plan_file, read_problem_file};
use staffval::runner::{run_cases, Case, CaseOutcome, CaseReport};
use staffval::validation::validate_plan;

#[derive(Parser)]
#[command(
    name = "staffval",
    version,
    about = "Validate and score project staffing plans"
)]
struct Cli {
    /// Problem description files
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Directory holding one <input-stem>.out plan per input
    #[arg(long, value_name = "DIR")]
    plans: PathBuf,

    /// Structural checks only; report every defect, skip the replay
    #[arg(long)]
    check: bool,

    /// Machine-readable output, one JSON object per case
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let cases: Vec<Case> = cli
        .inputs
        .iter()
        .map(|input| Case::paired(input, &cli.plans))
        .collect();

    let failures = if cli.check {
        cases.iter().filter(|case| !check_case(case, cli.json)).count()
    } else {
        run_cases(&cases)
            .iter()
            .filter(|report| !report_case(report, cli.json))
            .count()
    };

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints one case result. Returns false when the case counts as failed.
fn report_case(report: &CaseReport, json: bool) -> bool {
    let label = report.case.label();
    match &report.outcome {
        CaseOutcome::Scored(result) => {
            if json {
                let line = serde_json::json!({
                    "case": label,
                    "status": "scored",
                    "score": result.total_score,
                    "skill_increase": result.skill_increase,
                    "projects": result.project_count(),
                    "makespan": result.makespan(),
                    "on_time": result.on_time_count(),
                });
                println!("{line}");
            } else {
                println!(
                    "{label}: score = {}, skill-ups = {} ({} projects, makespan {})",
                    group_digits(result.total_score),
                    group_digits(result.skill_increase),
                    result.project_count(),
                    result.makespan(),
                );
            }
            true
        }
        CaseOutcome::MissingPlan => {
            if json {
                let line = serde_json::json!({
                    "case": label,
                    "status": "missing-plan",
                    "plan": report.case.plan.display().to_string(),
                });
                println!("{line}");
            } else {
                println!(
                    "{label}: plan file not found: {} (skipped)",
                    report.case.plan.display()
                );
            }
            true
        }
        CaseOutcome::Failed(e) => {
            if json {
                let line = serde_json::json!({
                    "case": label,
                    "status": "failed",
                    "error": e.to_string(),
                });
                println!("{line}");
            } else {
                println!("{label}: invalid: {e}");
            }
            false
        }
    }
}

/// Structural validation for one case. Returns false when defects were
/// found or files were unreadable; a missing plan file still passes.
fn check_case(case: &Case, json: bool) -> bool {
    let label = case.label();

    let parsed = read_problem_file(&case.input).and_then(|(roster, catalog)| {
        read_plan_file(&case.plan).map(|plan| (roster, catalog, plan))
    });
    let (roster, catalog, plan) = match parsed {
        Ok(parts) => parts,
        Err(e) if e.is_not_found() => {
            if json {
                let line = serde_json::json!({
                    "case": label,
                    "status": "missing-plan",
                    "plan": case.plan.display().to_string(),
                });
                println!("{line}");
            } else {
                println!("{label}: plan file not found: {} (skipped)", case.plan.display());
            }
            return true;
        }
        Err(e) => {
            if json {
                let line = serde_json::json!({
                    "case": label,
                    "status": "failed",
                    "error": e.to_string(),
                });
                println!("{line}");
            } else {
                println!("{label}: invalid: {e}");
            }
            return false;
        }
    };

    match validate_plan(&roster, &catalog, &plan) {
        Ok(()) => {
            if json {
                let line = serde_json::json!({
                    "case": label,
                    "status": "ok",
                    "entries": plan.len(),
                });
                println!("{line}");
            } else {
                println!("{label}: structure ok ({} entries)", plan.len());
            }
            true
        }
        Err(errors) => {
            if json {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                let line = serde_json::json!({
                    "case": label,
                    "status": "failed",
                    "errors": messages,
                });
                println!("{line}");
            } else {
                println!("{label}: {} structural defect(s):", errors.len());
                for e in &errors {
                    println!("  - {e}");
                }
            }
            false
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,staffval=info",
        1 => "info,staffval=debug",
        _ => "debug,staffval=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Formats an integer with comma digit grouping.
fn group_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}
