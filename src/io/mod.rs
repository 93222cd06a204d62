//! Flat-file readers for problem and plan descriptions.
//!
//! Both formats are line-oriented with whitespace-separated fields and
//! counted sub-records. Readers work over any `BufRead` and report
//! 1-based line numbers on malformed input; `*_file` variants open a
//! path first.

mod input;
mod plan;

pub use input::{read_problem, read_problem_file};
pub use plan::{read_plan, read_plan_file};

use std::io::BufRead;

use crate::error::{PlanError, Result};

/// Line-at-a-time reader tracking the current line number.
pub(crate) struct Scanner<R: BufRead> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> Scanner<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    /// Reads the next line, trimmed of the trailing newline.
    pub(crate) fn next_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        self.line_no += 1;
        if n == 0 {
            return Err(self.error("unexpected end of file"));
        }
        Ok(buf.trim_end_matches(['\n', '\r']).to_string())
    }

    /// A parse error at the current line.
    pub(crate) fn error(&self, message: impl Into<String>) -> PlanError {
        PlanError::Parse {
            line: self.line_no,
            message: message.into(),
        }
    }

    /// Parses a whitespace-separated field as an integer.
    pub(crate) fn int(&self, field: &str) -> Result<i64> {
        field
            .parse()
            .map_err(|_| self.error(format!("expected an integer, got '{field}'")))
    }

    /// Parses a field as a non-negative count.
    pub(crate) fn count(&self, field: &str) -> Result<usize> {
        field
            .parse()
            .map_err(|_| self.error(format!("expected a count, got '{field}'")))
    }
}
