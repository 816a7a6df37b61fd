use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::checker::Checker;
use crate::source::Source;

/// Outcome of every source in a run, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    results: Vec<bool>,
}

impl RunSummary {
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// Vacuously true for an empty run
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|passed| *passed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Check each source in turn, then write the summary line.
pub fn run<W: Write>(checker: &Checker, sources: &[Source], out: &mut W) -> Result<RunSummary> {
    let mut results = Vec::with_capacity(sources.len());
    for source in sources {
        results.push(checker.check(&source.name, &source.url, out)?);
    }
    let summary = RunSummary { results };

    if summary.all_passed() {
        writeln!(out, "\nAll links verified. Ready for architecture phase.")?;
    } else {
        writeln!(out, "\nSome links failed. Check findings.md for details.")?;
    }
    out.flush()?;

    info!(
        checked = sources.len(),
        failed = summary.results().iter().filter(|passed| !**passed).count(),
        "Run finished"
    );
    Ok(summary)
}
