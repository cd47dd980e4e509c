//! Verification records and reports.
//!
//! A [`Check`] pairs a claim with its computed value, the closed-form
//! expected value, and the tolerance used.  A [`Report`] collects checks in
//! order.  Adding a check never stops the report: a mismatch is recorded as
//! FAIL and the next check still runs.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::tolerance::Tolerance;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn from_bool(ok: bool) -> Self {
        if ok { Status::Pass } else { Status::Fail }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        })
    }
}

/// (claim, computed, expected, tolerance, pass/fail).
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub claim: String,
    pub computed: f64,
    pub expected: f64,
    pub tolerance: Tolerance,
    pub status: Status,
}

impl Check {
    pub fn new(claim: impl Into<String>, computed: f64, expected: f64, tolerance: Tolerance) -> Self {
        let status = Status::from_bool(tolerance.matches(computed, expected));
        Self { claim: claim.into(), computed, expected, tolerance, status }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }

    /// Signed discrepancy `computed − expected`.
    pub fn discrepancy(&self) -> f64 {
        self.computed - self.expected
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed() { "✓" } else { "✗" };
        if self.tolerance == Tolerance::Exact {
            write!(
                f,
                "  {mark} {:<52} {:>14} (expected {}) {}",
                self.claim, self.computed, self.expected, self.status
            )
        } else {
            write!(
                f,
                "  {mark} {:<52} {:>14.10} (expected {:.10}, Δ {:+.2e}, {}) {}",
                self.claim,
                self.computed,
                self.expected,
                self.discrepancy(),
                self.tolerance,
                self.status
            )
        }
    }
}

/// An ordered diagnostic report for one section.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub title: String,
    pub checks: Vec<Check>,
    pub notes: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Record a check and return whether it passed.
    pub fn push(&mut self, check: Check) -> bool {
        if check.passed() {
            debug!(section = %self.title, claim = %check.claim, computed = check.computed, "check passed");
        } else {
            warn!(
                section = %self.title,
                claim = %check.claim,
                computed = check.computed,
                expected = check.expected,
                "check failed"
            );
        }
        let ok = check.passed();
        self.checks.push(check);
        ok
    }

    /// Compare a scalar against its closed form.
    pub fn close(&mut self, claim: impl Into<String>, computed: f64, expected: f64, tol: Tolerance) -> bool {
        self.push(Check::new(claim, computed, expected, tol))
    }

    /// Compare a cardinality exactly.
    pub fn count(&mut self, claim: impl Into<String>, computed: usize, expected: usize) -> bool {
        self.push(Check::new(claim, computed as f64, expected as f64, Tolerance::Exact))
    }

    /// Record a boolean claim (1 = holds, 0 = does not).
    pub fn holds(&mut self, claim: impl Into<String>, ok: bool) -> bool {
        self.push(Check::new(claim, if ok { 1.0 } else { 0.0 }, 1.0, Tolerance::Exact))
    }

    /// Attach a measured quantity that is reported but not asserted.
    pub fn note(&mut self, line: impl Into<String>) {
        self.notes.push(line.into());
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Look up a check by its exact claim text.
    pub fn find(&self, claim: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.claim == claim)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n══ {} {}", self.title, "═".repeat(70usize.saturating_sub(self.title.len())))?;
        for check in &self.checks {
            writeln!(f, "{check}")?;
        }
        if !self.notes.is_empty() {
            writeln!(f, "  ── notes ──")?;
            for note in &self.notes {
                writeln!(f, "    {note}")?;
            }
        }
        write!(f, "  {} passed, {} failed", self.passed(), self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_check_does_not_short_circuit() {
        let mut r = Report::new("demo");
        assert!(!r.count("wrong count", 239, 240));
        assert!(r.close("φ² = φ + 1", 2.618_033_988_749_895, 2.618_033_988_749_895, Tolerance::IDENTITY));
        assert!(r.holds("claim", true));
        assert_eq!(r.checks.len(), 3);
        assert_eq!(r.passed(), 2);
        assert_eq!(r.failed(), 1);
        assert!(!r.all_passed());
    }

    #[test]
    fn discrepancy_is_signed() {
        let c = Check::new("x", 1.5, 2.0, Tolerance::Absolute(0.1));
        assert_eq!(c.discrepancy(), -0.5);
        assert_eq!(c.status, Status::Fail);
    }

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Status::Pass).unwrap(), "\"PASS\"");
        assert_eq!(serde_json::to_string(&Status::Fail).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn render_lists_every_check_and_note() {
        let mut r = Report::new("render");
        r.count("vertices", 24, 24);
        r.note("histogram: 1.0000 × 96");
        let text = r.to_string();
        assert!(text.contains("render"));
        assert!(text.contains("vertices"));
        assert!(text.contains("histogram"));
        assert!(text.contains("1 passed, 0 failed"));
        println!("{text}");
    }

    #[test]
    fn find_by_claim() {
        let mut r = Report::new("find");
        r.count("a", 1, 1);
        r.count("b", 2, 3);
        assert!(r.find("a").unwrap().passed());
        assert!(!r.find("b").unwrap().passed());
        assert!(r.find("c").is_none());
    }
}
