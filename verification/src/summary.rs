//! Machine-readable run summary, written as pretty-printed JSON.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::check::Status;
use crate::classify::Trinity;
use crate::config::SuiteConfig;
use crate::errors::Result;
use crate::polytope::{cell_24, cell_600, dedup, e8_roots};
use crate::tolerance::Tolerance;
use crate::triad::search_trinity;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountSummary {
    pub count: usize,
    pub expected: usize,
    pub status: Status,
}

impl CountSummary {
    fn new(count: usize, expected: usize) -> Self {
        Self { count, expected, status: Status::from_bool(count == expected) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrinitySummary {
    pub alpha: usize,
    pub beta: usize,
    pub gamma: usize,
    pub total: usize,
    pub expected: usize,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisSummary {
    /// Triads below the relaxed threshold.
    pub valid_triads: usize,
    /// `null` when there was nothing to search.
    pub best_balance: Option<f64>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub e8_roots: CountSummary,
    #[serde(rename = "600_cell")]
    pub cell_600: CountSummary,
    #[serde(rename = "24_cell")]
    pub cell_24: CountSummary,
    pub trinity_decomposition: TrinitySummary,
    pub phillips_synthesis: SynthesisSummary,
}

impl SimulationSummary {
    pub fn compute(config: &SuiteConfig) -> Self {
        let cell_24 = cell_24();
        let t = Trinity::decompose(&cell_24);
        let total = t.total();
        let search = search_trinity(&t, config.balance_relaxed);

        Self {
            e8_roots: CountSummary::new(e8_roots().len(), 240),
            cell_600: CountSummary::new(dedup(&cell_600(), Tolerance::DEDUP.epsilon()).len(), 120),
            cell_24: CountSummary::new(cell_24.len(), 24),
            trinity_decomposition: TrinitySummary {
                alpha: t.alpha.len(),
                beta: t.beta.len(),
                gamma: t.gamma.len(),
                total,
                expected: 24,
                status: Status::from_bool(total == 24),
            },
            phillips_synthesis: SynthesisSummary {
                valid_triads: search.count(),
                best_balance: search.best.map(|b| b.balance),
                status: Status::from_bool(search.count() > 0),
            },
        }
    }

    pub fn all_passed(&self) -> bool {
        [
            self.e8_roots.status,
            self.cell_600.status,
            self.cell_24.status,
            self.trinity_decomposition.status,
            self.phillips_synthesis.status,
        ]
        .iter()
        .all(|s| *s == Status::Pass)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        // Dropping an unflushed BufWriter discards write errors.
        w.flush()?;
        info!(path = %path.display(), "summary written");
        Ok(())
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(60);
        writeln!(f, "Component                    Result    Expected   Status")?;
        writeln!(f, "{rule}")?;
        for (name, c) in [
            ("E8 Root Lattice", &self.e8_roots),
            ("600-Cell Vertices", &self.cell_600),
            ("24-Cell Vertices", &self.cell_24),
        ] {
            writeln!(f, "{name:<28} {:>6}    {:>6}     {}", c.count, c.expected, c.status)?;
        }
        let t = &self.trinity_decomposition;
        writeln!(f, "{:<28} {:>6}    {:>6}     {}", "Trinity Decomposition", t.total, t.expected, t.status)?;
        let s = &self.phillips_synthesis;
        writeln!(f, "{:<28} {:>6}     > 0      {}", "Phillips Synthesis Triads", s.valid_triads, s.status)?;
        writeln!(f, "{rule}")?;
        write!(
            f,
            "Overall: {}",
            if self.all_passed() { "ALL TESTS PASSED ✓" } else { "SOME TESTS FAILED ✗" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_summary() {
        let s = SimulationSummary::compute(&SuiteConfig::default());
        println!("{s}");
        assert_eq!(s.e8_roots.count, 240);
        assert_eq!(s.cell_600.count, 120);
        assert_eq!(s.cell_24.count, 24);
        let t = &s.trinity_decomposition;
        assert_eq!((t.alpha, t.beta, t.gamma), (8, 8, 8));
        assert_eq!(s.phillips_synthesis.valid_triads, 320);
        assert_eq!(s.phillips_synthesis.best_balance, Some(0.0));
        assert!(s.all_passed());
    }

    #[test]
    fn json_uses_numeric_keys_and_uppercase_status() {
        let s = SimulationSummary::compute(&SuiteConfig::default());
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["600_cell"]["count"], 120);
        assert_eq!(v["24_cell"]["status"], "PASS");
        assert_eq!(v["trinity_decomposition"]["total"], 24);
        assert_eq!(v["phillips_synthesis"]["best_balance"], 0.0);
        assert!(v.get("cell_600").is_none());
    }

    #[test]
    fn tighter_threshold_changes_triad_count() {
        let config = SuiteConfig { balance_relaxed: 0.001, ..SuiteConfig::default() };
        let s = SimulationSummary::compute(&config);
        assert_eq!(s.phillips_synthesis.valid_triads, 32);
    }
}
