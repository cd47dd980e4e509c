//! Suite configuration: thresholds, sample sizes and the RNG seed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VerifyError};
use crate::triad::{EXACT_BALANCE, RELAXED_BALANCE};

/// Tunables for a suite run.  Every field has a default, so a JSON file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Centroid-norm threshold for an exactly balanced triad.
    pub balance_exact: f64,
    /// Centroid-norm threshold for the relaxed triad count.
    pub balance_relaxed: f64,
    /// Leading 600-cell vertices used for the sampled edge note.
    pub edge_sample: usize,
    /// Random sign patterns per batch.
    pub sign_trials: usize,
    /// Batches of random sign patterns.
    pub sign_batches: usize,
    /// Seed for the sign-pattern RNG.
    pub seed: u64,
    /// Where `summary` writes its JSON.
    pub summary_path: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            balance_exact: EXACT_BALANCE,
            balance_relaxed: RELAXED_BALANCE,
            edge_sample: 20,
            sign_trials: 100,
            sign_batches: 20,
            seed: 42,
            summary_path: PathBuf::from("e8_h4_correct_results.json"),
        }
    }
}

impl SuiteConfig {
    /// Read a JSON config and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let config: SuiteConfig = serde_json::from_str(&s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("balance_exact", self.balance_exact), ("balance_relaxed", self.balance_relaxed)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(VerifyError::Config(format!("{name} must be positive and finite, got {v}")));
            }
        }
        if self.balance_exact > self.balance_relaxed {
            return Err(VerifyError::Config(format!(
                "balance_exact ({}) exceeds balance_relaxed ({})",
                self.balance_exact, self.balance_relaxed
            )));
        }
        for (name, n) in [
            ("edge_sample", self.edge_sample),
            ("sign_trials", self.sign_trials),
            ("sign_batches", self.sign_batches),
        ] {
            if n == 0 {
                return Err(VerifyError::Config(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = SuiteConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.balance_exact, 0.001);
        assert_eq!(c.balance_relaxed, 0.5);
        assert_eq!(c.summary_path, PathBuf::from("e8_h4_correct_results.json"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: SuiteConfig = serde_json::from_str(r#"{ "seed": 7, "sign_trials": 10 }"#).unwrap();
        assert_eq!(c.seed, 7);
        assert_eq!(c.sign_trials, 10);
        assert_eq!(c.sign_batches, 20);
        assert_eq!(c.balance_relaxed, 0.5);
    }

    #[test]
    fn rejects_bad_thresholds_and_counts() {
        let bad = [
            SuiteConfig { balance_exact: 0.0, ..SuiteConfig::default() },
            SuiteConfig { balance_relaxed: f64::NAN, ..SuiteConfig::default() },
            SuiteConfig { balance_exact: 1.0, balance_relaxed: 0.5, ..SuiteConfig::default() },
            SuiteConfig { sign_trials: 0, ..SuiteConfig::default() },
            SuiteConfig { edge_sample: 0, ..SuiteConfig::default() },
        ];
        for c in bad {
            let err = c.validate().unwrap_err();
            println!("{err}");
            assert!(matches!(err, VerifyError::Config(_)));
        }
    }

    #[test]
    fn load_reports_missing_file_and_bad_json() {
        let dir = std::env::temp_dir();
        let missing = dir.join("polytope-verify-no-such-config.json");
        assert!(matches!(SuiteConfig::load(&missing), Err(VerifyError::Io(_))));

        let broken = dir.join("polytope-verify-broken-config.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(SuiteConfig::load(&broken), Err(VerifyError::Serde(_))));

        let invalid = dir.join("polytope-verify-invalid-config.json");
        std::fs::write(&invalid, r#"{ "sign_batches": 0 }"#).unwrap();
        assert!(matches!(SuiteConfig::load(&invalid), Err(VerifyError::Config(_))));
    }
}
