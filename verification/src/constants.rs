//! Golden-ratio constants and measured particle masses.
//!
//! All values are process-wide and read-only.  φ is written out as a literal
//! because `f64::sqrt` is not usable in `const` context; the tests pin it to
//! `(1 + √5) / 2` at full double precision.

use crate::check::Report;
use crate::tolerance::Tolerance;

// ── Golden ratio ──────────────────────────────────────────────────────────────

/// φ = (1 + √5) / 2, the positive root of x² = x + 1.
pub const PHI: f64 = 1.618_033_988_749_895_f64;

/// 1/φ = φ − 1.
pub const PHI_INV: f64 = PHI - 1.0;

/// φ² = φ + 1.
pub const PHI_SQ: f64 = PHI + 1.0;

/// √5 = 2φ − 1 = φ + 1/φ.
pub const SQRT5: f64 = 2.0 * PHI - 1.0;

/// Squared row norm of the lower-weight folding block, ‖U_L‖² = 3 − φ.
pub const LEFT_BLOCK_SQ: f64 = 3.0 - PHI;

/// Squared row norm of the higher-weight folding block, ‖U_R‖² = φ + 2.
pub const RIGHT_BLOCK_SQ: f64 = PHI + 2.0;

// ── Lepton masses (PDG 2024, MeV/c²) ─────────────────────────────────────────

pub const ELECTRON_MEV: f64 = 0.510_998_950_00;
pub const MUON_MEV: f64 = 105.658_375_5;
pub const TAU_MEV: f64 = 1776.86;

// ── Quark masses (PDG 2024, MeV; MS-bar at 2 GeV except the top pole mass) ───

pub const UP_MEV: f64 = 2.16;
pub const DOWN_MEV: f64 = 4.67;
pub const STRANGE_MEV: f64 = 93.4;
pub const CHARM_MEV: f64 = 1270.0;
pub const BOTTOM_MEV: f64 = 4180.0;
pub const TOP_MEV: f64 = 172_760.0;

/// Quarks in generation order, up quark first.
pub const QUARKS: [(&str, f64); 6] = [
    ("up", UP_MEV),
    ("down", DOWN_MEV),
    ("strange", STRANGE_MEV),
    ("charm", CHARM_MEV),
    ("bottom", BOTTOM_MEV),
    ("top", TOP_MEV),
];

/// Exponents of φ conjectured for m_μ/m_e and m_τ/m_e.
pub const MUON_EXPONENT: i32 = 11;
pub const TAU_EXPONENT: i32 = 17;

/// Koide's relation predicts Q = 2/3 for the charged leptons.
pub const KOIDE_TARGET: f64 = 2.0 / 3.0;

/// The golden-ratio identities the folding analysis leans on, evaluated in
/// floating point.
pub fn identities_report() -> Report {
    let mut report = Report::new("Golden-ratio identities");
    let t = Tolerance::IDENTITY;
    report.close("φ² = φ + 1", PHI * PHI, PHI + 1.0, t);
    report.close("1/φ = φ − 1", 1.0 / PHI, PHI - 1.0, t);
    report.close("φ · (1/φ) = 1", PHI * PHI_INV, 1.0, t);
    report.close("φ + 1/φ = √5", PHI + 1.0 / PHI, 5.0_f64.sqrt(), t);
    report.close("(3 − φ)(φ + 2) = 5", LEFT_BLOCK_SQ * RIGHT_BLOCK_SQ, 5.0, t);
    report.close("φ² − φ − 1 = 0", PHI * PHI - PHI - 1.0, 0.0, t);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_literal_matches_closed_form() {
        let closed = (1.0 + 5.0_f64.sqrt()) / 2.0;
        assert_eq!(PHI, closed, "literal φ must equal (1 + √5)/2 bit for bit");
    }

    #[test]
    fn derived_constants_agree() {
        assert!((1.0 / PHI - PHI_INV).abs() < 1e-15);
        assert!((PHI * PHI - PHI_SQ).abs() < 1e-15);
        assert!((5.0_f64.sqrt() - SQRT5).abs() < 1e-15);
        assert!((LEFT_BLOCK_SQ * RIGHT_BLOCK_SQ - 5.0).abs() < 1e-12);
    }

    #[test]
    fn quark_table_starts_with_up() {
        assert_eq!(QUARKS[0], ("up", UP_MEV));
        assert!(QUARKS.windows(2).all(|w| w[0].1 < w[1].1), "quark masses ascend");
    }

    #[test]
    fn identities_hold() {
        let r = identities_report();
        println!("{r}");
        assert_eq!(r.checks.len(), 6);
        assert!(r.all_passed());
    }
}
