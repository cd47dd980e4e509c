//! φⁿ fits of lepton and quark mass ratios, and Koide's relation.
//!
//! For a ratio m₁/m₂ the fit takes n = round(log_φ(m₁/m₂)) and reports how
//! far φⁿ lands from the measured ratio.  The conjecture under test is that
//! m_μ/m_e ≈ φ¹¹ and m_τ/m_e ≈ φ¹⁷ with prime exponents.
//!
//! ## What this module verifies
//!
//! | ratio     | log_φ   | n  | φⁿ error |
//! |-----------|---------|----|----------|
//! | m_μ/m_e   | 11.0795 | 11 | 3.75 %   |
//! | m_τ/m_e   | 16.9447 | 17 | 2.70 %   |
//! | m_τ/m_μ   |  5.8652 |  6 | 6.70 %   |
//!
//! Koide's Q on measured masses is 2/3 to 9·10⁻⁶ relative; on the φ-predicted
//! masses it is 0.6728.

use crate::check::Report;
use crate::constants::{
    ELECTRON_MEV, KOIDE_TARGET, MUON_EXPONENT, MUON_MEV, PHI, QUARKS, TAU_EXPONENT, TAU_MEV,
};
use crate::tolerance::Tolerance;

/// Exponents counted as "prime" by the conjecture.
pub const SMALL_PRIMES: [i32; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 23];

/// Koide's relation holds on measured masses to well within this.
const KOIDE_TOLERANCE: Tolerance = Tolerance::Relative(1e-4);

pub fn is_small_prime(n: i32) -> bool {
    SMALL_PRIMES.contains(&n)
}

/// Nearest-integer power of φ for one ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhiFit {
    pub ratio: f64,
    pub log_phi: f64,
    pub n: i32,
    pub phi_n: f64,
    /// |φⁿ − ratio| / ratio in percent.
    pub error_pct: f64,
}

impl PhiFit {
    pub fn of(ratio: f64) -> Self {
        let log_phi = ratio.ln() / PHI.ln();
        let n = log_phi.round() as i32;
        let phi_n = PHI.powi(n);
        Self {
            ratio,
            log_phi,
            n,
            phi_n,
            error_pct: (phi_n - ratio).abs() / ratio * 100.0,
        }
    }

    pub fn prime_exponent(&self) -> bool {
        is_small_prime(self.n)
    }
}

/// Q = (m₁ + m₂ + m₃) / (√m₁ + √m₂ + √m₃)².
pub fn koide(masses: [f64; 3]) -> f64 {
    let sum: f64 = masses.iter().sum();
    let roots: f64 = masses.iter().map(|m| m.sqrt()).sum();
    sum / (roots * roots)
}

/// m_e·φⁿ.
pub fn predicted_from_electron(n: i32) -> f64 {
    ELECTRON_MEV * PHI.powi(n)
}

fn relative_error_pct(predicted: f64, measured: f64) -> f64 {
    (predicted - measured).abs() / measured * 100.0
}

/// (name, fit) for every quark against the up quark.
pub fn quark_fits() -> Vec<(&'static str, PhiFit)> {
    let up = QUARKS[0].1;
    QUARKS[1..].iter().map(|&(name, m)| (name, PhiFit::of(m / up))).collect()
}

pub fn lepton_report() -> Report {
    let mut report = Report::new("Lepton mass φ-scaling");

    let fits = [
        ("m_μ/m_e", PhiFit::of(MUON_MEV / ELECTRON_MEV), Some(MUON_EXPONENT)),
        ("m_τ/m_e", PhiFit::of(TAU_MEV / ELECTRON_MEV), Some(TAU_EXPONENT)),
        ("m_τ/m_μ", PhiFit::of(TAU_MEV / MUON_MEV), None),
    ];
    for (name, fit, conjectured) in fits {
        report.note(format!(
            "{name} = {:.6}: log_φ {:.6}, n = {}, φⁿ = {:.6}, error {:.4}%, prime: {}",
            fit.ratio,
            fit.log_phi,
            fit.n,
            fit.phi_n,
            fit.error_pct,
            fit.prime_exponent()
        ));
        if let Some(n) = conjectured {
            report.holds(format!("{name}: nearest exponent is {n}"), fit.n == n);
            report.holds(format!("{name}: exponent is prime"), fit.prime_exponent());
        }
    }

    for (name, n, measured) in [("muon", MUON_EXPONENT, MUON_MEV), ("tau", TAU_EXPONENT, TAU_MEV)] {
        let predicted = predicted_from_electron(n);
        report.note(format!(
            "{name} (n = {n}): predicted {predicted:.6} MeV, measured {measured:.6} MeV, error {:.4}%",
            relative_error_pct(predicted, measured)
        ));
    }

    let measured = koide([ELECTRON_MEV, MUON_MEV, TAU_MEV]);
    report.close("Koide Q (measured) = 2/3", measured, KOIDE_TARGET, KOIDE_TOLERANCE);
    let predicted = koide([
        ELECTRON_MEV,
        predicted_from_electron(MUON_EXPONENT),
        predicted_from_electron(TAU_EXPONENT),
    ]);
    report.note(format!(
        "Koide Q (φ-predicted) = {predicted:.10}, error {:.6}%",
        relative_error_pct(predicted, KOIDE_TARGET)
    ));
    report
}

pub fn quark_report() -> Report {
    let mut report = Report::new("Quark mass φ-scaling");
    for (name, fit) in quark_fits() {
        report.note(format!(
            "{name}/up = {:.2}: log_φ {:.2}, n = {}, φⁿ = {:.2}, error {:.1}%",
            fit.ratio, fit.log_phi, fit.n, fit.phi_n, fit.error_pct
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lepton_exponents() {
        let mu = PhiFit::of(MUON_MEV / ELECTRON_MEV);
        let tau = PhiFit::of(TAU_MEV / ELECTRON_MEV);
        println!("μ/e: {mu:?}\nτ/e: {tau:?}");
        assert_eq!(mu.n, 11);
        assert_eq!(tau.n, 17);
        assert!(mu.prime_exponent() && tau.prime_exponent());
        assert!((mu.error_pct - 3.7546).abs() < 1e-3);
        assert!((tau.error_pct - 2.6967).abs() < 1e-3);
    }

    #[test]
    fn tau_over_muon_is_not_prime() {
        let fit = PhiFit::of(TAU_MEV / MUON_MEV);
        assert_eq!(fit.n, 6);
        assert!(!fit.prime_exponent());
        assert!((fit.error_pct - 6.703).abs() < 1e-2);
    }

    #[test]
    fn predictions_from_electron() {
        assert!((predicted_from_electron(11) - 101.6914).abs() < 1e-3);
        assert!((predicted_from_electron(17) - 1824.777).abs() < 1e-2);
    }

    #[test]
    fn koide_on_measured_and_predicted() {
        let measured = koide([ELECTRON_MEV, MUON_MEV, TAU_MEV]);
        println!("Koide Q measured = {measured:.10}");
        assert!((measured - 0.666_660_51).abs() < 1e-7);
        let predicted = koide([ELECTRON_MEV, predicted_from_electron(11), predicted_from_electron(17)]);
        assert!((predicted - 0.672_825).abs() < 1e-6);
        // Equal masses give the lower bound 1/3.
        assert!((koide([1.0, 1.0, 1.0]) - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn quark_exponents() {
        let fits = quark_fits();
        let ns: Vec<(&str, i32)> = fits.iter().map(|(q, f)| (*q, f.n)).collect();
        assert_eq!(
            ns,
            vec![("down", 2), ("strange", 8), ("charm", 13), ("bottom", 16), ("top", 23)]
        );
        let errors: Vec<f64> = fits.iter().map(|(_, f)| (f.error_pct * 100.0).round() / 100.0).collect();
        println!("quark fit errors (%): {errors:?}");
        assert_eq!(errors, vec![21.09, 8.64, 11.39, 14.05, 19.88]);
    }

    #[test]
    fn small_primes() {
        assert!(is_small_prime(11) && is_small_prime(23));
        assert!(!is_small_prime(1) && !is_small_prime(6) && !is_small_prime(29));
    }

    #[test]
    fn reports() {
        let leptons = lepton_report();
        println!("{leptons}");
        assert!(leptons.all_passed());
        let quarks = quark_report();
        println!("{quarks}");
        assert_eq!(quarks.notes.len(), 5);
        assert!(quarks.checks.is_empty());
    }
}
