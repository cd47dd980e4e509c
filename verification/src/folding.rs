//! φ-coupled E8 → H4 folding matrices.
//!
//! An 8×8 folding matrix U is read as two 4×8 blocks: U_L (rows 0-3) and
//! U_R (rows 4-7).  Projecting an E8 root r gives (U_L r, U_R r) ∈ R⁴ × R⁴.
//!
//! ## Matrices
//!
//! - **Phillips** (`a = ½`, `b = (φ−1)/2`, `c = φ/2`): every U_R row is φ
//!   times the matching U_L row, so the matrix has rank 4.
//! - **Icosahedral**: (φ/2, 1/(2φ)) rows scaled by 1/√2, labelled as the
//!   orthogonal Moxness matrix by its authors.  It is not orthogonal
//!   (det = 81/16).
//! - **Block Hadamard**: two ½-Hadamard blocks, orthogonal.
//! - **Golden rotation**: block-diagonal plane rotations by atan(1/φ).
//!
//! ## What this module verifies
//!
//! 1. Phillips row norms √(3−φ) / √(φ+2) and the √5 coupling
//!    ‖U_L‖·‖U_R‖ = √5, via (3−φ)(φ+2) = 5.
//! 2. φ-scaling U_L = U_R/φ row by row, and the null relation
//!    φ·R₀ − φ·R₃ − R₄ + R₇ = 0.
//! 3. The column-norm, rank (7) and unimodular claims made about the same
//!    matrix.  Several of these do not hold; they are reported as computed.
//! 4. The √5 coupling depends only on coefficient magnitudes: any sign
//!    pattern keeps it, and matched patterns keep φ-scaling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::check::Report;
use crate::constants::{LEFT_BLOCK_SQ, PHI, PHI_INV, RIGHT_BLOCK_SQ, SQRT5};
use crate::linalg::{
    column_norm, determinant, mat_vec, orthogonality_error_frobenius, orthogonality_error_max,
    rank, row_norm, trace, Matrix,
};
use crate::tolerance::{all_close, Tolerance};
use crate::vector::{dot, halves, Vec4, Vec8};

/// Signs of the four rows of one block.
pub type SignPattern = [[i8; 8]; 4];

/// Sign pattern of the Phillips matrix as used by the pattern analysis.
pub const PHILLIPS_PATTERN: SignPattern = [
    [1, 1, 1, 1, 1, -1, 1, -1],
    [1, 1, -1, -1, -1, -1, 1, 1],
    [1, -1, -1, 1, 1, -1, -1, 1],
    [1, -1, 1, -1, -1, 1, -1, 1],
];

/// Row norms and their product for the two blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coupling {
    pub norm_left: f64,
    pub norm_right: f64,
    pub product: f64,
    /// All rows within each block share one norm (within 1e-10).
    pub uniform: bool,
}

/// A named 8×8 folding matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldingMatrix {
    pub name: &'static str,
    pub m: Matrix<8>,
}

impl FoldingMatrix {
    pub fn phillips() -> Self {
        let a = 0.5;
        let b = (PHI - 1.0) / 2.0;
        let c = PHI / 2.0;
        Self {
            name: "Phillips",
            m: [
                [a, b, a, b, a, -b, a, -b],
                [a, a, -b, -b, -a, -a, b, b],
                [a, -b, -a, b, a, -b, -a, b],
                [a, -a, b, -b, -a, a, -b, b],
                [c, a, c, a, c, -a, c, -a],
                [c, c, -a, -a, -c, -c, a, a],
                [c, -a, -c, a, c, -a, -c, a],
                [c, -c, a, -a, -c, c, -a, a],
            ],
        }
    }

    pub fn icosahedral() -> Self {
        let a = PHI / 2.0;
        let b = 1.0 / (2.0 * PHI);
        let rows = [
            [a, b, a, b, a, b, a, b],
            [a, b, -a, -b, a, b, -a, -b],
            [a, b, a, b, -a, -b, -a, -b],
            [a, b, -a, -b, -a, -b, a, b],
            [b, -a, b, -a, b, -a, b, -a],
            [b, -a, -b, a, b, -a, -b, a],
            [b, -a, b, -a, -b, a, -b, a],
            [b, -a, -b, a, -b, a, b, -a],
        ];
        let s = 1.0 / 2.0_f64.sqrt();
        Self {
            name: "Icosahedral",
            m: rows.map(|r| r.map(|x| s * x)),
        }
    }

    pub fn block_hadamard() -> Self {
        let c = 0.5;
        Self {
            name: "Block Hadamard",
            m: [
                [c, c, c, c, 0.0, 0.0, 0.0, 0.0],
                [c, c, -c, -c, 0.0, 0.0, 0.0, 0.0],
                [c, -c, c, -c, 0.0, 0.0, 0.0, 0.0],
                [c, -c, -c, c, 0.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0, c, c, c, c],
                [0.0, 0.0, 0.0, 0.0, c, c, -c, -c],
                [0.0, 0.0, 0.0, 0.0, c, -c, c, -c],
                [0.0, 0.0, 0.0, 0.0, c, -c, -c, c],
            ],
        }
    }

    pub fn golden_rotation() -> Self {
        let theta = (1.0 / PHI).atan();
        let (s, c) = theta.sin_cos();
        let r4 = [
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, c, -s],
            [0.0, 0.0, s, c],
        ];
        let mut m = [[0.0; 8]; 8];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = r4[i][j];
                m[i + 4][j + 4] = r4[i][j];
            }
        }
        Self { name: "Golden rotation", m }
    }

    /// Even columns take `a` (U_L) / `aφ` (U_R); odd columns take `a/φ`
    /// (U_L) / `a` (U_R); each entry is multiplied by its sign.
    pub fn from_sign_pattern(left: &SignPattern, right: &SignPattern, a: f64) -> Self {
        let b = a / PHI;
        let c = a * PHI;
        let mut m = [[0.0; 8]; 8];
        for i in 0..4 {
            for j in 0..8 {
                let (l, r) = if j % 2 == 0 { (a, c) } else { (b, a) };
                m[i][j] = l * f64::from(left[i][j]);
                m[i + 4][j] = r * f64::from(right[i][j]);
            }
        }
        Self { name: "Sign pattern", m }
    }

    pub fn coupling(&self) -> Coupling {
        let left: Vec<f64> = (0..4).map(|i| row_norm(&self.m, i)).collect();
        let right: Vec<f64> = (4..8).map(|i| row_norm(&self.m, i)).collect();
        let spread = |v: &[f64]| {
            v.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
                - v.iter().cloned().fold(f64::INFINITY, f64::min)
        };
        let uniform = spread(&left) <= 1e-10 && spread(&right) <= 1e-10;
        Coupling {
            norm_left: left[0],
            norm_right: right[0],
            product: left[0] * right[0],
            uniform,
        }
    }

    /// Uniform row norms in each block with product √5 (within 1e-10).
    pub fn has_sqrt5_coupling(&self) -> bool {
        let c = self.coupling();
        c.uniform && Tolerance::MATRIX.matches(c.product, SQRT5)
    }

    /// U_L[i] = U_R[i]/φ for every row (within 1e-10).
    pub fn is_phi_scaled(&self) -> bool {
        (0..4).all(|i| {
            let scaled: Vec<f64> = self.m[i + 4].iter().map(|x| x / PHI).collect();
            all_close(&self.m[i], &scaled, 1e-10)
        })
    }

    /// (U_L r, U_R r).
    pub fn project(&self, r: &Vec8) -> (Vec4, Vec4) {
        halves(&mat_vec(&self.m, r))
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

/// Claims about the Phillips matrix, each checked independently.
pub fn phillips_matrix_report() -> Report {
    let mut report = Report::new("Phillips folding matrix");
    let u = FoldingMatrix::phillips();
    let (a, b, c) = (0.5, (PHI - 1.0) / 2.0, PHI / 2.0);

    report.close("1/φ = φ − 1", 1.0 / PHI, PHI - 1.0, Tolerance::ROUGH);
    report.close("b = a/φ", b, a / PHI, Tolerance::ROUGH);
    report.close("c = a·φ", c, a * PHI, Tolerance::ROUGH);

    // Row norms
    let norm_l = LEFT_BLOCK_SQ.sqrt();
    let norm_r = RIGHT_BLOCK_SQ.sqrt();
    for i in 0..8 {
        let (block, expected) = if i < 4 { ("U_L", norm_l) } else { ("U_R", norm_r) };
        report.close(format!("row {i} ({block}) norm"), row_norm(&u.m, i), expected, Tolerance::MATRIX);
    }

    // √5 coupling
    let coupling = u.coupling();
    report.close("‖U_L‖ × ‖U_R‖ = √5", coupling.product, SQRT5, Tolerance::MATRIX);
    report.close("(3 − φ)(φ + 2) = 5", LEFT_BLOCK_SQ * RIGHT_BLOCK_SQ, 5.0, Tolerance::IDENTITY);
    // Pentagon forms of the block norms.
    report.close("√(3 − φ) = √((5 − √5)/2)", norm_l, ((5.0 - SQRT5) / 2.0).sqrt(), Tolerance::IDENTITY);
    report.close("√(φ + 2) = √((5 + √5)/2)", norm_r, ((5.0 + SQRT5) / 2.0).sqrt(), Tolerance::IDENTITY);

    // φ-scaling
    for i in 0..4 {
        let max_diff = (0..8)
            .map(|j| (u.m[i][j] - u.m[i + 4][j] / PHI).abs())
            .fold(0.0, f64::max);
        report.close(format!("row {i}: ‖U_L − U_R/φ‖∞ = 0"), max_diff, 0.0, Tolerance::ROUGH);
    }
    report.close("‖U_L‖ / ‖U_R‖ = 1/φ", coupling.norm_left / coupling.norm_right, PHI_INV, Tolerance::ROUGH);

    // Column norm duality as claimed: columns 0-3 at √(3−φ), 4-7 at √(φ+2).
    for j in 0..8 {
        let expected = if j < 4 { norm_l } else { norm_r };
        report.close(format!("column {j} norm"), column_norm(&u.m, j), expected, Tolerance::MATRIX);
    }

    // Rank and determinant
    let r = rank(&u.m, 1e-10);
    let det = determinant(&u.m);
    report.count("rank = 7", r, 7);
    report.close("det = 0", det, 0.0, Tolerance::MATRIX);
    report.note(format!("computed rank {r}: every U_R row is φ × its U_L row"));

    // Null relation φ·R0 − φ·R3 − R4 + R7 = 0
    let null_max = (0..8)
        .map(|j| (PHI * u.m[0][j] - PHI * u.m[3][j] - u.m[4][j] + u.m[7][j]).abs())
        .fold(0.0, f64::max);
    report.close("φ·R₀ − φ·R₃ − R₄ + R₇ = 0", null_max, 0.0, Tolerance::ROUGH);

    // Unimodular rotation claims made for the Moxness matrix, measured here.
    let orth = orthogonality_error_max(&u.m);
    let tr = trace(&u.m);
    report.note(format!(
        "det {det:.6} ({}), ‖U·Uᵀ − I‖∞ {orth:.6} ({}), tr {tr:.6} ({})",
        if Tolerance::ROUGH.matches(det, 1.0) { "matches 1" } else { "differs from 1" },
        if orth < 0.01 { "orthogonal" } else { "not orthogonal" },
        if Tolerance::ROUGH.matches(tr, 0.0) { "traceless" } else { "not traceless" },
    ));

    // Inter-block inner products
    for i in 0..4 {
        report.close(
            format!("R{i} · R{} = √5", i + 4),
            dot(&u.m[i], &u.m[i + 4]),
            SQRT5,
            Tolerance::ROUGH,
        );
    }
    report
}

/// Side-by-side: the Phillips matrix against the icosahedral one.
pub fn comparison_report() -> Report {
    let mut report = Report::new("Phillips vs icosahedral matrix");
    for fm in [FoldingMatrix::phillips(), FoldingMatrix::icosahedral()] {
        let c = fm.coupling();
        let det = determinant(&fm.m);
        let r = rank(&fm.m, 1e-10);
        report.note(format!(
            "{}: det {det:.6}, rank {r}, ‖U·Uᵀ − I‖∞ {:.6}, ‖U_L‖ {:.10}, ‖U_R‖ {:.10}",
            fm.name,
            orthogonality_error_max(&fm.m),
            c.norm_left,
            c.norm_right,
        ));
        let kind = if r < 8 {
            "projection"
        } else if Tolerance::ROUGH.matches(det.abs(), 1.0) {
            "rotation"
        } else {
            "neither rotation nor pure projection"
        };
        report.note(format!("{}: {kind}", fm.name));
        report.close(format!("{}: ‖U_L‖ × ‖U_R‖ = √5", fm.name), c.product, SQRT5, Tolerance::ROUGH);
        report.close(
            format!("{}: ‖U_R‖ / ‖U_L‖ = φ", fm.name),
            c.norm_right / c.norm_left,
            PHI,
            Tolerance::ROUGH,
        );
    }
    report
}

/// Determinant and orthogonality of the three candidate H4 folding
/// constructions.
pub fn candidates_report() -> Report {
    let mut report = Report::new("Candidate folding constructions");
    for fm in [
        FoldingMatrix::icosahedral(),
        FoldingMatrix::block_hadamard(),
        FoldingMatrix::golden_rotation(),
    ] {
        let err = orthogonality_error_frobenius(&fm.m);
        report.note(format!("{}: det {:.6}, ‖M·Mᵀ − I‖ {err:.6}", fm.name, determinant(&fm.m)));
        report.holds(format!("{} is orthogonal", fm.name), err < 1e-10);
    }
    report
}

// ── Sign-pattern analysis ─────────────────────────────────────────────────────

/// Number of single sign flips (applied to both blocks) of the Phillips
/// pattern that keep the √5 coupling.
pub fn single_flip_scan() -> usize {
    let mut kept = 0;
    for row in 0..4 {
        for col in 0..8 {
            let mut p = PHILLIPS_PATTERN;
            p[row][col] = -p[row][col];
            if FoldingMatrix::from_sign_pattern(&p, &p, 0.5).has_sqrt5_coupling() {
                kept += 1;
            }
        }
    }
    kept
}

/// Per-batch counts of random matched sign patterns keeping each property.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternTrials {
    pub trials_per_batch: usize,
    pub coupling: Vec<usize>,
    pub scaling: Vec<usize>,
}

impl PatternTrials {
    /// (min, mean, max) of a per-batch count series.
    pub fn spread(series: &[usize]) -> (usize, f64, usize) {
        let min = series.iter().copied().min().unwrap_or(0);
        let max = series.iter().copied().max().unwrap_or(0);
        let mean = if series.is_empty() {
            0.0
        } else {
            series.iter().sum::<usize>() as f64 / series.len() as f64
        };
        (min, mean, max)
    }
}

fn random_pattern(rng: &mut StdRng) -> SignPattern {
    let mut p = [[1i8; 8]; 4];
    for row in p.iter_mut() {
        for s in row.iter_mut() {
            if rng.gen_bool(0.5) {
                *s = -1;
            }
        }
    }
    p
}

/// Run `batches` × `trials` random matched patterns from a fixed seed and
/// report the distribution rather than a single count.
pub fn random_pattern_trials(batches: usize, trials: usize, seed: u64) -> PatternTrials {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut coupling = Vec::with_capacity(batches);
    let mut scaling = Vec::with_capacity(batches);
    for _ in 0..batches {
        let mut kept_coupling = 0;
        let mut kept_scaling = 0;
        for _ in 0..trials {
            let p = random_pattern(&mut rng);
            let fm = FoldingMatrix::from_sign_pattern(&p, &p, 0.5);
            if fm.has_sqrt5_coupling() {
                kept_coupling += 1;
            }
            if fm.is_phi_scaled() {
                kept_scaling += 1;
            }
        }
        coupling.push(kept_coupling);
        scaling.push(kept_scaling);
    }
    PatternTrials { trials_per_batch: trials, coupling, scaling }
}

pub fn sign_pattern_report(batches: usize, trials: usize, seed: u64) -> Report {
    let mut report = Report::new("Sign-pattern analysis");
    let base = FoldingMatrix::from_sign_pattern(&PHILLIPS_PATTERN, &PHILLIPS_PATTERN, 0.5);
    report.holds("pattern matrix has √5 coupling", base.has_sqrt5_coupling());
    report.holds("pattern matrix is φ-scaled", base.is_phi_scaled());
    report.count("single flips keeping √5 coupling", single_flip_scan(), 32);

    let t = random_pattern_trials(batches, trials, seed);
    let (cmin, cmean, cmax) = PatternTrials::spread(&t.coupling);
    let (smin, smean, smax) = PatternTrials::spread(&t.scaling);
    report.note(format!(
        "{batches} batches × {trials} random patterns (seed {seed}): √5 coupling min {cmin} / mean {cmean:.1} / max {cmax}"
    ));
    report.note(format!("φ-scaling min {smin} / mean {smean:.1} / max {smax}"));
    report.holds("every random pattern keeps √5 coupling", t.coupling.iter().all(|&n| n == trials));
    report.holds("every matched random pattern keeps φ-scaling", t.scaling.iter().all(|&n| n == trials));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Phillips matrix ──────────────────────────────────────────────────────

    #[test]
    fn phillips_block_norms_and_coupling() {
        let c = FoldingMatrix::phillips().coupling();
        assert!(c.uniform);
        assert!((c.norm_left - (3.0 - PHI).sqrt()).abs() < 1e-12);
        assert!((c.norm_right - (PHI + 2.0).sqrt()).abs() < 1e-12);
        assert!((c.product - 5.0_f64.sqrt()).abs() < 1e-12);
        println!("‖U_L‖ = {:.10}, ‖U_R‖ = {:.10}, product = {:.10}", c.norm_left, c.norm_right, c.product);
    }

    #[test]
    fn phillips_is_phi_scaled_rank_four_projection() {
        let u = FoldingMatrix::phillips();
        assert!(u.is_phi_scaled());
        assert_eq!(rank(&u.m, 1e-10), 4);
        assert!(determinant(&u.m).abs() < 1e-10);
    }

    #[test]
    fn phillips_report_reproduces_mixed_claims() {
        let r = phillips_matrix_report();
        println!("{r}");
        // The rank-7 claim does not hold for this matrix.
        assert!(!r.find("rank = 7").unwrap().passed());
        assert!(r.find("det = 0").unwrap().passed());
        assert!(r.find("‖U_L‖ × ‖U_R‖ = √5").unwrap().passed());
        assert!(r.find("√(3 − φ) = √((5 − √5)/2)").unwrap().passed());
        assert!(r.find("√(φ + 2) = √((5 + √5)/2)").unwrap().passed());
        assert!(r.find("φ·R₀ − φ·R₃ − R₄ + R₇ = 0").unwrap().passed());
        // Columns 3 and 4 match the claimed duality; the other six do not.
        let columns: Vec<bool> = (0..8)
            .map(|j| r.find(&format!("column {j} norm")).unwrap().passed())
            .collect();
        assert_eq!(columns, vec![false, false, false, true, true, false, false, false]);
        for i in 0..4 {
            assert!(r.find(&format!("R{i} · R{} = √5", i + 4)).unwrap().passed());
        }
    }

    // ── Other constructions ──────────────────────────────────────────────────

    #[test]
    fn icosahedral_is_not_orthogonal() {
        let m = FoldingMatrix::icosahedral();
        assert!((determinant(&m.m) - 5.0625).abs() < 1e-9);
        assert!((orthogonality_error_max(&m.m) - 0.5).abs() < 1e-12);
        assert!(!m.has_sqrt5_coupling());
        assert!(!m.is_phi_scaled());
    }

    #[test]
    fn hadamard_and_golden_rotation_are_orthogonal() {
        for fm in [FoldingMatrix::block_hadamard(), FoldingMatrix::golden_rotation()] {
            assert!(orthogonality_error_frobenius(&fm.m) < 1e-12, "{}", fm.name);
            assert!((determinant(&fm.m).abs() - 1.0).abs() < 1e-12, "{}", fm.name);
        }
    }

    #[test]
    fn candidates_report_flags_icosahedral() {
        let r = candidates_report();
        println!("{r}");
        assert!(!r.find("Icosahedral is orthogonal").unwrap().passed());
        assert!(r.find("Block Hadamard is orthogonal").unwrap().passed());
        assert!(r.find("Golden rotation is orthogonal").unwrap().passed());
    }

    #[test]
    fn comparison_report_splits_by_matrix() {
        let r = comparison_report();
        println!("{r}");
        assert!(r.find("Phillips: ‖U_L‖ × ‖U_R‖ = √5").unwrap().passed());
        assert!(r.find("Phillips: ‖U_R‖ / ‖U_L‖ = φ").unwrap().passed());
        assert!(!r.find("Icosahedral: ‖U_L‖ × ‖U_R‖ = √5").unwrap().passed());
        assert!(!r.find("Icosahedral: ‖U_R‖ / ‖U_L‖ = φ").unwrap().passed());
    }

    // ── Sign patterns ────────────────────────────────────────────────────────

    #[test]
    fn coupling_ignores_signs() {
        assert_eq!(single_flip_scan(), 32);
        let t = random_pattern_trials(4, 25, 7);
        assert_eq!(t.coupling, vec![25; 4]);
        assert_eq!(t.scaling, vec![25; 4]);
    }

    #[test]
    fn mismatched_patterns_lose_phi_scaling() {
        let mut right = PHILLIPS_PATTERN;
        right[0][0] = -right[0][0];
        let fm = FoldingMatrix::from_sign_pattern(&PHILLIPS_PATTERN, &right, 0.5);
        assert!(fm.has_sqrt5_coupling());
        assert!(!fm.is_phi_scaled());
    }

    #[test]
    fn trials_are_seed_deterministic() {
        assert_eq!(random_pattern_trials(3, 10, 42), random_pattern_trials(3, 10, 42));
    }

    #[test]
    fn spread_of_empty_series() {
        assert_eq!(PatternTrials::spread(&[]), (0, 0.0, 0));
        assert_eq!(PatternTrials::spread(&[2, 4]), (2, 3.0, 4));
    }

    #[test]
    fn sign_pattern_report_passes() {
        let r = sign_pattern_report(5, 20, 42);
        println!("{r}");
        assert!(r.all_passed());
    }
}
