//! E8 roots pushed through the Phillips folding matrix.
//!
//! Each root r maps to (H4_L, H4_R) = (U_L r, U_R r).  Because every U_R
//! row is φ times its U_L row, H4_L = H4_R/φ holds for every root, so the
//! two halves carry the same directions at two scales.
//!
//! ## What this module verifies
//!
//! 1. H4_L = H4_R/φ for all 240 roots.
//! 2. The norm spectrum of each half (21 distinct values each) and that no
//!    root collapses to the origin.
//! 3. How many distinct unit directions H4_L produces, measured against the
//!    120 vertices of a 600-cell.  It produces 216.
//! 4. The two naive alternatives: truncating to the first four coordinates,
//!    and the "golden decomposition" v ± φ·w of each root's halves.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::check::Report;
use crate::classify::{root_type, RootType};
use crate::constants::PHI;
use crate::folding::FoldingMatrix;
use crate::metrics::value_histogram;
use crate::polytope::{dedup_by_distance, e8_roots};
use crate::tolerance::{all_close, Tolerance};
use crate::vector::{add, dot, halves, norm, normalized, scale, sub, Vec4, Vec8};

/// Projected halves, index-aligned with the input roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub left: Vec<Vec4>,
    pub right: Vec<Vec4>,
}

impl Projection {
    pub fn of(fm: &FoldingMatrix, roots: &[Vec8]) -> Self {
        let (left, right): (Vec<Vec4>, Vec<Vec4>) = roots.iter().map(|r| fm.project(r)).unzip();
        Self { left, right }
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Roots whose H4_L equals H4_R/φ within `eps`.
    pub fn phi_related(&self, eps: f64) -> usize {
        self.left
            .iter()
            .zip(&self.right)
            .filter(|(l, r)| all_close(&l[..], &scale(*r, 1.0 / PHI)[..], eps))
            .count()
    }

    /// Distinct unit directions of H4_L: two directions are the same when
    /// they lie within `eps` of each other (Euclidean).  Points at the origin
    /// have no direction and are skipped.
    pub fn left_directions(&self, eps: f64) -> Vec<Vec4> {
        let unit: Vec<Vec4> = self.left.iter().filter_map(normalized).collect();
        dedup_by_distance(&unit, eps)
    }

    /// Inner-product histogram among the first `sample` H4_L points, most
    /// frequent first (ties by value).
    pub fn inner_product_modes(&self, sample: usize, decimals: i32) -> Vec<(f64, usize)> {
        let pts = &self.left[..sample.min(self.left.len())];
        let ips = (0..pts.len())
            .flat_map(|i| ((i + 1)..pts.len()).map(move |j| (i, j)))
            .map(|(i, j)| dot(&pts[i], &pts[j]));
        let mut modes: Vec<(f64, usize)> = value_histogram(ips, decimals)
            .into_iter()
            .map(|(k, n)| (k.0, n))
            .collect();
        modes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.total_cmp(&b.0)));
        modes
    }
}

/// Sorted distinct norms, rounded to `decimals`.
pub fn unique_norms(points: &[Vec4], decimals: i32) -> Vec<f64> {
    value_histogram(points.iter().map(norm), decimals)
        .into_keys()
        .map(|k| k.0)
        .collect()
}

/// Norms of the first four coordinates, grouped: each distinct rounded norm
/// with the number of roots within 0.01 of it.
pub fn first_four_norm_groups(roots: &[Vec8]) -> Vec<(f64, usize)> {
    let norms: Vec<f64> = roots.iter().map(|r| norm(&halves(r).0)).collect();
    let keys: BTreeMap<OrderedFloat<f64>, usize> = value_histogram(norms.iter().copied(), 4);
    keys.into_keys()
        .map(|k| {
            let n = norms.iter().filter(|&&x| Tolerance::EDGE.matches(x, k.0)).count();
            (k.0, n)
        })
        .collect()
}

/// Unit and φ-scaled direction sets of the golden decomposition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoldenSplit {
    pub unit: Vec<Vec4>,
    pub phi_scaled: Vec<Vec4>,
}

/// Type I roots go to `unit` by their first half when it is non-zero,
/// otherwise to `phi_scaled` by their second half.  Type II roots (halves v,
/// w) contribute v + φw to `unit` and v − φw to `phi_scaled`.  Every vector
/// is normalised; vectors shorter than 0.1 are dropped.
pub fn golden_decomposition(roots: &[Vec8]) -> GoldenSplit {
    let mut split = GoldenSplit::default();
    let push = |set: &mut Vec<Vec4>, v: Vec4| {
        if norm(&v) > 0.1 {
            if let Some(u) = normalized(&v) {
                set.push(u);
            }
        }
    };
    for r in roots {
        let (v, w) = halves(r);
        match root_type(r) {
            RootType::TypeI => {
                if norm(&v) > 0.1 {
                    push(&mut split.unit, v);
                } else {
                    push(&mut split.phi_scaled, w);
                }
            }
            RootType::TypeII => {
                let pw = scale(&w, PHI);
                push(&mut split.unit, add(&v, &pw));
                push(&mut split.phi_scaled, sub(&v, &pw));
            }
        }
    }
    split
}

fn format_list(values: &[f64]) -> String {
    values.iter().map(|v| format!("{v:.6}")).collect::<Vec<_>>().join(", ")
}

pub fn projection_report() -> Report {
    let mut report = Report::new("E8 → H4 projection");
    let roots = e8_roots();
    let p = Projection::of(&FoldingMatrix::phillips(), &roots);

    report.count("projected roots", p.len(), 240);
    report.count("roots with H4_L = H4_R/φ", p.phi_related(1e-10), roots.len());

    let left = unique_norms(&p.left, 6);
    let right = unique_norms(&p.right, 6);
    report.note(format!("H4_L norms ({}): {}", left.len(), format_list(&left)));
    report.note(format!("H4_R norms ({}): {}", right.len(), format_list(&right)));
    report.holds("no H4_L point at the origin", p.left.iter().all(|v| norm(v) > 1e-12));

    let directions = p.left_directions(Tolerance::DIRECTION.epsilon());
    report.count("unique H4_L directions = 600-cell vertices", directions.len(), 120);

    let modes = p.inner_product_modes(100, 4);
    let top: Vec<String> = modes.iter().take(5).map(|(v, n)| format!("{v}: {n}")).collect();
    report.note(format!("most common H4_L inner products (first 100): {}", top.join(", ")));

    // Truncation to the first four coordinates.
    let groups = first_four_norm_groups(&roots);
    for (n, count) in &groups {
        report.note(format!("first-four norm ≈ {n:.4}: {count} roots"));
    }
    report.count(
        "first-four norm groups cover every root",
        groups.iter().map(|(_, c)| c).sum(),
        roots.len(),
    );

    let golden = golden_decomposition(&roots);
    report.count("golden decomposition: unit H4", golden.unit.len(), 120);
    report.count("golden decomposition: φ-scaled H4", golden.phi_scaled.len(), 120);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::distance;

    fn projected() -> Projection {
        Projection::of(&FoldingMatrix::phillips(), &e8_roots())
    }

    #[test]
    fn halves_are_phi_related() {
        let p = projected();
        assert_eq!(p.len(), 240);
        assert_eq!(p.phi_related(1e-10), 240);
    }

    #[test]
    fn norm_spectrum() {
        let p = projected();
        let left = unique_norms(&p.left, 6);
        let right = unique_norms(&p.right, 6);
        println!("H4_L norms: {left:?}");
        assert_eq!(left.len(), 21);
        assert_eq!(right.len(), 21);
        assert_eq!(left.first().copied(), Some(0.381966));
        assert_eq!(left.last().copied(), Some(1.81907));
        for expected in [0.618034, 1.0, 1.618034] {
            assert!(left.contains(&expected), "missing norm {expected}");
        }
    }

    #[test]
    fn directions_exceed_600_cell() {
        let dirs = projected().left_directions(1e-6);
        println!("unique H4_L directions: {}", dirs.len());
        assert_eq!(dirs.len(), 216);
        assert!(dirs.iter().all(|d| (norm(d) - 1.0).abs() < 1e-12));
        // Kept directions are pairwise at least eps apart.
        for (i, a) in dirs.iter().enumerate() {
            assert!(dirs[i + 1..].iter().all(|b| distance(a, b) >= 1e-6));
        }
    }

    #[test]
    fn inner_product_modes_on_first_hundred() {
        let modes = projected().inner_product_modes(100, 4);
        println!("top modes: {:?}", &modes[..6]);
        assert_eq!(modes[0], (0.0, 652));
        assert_eq!(modes[1], (-0.618, 308));
        assert_eq!(modes[2], (0.618, 308));
        assert_eq!(modes.iter().map(|(_, n)| n).sum::<usize>(), 100 * 99 / 2);
    }

    #[test]
    fn first_four_truncation() {
        let groups = first_four_norm_groups(&e8_roots());
        println!("first-four groups: {groups:?}");
        assert_eq!(groups, vec![(0.0, 24), (1.0, 192), (1.4142, 24)]);
    }

    #[test]
    fn golden_split_sizes() {
        let g = golden_decomposition(&e8_roots());
        assert_eq!(g.unit.len(), 216);
        assert_eq!(g.phi_scaled.len(), 152);
        assert!(g.unit.iter().chain(&g.phi_scaled).all(|v| (norm(v) - 1.0).abs() < 1e-12));
    }

    #[test]
    fn projection_report_records_mismatches() {
        let r = projection_report();
        println!("{r}");
        assert!(r.find("roots with H4_L = H4_R/φ").unwrap().passed());
        assert!(r.find("first-four norm groups cover every root").unwrap().passed());
        assert!(!r.find("unique H4_L directions = 600-cell vertices").unwrap().passed());
        assert!(!r.find("golden decomposition: unit H4").unwrap().passed());
    }
}
