//! Pairwise statistics over small vertex sets.
//!
//! Everything here is an O(n²) scan; the largest input is the 240 E8 roots.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::check::Report;
use crate::tolerance::Tolerance;
use crate::vector::{distance, norm};

/// Histogram of values rounded to `decimals` places.  `-0.0` lands in the
/// `0.0` bin.
pub fn value_histogram(
    values: impl IntoIterator<Item = f64>,
    decimals: i32,
) -> BTreeMap<OrderedFloat<f64>, usize> {
    let f = 10f64.powi(decimals);
    let mut hist = BTreeMap::new();
    for v in values {
        let r = (v * f).round() / f + 0.0;
        *hist.entry(OrderedFloat(r)).or_insert(0) += 1;
    }
    hist
}

/// Histogram of pairwise distances (i < j) keyed by distance rounded to
/// `decimals` places.
pub fn distance_histogram<const N: usize>(
    points: &[[f64; N]],
    decimals: i32,
) -> BTreeMap<OrderedFloat<f64>, usize> {
    let pairs = (0..points.len())
        .flat_map(|i| ((i + 1)..points.len()).map(move |j| (i, j)))
        .map(|(i, j)| distance(&points[i], &points[j]));
    value_histogram(pairs, decimals)
}

/// Number of pairs (i < j) whose distance is within `tol` of `target`.
pub fn count_pairs_at<const N: usize>(points: &[[f64; N]], target: f64, tol: Tolerance) -> usize {
    let mut count = 0;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if tol.matches(distance(&points[i], &points[j]), target) {
                count += 1;
            }
        }
    }
    count
}

/// Smallest pairwise distance strictly above `floor`.
///
/// `floor` skips coincident points; `None` when no pair clears it.
pub fn min_pairwise_distance<const N: usize>(points: &[[f64; N]], floor: f64) -> Option<f64> {
    let mut best: Option<f64> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = distance(&points[i], &points[j]);
            if d > floor && best.map_or(true, |b| d < b) {
                best = Some(d);
            }
        }
    }
    best
}

/// (min, max) of the vertex norms; `None` for an empty set.
pub fn norm_range<const N: usize>(points: &[[f64; N]]) -> Option<(f64, f64)> {
    points.iter().map(norm).fold(None, |acc, n| match acc {
        None => Some((n, n)),
        Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
    })
}

/// Checks that eight vertices form a regular 16-cell.
///
/// The vertices must share one radius r (within 1e-10) and exactly 24 of
/// the 28 pairs must sit at the edge length √2·r (within 0.1).
pub fn verify_16_cell(points: &[[f64; 4]], name: &str, report: &mut Report) -> bool {
    let mut ok = report.count(format!("{name}: vertex count"), points.len(), 8);

    let Some((lo, hi)) = norm_range(points) else {
        report.holds(format!("{name}: vertices equidistant from origin"), false);
        return false;
    };
    ok &= report.holds(
        format!("{name}: vertices equidistant from origin"),
        Tolerance::DEDUP.matches(lo, hi),
    );

    let edge = 2.0_f64.sqrt() * lo;
    let edges = count_pairs_at(points, edge, Tolerance::Absolute(0.1));
    ok &= report.count(format!("{name}: edges at √2·r"), edges, 24);
    ok
}
