//! Rotation search for 24-cells inscribed in the 600-cell.
//!
//! The 600-cell is known to contain exactly 25 inscribed 24-cells.  This
//! module runs the plane-rotation heuristic used to look for them and
//! reports what it actually finds.
//!
//! Candidates are the standard 24-cell rotated by:
//!
//! 1. xw-plane rotations by k·2π/5, k = 0..5 (always kept),
//! 2. double rotations (xy and zw by the same angle), k = 1..5 (always kept),
//! 3. double rotations over the 3×3 grid of the first three angles, skipping
//!    (0, 0), kept only when they share at most 20 rounded vertices with
//!    every cell already kept, up to 25 cells.
//!
//! Vertices are compared by their coordinates rounded to 6 decimals.
//! The search keeps 15 cells, and only the unrotated one lies on 600-cell
//! vertices.

use std::collections::{BTreeMap, HashSet};
use std::f64::consts::PI;

use crate::check::Report;
use crate::linalg::{mat_vec, Matrix};
use crate::polytope::{cell_24, cell_600};
use crate::vector::{rounded_key, Vec4};

/// The number of inscribed 24-cells in a 600-cell.
pub const EXPECTED_CELLS: usize = 25;

/// A candidate sharing more rounded vertices than this with a kept cell is
/// treated as the same cell.
pub const SAME_CELL_OVERLAP: usize = 20;

const KEY_DECIMALS: i32 = 6;

type Key = [i64; 4];

fn key_set(cell: &[Vec4]) -> HashSet<Key> {
    cell.iter().map(|v| rounded_key(v, KEY_DECIMALS)).collect()
}

fn rotate(cell: &[Vec4], r: &Matrix<4>) -> Vec<Vec4> {
    cell.iter().map(|v| mat_vec(r, v)).collect()
}

fn xw_rotation(angle: f64) -> Matrix<4> {
    let (s, c) = angle.sin_cos();
    [
        [c, 0.0, 0.0, -s],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [s, 0.0, 0.0, c],
    ]
}

fn double_rotation(xy: f64, zw: f64) -> Matrix<4> {
    let (s1, c1) = xy.sin_cos();
    let (s2, c2) = zw.sin_cos();
    [
        [c1, -s1, 0.0, 0.0],
        [s1, c1, 0.0, 0.0],
        [0.0, 0.0, c2, -s2],
        [0.0, 0.0, s2, c2],
    ]
}

fn fifth_turns() -> [f64; 5] {
    std::array::from_fn(|k| 2.0 * PI * k as f64 / 5.0)
}

/// Kept candidate cells in the order they were accepted.
pub fn find_inscribed() -> Vec<Vec<Vec4>> {
    let standard = cell_24();
    let angles = fifth_turns();
    let mut cells: Vec<Vec<Vec4>> = Vec::with_capacity(EXPECTED_CELLS);

    for &a in &angles {
        cells.push(rotate(&standard, &xw_rotation(a)));
    }
    for &a in &angles[1..] {
        cells.push(rotate(&standard, &double_rotation(a, a)));
    }

    let mut kept_keys: Vec<HashSet<Key>> = cells.iter().map(|c| key_set(c)).collect();
    for (k1, &a1) in angles[..3].iter().enumerate() {
        for (k2, &a2) in angles[..3].iter().enumerate() {
            if k1 == 0 && k2 == 0 {
                continue;
            }
            let candidate = rotate(&standard, &double_rotation(a1, a2));
            let keys = key_set(&candidate);
            let is_new = kept_keys
                .iter()
                .all(|existing| keys.intersection(existing).count() <= SAME_CELL_OVERLAP);
            if is_new && cells.len() < EXPECTED_CELLS {
                cells.push(candidate);
                kept_keys.push(keys);
            }
        }
    }
    cells
}

/// Shared-vertex count → number of cell pairs (i < j) with that overlap.
pub fn overlap_distribution(cells: &[Vec<Vec4>]) -> BTreeMap<usize, usize> {
    let keys: Vec<HashSet<Key>> = cells.iter().map(|c| key_set(c)).collect();
    let mut dist = BTreeMap::new();
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            *dist.entry(keys[i].intersection(&keys[j]).count()).or_insert(0) += 1;
        }
    }
    dist
}

/// Vertices of `cell` that coincide (rounded) with 600-cell vertices.
pub fn vertices_on_600_cell(cell: &[Vec4]) -> usize {
    let host = key_set(&cell_600());
    key_set(cell).intersection(&host).count()
}

pub fn inscribed_report() -> Report {
    let mut report = Report::new("Inscribed 24-cells");
    let cells = find_inscribed();

    report.count("inscribed 24-cells found", cells.len(), EXPECTED_CELLS);

    let dist = overlap_distribution(&cells);
    for (shared, pairs) in &dist {
        report.note(format!("{shared} shared vertices: {pairs} pairs"));
    }

    let inside = cells.iter().filter(|c| vertices_on_600_cell(c) == 24).count();
    report.count("found cells lying on 600-cell vertices", inside, cells.len());
    report
}
