//! Vertex generators for the E8 root system, the 24-cell and the 600-cell.
//!
//! Every generator is a pure function with a documented output size, and the
//! size is the first thing verified.  A wrong count is a construction defect:
//! [`Structure::report`] records it as FAIL and keeps going so the rest of
//! the diagnostics stay visible.
//!
//! ## Constructions
//!
//! - **E8 (240)**: 112 "Type I" roots with ±1 in two of eight slots, then 128
//!   "Type II" roots (±½)⁸ with an even number of minus signs.  Norm √2.
//! - **24-cell (24)**: 8 axis vertices (±1, 0, 0, 0) and permutations, then
//!   16 half-integer vertices (±½)⁴.  Unit norm.  These are the Hurwitz
//!   unit quaternions.
//! - **600-cell (120)**: the 24-cell plus 96 vertices from the 12 even
//!   permutations of (0, 1/(2φ), ½, φ/2) with all 8 signs on the nonzero
//!   slots.  Unit norm, edge length 1/φ, 720 edges.
//! - **Root-form "24-cell" (32)**: axis vertices plus (±1/√2, ±1/√2, 0, 0)
//!   over all six index pairs.  The research scripts call this a 24-cell;
//!   it has 32 points and is kept as-is so the report shows the mismatch.

use std::fmt;

use crate::check::Report;
use crate::classify::{partition, root_type, RootType};
use crate::constants::{PHI, PHI_INV};
use crate::metrics::{count_pairs_at, distance_histogram, min_pairwise_distance, norm_range};
use crate::tolerance::Tolerance;
use crate::vector::{approx_eq, distance, Vec4, Vec8};

/// The 12 even permutations of four indices, in the order the 96-vertex
/// orbit is emitted.
pub const EVEN_PERMUTATIONS: [[usize; 4]; 12] = [
    [0, 1, 2, 3], [0, 2, 3, 1], [0, 3, 1, 2],
    [1, 0, 3, 2], [1, 2, 0, 3], [1, 3, 2, 0],
    [2, 0, 1, 3], [2, 1, 3, 0], [2, 3, 0, 1],
    [3, 0, 2, 1], [3, 1, 0, 2], [3, 2, 1, 0],
];

// ── E8 ────────────────────────────────────────────────────────────────────────

/// 112 roots: ±1 at an unordered index pair (i < j), zero elsewhere.
pub fn e8_type_one() -> Vec<Vec8> {
    let mut roots = Vec::with_capacity(112);
    for i in 0..8 {
        for j in (i + 1)..8 {
            for si in [-1.0, 1.0] {
                for sj in [-1.0, 1.0] {
                    let mut v = [0.0; 8];
                    v[i] = si;
                    v[j] = sj;
                    roots.push(v);
                }
            }
        }
    }
    roots
}

/// 128 roots: (±½)⁸ with an even number of minus signs (−½ at set mask bits).
pub fn e8_type_two() -> Vec<Vec8> {
    (0u32..256)
        .filter(|mask| mask.count_ones() % 2 == 0)
        .map(|mask| std::array::from_fn(|k| if mask & (1 << k) != 0 { -0.5 } else { 0.5 }))
        .collect()
}

/// All 240 E8 roots, Type I first.
pub fn e8_roots() -> Vec<Vec8> {
    let mut roots = e8_type_one();
    roots.extend(e8_type_two());
    roots
}

// ── 24-cell ───────────────────────────────────────────────────────────────────

/// 8 axis vertices, index-major, −1 before +1.
pub fn cell_24_axis() -> Vec<Vec4> {
    let mut v = Vec::with_capacity(8);
    for i in 0..4 {
        for s in [-1.0, 1.0] {
            let mut p = [0.0; 4];
            p[i] = s;
            v.push(p);
        }
    }
    v
}

/// 16 half-integer vertices (±½)⁴, +½ at set mask bits.
pub fn cell_24_half() -> Vec<Vec4> {
    (0u32..16)
        .map(|mask| std::array::from_fn(|k| if mask & (1 << k) != 0 { 0.5 } else { -0.5 }))
        .collect()
}

/// The 24 Hurwitz unit quaternions.
pub fn cell_24() -> Vec<Vec4> {
    let mut v = cell_24_axis();
    v.extend(cell_24_half());
    v
}

/// Axis vertices plus (±1/√2, ±1/√2) on each of the six index pairs: 32 points.
pub fn cell_24_root_form() -> Vec<Vec4> {
    let r = 1.0 / 2.0_f64.sqrt();
    let mut v = cell_24_axis();
    for i in 0..4 {
        for j in (i + 1)..4 {
            for si in [-1.0, 1.0] {
                for sj in [-1.0, 1.0] {
                    let mut p = [0.0; 4];
                    p[i] = si * r;
                    p[j] = sj * r;
                    v.push(p);
                }
            }
        }
    }
    v
}

// ── 600-cell ──────────────────────────────────────────────────────────────────

/// 96 vertices: even permutations of (0, 1/(2φ), ½, φ/2) × 8 sign choices.
pub fn cell_600_snub() -> Vec<Vec4> {
    let base = [0.0, PHI_INV / 2.0, 0.5, PHI / 2.0];
    let mut v = Vec::with_capacity(96);
    for perm in EVEN_PERMUTATIONS {
        let permuted: Vec4 = std::array::from_fn(|i| base[perm[i]]);
        for signs in 0u32..8 {
            let mut p = permuted;
            let mut slot = 0;
            for x in p.iter_mut() {
                if *x != 0.0 {
                    // bit clear → −, bit set → +, first nonzero slot is the high bit
                    let positive = signs & (1 << (2 - slot)) != 0;
                    if !positive {
                        *x = -*x;
                    }
                    slot += 1;
                }
            }
            v.push(p);
        }
    }
    v
}

/// The 120 vertices of the 600-cell (binary icosahedral group).
pub fn cell_600() -> Vec<Vec4> {
    let mut v = cell_24();
    v.extend(cell_600_snub());
    v
}

/// Remove epsilon-duplicates (coordinate-wise within `eps`), keeping the
/// first occurrence and the original order.
pub fn dedup<const N: usize>(points: &[[f64; N]], eps: f64) -> Vec<[f64; N]> {
    let mut unique: Vec<[f64; N]> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| approx_eq(p, u, eps)) {
            unique.push(*p);
        }
    }
    unique
}

/// Like [`dedup`], but two points are duplicates when their Euclidean
/// distance is below `eps`.  Coordinate-wise closeness admits points up to
/// `eps·√N` apart; this does not.
pub fn dedup_by_distance<const N: usize>(points: &[[f64; N]], eps: f64) -> Vec<[f64; N]> {
    let mut unique: Vec<[f64; N]> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| distance(p, u) < eps) {
            unique.push(*p);
        }
    }
    unique
}

// ── Structure identifiers ─────────────────────────────────────────────────────

/// A generated vertex set in its native dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSet {
    Dim4(Vec<Vec4>),
    Dim8(Vec<Vec8>),
}

impl PointSet {
    pub fn len(&self) -> usize {
        match self {
            PointSet::Dim4(v) => v.len(),
            PointSet::Dim8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named combinatorial structures this crate can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    E8Roots,
    Cell24,
    Cell600,
    Cell24RootForm,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::E8Roots,
        Structure::Cell24,
        Structure::Cell600,
        Structure::Cell24RootForm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Structure::E8Roots => "E8 roots",
            Structure::Cell24 => "24-cell",
            Structure::Cell600 => "600-cell",
            Structure::Cell24RootForm => "24-cell (root form)",
        }
    }

    pub fn dimension(self) -> usize {
        match self {
            Structure::E8Roots => 8,
            _ => 4,
        }
    }

    /// Documented vertex count.  The root form is documented as a 24-cell.
    pub fn expected_count(self) -> usize {
        match self {
            Structure::E8Roots => 240,
            Structure::Cell24 | Structure::Cell24RootForm => 24,
            Structure::Cell600 => 120,
        }
    }

    /// Circumradius every vertex must share.
    pub fn radius(self) -> f64 {
        match self {
            Structure::E8Roots => 2.0_f64.sqrt(),
            _ => 1.0,
        }
    }

    pub fn generate(self) -> PointSet {
        match self {
            Structure::E8Roots => PointSet::Dim8(e8_roots()),
            Structure::Cell24 => PointSet::Dim4(cell_24()),
            Structure::Cell600 => PointSet::Dim4(cell_600()),
            Structure::Cell24RootForm => PointSet::Dim4(cell_24_root_form()),
        }
    }

    /// Cardinality, uniqueness and norm checks shared by every structure,
    /// plus the structure-specific edge checks.
    pub fn report(self) -> Report {
        let mut report = Report::new(format!("{}: generation", self.name()));
        match self.generate() {
            PointSet::Dim4(points) => self.check_points(&points, &mut report),
            PointSet::Dim8(points) => self.check_points(&points, &mut report),
        }
        match self {
            Structure::E8Roots => e8_extra_checks(&mut report),
            Structure::Cell24 => {
                let edges = count_pairs_at(&cell_24(), 1.0, Tolerance::EDGE);
                report.count("edges at length 1 (8 per vertex)", edges, 96);
            }
            Structure::Cell600 | Structure::Cell24RootForm => {}
        }
        report
    }

    fn check_points<const N: usize>(self, points: &[[f64; N]], report: &mut Report) {
        let expected = self.expected_count();
        report.count(format!("{} count", self.name()), points.len(), expected);

        let unique = dedup(points, Tolerance::DEDUP.epsilon());
        report.count("unique vertices (ε = 1e-10)", unique.len(), expected);

        let radius = self.radius();
        match norm_range(points) {
            Some((lo, hi)) => {
                report.close("min vertex norm", lo, radius, Tolerance::NORM);
                report.close("max vertex norm", hi, radius, Tolerance::NORM);
            }
            None => {
                report.holds("vertex set is non-empty", false);
            }
        }

        let hist = distance_histogram(points, 4);
        let preview: Vec<String> = hist
            .iter()
            .take(4)
            .map(|(d, n)| format!("{:.4} × {n}", d.into_inner()))
            .collect();
        report.note(format!("shortest distances: {}", preview.join(", ")));
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn e8_extra_checks(report: &mut Report) {
    let roots = e8_roots();
    report.count("Type I generated: C(8,2) × 2²", e8_type_one().len(), 112);
    report.count("Type II generated: 2⁸ / 2", e8_type_two().len(), 128);

    let two_units = roots
        .iter()
        .filter(|r| r.iter().filter(|x| (x.abs() - 1.0).abs() < 1e-12).count() == 2)
        .count();
    report.count("roots with exactly two coordinates of |x| = 1", two_units, 112);

    let halves = roots
        .iter()
        .filter(|r| r.iter().all(|x| (x.abs() - 0.5).abs() < 1e-12))
        .filter(|r| r.iter().filter(|&&x| x < 0.0).count() % 2 == 0)
        .count();
    report.count("roots (±½)⁸ with an even number of minus signs", halves, 128);

    let split = partition(&roots, root_type);
    report.count("classified Type I (two |x| > 0.9)", split.get(RootType::TypeI).len(), 112);
    report.count("classified Type II", split.get(RootType::TypeII).len(), 128);

    // Every root has 56 neighbours at inner product 1, i.e. distance √2.
    let pairs = count_pairs_at(&roots, 2.0_f64.sqrt(), Tolerance::EDGE);
    report.count("root pairs at distance √2 (240 × 56 / 2)", pairs, 6720);
}

/// 600-cell edge diagnostics.
///
/// The leading `sample` vertices are the axis and half-integer ones, whose
/// nearest neighbours sit at distance 1, so that minimum is reported as a
/// note.  The edge-length check runs over the full vertex set.
pub fn cell_600_edge_report(sample: usize) -> Report {
    let mut report = Report::new("600-cell: edges");
    let unique = dedup(&cell_600(), Tolerance::DEDUP.epsilon());

    let head = &unique[..sample.min(unique.len())];
    match min_pairwise_distance(head, 0.1) {
        Some(d) => report.note(format!(
            "minimum distance among the first {} vertices: {d:.6} (1/φ = {PHI_INV:.6})",
            head.len()
        )),
        None => report.note(format!("first {} vertices have no pair above 0.1", head.len())),
    }

    match min_pairwise_distance(&unique, 0.1) {
        Some(d) => {
            report.close("minimum edge length = 1/φ", d, PHI_INV, Tolerance::EDGE_LENGTH);
        }
        None => {
            report.holds("600-cell has a pair above 0.1", false);
        }
    }
    let edges = count_pairs_at(&unique, PHI_INV, Tolerance::DIRECTION);
    report.count("edges at length 1/φ", edges, 720);
    report
}
