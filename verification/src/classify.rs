//! Predicate-based vertex classification.
//!
//! Each classifier is a stateless function of one vertex's coordinates, so
//! the resulting groups are disjoint and exhaustive by construction.  What
//! is *not* guaranteed is the group sizes: a malformed input set shows up as
//! an unexpected size in [`trinity_report`], never as a silent fix-up.
//!
//! ## Trinity decomposition
//!
//! The 24-cell splits into three 16-cells:
//!
//! - **α**: exactly one coordinate with |x| > 0.9 (the 8 axis vertices)
//! - **β**: half-integer vertices with an even number of negative coordinates
//! - **γ**: half-integer vertices with an odd number of negative coordinates

use std::fmt;

use crate::check::Report;
use crate::metrics::{count_pairs_at, verify_16_cell};
use crate::polytope::{cell_24, cell_24_axis};
use crate::tolerance::Tolerance;
use crate::vector::{approx_eq, Vec4, Vec8};

/// A closed label set.  `ALL` fixes the group order of a [`Partition`].
pub trait Label: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];
}

/// E8 root class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootType {
    /// Two coordinates ±1, the rest zero.
    TypeI,
    /// All coordinates ±½.
    TypeII,
}

impl Label for RootType {
    const ALL: &'static [Self] = &[RootType::TypeI, RootType::TypeII];
}

/// One of the three 16-cells of the Trinity decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Alpha,
    Beta,
    Gamma,
}

impl Label for Strand {
    const ALL: &'static [Self] = &[Strand::Alpha, Strand::Beta, Strand::Gamma];
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strand::Alpha => "α",
            Strand::Beta => "β",
            Strand::Gamma => "γ",
        })
    }
}

fn count_large(v: &[f64]) -> usize {
    v.iter().filter(|x| x.abs() > 0.9).count()
}

/// Type I iff exactly two coordinates have |x| > 0.9.
pub fn root_type(v: &Vec8) -> RootType {
    if count_large(v) == 2 { RootType::TypeI } else { RootType::TypeII }
}

/// α for axis vertices, otherwise β / γ by parity of strictly negative
/// coordinates.
pub fn trinity_label(v: &Vec4) -> Strand {
    if count_large(v) == 1 {
        return Strand::Alpha;
    }
    let negatives = v.iter().filter(|&&x| x < 0.0).count();
    if negatives % 2 == 0 { Strand::Beta } else { Strand::Gamma }
}

/// Labeled disjoint groups, one per label in `L::ALL` order (empty groups
/// are kept).
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<L: Label, const N: usize> {
    groups: Vec<(L, Vec<[f64; N]>)>,
}

impl<L: Label, const N: usize> Partition<L, N> {
    pub fn get(&self, label: L) -> &[[f64; N]] {
        self.groups
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, g)| g.as_slice())
            .unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = (L, &[[f64; N]])> {
        self.groups.iter().map(|(l, g)| (*l, g.as_slice()))
    }

    /// Total vertices across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, g)| g.len()).sum()
    }
}

/// Assign every point to exactly one group, preserving input order within
/// each group.
pub fn partition<L: Label, const N: usize>(
    points: &[[f64; N]],
    label: impl Fn(&[f64; N]) -> L,
) -> Partition<L, N> {
    let mut groups: Vec<(L, Vec<[f64; N]>)> = L::ALL.iter().map(|&l| (l, Vec::new())).collect();
    for p in points {
        let l = label(p);
        if let Some((_, g)) = groups.iter_mut().find(|(gl, _)| *gl == l) {
            g.push(*p);
        }
    }
    Partition { groups }
}

/// The three 16-cells of a 24-cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Trinity {
    pub alpha: Vec<Vec4>,
    pub beta: Vec<Vec4>,
    pub gamma: Vec<Vec4>,
}

impl Trinity {
    pub fn decompose(vertices: &[Vec4]) -> Self {
        let p = partition(vertices, trinity_label);
        Self {
            alpha: p.get(Strand::Alpha).to_vec(),
            beta: p.get(Strand::Beta).to_vec(),
            gamma: p.get(Strand::Gamma).to_vec(),
        }
    }

    pub fn strand(&self, s: Strand) -> &[Vec4] {
        match s {
            Strand::Alpha => &self.alpha,
            Strand::Beta => &self.beta,
            Strand::Gamma => &self.gamma,
        }
    }

    pub fn total(&self) -> usize {
        self.alpha.len() + self.beta.len() + self.gamma.len()
    }
}

/// Equal as vertex sets (order-free, within 1e-10).
fn same_vertex_set(a: &[Vec4], b: &[Vec4]) -> bool {
    let eps = Tolerance::DEDUP.epsilon();
    a.len() == b.len()
        && a.iter().all(|v| b.iter().any(|w| approx_eq(v, w, eps)))
        && b.iter().all(|w| a.iter().any(|v| approx_eq(v, w, eps)))
}

/// Trinity decomposition of the standard 24-cell: 8 + 8 + 8, each a 16-cell.
pub fn trinity_report() -> Report {
    let mut report = Report::new("Trinity decomposition (3 × 16-cell)");
    let t = Trinity::decompose(&cell_24());

    for s in Strand::ALL {
        report.count(format!("{s} vertices"), t.strand(*s).len(), 8);
    }
    report.count("total", t.total(), 24);

    report.holds("α = the axis vertices", same_vertex_set(&t.alpha, &cell_24_axis()));

    for s in Strand::ALL {
        let name = s.to_string();
        verify_16_cell(t.strand(*s), &name, &mut report);

        // The report's own edge rule: pairs at exactly √2 within 0.01.
        let edges = count_pairs_at(t.strand(*s), 2.0_f64.sqrt(), Tolerance::EDGE);
        report.count(format!("{s}: edges at √2 (±0.01)"), edges, 24);
    }
    report
}
