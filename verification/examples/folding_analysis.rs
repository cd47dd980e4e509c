//! Folding-matrix walkthrough
//!
//! Answers three questions about the Phillips folding matrix U:
//!
//! 1. Gram structure: what does U·Uᵀ look like, block by block?
//! 2. Norm shells: how are the 240 projected roots distributed over the
//!    H4_L norm values, and which shells carry 600-cell-like counts?
//! 3. Balanced triads: which 24-cell triads sum to the origin?
//!
//! Run: `cd verification && cargo run --example folding_analysis --release`

use polytope_verification::classify::Trinity;
use polytope_verification::constants::{PHI, SQRT5};
use polytope_verification::folding::FoldingMatrix;
use polytope_verification::linalg::{gram, rank};
use polytope_verification::metrics::value_histogram;
use polytope_verification::polytope::{cell_24, e8_roots};
use polytope_verification::projection::Projection;
use polytope_verification::triad::{search_trinity, EXACT_BALANCE};
use polytope_verification::vector::norm;

fn print_matrix(m: &[[f64; 8]; 8]) {
    for row in m {
        let cells: Vec<String> = row.iter().map(|x| format!("{x:>7.3}")).collect();
        println!("  [{}]", cells.join(" "));
    }
}

fn main() {
    let u = FoldingMatrix::phillips();

    // ── 1. Gram structure ────────────────────────────────────────────────────
    println!("U:");
    print_matrix(&u.m);
    let g = gram(&u.m);
    println!("\nU·Uᵀ:");
    print_matrix(&g);
    println!("\nrank(U) = {}", rank(&u.m, 1e-10));
    println!("diagonal: 3 − φ = {:.6}, φ + 2 = {:.6}", 3.0 - PHI, PHI + 2.0);
    println!("off-diagonal blocks G[i][i+4] vs √5 = {SQRT5:.6}:");
    for i in 0..4 {
        println!("  G[{i}][{}] = {:.6}", i + 4, g[i][i + 4]);
    }

    // ── 2. Norm shells ───────────────────────────────────────────────────────
    let p = Projection::of(&u, &e8_roots());
    let shells = value_histogram(p.left.iter().map(norm), 6);
    println!("\nH4_L norm shells ({}):", shells.len());
    for (r, n) in &shells {
        let marker = if [12, 24, 120].contains(n) { "  ◀" } else { "" };
        println!("  |v| = {:.6}: {n:>3} roots{marker}", r.into_inner());
    }

    // ── 3. Balanced triads ───────────────────────────────────────────────────
    let t = Trinity::decompose(&cell_24());
    let exact = search_trinity(&t, EXACT_BALANCE);
    println!("\n{} of {} triads sum to the origin:", exact.count(), exact.examined);
    for tri in exact.balanced.iter().take(8) {
        println!("  α {:?} + β {:?} + γ {:?}", tri.alpha, tri.beta, tri.gamma);
    }
    if exact.count() > 8 {
        println!("  … {} more", exact.count() - 8);
    }
}
