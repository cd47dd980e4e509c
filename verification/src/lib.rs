//! Numerical verification of E8 / H4 polytope claims.
//!
//! Generates the E8 root system, the 24-cell and the 600-cell from closed
//! forms, then checks each claimed property (counts, norms, edge lengths,
//! decompositions, folding-matrix identities, mass fits) and records the
//! outcome.  A claim that does not hold is reported as FAIL with the
//! computed value next to the expected one; nothing is adjusted to pass.
//!
//! # Modules
//!
//! - [`polytope`]   vertex generators and per-structure reports
//! - [`classify`]   E8 root types and the Trinity (3 × 16-cell) split
//! - [`triad`]      balanced-triad search over the Trinity groups
//! - [`folding`]    φ-coupled 8×8 folding matrices and sign-pattern analysis
//! - [`projection`] E8 roots through the folding matrix
//! - [`inscribed`]  rotation search for inscribed 24-cells
//! - [`masses`]     φⁿ fits of lepton / quark mass ratios, Koide's Q
//! - [`suite`]      section registry; [`summary`] the JSON run summary
//!
//! Support: [`check`], [`tolerance`], [`metrics`], [`linalg`], [`vector`],
//! [`constants`], [`config`], [`errors`].
//!
//! # Running tests
//!
//! ```bash
//! cd verification && cargo test -- --nocapture
//! ```

pub mod check;
pub mod classify;
pub mod config;
pub mod constants;
pub mod errors;
pub mod folding;
pub mod inscribed;
pub mod linalg;
pub mod masses;
pub mod metrics;
pub mod polytope;
pub mod projection;
pub mod suite;
pub mod summary;
pub mod tolerance;
pub mod triad;
pub mod vector;

pub use check::{Check, Report, Status};
pub use config::SuiteConfig;
pub use errors::{Result, VerifyError};
pub use suite::Section;
pub use summary::SimulationSummary;
