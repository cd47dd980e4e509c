//! Epsilon comparison, one documented epsilon per quantity class.
//!
//! Vertex coordinates are built from √5 and φ, so nothing is compared with
//! exact float equality except integer counts.
//!
//! | class         | kind     | ε      | used for                                   |
//! |---------------|----------|--------|--------------------------------------------|
//! | `DEDUP`       | absolute | 1e-10  | coordinate-wise duplicate detection        |
//! | `NORM`        | relative | 1e-9   | per-vertex norms against the radius        |
//! | `IDENTITY`    | absolute | 1e-12  | closed-form identities in φ                |
//! | `MATRIX`      | absolute | 1e-10  | folding-matrix entries, norms, couplings   |
//! | `ROUGH`       | absolute | 1e-8   | loose equality of derived scalars          |
//! | `DIRECTION`   | absolute | 1e-6   | distinct projected directions              |
//! | `EDGE_LENGTH` | absolute | 1e-3   | shortest edge of a vertex sample           |
//! | `EDGE`        | absolute | 0.01   | binning distances into an edge histogram   |

use std::fmt;

/// How a computed value is compared against its expected value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Bit-for-bit equality; used for integer counts.
    Exact,
    /// `|computed − expected| ≤ ε`.
    Absolute(f64),
    /// `|computed − expected| ≤ ε · max(|expected|, 1e-300)`.
    Relative(f64),
}

impl Tolerance {
    pub const DEDUP: Tolerance = Tolerance::Absolute(1e-10);
    pub const NORM: Tolerance = Tolerance::Relative(1e-9);
    pub const IDENTITY: Tolerance = Tolerance::Absolute(1e-12);
    pub const MATRIX: Tolerance = Tolerance::Absolute(1e-10);
    pub const ROUGH: Tolerance = Tolerance::Absolute(1e-8);
    pub const DIRECTION: Tolerance = Tolerance::Absolute(1e-6);
    pub const EDGE_LENGTH: Tolerance = Tolerance::Absolute(1e-3);
    pub const EDGE: Tolerance = Tolerance::Absolute(0.01);

    /// Whether `computed` matches `expected` under this tolerance.
    ///
    /// NaN never matches.
    pub fn matches(self, computed: f64, expected: f64) -> bool {
        if computed.is_nan() || expected.is_nan() {
            return false;
        }
        match self {
            Tolerance::Exact => computed == expected,
            Tolerance::Absolute(eps) => (computed - expected).abs() <= eps,
            Tolerance::Relative(eps) => {
                (computed - expected).abs() <= eps * expected.abs().max(1e-300)
            }
        }
    }

    /// The ε of this tolerance (0 for `Exact`).
    pub fn epsilon(self) -> f64 {
        match self {
            Tolerance::Exact => 0.0,
            Tolerance::Absolute(eps) | Tolerance::Relative(eps) => eps,
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Exact => write!(f, "exact"),
            Tolerance::Absolute(eps) => write!(f, "±{eps:.0e}"),
            Tolerance::Relative(eps) => write!(f, "rel {eps:.0e}"),
        }
    }
}

/// Element-wise absolute comparison of two equal-length slices.
pub fn all_close(a: &[f64], b: &[f64], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_only_accepts_identical_values() {
        assert!(Tolerance::Exact.matches(240.0, 240.0));
        assert!(!Tolerance::Exact.matches(240.0, 240.0 + 1e-12));
    }

    #[test]
    fn absolute_and_relative_bounds() {
        assert!(Tolerance::Absolute(0.01).matches(1.005, 1.0));
        assert!(!Tolerance::Absolute(0.01).matches(1.02, 1.0));

        // 1e-9 relative at √2 admits ~1.4e-9 of noise.
        let r2 = 2.0_f64.sqrt();
        assert!(Tolerance::NORM.matches(r2 + 1.0e-9, r2));
        assert!(!Tolerance::NORM.matches(r2 + 2.0e-9, r2));
    }

    #[test]
    fn nan_never_matches() {
        for tol in [Tolerance::Exact, Tolerance::ROUGH, Tolerance::NORM] {
            assert!(!tol.matches(f64::NAN, 1.0));
            assert!(!tol.matches(1.0, f64::NAN));
        }
    }

    #[test]
    fn all_close_requires_equal_length() {
        assert!(all_close(&[0.5, -0.5], &[0.5, -0.5 + 1e-12], 1e-10));
        assert!(!all_close(&[0.5], &[0.5, 0.5], 1.0));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Tolerance::Exact.to_string(), "exact");
        assert_eq!(Tolerance::EDGE.to_string(), "±1e-2");
        assert_eq!(Tolerance::NORM.to_string(), "rel 1e-9");
    }
}
