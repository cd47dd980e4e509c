//! Fixed-length vertex arithmetic.
//!
//! Vertices are plain `[f64; N]` arrays; identity is by value only.

/// A vertex in four dimensions (24-cell, 600-cell, H4 projections).
pub type Vec4 = [f64; 4];

/// A vertex in eight dimensions (E8 roots).
pub type Vec8 = [f64; 8];

pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    dot(v, v).sqrt()
}

pub fn add<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] + b[i])
}

pub fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

pub fn scale<const N: usize>(v: &[f64; N], s: f64) -> [f64; N] {
    std::array::from_fn(|i| v[i] * s)
}

/// Euclidean distance between two vertices.
pub fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    norm(&sub(a, b))
}

/// Elementwise mean of three vertices.
pub fn centroid3<const N: usize>(a: &[f64; N], b: &[f64; N], c: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| (a[i] + b[i] + c[i]) / 3.0)
}

/// Rescale to unit norm; `None` for (near-)zero vectors.
pub fn normalized<const N: usize>(v: &[f64; N]) -> Option<[f64; N]> {
    let n = norm(v);
    (n > 1e-12).then(|| scale(v, 1.0 / n))
}

/// Coordinate-wise equality within `eps`.
pub fn approx_eq<const N: usize>(a: &[f64; N], b: &[f64; N], eps: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps)
}

/// Split an 8-vector into its leading and trailing 4-vectors.
pub fn halves(v: &Vec8) -> (Vec4, Vec4) {
    ([v[0], v[1], v[2], v[3]], [v[4], v[5], v[6], v[7]])
}

/// Integer key of a vertex rounded to `decimals` places, for hashing.
///
/// `-0.0` and `0.0` share a key.
pub fn rounded_key<const N: usize>(v: &[f64; N], decimals: i32) -> [i64; N] {
    let f = 10f64.powi(decimals);
    std::array::from_fn(|i| (v[i] * f).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        let a = [1.0, 2.0, 2.0, 0.0];
        let b = [0.0, 0.0, 0.0, 1.0];
        assert_eq!(norm(&a), 3.0);
        assert_eq!(dot(&a, &b), 0.0);
        assert_eq!(add(&a, &b), [1.0, 2.0, 2.0, 1.0]);
        assert_eq!(sub(&a, &b), [1.0, 2.0, 2.0, -1.0]);
        assert_eq!(scale(&a, -1.0), [-1.0, -2.0, -2.0, -0.0]);
        assert!((distance(&a, &b) - 10.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn centroid_of_balanced_triple_is_origin() {
        let a = [-1.0, 0.0, 0.0, 0.0];
        let b = [0.5, 0.5, -0.5, -0.5];
        let c = [0.5, -0.5, 0.5, 0.5];
        assert_eq!(centroid3(&a, &b, &c), [0.0; 4]);
    }

    #[test]
    fn normalized_rejects_zero() {
        assert!(normalized(&[0.0; 4]).is_none());
        let u = normalized(&[3.0, 0.0, 4.0, 0.0]).unwrap();
        assert!((norm(&u) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn rounded_key_merges_signed_zero_and_noise() {
        assert_eq!(rounded_key(&[-0.0, 0.5], 6), rounded_key(&[0.0, 0.5 + 1e-9], 6));
        assert_ne!(rounded_key(&[0.0, 0.5], 6), rounded_key(&[0.0, 0.500_01], 6));
    }

    #[test]
    fn halves_split_in_order() {
        let v: Vec8 = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(halves(&v), ([1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]));
    }
}
