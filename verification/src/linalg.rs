//! Tiny dense linear algebra on fixed-size square matrices.
//!
//! Only what the folding analysis needs: products, norms, trace,
//! determinant and numerical rank.  Matrices are row-major `[[f64; N]; N]`.

/// Row-major square matrix.
pub type Matrix<const N: usize> = [[f64; N]; N];

pub fn identity<const N: usize>() -> Matrix<N> {
    std::array::from_fn(|i| std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 }))
}

/// M @ v.
pub fn mat_vec<const N: usize>(m: &Matrix<N>, v: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| m[i].iter().zip(v).map(|(a, b)| a * b).sum())
}

/// A @ B.
pub fn mat_mul<const N: usize>(a: &Matrix<N>, b: &Matrix<N>) -> Matrix<N> {
    std::array::from_fn(|i| std::array::from_fn(|j| (0..N).map(|k| a[i][k] * b[k][j]).sum()))
}

pub fn transpose<const N: usize>(m: &Matrix<N>) -> Matrix<N> {
    std::array::from_fn(|i| std::array::from_fn(|j| m[j][i]))
}

/// M @ Mᵀ (the Gram matrix of the rows).
pub fn gram<const N: usize>(m: &Matrix<N>) -> Matrix<N> {
    mat_mul(m, &transpose(m))
}

pub fn trace<const N: usize>(m: &Matrix<N>) -> f64 {
    (0..N).map(|i| m[i][i]).sum()
}

pub fn row_norm<const N: usize>(m: &Matrix<N>, row: usize) -> f64 {
    m[row].iter().map(|x| x * x).sum::<f64>().sqrt()
}

pub fn column_norm<const N: usize>(m: &Matrix<N>, col: usize) -> f64 {
    m.iter().map(|r| r[col] * r[col]).sum::<f64>().sqrt()
}

/// max |(M Mᵀ − I)ᵢⱼ|.
pub fn orthogonality_error_max<const N: usize>(m: &Matrix<N>) -> f64 {
    let g = gram(m);
    let id = identity::<N>();
    (0..N)
        .flat_map(|i| (0..N).map(move |j| (i, j)))
        .map(|(i, j)| (g[i][j] - id[i][j]).abs())
        .fold(0.0, f64::max)
}

/// ‖M Mᵀ − I‖_F.
pub fn orthogonality_error_frobenius<const N: usize>(m: &Matrix<N>) -> f64 {
    let g = gram(m);
    let id = identity::<N>();
    let mut sum = 0.0;
    for i in 0..N {
        for j in 0..N {
            let d = g[i][j] - id[i][j];
            sum += d * d;
        }
    }
    sum.sqrt()
}

/// Determinant by Gaussian elimination with partial pivoting.
pub fn determinant<const N: usize>(m: &Matrix<N>) -> f64 {
    let mut a = *m;
    let mut det = 1.0;
    for col in 0..N {
        let pivot = (col..N)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot][col] == 0.0 {
            return 0.0;
        }
        if pivot != col {
            a.swap(pivot, col);
            det = -det;
        }
        det *= a[col][col];
        for i in (col + 1)..N {
            let f = a[i][col] / a[col][col];
            for k in col..N {
                a[i][k] -= f * a[col][k];
            }
        }
    }
    det
}

/// Numerical rank: pivots larger than `tol` after partial-pivot elimination.
pub fn rank<const N: usize>(m: &Matrix<N>, tol: f64) -> usize {
    let mut a = *m;
    let mut rank = 0;
    for col in 0..N {
        if rank == N {
            break;
        }
        let pivot = (rank..N)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(rank);
        if a[pivot][col].abs() < tol {
            continue;
        }
        a.swap(pivot, rank);
        for i in 0..N {
            if i != rank {
                let f = a[i][col] / a[rank][col];
                for k in col..N {
                    a[i][k] -= f * a[rank][k];
                }
            }
        }
        rank += 1;
    }
    rank
}
