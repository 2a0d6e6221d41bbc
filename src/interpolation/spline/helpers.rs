/// Solves a tridiagonal system by the Thomas algorithm: forward elimination
/// followed by back substitution, O(n) time and auxiliary space.
///
/// Row `i` reads `sub[i]`, `diag[i]`, `sup[i]` and `rhs[i]`; `sub[0]` and
/// `sup[n-1]` are ignored. The coefficient arrays are consumed and
/// overwritten during elimination; the solution is returned in the storage
/// of `rhs`.
pub(crate) fn solve_tridiagonal(
    sub: Vec<f64>,
    diag: Vec<f64>,
    mut sup: Vec<f64>,
    mut rhs: Vec<f64>,
) -> Vec<f64> {
    let n = diag.len();

    sup[0] /= diag[0];
    rhs[0] /= diag[0];
    for i in 1..n {
        let denom = diag[i] - sub[i] * sup[i - 1];
        if i + 1 < n {
            sup[i] /= denom;
        }
        rhs[i] = (rhs[i] - sub[i] * rhs[i - 1]) / denom;
    }

    for i in (0..n - 1).rev() {
        rhs[i] -= sup[i] * rhs[i + 1];
    }

    rhs
}
