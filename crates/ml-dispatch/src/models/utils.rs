use ndarray::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Copy an ndarray matrix into smartcore's row-major dense matrix.
pub fn to_dense_matrix(x: &Array2<f64>) -> DenseMatrix<f64> {
    // `iter` walks in logical row-major order whatever the memory layout.
    DenseMatrix::new(x.nrows(), x.ncols(), x.iter().copied().collect(), false)
}

/// Reject NaN and infinite entries, reporting the first offending cell.
pub fn ensure_finite(x: &Array2<f64>) -> Result<(), String> {
    match x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), v)) => Err(format!(
            "Input contains non-finite value {} at row {}, column {}",
            v, row, col
        )),
        None => Ok(()),
    }
}

/// Use the caller's seed, or draw a fresh one.
pub fn resolve_seed(random_state: Option<u64>) -> u64 {
    match random_state {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            log::debug!("No random_state given, drew seed {}", seed);
            seed
        }
    }
}
