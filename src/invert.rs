//! Gauss-Jordan matrix inversion.
//!
//! Deliberately naive: pivots are taken in ascending diagonal order with no
//! row swapping, and any pivot whose magnitude falls below the threshold
//! aborts the whole inversion as singular. This matches the calculator's
//! contract of a fixed-threshold singularity test rather than a numerically
//! robust elimination.

use crate::error::KernelError;
use crate::math::Matrix;

/// Invert a square matrix via Gauss-Jordan elimination.
///
/// The input is copied into a working matrix which is reduced to the
/// identity while the same row operations are applied to a fresh identity
/// matrix; on success that companion matrix is the inverse.
///
/// # Arguments
///
/// * `m` - The square matrix to invert.
/// * `pivot_epsilon` - Pivot magnitudes below this value fail the inversion.
///
/// # Returns
///
/// The inverse of `m`, or [`KernelError::Singular`] if a pivot falls below
/// the threshold, or [`KernelError::ShapeMismatch`] if `m` is not square.
pub fn invert(m: &Matrix<f32>, pivot_epsilon: f32) -> Result<Matrix<f32>, KernelError> {
    if m.nrows() != m.ncols() {
        return Err(KernelError::ShapeMismatch {
            op: "invert",
            lhs: m.shape(),
            rhs: m.shape(),
        });
    }

    let n = m.nrows();
    let mut work = m.clone();
    let mut inverse = Matrix::identity(n);
    log::debug!("Inverting {}x{} matrix", n, n);

    for i in 0..n {
        let pivot = work[(i, i)];
        if pivot.abs() < pivot_epsilon {
            log::warn!(
                "Pivot {} has magnitude {} below threshold {}; matrix is singular",
                i,
                pivot.abs(),
                pivot_epsilon
            );
            return Err(KernelError::Singular);
        }
        log::trace!("Pivot {}: {}", i, pivot);

        for j in 0..n {
            work[(i, j)] /= pivot;
            inverse[(i, j)] /= pivot;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = work[(k, i)];
            for j in 0..n {
                let w = factor * work[(i, j)];
                work[(k, j)] -= w;
                let v = factor * inverse[(i, j)];
                inverse[(k, j)] -= v;
            }
        }
    }

    Ok(inverse)
}
