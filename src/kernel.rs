//! The arithmetic surface of the kernel.
//!
//! Matrix-level operations work on [`Matrix<f32>`] values; the `_buffers`
//! variants are the boundary contract for callers holding flat row-major
//! buffers plus declared dimensions (e.g., an application UI layer). Shape
//! checking happens here, so a dimension lie from the caller surfaces as a
//! typed error instead of an out-of-bounds access.

use crate::config::KernelConfig;
use crate::error::KernelError;
use crate::invert;
use crate::math::Matrix;

/// Elementwise sum of two matrices of identical shape.
pub fn add(a: &Matrix<f32>, b: &Matrix<f32>) -> Result<Matrix<f32>, KernelError> {
    ensure_same_shape("add", a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x + y)
        .collect();
    Matrix::from_shape_vec(a.shape(), data)
}

/// Elementwise difference `a - b` of two matrices of identical shape.
pub fn subtract(a: &Matrix<f32>, b: &Matrix<f32>) -> Result<Matrix<f32>, KernelError> {
    ensure_same_shape("subtract", a, b)?;
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x - y)
        .collect();
    Matrix::from_shape_vec(a.shape(), data)
}

/// Standard matrix product.
///
/// `a` is `r1 x c1` and `b` is `c1 x c2`; the result is `r1 x c2` with
/// `result[(i, j)] = Σ_k a[(i, k)] * b[(k, j)]`. An inner-dimension
/// mismatch fails with [`KernelError::ShapeMismatch`].
pub fn multiply(a: &Matrix<f32>, b: &Matrix<f32>) -> Result<Matrix<f32>, KernelError> {
    if a.ncols() != b.nrows() {
        return Err(KernelError::ShapeMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let (r1, c1) = a.shape();
    let c2 = b.ncols();
    let mut result = Matrix::zeros(r1, c2);
    for i in 0..r1 {
        for j in 0..c2 {
            let mut acc = 0.0f32;
            for k in 0..c1 {
                acc += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = acc;
        }
    }
    Ok(result)
}

/// Matrix division `a × b⁻¹` under the default [`KernelConfig`].
///
/// See [`divide_with`] for the full contract.
pub fn divide(a: &Matrix<f32>, b: &Matrix<f32>) -> Result<Matrix<f32>, KernelError> {
    divide_with(a, b, &KernelConfig::default())
}

/// Matrix division `a × b⁻¹` under an explicit numeric policy.
///
/// `b` must be square with `a.ncols() == b.nrows()`. The divisor is
/// inverted by Gauss-Jordan elimination using `config.pivot_epsilon` as
/// the singularity threshold; every element of the product is then rounded
/// to `config.round_decimals` digits, half away from zero.
///
/// # Returns
///
/// The rounded quotient matrix, [`KernelError::Singular`] if `b` has no
/// usable inverse, or [`KernelError::ShapeMismatch`] on incompatible
/// operand shapes. On failure no partial result escapes.
pub fn divide_with(
    a: &Matrix<f32>,
    b: &Matrix<f32>,
    config: &KernelConfig,
) -> Result<Matrix<f32>, KernelError> {
    if b.nrows() != b.ncols() || a.ncols() != b.nrows() {
        return Err(KernelError::ShapeMismatch {
            op: "divide",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    log::debug!(
        "Dividing {:?} matrix by {:?} matrix",
        a.shape(),
        b.shape()
    );

    let inverse = invert::invert(b, config.pivot_epsilon)?;
    let quotient = multiply(a, &inverse)?;
    Ok(quotient.mapv(|&v| round_to(v, config.round_decimals)))
}

/// Round to `decimals` digits, half away from zero.
fn round_to(value: f32, decimals: i32) -> f32 {
    let scale = 10f32.powi(decimals);
    (value * scale).round() / scale
}

fn ensure_same_shape(
    op: &'static str,
    a: &Matrix<f32>,
    b: &Matrix<f32>,
) -> Result<(), KernelError> {
    if a.shape() != b.shape() {
        return Err(KernelError::ShapeMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// Sum two flat row-major buffers interpreted as `rows x cols` matrices.
pub fn add_buffers(
    a: &[f32],
    b: &[f32],
    rows: usize,
    cols: usize,
) -> Result<Vec<f32>, KernelError> {
    let a = Matrix::from_shape_vec((rows, cols), a.to_vec())?;
    let b = Matrix::from_shape_vec((rows, cols), b.to_vec())?;
    Ok(add(&a, &b)?.into_vec())
}

/// Subtract two flat row-major buffers interpreted as `rows x cols` matrices.
pub fn subtract_buffers(
    a: &[f32],
    b: &[f32],
    rows: usize,
    cols: usize,
) -> Result<Vec<f32>, KernelError> {
    let a = Matrix::from_shape_vec((rows, cols), a.to_vec())?;
    let b = Matrix::from_shape_vec((rows, cols), b.to_vec())?;
    Ok(subtract(&a, &b)?.into_vec())
}

/// Multiply flat row-major buffers: `a` is `r1 x c1`, `b` is `c1 x c2`.
///
/// The result buffer has length `r1 * c2`.
pub fn multiply_buffers(
    a: &[f32],
    b: &[f32],
    r1: usize,
    c1: usize,
    c2: usize,
) -> Result<Vec<f32>, KernelError> {
    let a = Matrix::from_shape_vec((r1, c1), a.to_vec())?;
    let b = Matrix::from_shape_vec((c1, c2), b.to_vec())?;
    Ok(multiply(&a, &b)?.into_vec())
}

/// Divide flat row-major buffers: `a` is `rows x cols`, `b` is square of
/// size `divisor_size`, and the result is `a × b⁻¹` rounded per the default
/// [`KernelConfig`].
pub fn divide_buffers(
    a: &[f32],
    b: &[f32],
    rows: usize,
    cols: usize,
    divisor_size: usize,
) -> Result<Vec<f32>, KernelError> {
    let a = Matrix::from_shape_vec((rows, cols), a.to_vec())?;
    let b = Matrix::from_shape_vec((divisor_size, divisor_size), b.to_vec())?;
    Ok(divide(&a, &b)?.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(shape: (usize, usize), data: Vec<f32>) -> Matrix<f32> {
        Matrix::from_shape_vec(shape, data).expect("valid test matrix")
    }

    #[test]
    fn add_two_by_two() {
        let a = matrix((2, 2), vec![1.0, 2.0, 3.0, 4.0]);
        let b = matrix((2, 2), vec![5.0, 6.0, 7.0, 8.0]);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn subtract_undoes_add() {
        let m = matrix((2, 3), vec![1.5, -2.0, 0.0, 4.25, 9.0, -7.5]);
        let n = matrix((2, 3), vec![0.5, 1.0, -3.0, 2.0, -6.0, 8.0]);
        let round_trip = subtract(&add(&m, &n).unwrap(), &n).unwrap();
        for (got, want) in round_trip.as_slice().iter().zip(m.as_slice()) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn add_rejects_shape_mismatch() {
        let a = matrix((2, 2), vec![0.0; 4]);
        let b = matrix((2, 3), vec![0.0; 6]);
        assert!(matches!(
            add(&a, &b),
            Err(KernelError::ShapeMismatch { op: "add", .. })
        ));
    }

    #[test]
    fn multiply_two_by_two() {
        let a = matrix((2, 2), vec![1.0, 2.0, 3.0, 4.0]);
        let b = matrix((2, 2), vec![5.0, 6.0, 7.0, 8.0]);
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let m = matrix((3, 3), vec![2.0, -1.0, 0.5, 3.0, 7.0, -4.0, 0.0, 1.0, 6.0]);
        let product = multiply(&m, &Matrix::identity(3)).unwrap();
        assert_eq!(product, m);
    }

    #[test]
    fn multiply_rejects_inner_mismatch() {
        let a = matrix((2, 3), vec![0.0; 6]);
        let b = matrix((2, 2), vec![0.0; 4]);
        assert!(matches!(
            multiply(&a, &b),
            Err(KernelError::ShapeMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn divide_by_identity_rounds_elements() {
        // 0.125 * 100 is exactly 12.5 in f32, so this exercises the
        // half-away-from-zero case in both directions.
        let a = matrix((2, 2), vec![0.125, -0.125, 1.2345, 2.0]);
        let quotient = divide(&a, &Matrix::identity(2)).unwrap();
        assert_eq!(quotient.as_slice(), &[0.13, -0.13, 1.23, 2.0]);
    }

    #[test]
    fn divide_by_singular_matrix_fails() {
        let a = matrix((2, 2), vec![1.0, 2.0, 3.0, 4.0]);
        let zeros = matrix((2, 2), vec![0.0; 4]);
        assert_eq!(divide(&a, &zeros), Err(KernelError::Singular));
    }

    #[test]
    fn divide_rejects_non_square_divisor() {
        let a = matrix((2, 3), vec![0.0; 6]);
        let b = matrix((2, 3), vec![1.0; 6]);
        assert!(matches!(
            divide(&a, &b),
            Err(KernelError::ShapeMismatch { op: "divide", .. })
        ));
    }

    #[test]
    fn divide_rejects_incompatible_dividend() {
        // square divisor, but the dividend's column count does not match;
        // the error must name divide, not the inner multiply
        let a = matrix((2, 2), vec![0.0; 4]);
        let b = matrix((3, 3), vec![1.0; 9]);
        assert!(matches!(
            divide(&a, &b),
            Err(KernelError::ShapeMismatch { op: "divide", .. })
        ));
    }

    #[test]
    fn divide_respects_config() {
        // 0.25 * 10 is exactly 2.5 in f32; one decimal digit keeps the
        // half-way case exact.
        let a = matrix((1, 1), vec![0.25]);
        let config = KernelConfig {
            pivot_epsilon: 1e-8,
            round_decimals: 1,
        };
        let quotient = divide_with(&a, &Matrix::identity(1), &config).unwrap();
        assert_eq!(quotient[(0, 0)], 0.3);
    }

    #[test]
    fn round_to_is_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.004, 2), 2.0);
        assert_eq!(round_to(2.006, 2), 2.01);
    }
}
