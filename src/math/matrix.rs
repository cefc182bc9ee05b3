use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::KernelError;

/// Dense 2D container over a flat row-major buffer.
///
/// `data[row * cols + col]` holds the element at `(row, col)`. Construction
/// through [`Matrix::from_shape_vec`] is the marshaling point between the
/// caller's flat buffer and the structured matrix: the buffer length must be
/// exactly `rows * cols` and both dimensions must be positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Reshape a flat row-major buffer into a matrix.
    ///
    /// Fails with [`KernelError::InvalidDimensions`] when the buffer length
    /// does not equal `rows * cols` or either dimension is zero.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, KernelError> {
        let (rows, cols) = shape;
        // checked_mul keeps an overflowing dimension lie from wrapping into
        // a product that happens to match the buffer length
        let expected = rows.checked_mul(cols);
        if rows == 0 || cols == 0 || expected != Some(data.len()) {
            return Err(KernelError::InvalidDimensions {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Consume the matrix, returning its flat row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    /// All-zero matrix. Dimensions must be positive; a zero dimension would
    /// violate the invariant [`Matrix::from_shape_vec`] enforces.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Matrix {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    /// Square matrix with ones on the diagonal and zeros elsewhere.
    /// `n` must be positive, as for [`Matrix::zeros`].
    pub fn identity(n: usize) -> Self {
        let mut matrix = Matrix::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = T::one();
        }
        matrix
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
