//! BLAS Level 1–3 operations on [`Tensor`].
//!
//! All functions validate shapes and return [`Result`] on mismatches.

use crate::error::{CoreError, Result};
use crate::tensor::Tensor;
use crate::Scalar;

// Level 1

/// Inner product of two 1-D tensors: `sum(x_i * y_i)`.
///
/// ```
/// # use datatour_core::Tensor;
/// # use datatour_core::linalg::vdot;
/// let x = Tensor::from_row(vec![1.0_f64, 2.0, 3.0]);
/// let y = Tensor::from_row(vec![4.0_f64, 5.0, 6.0]);
/// assert_eq!(vdot(&x, &y).unwrap(), 32.0);
/// ```
pub fn vdot<T: Scalar>(x: &Tensor<T>, y: &Tensor<T>) -> Result<T> {
    if x.ndim() != 1 || y.ndim() != 1 {
        return Err(CoreError::InvalidArgument {
            reason: "vdot: both arguments must be 1-D tensors",
        });
    }
    if x.numel() != y.numel() {
        return Err(CoreError::DimensionMismatch {
            expected: x.shape().to_vec(),
            got: y.shape().to_vec(),
        });
    }
    let result = x
        .as_slice()
        .iter()
        .zip(y.as_slice())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
    Ok(result)
}

// Level 2

/// General matrix-vector multiply: `y = alpha * A * x + beta * y`.
///
/// - `a` must be 2-D with shape `[m, n]`.
/// - `x` must be 1-D with length `n`.
/// - `y` must be 1-D with length `m`.
#[allow(clippy::many_single_char_names)]
pub fn gemv<T: Scalar>(
    alpha: T,
    a: &Tensor<T>,
    x: &Tensor<T>,
    beta: T,
    y: &mut Tensor<T>,
) -> Result<()> {
    if a.ndim() != 2 || x.ndim() != 1 || y.ndim() != 1 {
        return Err(CoreError::InvalidArgument {
            reason: "gemv: expected a matrix and two vectors",
        });
    }

    let m = a.shape()[0];
    let n = a.shape()[1];

    if x.numel() != n {
        return Err(CoreError::DimensionMismatch {
            expected: vec![n],
            got: x.shape().to_vec(),
        });
    }
    if y.numel() != m {
        return Err(CoreError::DimensionMismatch {
            expected: vec![m],
            got: y.shape().to_vec(),
        });
    }

    let a_data = a.as_slice();
    let x_data = x.as_slice();

    for (i, yi) in y.as_mut_slice().iter_mut().enumerate() {
        let row = &a_data[i * n..(i + 1) * n];
        let sum = row
            .iter()
            .zip(x_data)
            .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj);
        *yi = alpha * sum + beta * *yi;
    }

    Ok(())
}

// Level 3

/// General matrix-matrix multiply: `C = alpha * A * B + beta * C`.
///
/// - `a` must be 2-D with shape `[m, k]`.
/// - `b` must be 2-D with shape `[k, n]`.
/// - `c` must be 2-D with shape `[m, n]`.
///
/// ```
/// # use datatour_core::Tensor;
/// # use datatour_core::linalg::gemm;
/// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
/// let b = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();
/// let mut c = Tensor::<f64>::zeros(vec![2, 2]);
/// gemm(1.0, &a, &b, 0.0, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn gemm<T: Scalar>(
    alpha: T,
    a: &Tensor<T>,
    b: &Tensor<T>,
    beta: T,
    c: &mut Tensor<T>,
) -> Result<()> {
    if a.ndim() != 2 || b.ndim() != 2 || c.ndim() != 2 {
        return Err(CoreError::InvalidArgument {
            reason: "gemm: all arguments must be 2-D tensors (matrices)",
        });
    }

    let m = a.shape()[0];
    let k = a.shape()[1];
    let n = b.shape()[1];

    if b.shape()[0] != k {
        return Err(CoreError::DimensionMismatch {
            expected: vec![k, n],
            got: b.shape().to_vec(),
        });
    }
    if c.shape() != [m, n] {
        return Err(CoreError::DimensionMismatch {
            expected: vec![m, n],
            got: c.shape().to_vec(),
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let c_data = c.as_mut_slice();

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            let a_row = i * k;
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            let c_idx = i * n + j;
            c_data[c_idx] = alpha * sum + beta * c_data[c_idx];
        }
    }

    Ok(())
}

impl<T: Scalar> Tensor<T> {
    /// Matrix-vector product.
    pub fn matvec(&self, x: &Tensor<T>) -> Result<Tensor<T>> {
        let m = self.shape().first().copied().unwrap_or(0);
        let mut y = Tensor::zeros(vec![m]);
        gemv(T::one(), self, x, T::zero(), &mut y)?;
        Ok(y)
    }

    /// Matrix-matrix product.
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        let m = self.shape().first().copied().unwrap_or(0);
        let n = other.shape().get(1).copied().unwrap_or(0);
        let mut c = Tensor::zeros(vec![m, n]);
        gemm(T::one(), self, other, T::zero(), &mut c)?;
        Ok(c)
    }

    /// `np.dot`: inner product for two vectors (as a 0-D tensor),
    /// matrix-vector product, or matrix product, chosen by rank.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let m = Tensor::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let d = m.dot(&m.transpose().unwrap()).unwrap();
    /// assert_eq!(d.as_slice(), &[14, 32, 32, 77]);
    /// ```
    pub fn dot(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        match (self.ndim(), other.ndim()) {
            (1, 1) => vdot(self, other).map(Tensor::scalar),
            (2, 1) => self.matvec(other),
            (2, 2) => self.matmul(other),
            _ => Err(CoreError::InvalidArgument {
                reason: "dot supports 1-D and 2-D operands only",
            }),
        }
    }
}
