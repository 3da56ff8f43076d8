//! Tensor creation functions analogous to `np.zeros`, `np.ones`, `np.full`
//! and `np.arange`.

use crate::error::{CoreError, Result};
use crate::{Float, Scalar};

use super::Tensor;

impl<T: Scalar> Tensor<T> {
    /// Create a tensor filled with zeros.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let t = Tensor::<f64>::zeros(vec![3, 4]);
    /// assert_eq!(t.shape(), &[3, 4]);
    /// assert!(t.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(shape: Vec<usize>) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: Vec<usize>) -> Self {
        Self::full(shape, T::one())
    }

    /// Create a tensor filled with a constant value.
    pub fn full(shape: Vec<usize>, value: T) -> Self {
        let numel: usize = shape.iter().product();
        Self::from_parts(vec![value; numel], shape)
    }

    /// Create a 1-D tensor with values `[0, 1, 2, ..., n-1]`.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let t = Tensor::<i32>::arange(5);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 3, 4]);
    /// ```
    pub fn arange(n: usize) -> Self {
        let data: Vec<T> = (0..n).map(T::from_usize).collect();
        Self::from_parts(data, vec![n])
    }
}

impl<T: Float> Tensor<T> {
    /// Values from `start` towards `stop` (exclusive) spaced by `step`.
    ///
    /// The length is `ceil((stop - start) / step)`, clamped at zero, and each
    /// element is computed as `start + i * step` so the error does not
    /// accumulate. A zero or NaN step, a non-finite bound, and a length that
    /// cannot be allocated are rejected.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let t = Tensor::<f64>::arange_step(10.0, 20.0, 0.5).unwrap();
    /// assert_eq!(t.numel(), 20);
    /// assert_eq!(t.as_slice()[1], 10.5);
    /// ```
    pub fn arange_step(start: T, stop: T, step: T) -> Result<Self> {
        if step == T::zero() || step.is_nan() {
            return Err(CoreError::InvalidArgument {
                reason: "arange step must be non-zero",
            });
        }
        if !start.to_f64().is_finite() || !stop.to_f64().is_finite() {
            return Err(CoreError::InvalidArgument {
                reason: "arange bounds must be finite",
            });
        }
        let span = ((stop - start) / step).ceil().to_f64();
        if !span.is_finite() {
            return Err(CoreError::InvalidArgument {
                reason: "arange length is not finite",
            });
        }
        let too_large = CoreError::InvalidArgument {
            reason: "arange length is too large",
        };
        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if span >= limit {
            return Err(too_large);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = span.max(0.0) as usize;
        let mut data: Vec<T> = Vec::new();
        data.try_reserve_exact(n).map_err(|_| too_large)?;
        data.extend((0..n).map(|i| start + step * T::from_usize(i)));
        Ok(Self::from_parts(data, vec![n]))
    }
}
