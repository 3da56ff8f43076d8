//! Element-wise arithmetic for [`Tensor`].
//!
//! `Add`, `Sub`, `Mul`, `Div` are implemented for tensor/tensor (same shape,
//! panics otherwise) and tensor/scalar. The `*_checked` methods, `pow_checked`
//! and `true_div` return [`Result`](crate::Result) instead.

use core::ops::{Add, Div, Mul, Sub};

use crate::error::{CoreError, Result};
use crate::Scalar;

use super::Tensor;

macro_rules! impl_tensor_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: Tensor<T>) -> Tensor<T> {
                <&Tensor<T> as $trait<&Tensor<T>>>::$method(&self, &rhs)
            }
        }

        impl<T: Scalar> $trait for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                assert_eq!(
                    self.shape, rhs.shape,
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape, rhs.shape,
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Tensor {
                    data,
                    shape: self.shape.clone(),
                    strides: self.strides.clone(),
                }
            }
        }
    };
}

impl_tensor_binop!(Add, add, +);
impl_tensor_binop!(Sub, sub, -);
impl_tensor_binop!(Mul, mul, *);
impl_tensor_binop!(Div, div, /);

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar> $trait<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

const OVERFLOW: CoreError = CoreError::InvalidArgument {
    reason: "integer overflow",
};

impl<T: Scalar> Tensor<T> {
    /// Element-wise addition.
    ///
    /// Returns `Err` on shape mismatch or integer overflow.
    pub fn add_checked(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.try_zip_map(other, |a, b| a.try_add(b).ok_or(OVERFLOW))
    }

    /// Element-wise subtraction.
    ///
    /// Returns `Err` on shape mismatch or integer overflow.
    pub fn sub_checked(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.try_zip_map(other, |a, b| a.try_sub(b).ok_or(OVERFLOW))
    }

    /// Element-wise multiplication.
    ///
    /// Returns `Err` on shape mismatch or integer overflow.
    pub fn mul_checked(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.try_zip_map(other, |a, b| a.try_mul(b).ok_or(OVERFLOW))
    }

    /// Element-wise division in the element type. Integer division truncates;
    /// see [`true_div`](Self::true_div).
    ///
    /// Returns `Err` on shape mismatch, an integer zero divisor, or overflow.
    pub fn div_checked(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.try_zip_map(other, |a, b| {
            a.try_div(b).ok_or(CoreError::InvalidArgument {
                reason: "integer division by zero or overflow",
            })
        })
    }

    /// Element-wise `self ** other`.
    ///
    /// Integer tensors reject negative exponents and results that overflow.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let m = Tensor::from_rows(&[vec![1_i64, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let p = m.pow_checked(&m).unwrap();
    /// assert_eq!(p.as_slice(), &[1, 4, 27, 256, 3125, 46656]);
    /// ```
    pub fn pow_checked(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.try_zip_map(other, |a, b| {
            a.try_pow(b).ok_or(CoreError::InvalidArgument {
                reason: "negative integer power or integer overflow",
            })
        })
    }

    /// Element-wise division that always produces `f64`, the way NumPy's `/`
    /// promotes integer operands.
    ///
    /// Division by zero follows IEEE rules (`inf` or `NaN`).
    pub fn true_div(&self, other: &Tensor<T>) -> Result<Tensor<f64>> {
        self.zip_map(other, |a, b| a.to_f64() / b.to_f64())
    }

    /// Copy of the tensor with every element widened to `f64`.
    pub fn to_f64(&self) -> Tensor<f64> {
        self.map(Scalar::to_f64)
    }
}

impl<T: Scalar> Tensor<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().copied().sum()
    }

    /// Product of all elements.
    pub fn product(&self) -> T {
        self.data.iter().copied().fold(T::one(), |acc, x| acc * x)
    }

    /// Minimum element. Returns `None` for empty tensors.
    pub fn min_element(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
    }

    /// Maximum element. Returns `None` for empty tensors.
    pub fn max_element(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
    }

    /// Sum along a given axis, producing a tensor with that axis removed.
    pub fn sum_axis(&self, axis: usize) -> Result<Tensor<T>> {
        if axis >= self.ndim() {
            return Err(CoreError::AxisOutOfBounds {
                axis,
                ndim: self.ndim(),
            });
        }

        let mut new_shape: Vec<usize> = self.shape.clone();
        let axis_len = new_shape.remove(axis);

        if new_shape.is_empty() {
            return Ok(Tensor::scalar(self.sum()));
        }

        let new_numel: usize = new_shape.iter().product();
        let mut result_data = vec![T::zero(); new_numel];

        let outer: usize = self.shape[..axis].iter().product();
        let inner: usize = self.shape[axis + 1..].iter().product();

        for o in 0..outer {
            for k in 0..axis_len {
                let src_offset = (o * axis_len + k) * inner;
                let dst_offset = o * inner;
                for i in 0..inner {
                    result_data[dst_offset + i] += self.data[src_offset + i];
                }
            }
        }

        Ok(Tensor::from_parts(result_data, new_shape))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn m23() -> Tensor<i64> {
        Tensor::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_add_self() {
        let m = m23();
        let sum = &m + &m;
        assert_eq!(sum, Tensor::from_rows(&[vec![2, 4, 6], vec![8, 10, 12]]).unwrap());
    }

    #[test]
    fn test_sub_self_is_zero() {
        let m = m23();
        let diff = m.clone() - m;
        assert!(diff.iter().all(|&x| x == 0));
        assert_eq!(diff.shape(), &[2, 3]);
    }

    #[test]
    fn test_mul_self() {
        let m = m23();
        let prod = m.mul_checked(&m).unwrap();
        assert_eq!(prod, Tensor::from_rows(&[vec![1, 4, 9], vec![16, 25, 36]]).unwrap());
    }

    #[test]
    fn test_true_div_promotes() {
        let m = m23();
        let q = m.true_div(&m).unwrap();
        assert_eq!(q.shape(), &[2, 3]);
        assert!(q.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_true_div_by_zero() {
        let a = Tensor::from_row(vec![1_i64, 0]);
        let b = Tensor::from_row(vec![0_i64, 0]);
        let q = a.true_div(&b).unwrap();
        assert!(q.as_slice()[0].is_infinite());
        assert!(q.as_slice()[1].is_nan());
    }

    #[test]
    fn test_int_division_truncates() {
        let a = Tensor::from_row(vec![7_i64, -7]);
        let b = Tensor::from_row(vec![2_i64, 2]);
        assert_eq!(a.div_checked(&b).unwrap().as_slice(), &[3, -3]);
    }

    #[test]
    fn test_pow_self() {
        let m = m23();
        let p = m.pow_checked(&m).unwrap();
        assert_eq!(p.as_slice(), &[1, 4, 27, 256, 3125, 46_656]);
    }

    #[test]
    fn test_pow_negative_int_exponent() {
        let a = Tensor::from_row(vec![2_i64]);
        let b = Tensor::from_row(vec![-1_i64]);
        assert!(matches!(
            a.pow_checked(&b),
            Err(CoreError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_pow_int_overflow() {
        let a = Tensor::from_row(vec![10_i64]);
        let b = Tensor::from_row(vec![40_i64]);
        assert!(matches!(
            a.pow_checked(&b),
            Err(CoreError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_int_div_by_zero_is_err() {
        let a = Tensor::from_row(vec![1_i64]);
        let b = Tensor::from_row(vec![0_i64]);
        assert!(matches!(
            a.div_checked(&b),
            Err(CoreError::InvalidArgument { .. })
        ));
        let min = Tensor::from_row(vec![i64::MIN]);
        let neg = Tensor::from_row(vec![-1_i64]);
        assert!(min.div_checked(&neg).is_err());
    }

    #[test]
    fn test_float_div_by_zero_is_inf() {
        let a = Tensor::from_row(vec![1.0, -1.0]);
        let b = Tensor::from_row(vec![0.0, 0.0]);
        let q = a.div_checked(&b).unwrap();
        assert_eq!(q.as_slice(), &[f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_checked_int_overflow() {
        let max = Tensor::from_row(vec![i64::MAX]);
        let min = Tensor::from_row(vec![i64::MIN]);
        let one = Tensor::from_row(vec![1_i64]);
        let two = Tensor::from_row(vec![2_i64]);
        assert!(matches!(
            max.add_checked(&one),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert!(matches!(
            min.sub_checked(&one),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert!(matches!(
            max.mul_checked(&two),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert_eq!(min.add_checked(&one).unwrap().as_slice(), &[i64::MIN + 1]);
    }

    #[test]
    fn test_scalar_ops() {
        let a = Tensor::from_row(vec![1.0, 2.0, 3.0]);
        assert_eq!((&a * 10.0).as_slice(), &[10.0, 20.0, 30.0]);
        assert_eq!((a + 1.0).as_slice(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_checked_add_mismatch() {
        let a = Tensor::from_row(vec![1.0, 2.0]);
        let b = Tensor::from_row(vec![1.0, 2.0, 3.0]);
        assert!(a.add_checked(&b).is_err());
    }

    #[test]
    fn test_sum_product_min_max() {
        let t = Tensor::from_row(vec![3, 1, 4, 1, 5, 9]);
        assert_eq!(t.sum(), 23);
        assert_eq!(t.product(), 540);
        assert_eq!(t.min_element(), Some(1));
        assert_eq!(t.max_element(), Some(9));
    }

    #[test]
    fn test_sum_axis() {
        let t = m23();
        let s0 = t.sum_axis(0).unwrap();
        assert_eq!(s0.shape(), &[3]);
        assert_eq!(s0.as_slice(), &[5, 7, 9]);

        let s1 = t.sum_axis(1).unwrap();
        assert_eq!(s1.shape(), &[2]);
        assert_eq!(s1.as_slice(), &[6, 15]);
    }

    #[test]
    fn test_sum_axis_out_of_bounds() {
        let t = Tensor::from_row(vec![1, 2, 3]);
        assert!(t.sum_axis(1).is_err());
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_add_panics_on_mismatch() {
        let a = Tensor::from_row(vec![1.0, 2.0]);
        let b = Tensor::from_row(vec![1.0, 2.0, 3.0]);
        let _ = a + b;
    }
}
