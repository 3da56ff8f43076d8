//! Descriptive statistics over every element of a tensor.
//!
//! Results are always `f64`, matching NumPy's `mean`, `median`, `var` and
//! `std` on integer input. Variance and standard deviation take a `ddof`
//! (delta degrees of freedom); the divisor is `n - ddof`, so `ddof = 0` is
//! the population statistic NumPy defaults to and `ddof = 1` the sample one.

use crate::error::{CoreError, Result};
use crate::tensor::Tensor;
use crate::Scalar;

impl<T: Scalar> Tensor<T> {
    /// Arithmetic mean of all elements.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let t = Tensor::from_row(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(t.mean().unwrap(), 3.0);
    /// ```
    pub fn mean(&self) -> Result<f64> {
        self.require_elements("mean")?;
        let total: f64 = self.iter().map(|&x| x.to_f64()).sum();
        Ok(total / self.numel() as f64)
    }

    /// Median of all elements; the mean of the two middle values when the
    /// count is even.
    pub fn median(&self) -> Result<f64> {
        self.require_elements("median")?;
        let sorted = self.sort();
        let data = sorted.as_slice();
        let mid = data.len() / 2;
        if data.len() % 2 == 1 {
            Ok(data[mid].to_f64())
        } else {
            Ok((data[mid - 1].to_f64() + data[mid].to_f64()) / 2.0)
        }
    }

    /// Variance with divisor `n - ddof`.
    pub fn var(&self, ddof: usize) -> Result<f64> {
        self.require_elements("var")?;
        let n = self.numel();
        if ddof >= n {
            return Err(CoreError::InvalidArgument {
                reason: "ddof must be smaller than the number of elements",
            });
        }
        let mean = self.mean()?;
        let sq: f64 = self
            .iter()
            .map(|&x| {
                let d = x.to_f64() - mean;
                d * d
            })
            .sum();
        Ok(sq / (n - ddof) as f64)
    }

    /// Standard deviation with divisor `n - ddof`.
    pub fn std(&self, ddof: usize) -> Result<f64> {
        self.var(ddof).map(f64::sqrt)
    }

    /// Population variance (`ddof = 0`), NumPy's `np.var` default.
    pub fn variance(&self) -> Result<f64> {
        self.var(0)
    }

    /// Population standard deviation (`ddof = 0`), NumPy's `np.std` default.
    pub fn std_dev(&self) -> Result<f64> {
        self.std(0)
    }

    fn require_elements(&self, op: &'static str) -> Result<()> {
        if self.is_empty() {
            Err(CoreError::EmptyInput { op })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn one_to_five() -> Tensor<i64> {
        Tensor::from_row(vec![1, 2, 3, 4, 5])
    }

    #[test]
    fn test_mean() {
        assert_eq!(one_to_five().mean().unwrap(), 3.0);
        let t = Tensor::from_row(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(t.mean().unwrap(), 2.5);
    }

    #[test]
    fn test_median_odd() {
        let t = Tensor::from_row(vec![5, 1, 3, 2, 4]);
        assert_eq!(t.median().unwrap(), 3.0);
    }

    #[test]
    fn test_median_even() {
        let t = Tensor::from_row(vec![4, 1, 3, 2]);
        assert_eq!(t.median().unwrap(), 2.5);
    }

    #[test]
    fn test_population_var_std() {
        let t = one_to_five();
        assert_eq!(t.variance().unwrap(), 2.0);
        assert!((t.std_dev().unwrap() - core::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_sample_var() {
        assert_eq!(one_to_five().var(1).unwrap(), 2.5);
    }

    #[test]
    fn test_matrix_stats_use_every_element() {
        let t = Tensor::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(t.mean().unwrap(), 3.5);
        assert_eq!(t.median().unwrap(), 3.5);
    }

    #[test]
    fn test_empty_input() {
        let t = Tensor::<f64>::zeros(vec![0]);
        assert!(matches!(t.mean(), Err(CoreError::EmptyInput { op: "mean" })));
        assert!(matches!(t.median(), Err(CoreError::EmptyInput { op: "median" })));
    }

    #[test]
    fn test_ddof_too_large() {
        let t = Tensor::from_row(vec![1.0]);
        assert!(t.var(1).is_err());
        assert_eq!(t.var(0).unwrap(), 0.0);
    }
}
