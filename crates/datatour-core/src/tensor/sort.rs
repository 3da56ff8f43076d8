//! Flat sorting, used by order statistics such as the median.

use core::cmp::Ordering;

use crate::Scalar;

use super::Tensor;

impl<T: Scalar> Tensor<T> {
    /// Sort all elements, returning a 1-D tensor in ascending order.
    ///
    /// NaN compares equal to everything, so its position is unspecified.
    pub fn sort(&self) -> Tensor<T> {
        let mut data = self.data.clone();
        data.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Tensor::from_row(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_flattens() {
        let t = Tensor::from_rows(&[vec![5, 3], vec![9, 1]]).unwrap();
        let s = t.sort();
        assert_eq!(s.shape(), &[4]);
        assert_eq!(s.as_slice(), &[1, 3, 5, 9]);
    }

    #[test]
    fn test_sort_floats() {
        let t = Tensor::from_row(vec![2.5, -1.0, 0.0]);
        assert_eq!(t.sort().as_slice(), &[-1.0, 0.0, 2.5]);
    }
}
