//! Shape manipulation: reshape and transpose.

use crate::error::{CoreError, Result};
use crate::Scalar;

use super::{compute_strides, Tensor};

impl<T: Scalar> Tensor<T> {
    /// Reshape the tensor to a new shape without copying data.
    ///
    /// The total number of elements must remain the same.
    pub fn reshape(mut self, new_shape: Vec<usize>) -> Result<Self> {
        let new_numel: usize = new_shape.iter().product();
        if new_numel != self.numel() {
            return Err(CoreError::InvalidShape {
                shape: new_shape,
                reason: "new shape has different number of elements",
            });
        }
        self.strides = compute_strides(&new_shape);
        self.shape = new_shape;
        Ok(self)
    }

    /// Transpose a matrix into a new tensor (`m.T` in NumPy).
    ///
    /// 1-D tensors are returned unchanged, as NumPy does; higher ranks are
    /// rejected.
    pub fn transpose(&self) -> Result<Self> {
        match self.ndim() {
            0 | 1 => Ok(self.clone()),
            2 => {
                let (rows, cols) = (self.shape[0], self.shape[1]);
                let mut data = vec![T::zero(); self.numel()];
                for r in 0..rows {
                    for c in 0..cols {
                        data[c * rows + r] = self.data[r * cols + c];
                    }
                }
                Ok(Tensor::from_parts(data, vec![cols, rows]))
            }
            _ => Err(CoreError::InvalidArgument {
                reason: "transpose() requires a tensor of rank 2 or lower",
            }),
        }
    }
}
