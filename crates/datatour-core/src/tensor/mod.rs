//! N-dimensional tensor type with dynamic shape and contiguous storage.
//!
//! [`Tensor`] plays the role NumPy's `ndarray` plays in a Python notebook:
//! elements live in one row-major `Vec`, the shape is checked at every
//! operation, and `Display` prints the same bracketed layout NumPy does.

mod create;
mod display;
mod ops;
mod reshape;
mod sort;

use crate::error::{CoreError, Result};
use crate::Scalar;

/// An N-dimensional tensor with dynamic shape.
///
/// Data is stored contiguously in row-major (C) order. The tensor owns its
/// data and cloning performs a deep copy.
#[derive(Debug, Clone)]
pub struct Tensor<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Scalar> Tensor<T> {
    /// Create a tensor from a flat data vector and a shape.
    ///
    /// Returns an error if the product of `shape` does not equal `data.len()`.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(CoreError::InvalidShape {
                shape,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self::from_parts(data, shape))
    }

    /// Create a tensor from a flat slice and a shape (copies the data).
    pub fn from_slice(data: &[T], shape: Vec<usize>) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a 1-D tensor from a vector. Never fails.
    pub fn from_row(data: Vec<T>) -> Self {
        let n = data.len();
        Self::from_parts(data, vec![n])
    }

    /// Create a 2-D tensor from equal-length rows.
    ///
    /// ```
    /// # use datatour_core::Tensor;
    /// let m = Tensor::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), &[2, 3]);
    /// ```
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(CoreError::DimensionMismatch {
                expected: vec![cols],
                got: vec![bad.len()],
            });
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self::from_parts(data, vec![rows.len(), cols]))
    }

    /// Create a scalar (0-dimensional) tensor.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: vec![],
            strides: vec![],
        }
    }

    /// Assemble a tensor whose shape product is already known to match.
    pub(crate) fn from_parts(data: Vec<T>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        let strides = compute_strides(&shape);
        Self {
            data,
            shape,
            strides,
        }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Strides in number of elements.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn flat_index(&self, index: &[usize]) -> Result<usize> {
        let out_of_bounds = || CoreError::IndexOutOfBounds {
            index: index.to_vec(),
            shape: self.shape.clone(),
        };
        if index.len() != self.ndim() {
            return Err(out_of_bounds());
        }
        let mut flat = 0;
        for ((&idx, &dim), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if idx >= dim {
                return Err(out_of_bounds());
            }
            flat += idx * stride;
        }
        Ok(flat)
    }

    /// The element at a multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        let flat = self.flat_index(index)?;
        Ok(self.data[flat])
    }

    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let flat = self.flat_index(index)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Iterate over all elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Apply a function to every element, returning a new tensor.
    pub fn map<U, F>(&self, f: F) -> Tensor<U>
    where
        U: Scalar,
        F: Fn(T) -> U,
    {
        Tensor {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Apply a function element-wise to two tensors of the same shape.
    pub fn zip_map<U, F>(&self, other: &Tensor<T>, f: F) -> Result<Tensor<U>>
    where
        U: Scalar,
        F: Fn(T, T) -> U,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Tensor {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }

    /// Like [`zip_map`](Self::zip_map) for element functions that can fail.
    pub(crate) fn try_zip_map<U, F>(&self, other: &Tensor<T>, f: F) -> Result<Tensor<U>>
    where
        U: Scalar,
        F: Fn(T, T) -> Result<U>,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect::<Result<Vec<U>>>()?;
        Ok(Tensor {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }

    fn check_same_shape(&self, other: &Tensor<T>) -> Result<()> {
        if self.shape == other.shape {
            Ok(())
        } else {
            Err(CoreError::DimensionMismatch {
                expected: self.shape.clone(),
                got: other.shape.clone(),
            })
        }
    }
}

impl<T: Scalar> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

/// Compute row-major (C-order) strides from a shape.
pub(crate) fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let ndim = shape.len();
    if ndim == 0 {
        return vec![];
    }
    let mut strides = vec![1usize; ndim];
    for i in (0..ndim - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}
