//! Vector and matrix products.
//!
//! Written from scratch in BLAS terms:
//!
//! | Level | Operation | Complexity |
//! |-------|-----------|------------|
//! | L1 | [`vdot`] | O(n) |
//! | L2 | [`gemv`] (matrix-vector multiply) | O(n^2) |
//! | L3 | [`gemm`] (matrix-matrix multiply) | O(n^3) |
//!
//! [`Tensor::dot`](crate::Tensor::dot) dispatches on rank the way `np.dot`
//! does.

pub mod blas;

pub use blas::{gemm, gemv, vdot};
