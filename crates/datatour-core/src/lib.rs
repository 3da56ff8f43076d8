//! `datatour-core`: the numeric layer of the tour.
//!
//! Provides an owned N-dimensional [`Tensor`](tensor::Tensor), element-wise
//! arithmetic, BLAS-style products, descriptive statistics and uniform random
//! arrays. Printing follows NumPy's layout so transcripts read the same.
//!
//! # Design
//!
//! - Math is written from scratch; the only dependency is `thiserror`.
//! - Generic over element types through [`Scalar`] / [`Float`].
//! - Operators panic on shape mismatch; every operator has a `*_checked`
//!   twin returning [`Result`].

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod random;
pub mod stats;
pub mod tensor;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use tensor::Tensor;

/// Items intended for glob-import: `use datatour_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::random::Rng;
    pub use crate::tensor::Tensor;
}
