//! Element types a [`Tensor`](crate::tensor::Tensor) can hold.
//!
//! ```text
//! Scalar   (every integer width, f32, f64)
//!   └── Float  (f32, f64)
//! ```
//!
//! Integer arrays stay integer through `+ - *` and `pow`; true division and
//! the statistics in [`stats`](crate::stats) go through `f64`, the way NumPy
//! promotes `int64 / int64` to `float64`.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Base trait for all numeric types storable in a tensor.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + 'static
{
    /// Whether the type is a floating-point type. Drives display formatting.
    const IS_FLOAT: bool;

    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Convert from `usize` (used for index / shape arithmetic).
    fn from_usize(v: usize) -> Self;

    /// Widen to `f64`. Lossy for 64-bit integers beyond 2^53.
    fn to_f64(self) -> f64;

    /// `self + rhs`, or `None` on integer overflow.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` on integer overflow.
    fn try_sub(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` on integer overflow.
    fn try_mul(self, rhs: Self) -> Option<Self>;

    /// `self / rhs`, or `None` for an integer zero divisor or overflow
    /// (`MIN / -1`). Floats follow IEEE rules.
    fn try_div(self, rhs: Self) -> Option<Self>;

    /// `self` raised to `exp`.
    ///
    /// Returns `None` for a negative exponent on an integer, or when the
    /// integer result overflows.
    fn try_pow(self, exp: Self) -> Option<Self>;
}

/// Floating-point scalar types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn ceil(self) -> Self;
    fn is_nan(self) -> bool;

    /// Convert from an `f64` literal.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            const IS_FLOAT: bool = true;

            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn try_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
            #[inline]
            fn try_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
            #[inline]
            fn try_div(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
            #[inline]
            fn try_pow(self, exp: Self) -> Option<Self> {
                Some(<$ty>::powf(self, exp))
            }
        }

        impl Float for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn ceil(self) -> Self {
                <$ty>::ceil(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    (@body $ty:ty) => {
        #[inline]
        fn zero() -> Self {
            0
        }
        #[inline]
        fn one() -> Self {
            1
        }
        #[inline]
        #[allow(clippy::cast_possible_wrap)]
        fn from_usize(v: usize) -> Self {
            v as Self
        }
        #[inline]
        #[allow(clippy::cast_lossless)]
        fn to_f64(self) -> f64 {
            self as f64
        }
        #[inline]
        fn try_add(self, rhs: Self) -> Option<Self> {
            self.checked_add(rhs)
        }
        #[inline]
        fn try_sub(self, rhs: Self) -> Option<Self> {
            self.checked_sub(rhs)
        }
        #[inline]
        fn try_mul(self, rhs: Self) -> Option<Self> {
            self.checked_mul(rhs)
        }
        #[inline]
        fn try_div(self, rhs: Self) -> Option<Self> {
            self.checked_div(rhs)
        }
    };
    ($ty:ty, signed) => {
        impl Scalar for $ty {
            const IS_FLOAT: bool = false;
            impl_scalar_int!(@body $ty);

            #[inline]
            fn try_pow(self, exp: Self) -> Option<Self> {
                let exp = u32::try_from(exp).ok()?;
                self.checked_pow(exp)
            }
        }
    };
    ($ty:ty, unsigned) => {
        impl Scalar for $ty {
            const IS_FLOAT: bool = false;
            impl_scalar_int!(@body $ty);

            #[inline]
            fn try_pow(self, exp: Self) -> Option<Self> {
                // Anything past u32::MAX overflows every base > 1 anyway.
                let exp = u32::try_from(exp).unwrap_or(u32::MAX);
                self.checked_pow(exp)
            }
        }
    };
}

impl_scalar_int!(i8, signed);
impl_scalar_int!(i16, signed);
impl_scalar_int!(i32, signed);
impl_scalar_int!(i64, signed);
impl_scalar_int!(isize, signed);
impl_scalar_int!(u8, unsigned);
impl_scalar_int!(u16, unsigned);
impl_scalar_int!(u32, unsigned);
impl_scalar_int!(u64, unsigned);
impl_scalar_int!(usize, unsigned);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(i64::zero(), 0);
        assert_eq!(i64::one(), 1);
    }

    #[test]
    fn test_is_float() {
        assert!(f32::IS_FLOAT);
        assert!(f64::IS_FLOAT);
        assert!(!i64::IS_FLOAT);
        assert!(!u8::IS_FLOAT);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(7_i64.to_f64(), 7.0);
        assert_eq!(2.5_f32.to_f64(), 2.5);
    }

    #[test]
    fn test_int_pow() {
        assert_eq!(3_i64.try_pow(4), Some(81));
        assert_eq!(6_i64.try_pow(6), Some(46_656));
        assert_eq!(2_i64.try_pow(-1), None);
        assert_eq!(2_u8.try_pow(3), Some(8));
        assert_eq!(10_i64.try_pow(40), None);
        assert_eq!(2_u8.try_pow(8), None);
    }

    #[test]
    fn test_int_checked_arith() {
        assert_eq!(7_i64.try_div(2), Some(3));
        assert_eq!(1_i64.try_div(0), None);
        assert_eq!(i64::MIN.try_div(-1), None);
        assert_eq!(i64::MAX.try_add(1), None);
        assert_eq!(i64::MIN.try_sub(1), None);
        assert_eq!(0_u8.try_sub(1), None);
        assert_eq!(i64::MAX.try_mul(2), None);
        assert_eq!(6_i32.try_mul(7), Some(42));
    }

    #[test]
    fn test_float_checked_arith() {
        assert_eq!(1.0_f64.try_div(0.0), Some(f64::INFINITY));
        assert_eq!(f64::MAX.try_add(f64::MAX), Some(f64::INFINITY));
        assert_eq!(1.5_f32.try_mul(2.0), Some(3.0));
    }

    #[test]
    fn test_float_pow() {
        let root = 2.0_f64.try_pow(0.5).unwrap();
        assert!((root - core::f64::consts::SQRT_2).abs() < 1e-15);
        assert_eq!(2.0_f64.try_pow(-1.0), Some(0.5));
    }

    #[test]
    fn test_float_ops() {
        let x: f64 = 4.0;
        assert_eq!(Float::sqrt(x), 2.0);
        assert_eq!(Float::abs(-3.0_f64), 3.0);
        assert_eq!(Float::ceil(2.1_f64), 3.0);
        assert!(Float::is_nan(f64::NAN));
    }
}
