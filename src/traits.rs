use std::fmt;
use std::ops::{Mul, Neg};

use crate::decimal::{d32, DecimalLimits};

/// Compile-time capability tags, for generic numeric code that needs to tell decimal floating
/// point types apart from the native ones.
pub trait TypeTraits {
    const IS_DECIMAL_FLOATING_POINT: bool;
    /// Behaves as an arithmetic type (numeric value, numeric operators).
    const IS_ARITHMETIC: bool;
}

pub const fn is_decimal_floating_point<T: TypeTraits>() -> bool {
    T::IS_DECIMAL_FLOATING_POINT
}

pub const fn is_arithmetic<T: TypeTraits>() -> bool {
    T::IS_ARITHMETIC
}

/// Bound for generic code over decimal floating point types.
pub trait DecimalFloatingPoint:
    TypeTraits + DecimalLimits + Copy + PartialOrd + Neg<Output = Self> + Mul<Output = Self> + fmt::Display
{
    /// Returns true if the sign bit is set.
    fn sign(&self) -> bool;

    /// Returns a copy of `self` whose sign bit is `negative`.
    fn with_sign(self, negative: bool) -> Self;
}

impl TypeTraits for d32 {
    const IS_DECIMAL_FLOATING_POINT: bool = true;
    const IS_ARITHMETIC: bool = true;
}

impl DecimalFloatingPoint for d32 {
    fn sign(&self) -> bool {
        d32::sign(self)
    }

    fn with_sign(self, negative: bool) -> d32 {
        d32::with_sign(self, negative)
    }
}

macro_rules! impl_native_type_traits {
    ($($t:ty)*) => {$(
        impl TypeTraits for $t {
            const IS_DECIMAL_FLOATING_POINT: bool = false;
            const IS_ARITHMETIC: bool = true;
        }
    )*};
}

impl_native_type_traits! { f32 f64 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = assert!(is_decimal_floating_point::<d32>());
    const _: () = assert!(is_arithmetic::<d32>());

    #[test]
    fn test_decimal() {
        assert!(is_decimal_floating_point::<d32>());
        assert!(is_arithmetic::<d32>());
    }

    #[test]
    fn test_native() {
        assert!(!is_decimal_floating_point::<f64>());
        assert!(!is_decimal_floating_point::<f32>());
        assert!(!is_decimal_floating_point::<u64>());
        assert!(is_arithmetic::<f64>());
        assert!(is_arithmetic::<i8>());
        assert!(is_arithmetic::<usize>());
    }

    #[test]
    fn test_decimal_floating_point_bound() {
        fn negated_sign<T: DecimalFloatingPoint>(x: T) -> bool {
            (-x).sign()
        }

        assert!(negated_sign(d32::new(10, 1)));
        assert!(!negated_sign(d32::new(-10, 1)));
        assert_eq!(d32::new(-3, 0), DecimalFloatingPoint::with_sign(d32::new(3, 0), true));
    }
}
