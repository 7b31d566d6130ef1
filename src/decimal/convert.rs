use std::any::type_name;

use log::trace;
use num::{Float, NumCast, PrimInt, ToPrimitive};

use super::conversion_error::{ConversionError, Result};
use super::decimal32::{d32, Class, PRECISION};

/// Types a `d32` can be projected onto.
pub trait FromDecimal: Sized {
    fn from_decimal(value: d32) -> Result<Self>;
}

fn cast<T: NumCast, N: ToPrimitive>(num: N) -> Result<T> {
    <T as NumCast>::from(num).ok_or(ConversionError::Overflow { target: type_name::<T>() })
}

fn retarget(error: ConversionError, target: &'static str) -> ConversionError {
    match error {
        ConversionError::Overflow { .. } => ConversionError::Overflow { target },
        ConversionError::Underflow { .. } => ConversionError::Underflow { target },
        ConversionError::NotANumber { .. } => ConversionError::NotANumber { target },
    }
}

impl d32 {
    /// Computes `±mantissa × 10^(exponent - 6)` in `T`.
    ///
    /// Fails with `Overflow` if the result does not fit in `T` (it becomes infinite), and for
    /// an encoded infinity; an encoded infinity clamped from below fails with `Underflow`.
    /// NaN becomes `T::nan()`. Small results keep their subnormal value in `T`, and only go to
    /// zero below `T`'s smallest subnormal.
    pub fn to_floating_point<T: Float>(&self) -> Result<T> {
        let target = type_name::<T>();
        match self.classify() {
            Class::Nan => Ok(T::nan()),
            Class::Infinite => {
                trace!("to_floating_point: {:?} is out of range for {}", self, target);
                if self.is_underflow() {
                    Err(ConversionError::Underflow { target })
                } else {
                    Err(ConversionError::Overflow { target })
                }
            }
            Class::Zero => Ok(if self.sign() { -T::zero() } else { T::zero() }),
            Class::Normal => {
                let mantissa: T = cast(self.mantissa())?;
                let ten: T = cast(10u8)?;
                let scale = self.exponent() - (PRECISION as i32 - 1);
                // Powers of ten are exact far longer than their reciprocals, so divide for
                // negative scales.
                let magnitude = if scale >= 0 {
                    mantissa * ten.powi(scale)
                } else {
                    let divisor = ten.powi(-scale);
                    if divisor.is_finite() {
                        mantissa / divisor
                    } else {
                        // the divisor is out of range for `T` even though the quotient may not be
                        let wide = <f64 as From<u32>>::from(self.mantissa()) / 10f64.powi(-scale);
                        trace!("to_floating_point: {:?} scaled through f64 for {}", self, target);
                        cast(wide)?
                    }
                };
                if magnitude.is_infinite() {
                    trace!("to_floating_point: {:?} overflows {}", self, target);
                    return Err(ConversionError::Overflow { target });
                }
                Ok(if self.sign() { -magnitude } else { magnitude })
            }
        }
    }

    /// Converts through `f64`, truncating toward zero.
    ///
    /// Fails with `Overflow` above `T::max_value()`, `Underflow` below `T::min_value()` (so
    /// unsigned targets reject negative values), and `NotANumber` for NaN.
    pub fn to_integral<T: PrimInt>(&self) -> Result<T> {
        let target = type_name::<T>();
        if self.is_nan() {
            return Err(ConversionError::NotANumber { target });
        }
        let value = self
            .to_floating_point::<f64>()
            .map_err(|error| retarget(error, target))?;
        match <T as NumCast>::from(value.trunc()) {
            Some(integral) => Ok(integral),
            None => {
                trace!("to_integral: {} is out of range for {}", value, target);
                if value < 0.0 {
                    Err(ConversionError::Underflow { target })
                } else {
                    Err(ConversionError::Overflow { target })
                }
            }
        }
    }

    /// Converts to any type implementing [`FromDecimal`].
    pub fn to<T: FromDecimal>(&self) -> Result<T> {
        T::from_decimal(*self)
    }

    pub fn to_f32(&self) -> Result<f32> {
        self.to_floating_point()
    }

    pub fn to_f64(&self) -> Result<f64> {
        self.to_floating_point()
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.to_integral()
    }

    pub fn to_u32(&self) -> Result<u32> {
        self.to_integral()
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.to_integral()
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.to_integral()
    }

    pub fn to_isize(&self) -> Result<isize> {
        self.to_integral()
    }

    pub fn to_usize(&self) -> Result<usize> {
        self.to_integral()
    }
}

macro_rules! impl_float_conversions {
    ($($t:ty)*) => {$(
        impl FromDecimal for $t {
            fn from_decimal(value: d32) -> Result<$t> {
                value.to_floating_point()
            }
        }

        impl TryFrom<d32> for $t {
            type Error = ConversionError;

            fn try_from(value: d32) -> Result<$t> {
                value.to_floating_point()
            }
        }
    )*};
}

macro_rules! impl_integral_conversions {
    ($($t:ty)*) => {$(
        impl FromDecimal for $t {
            fn from_decimal(value: d32) -> Result<$t> {
                value.to_integral()
            }
        }

        impl TryFrom<d32> for $t {
            type Error = ConversionError;

            fn try_from(value: d32) -> Result<$t> {
                value.to_integral()
            }
        }

        /// Compares after projecting the decimal onto the integer type; a decimal that cannot be
        /// projected is never equal.
        impl PartialEq<$t> for d32 {
            fn eq(&self, other: &$t) -> bool {
                self.to_integral::<$t>().map_or(false, |value| value == *other)
            }
        }

        impl PartialEq<d32> for $t {
            fn eq(&self, other: &d32) -> bool {
                other == self
            }
        }
    )*};
}

impl_float_conversions! { f32 f64 }
impl_integral_conversions! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use super::*;
    use crate::decimal::consts;
    use rstest::rstest;

    fn ten_to_float<T: Float + Debug>() {
        let ten = d32::new(10, 1);
        let expected: T = cast(10).unwrap();
        assert_eq!(expected, ten.to_floating_point::<T>().unwrap());

        let neg_ten = d32::new(-10, 1);
        assert_eq!(-expected, neg_ten.to_floating_point::<T>().unwrap());
    }

    fn ten_to_signed<T: FromDecimal + NumCast + PartialEq + Debug>() {
        let ten = d32::new(10, 1);
        let expected: T = cast(10).unwrap();
        assert_eq!(expected, ten.to::<T>().unwrap());

        let neg_ten = d32::new(-10, 1);
        let expected: T = cast(-10).unwrap();
        assert_eq!(expected, neg_ten.to::<T>().unwrap());
    }

    fn ten_to_unsigned<T: FromDecimal + NumCast + PartialEq + Debug>() {
        let ten = d32::new(10, 1);
        let expected: T = cast(10).unwrap();
        assert_eq!(expected, ten.to::<T>().unwrap());

        let neg_ten = d32::new(-10, 1);
        let actual = neg_ten.to::<T>();
        assert_eq!(Err(ConversionError::Underflow { target: type_name::<T>() }), actual);
    }

    fn huge_to<T: FromDecimal + PartialEq + Debug>() {
        let huge = d32::new(10, 60);
        let expected = Err(ConversionError::Overflow { target: type_name::<T>() });
        assert_eq!(expected, huge.to::<T>());
    }

    #[test]
    fn test_to_floating_point() {
        ten_to_float::<f32>();
        ten_to_float::<f64>();

        assert_eq!(Ok(10.0), d32::new(10, 1).to_f32());
        assert_eq!(Ok(-10.0), d32::new(-10, 1).to_f64());
        assert_eq!(Ok(1.5), d32::new(15, 0).to_f64());
        assert_eq!(Ok(1.234567e-4), d32::new(1_234_567, -4).to_f64());
        assert_eq!(Ok(9_999_999.0), d32::new(9_999_999, 6).to_f32());
    }

    #[test]
    fn test_to_floating_point_overflow() {
        let huge = d32::new(10, 60);
        assert_eq!(Err(ConversionError::Overflow { target: "f32" }), huge.to_f32());

        // f64 reaches well past the largest finite d32
        let actual = huge.to_f64().unwrap();
        assert!((actual - 1e60).abs() / 1e60 < 1e-12);
        assert!(consts::MAX_VALUE.to_f64().unwrap().is_finite());

        assert_eq!(Err(ConversionError::Overflow { target: "f64" }), consts::INFINITY.to_f64());
        assert_eq!(Err(ConversionError::Overflow { target: "f32" }), consts::NEG_INFINITY.to_f32());

        let tiny = d32::new(1, -64);
        assert_eq!(Err(ConversionError::Underflow { target: "f64" }), tiny.to_f64());
    }

    #[test]
    fn test_to_floating_point_special_values() {
        let zero = consts::ZERO.to_f64().unwrap();
        assert_eq!(0.0, zero);
        assert!(zero.is_sign_positive());

        let neg_zero = (-consts::ZERO).to_f32().unwrap();
        assert_eq!(0.0, neg_zero);
        assert!(neg_zero.is_sign_negative());

        assert!(consts::NAN.to_f64().unwrap().is_nan());
        assert!(consts::SNAN.to_f32().unwrap().is_nan());

        // too small for f32 goes to zero
        assert_eq!(Ok(0.0), consts::MIN_POSITIVE.to_f32());
    }

    #[test]
    fn test_to_f32_past_largest_power_of_ten() {
        // 10^41 is infinite in f32, 1e-35 is not
        assert_eq!(Ok(1e-35f32), d32::new(1, -35).to_f32());
        assert_eq!(Ok(-1e-35f32), d32::new(-1, -35).to_f32());
        assert_eq!(Ok(1.234567e-36f32), d32::new(1_234_567, -36).to_f32());

        let subnormal = d32::new(5, -40).to_f32().unwrap();
        assert_eq!(5e-40f32, subnormal);
        assert!(subnormal.is_subnormal());
    }

    #[test]
    fn test_to_integral() {
        ten_to_signed::<i8>();
        ten_to_signed::<i16>();
        ten_to_signed::<i32>();
        ten_to_signed::<i64>();
        ten_to_signed::<i128>();
        ten_to_signed::<isize>();

        ten_to_unsigned::<u8>();
        ten_to_unsigned::<u16>();
        ten_to_unsigned::<u32>();
        ten_to_unsigned::<u64>();
        ten_to_unsigned::<u128>();
        ten_to_unsigned::<usize>();
    }

    #[test]
    fn test_to_integral_overflow() {
        huge_to::<f32>();
        huge_to::<i8>();
        huge_to::<i32>();
        huge_to::<i64>();
        huge_to::<i128>();
        huge_to::<u32>();
        huge_to::<u64>();
        huge_to::<u128>();
        huge_to::<usize>();

        assert_eq!(Err(ConversionError::Overflow { target: "u8" }), d32::new(256, 2).to::<u8>());
        assert_eq!(Ok(255u8), d32::new(255, 2).to::<u8>());
        assert_eq!(Err(ConversionError::Underflow { target: "i8" }), d32::new(-129, 2).to::<i8>());

        assert_eq!(Err(ConversionError::Overflow { target: "i64" }), consts::INFINITY.to_i64());
        assert_eq!(Err(ConversionError::Underflow { target: "i32" }), d32::new(-1, -70).to_i32());
        assert_eq!(Err(ConversionError::NotANumber { target: "u64" }), consts::NAN.to_u64());
    }

    #[rstest]
    #[case(d32::new(15, 0), 1)]
    #[case(d32::new(-15, 0), -1)]
    #[case(d32::new(9_999_999, 0), 9)]
    #[case(d32::new(5, -1), 0)]
    #[case(d32::new(1_234_567, 6), 1_234_567)]
    #[case(consts::ZERO, 0)]
    fn test_to_integral_truncates(#[case] value: d32, #[case] expected: i64) {
        assert_eq!(Ok(expected), value.to_i64());
    }

    #[test]
    fn test_to_unsigned_truncates_toward_zero() {
        // -0.5 truncates to zero, which every unsigned type holds
        assert_eq!(Ok(0), d32::new(-5, -1).to_u32());
        assert_eq!(Ok(0), d32::new(-5, -1).to_usize());
    }

    #[test]
    fn test_try_from() {
        let ten = d32::new(10, 1);
        assert_eq!(Ok(10i32), i32::try_from(ten));
        assert_eq!(Ok(10u64), u64::try_from(ten));
        assert_eq!(Ok(10.0f64), f64::try_from(ten));

        let neg_ten = d32::new(-10, 1);
        let actual: Result<u16> = neg_ten.try_into();
        assert_eq!(Err(ConversionError::Underflow { target: "u16" }), actual);
    }

    #[test]
    fn test_eq_integer() {
        let ten = d32::new(10, 1);
        assert!(ten == 10i32);
        assert!(ten == 10u64);
        assert!(10usize == ten);
        assert!(ten != 11i32);

        let neg_ten = d32::new(-10, 1);
        assert!(neg_ten == -10i64);
        assert!(neg_ten != 10u32);

        let huge = d32::new(10, 60);
        assert!(huge != i64::MAX);
        assert!(consts::NAN != 0i32);

        // projection truncates first
        assert!(d32::new(15, 0) == 1i32);
    }
}
