use num::Bounded;

use super::decimal32::{consts, d32, MAX_EXPONENT, MIN_EXPONENT, PRECISION};

/// Describes the range and special values of a decimal floating point type, so generic code can
/// reason about it without hardcoding constants.
///
/// Exponents follow the crate's convention: they are the power of ten of the leading digit.
pub trait DecimalLimits: Sized {
    const RADIX: u32;
    /// Significant digits in the radix.
    const DIGITS: u32;
    /// Decimal digits that survive a round trip through the type.
    const DIGITS10: u32;
    /// Decimal digits needed to tell every value apart.
    const MAX_DIGITS10: u32;
    const MIN_EXPONENT: i32;
    const MAX_EXPONENT: i32;
    const MIN_EXPONENT10: i32;
    const MAX_EXPONENT10: i32;
    const IS_SIGNED: bool;
    const IS_EXACT: bool;
    const HAS_INFINITY: bool;
    const HAS_QUIET_NAN: bool;
    const HAS_SIGNALING_NAN: bool;

    /// Smallest positive normalized value.
    fn min_positive() -> Self;
    /// Largest finite value.
    fn max_finite() -> Self;
    /// Most negative finite value.
    fn lowest() -> Self;
    /// Difference between 1 and the next representable value.
    fn epsilon() -> Self;
    fn infinity() -> Self;
    fn quiet_nan() -> Self;
    fn signaling_nan() -> Self;
}

impl DecimalLimits for d32 {
    const RADIX: u32 = 10;
    const DIGITS: u32 = PRECISION;
    const DIGITS10: u32 = PRECISION;
    const MAX_DIGITS10: u32 = PRECISION;
    const MIN_EXPONENT: i32 = MIN_EXPONENT;
    const MAX_EXPONENT: i32 = MAX_EXPONENT;
    const MIN_EXPONENT10: i32 = MIN_EXPONENT;
    const MAX_EXPONENT10: i32 = MAX_EXPONENT;
    const IS_SIGNED: bool = true;
    const IS_EXACT: bool = false;
    const HAS_INFINITY: bool = true;
    const HAS_QUIET_NAN: bool = true;
    const HAS_SIGNALING_NAN: bool = true;

    fn min_positive() -> d32 {
        consts::MIN_POSITIVE
    }

    fn max_finite() -> d32 {
        consts::MAX_VALUE
    }

    fn lowest() -> d32 {
        consts::MIN_VALUE
    }

    fn epsilon() -> d32 {
        consts::EPSILON
    }

    fn infinity() -> d32 {
        consts::INFINITY
    }

    fn quiet_nan() -> d32 {
        consts::QNAN
    }

    fn signaling_nan() -> d32 {
        consts::SNAN
    }
}

impl Bounded for d32 {
    fn min_value() -> d32 {
        consts::MIN_VALUE
    }

    fn max_value() -> d32 {
        consts::MAX_VALUE
    }
}
