//! Sign functions for generic math code over decimal floating point types.

use crate::traits::DecimalFloatingPoint;

/// Returns true if the sign bit of `x` is set, including for negative zero and NaN.
pub fn signbit<T: DecimalFloatingPoint>(x: T) -> bool {
    x.sign()
}

/// Returns `magnitude` with the sign of `sign`.
pub fn copysign<T: DecimalFloatingPoint>(magnitude: T, sign: T) -> T {
    magnitude.with_sign(sign.sign())
}
