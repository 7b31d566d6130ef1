//! A 32-bit decimal floating point number with 7 digits of precision, for code where base-10
//! rounding matters more than range.
//!
//! ```
//! use decimal32::d32;
//!
//! let ten = d32::new(10, 1);
//! assert_eq!("1.000000e1", ten.to_string());
//! assert_eq!(Ok(10.0), ten.to_f64());
//! assert_eq!(Ok(-100), (-ten * ten).to_i32());
//! ```
//!
//! Construction never fails: extra digits are truncated and out-of-range exponents become an
//! encoded infinity. Conversions to native types return a [`ConversionError`] when the value
//! does not fit. Addition, subtraction, division and string parsing are not provided.

mod bit_ops;
pub mod decimal;
pub mod math;
mod num_ops;
pub mod traits;

#[doc(inline)]
pub use crate::decimal::{consts, d32, ConversionError, Decimal32, DecimalLimits, FromDecimal};
#[doc(inline)]
pub use crate::traits::{is_arithmetic, is_decimal_floating_point, DecimalFloatingPoint, TypeTraits};
