mod conversion_error;
mod convert;
mod decimal32;
mod limits;

pub use self::conversion_error::{ConversionError, Result};
pub use self::convert::FromDecimal;
pub use self::decimal32::{
    consts, d32, Class, Decimal32, SignRule, INFINITY_MANTISSA, MAX_EXPONENT, MAX_MANTISSA,
    MIN_EXPONENT, MIN_MANTISSA, PRECISION,
};
pub use self::limits::DecimalLimits;
