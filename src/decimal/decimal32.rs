use std::cmp;
use std::fmt;
use std::mem;
use std::ops;

use log::trace;
use num::One;

use crate::bit_ops;
use crate::num_ops;

/// Number of significant decimal digits carried by the coefficient.
pub const PRECISION: u32 = 7;

pub const MIN_EXPONENT: i32 = -63;
pub const MAX_EXPONENT: i32 = 63;

pub const MIN_MANTISSA: u32 = 1_000_000;
pub const MAX_MANTISSA: u32 = 9_999_999;

/// Coefficient reserved for values whose exponent fell outside `MIN_EXPONENT..=MAX_EXPONENT`.
pub const INFINITY_MANTISSA: u32 = 0xff_ffff;
const SIGNALING_NAN_MANTISSA: u32 = 0x7f_ffff;
/// The one exponent field value no finite value uses.
const NAN_EXPONENT: i32 = -64;

// 0b0_0000000_000000000000000000000000
//   s exponent mantissa
const MANTISSA_START: u32 = 0;
const MANTISSA_LEN: u32 = 24;
const EXPONENT_START: u32 = 24;
const EXPONENT_LEN: u32 = 7;
const SIGN_BIT: u32 = 31;
const SIGNALING_NAN_QUIET_BIT: u32 = 23;

/// A 32-bit decimal number with 7 digits of precision.
///
/// The value of a `d32` is `±mantissa × 10^(exponent - 6)`, i.e. the exponent is the power of ten
/// of the leading digit. The packed word holds the mantissa in bits 0-23, the exponent as a 7-bit
/// two's complement integer in bits 24-30, and the sign in bit 31.
///
/// Every non-zero finite `d32` built through [`d32::new`] has a mantissa between 1,000,000 and
/// 9,999,999 and an exponent between -63 and 63. Values whose exponent falls outside that range
/// are stored as an encoded infinity: the all-ones mantissa `0xffffff`, with the exponent clamped
/// to the bound that was crossed. The one clamped to -63 stands for a magnitude too small to
/// represent: it orders between zero and [`consts::MIN_POSITIVE`], prints as `0.000000e-63`, and
/// fails conversions with `Underflow`.
#[allow(non_camel_case_types)]
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct d32 {
    bits: u32,
}

/// CamelCase alias for `d32`.
pub type Decimal32 = d32;

pub mod consts {
    use super::{
        d32, INFINITY_MANTISSA, MAX_EXPONENT, MAX_MANTISSA, MIN_EXPONENT, MIN_MANTISSA,
        NAN_EXPONENT, PRECISION, SIGNALING_NAN_MANTISSA,
    };

    pub const ZERO: d32 = d32 { bits: 0 };
    pub const ONE: d32 = d32::from_parts(false, MIN_MANTISSA, 0);

    /// Largest finite value, 9.999999e63.
    pub const MAX_VALUE: d32 = d32::from_parts(false, MAX_MANTISSA, MAX_EXPONENT);
    /// Smallest finite value, -9.999999e63.
    pub const MIN_VALUE: d32 = d32::from_parts(true, MAX_MANTISSA, MAX_EXPONENT);
    /// Smallest positive normalized value, 1e-63.
    pub const MIN_POSITIVE: d32 = d32::from_parts(false, MIN_MANTISSA, MIN_EXPONENT);
    /// Difference between 1 and the next representable value.
    pub const EPSILON: d32 = d32::from_parts(false, MIN_MANTISSA, 1 - PRECISION as i32);

    pub const INFINITY: d32 = d32::from_parts(false, INFINITY_MANTISSA, MAX_EXPONENT);
    pub const NEG_INFINITY: d32 = d32::from_parts(true, INFINITY_MANTISSA, MAX_EXPONENT);
    pub const QNAN: d32 = d32::from_parts(false, INFINITY_MANTISSA, NAN_EXPONENT);
    pub const SNAN: d32 = d32::from_parts(false, SIGNALING_NAN_MANTISSA, NAN_EXPONENT);
    pub const NAN: d32 = QNAN;
}

/// The category a `d32` falls into, derived from its packed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Zero,
    Normal,
    /// The reserved all-ones mantissa: the value's exponent was out of range.
    Infinite,
    Nan,
}

/// How [`d32::mul_with`] derives the sign of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignRule {
    /// The product is negative if exactly one operand is negative.
    #[default]
    ExclusiveOr,
    /// The product is negative only if both operands are negative. This agrees with
    /// `ExclusiveOr` only when neither operand is negative.
    Conjunction,
}

impl d32 {
    /// Creates a d32 from a coefficient and the power of ten of its leading digit.
    ///
    /// Coefficients with more than 7 digits are truncated, each dropped digit incrementing the
    /// exponent. Coefficients with fewer than 7 digits are scaled up without touching the
    /// exponent, so `d32::new(10, 1)` and `d32::new(1000000, 1)` are both ten.
    ///
    /// This never fails: an exponent above 63 or below -63 produces an encoded infinity of the
    /// coefficient's sign, and a zero coefficient produces positive zero.
    pub const fn new(coefficient: i64, exponent: i32) -> d32 {
        let sign = coefficient < 0;
        let mut coefficient = coefficient.unsigned_abs();
        if coefficient == 0 {
            return consts::ZERO;
        }

        let mut exponent = exponent;
        while coefficient > MAX_MANTISSA as u64 {
            coefficient /= 10;
            exponent = exponent.saturating_add(1);
        }

        if exponent > MAX_EXPONENT {
            d32::from_parts(sign, INFINITY_MANTISSA, MAX_EXPONENT)
        } else if exponent < MIN_EXPONENT {
            d32::from_parts(sign, INFINITY_MANTISSA, MIN_EXPONENT)
        } else {
            d32::from_parts(sign, coefficient as u32, exponent)
        }
    }

    /// Creates a d32 from fields that are already in range, scaling the mantissa up to 7 digits.
    ///
    /// Unlike [`d32::new`], the mantissa is never scaled down and the exponent is never clamped.
    /// The caller guarantees `mantissa <= 0xffffff` and `-64 <= exponent <= 63`; out-of-range
    /// fields are only caught by debug assertions and are otherwise truncated to their bit width.
    /// A zero mantissa always yields a zero exponent.
    pub const fn from_parts(sign: bool, mantissa: u32, exponent: i32) -> d32 {
        debug_assert!(mantissa <= INFINITY_MANTISSA);
        debug_assert!(exponent >= NAN_EXPONENT && exponent <= MAX_EXPONENT);

        if mantissa == 0 {
            return d32::pack(sign, 0, 0);
        }
        let mut mantissa = mantissa;
        while mantissa < MIN_MANTISSA {
            mantissa *= 10;
        }
        d32::pack(sign, mantissa, exponent)
    }

    /// Returns a d32 with the exact bits passed in through `bits`.
    pub const fn from_bits(bits: u32) -> d32 {
        d32 { bits }
    }

    pub const fn to_bits(self) -> u32 {
        self.bits
    }

    const fn pack(sign: bool, mantissa: u32, exponent: i32) -> d32 {
        let mut bits = bit_ops::set_bits(0, MANTISSA_START, MANTISSA_LEN, mantissa);
        bits = bit_ops::set_bits(bits, EXPONENT_START, EXPONENT_LEN, exponent as u32);
        if sign {
            bits = bit_ops::set_bit(bits, SIGN_BIT);
        }
        d32 { bits }
    }

    pub const fn mantissa(&self) -> u32 {
        bit_ops::get_bits(self.bits, MANTISSA_START, MANTISSA_LEN)
    }

    pub const fn exponent(&self) -> i32 {
        let field = bit_ops::get_bits(self.bits, EXPONENT_START, EXPONENT_LEN);
        bit_ops::sign_extend(field, EXPONENT_LEN)
    }

    /// Returns true if the sign bit is set.
    pub const fn sign(&self) -> bool {
        bit_ops::test_bit(self.bits, SIGN_BIT)
    }

    /// Storage size in bytes, always 4.
    pub const fn size(&self) -> usize {
        mem::size_of::<d32>()
    }

    pub const fn classify(&self) -> Class {
        if self.exponent() == NAN_EXPONENT {
            Class::Nan
        } else if self.mantissa() == INFINITY_MANTISSA {
            Class::Infinite
        } else if self.mantissa() == 0 {
            Class::Zero
        } else {
            Class::Normal
        }
    }

    pub const fn is_zero(&self) -> bool {
        matches!(self.classify(), Class::Zero)
    }

    pub const fn is_infinite(&self) -> bool {
        matches!(self.classify(), Class::Infinite)
    }

    pub const fn is_finite(&self) -> bool {
        matches!(self.classify(), Class::Zero | Class::Normal)
    }

    pub const fn is_nan(&self) -> bool {
        matches!(self.classify(), Class::Nan)
    }

    /// Returns true for the encoded infinity clamped from below.
    pub const fn is_underflow(&self) -> bool {
        self.is_infinite() && self.exponent() < 0
    }

    /// Returns true for the NaN encoding whose top mantissa bit is clear.
    pub const fn is_signaling_nan(&self) -> bool {
        self.is_nan() && !bit_ops::test_bit(self.bits, SIGNALING_NAN_QUIET_BIT)
    }

    /// Unary plus: returns the value unchanged.
    pub const fn plus(self) -> d32 {
        self
    }

    /// Returns a copy of this decimal with the sign bit turned off.
    pub const fn abs(self) -> d32 {
        d32 { bits: bit_ops::clear_bit(self.bits, SIGN_BIT) }
    }

    /// Returns a copy of this decimal whose sign bit is `negative`.
    pub const fn with_sign(self, negative: bool) -> d32 {
        let bits = if negative {
            bit_ops::set_bit(self.bits, SIGN_BIT)
        } else {
            bit_ops::clear_bit(self.bits, SIGN_BIT)
        };
        d32 { bits }
    }

    /// Multiplies two decimals, deriving the sign of the product with `rule`.
    ///
    /// The coefficient product is truncated back to 7 digits. A product whose exponent leaves
    /// `MIN_EXPONENT..=MAX_EXPONENT` becomes an encoded infinity, NaN operands yield NaN, and an
    /// infinite operand yields an infinity.
    pub fn mul_with(self, rhs: d32, rule: SignRule) -> d32 {
        let sign = match rule {
            SignRule::ExclusiveOr => self.sign() ^ rhs.sign(),
            SignRule::Conjunction => self.sign() && rhs.sign(),
        };

        match (self.classify(), rhs.classify()) {
            (Class::Nan, _) | (_, Class::Nan) => consts::NAN,
            (Class::Infinite, Class::Infinite) => {
                let exponent = if self.exponent() < 0 && rhs.exponent() < 0 {
                    MIN_EXPONENT
                } else {
                    MAX_EXPONENT
                };
                d32::from_parts(sign, INFINITY_MANTISSA, exponent)
            }
            (Class::Infinite, _) => d32::from_parts(sign, INFINITY_MANTISSA, self.exponent()),
            (_, Class::Infinite) => d32::from_parts(sign, INFINITY_MANTISSA, rhs.exponent()),
            (Class::Zero, _) | (_, Class::Zero) => d32::from_parts(sign, 0, 0),
            (Class::Normal, Class::Normal) => mul_finite(sign, self, rhs),
        }
    }

    /// Key ordering values of the same sign by magnitude: zero, underflow, finite, infinite.
    fn magnitude_key(&self) -> (u8, i32, u32) {
        let rank = match self.classify() {
            Class::Zero => 0,
            Class::Infinite if self.is_underflow() => 1,
            Class::Normal => 2,
            Class::Infinite | Class::Nan => 3,
        };
        (rank, self.exponent(), self.mantissa())
    }
}

fn mul_finite(sign: bool, lhs: d32, rhs: d32) -> d32 {
    let lhs_mantissa = u64::from(lhs.mantissa());
    let rhs_mantissa = u64::from(rhs.mantissa());
    let product = lhs_mantissa * rhs_mantissa;

    let (mantissa, _) = num_ops::truncate_digits(product, PRECISION);
    // Each exponent names the leading digit of its mantissa, so the product's leading digit moves
    // by however many digits the product has beyond the two operands.
    let carry = num_ops::num_decimal_digits(product) as i32
        - num_ops::num_decimal_digits(lhs_mantissa) as i32
        - num_ops::num_decimal_digits(rhs_mantissa) as i32
        + 1;
    let exponent = lhs.exponent() + rhs.exponent() + carry;

    if exponent > MAX_EXPONENT {
        trace!("mul: {:?} * {:?} overflows, exponent={}", lhs, rhs, exponent);
        d32::from_parts(sign, INFINITY_MANTISSA, MAX_EXPONENT)
    } else if exponent < MIN_EXPONENT {
        trace!("mul: {:?} * {:?} underflows, exponent={}", lhs, rhs, exponent);
        d32::from_parts(sign, INFINITY_MANTISSA, MIN_EXPONENT)
    } else {
        d32::from_parts(sign, mantissa as u32, exponent)
    }
}

impl cmp::PartialOrd for d32 {
    fn partial_cmp(&self, other: &d32) -> Option<cmp::Ordering> {
        if self.bits == other.bits {
            return Some(cmp::Ordering::Equal);
        }
        // if either party is NaN, then the result is None (uncomparable)
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if self.sign() != other.sign() {
            return if self.sign() {
                Some(cmp::Ordering::Less)
            } else {
                Some(cmp::Ordering::Greater)
            };
        }
        let ordering = self.magnitude_key().cmp(&other.magnitude_key());
        if self.sign() {
            Some(ordering.reverse())
        } else {
            Some(ordering)
        }
    }
}

impl ops::Neg for d32 {
    type Output = d32;

    fn neg(self) -> d32 {
        // Flip the MSB (most significant bit)
        d32 { bits: bit_ops::toggle_bit(self.bits, SIGN_BIT) }
    }
}

/// Same as `Neg`: flips the sign.
impl ops::Not for d32 {
    type Output = d32;

    fn not(self) -> d32 {
        -self
    }
}

impl ops::Mul<d32> for d32 {
    type Output = d32;

    fn mul(self, other: d32) -> d32 {
        self.mul_with(other, SignRule::default())
    }
}

impl ops::MulAssign<d32> for d32 {
    fn mul_assign(&mut self, other: d32) {
        *self = *self * other;
    }
}

impl One for d32 {
    fn one() -> d32 {
        consts::ONE
    }
}

impl fmt::Debug for d32 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classify() {
            Class::Nan if self.is_signaling_nan() => formatter.write_str("consts::SNAN"),
            Class::Nan => formatter.write_str("consts::NAN"),
            Class::Infinite if *self == consts::INFINITY => {
                formatter.write_str("consts::INFINITY")
            }
            Class::Infinite if *self == consts::NEG_INFINITY => {
                formatter.write_str("consts::NEG_INFINITY")
            }
            _ => formatter
                .debug_struct("d32")
                .field("is_negative", &self.sign())
                .field("exponent", &self.exponent())
                .field("mantissa", &self.mantissa())
                .finish(),
        }
    }
}

/// Formats as `[-]D.DDDDDDeE`, e.g. `-1.000000e1` for negative ten.
impl fmt::Display for d32 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign() { "-" } else { "" };
        match self.classify() {
            Class::Nan => formatter.write_str("NaN"),
            Class::Infinite if self.is_underflow() => {
                write!(formatter, "{}0.000000e{}", sign, MIN_EXPONENT)
            }
            Class::Infinite => write!(formatter, "{}inf", sign),
            Class::Zero | Class::Normal => {
                let digits = format!("{:0width$}", self.mantissa(), width = PRECISION as usize);
                let (leading, rest) = digits.split_at(1);
                write!(formatter, "{}{}.{}e{}", sign, leading, rest, self.exponent())
            }
        }
    }
}

impl fmt::LowerExp for d32 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}
