/// Returns the number of digits of `num` in the given radix. Zero has one digit.
pub fn num_digits(mut num: u64, radix: u64) -> u32 {
    let mut digits = 1;
    while num >= radix {
        num /= radix;
        digits += 1;
    }
    digits
}

pub fn num_decimal_digits(num: u64) -> u32 {
    num_digits(num, 10)
}

/// `10^exp`. `exp` must be at most 19.
pub fn pow10(exp: u32) -> u64 {
    num::pow(10u64, exp as usize)
}

/// Truncates `num` to at most `digits` decimal digits, dropping the trailing ones.
///
/// Returns the truncated value and the number of digits that were dropped.
pub fn truncate_digits(num: u64, digits: u32) -> (u64, u32) {
    let actual = num_decimal_digits(num);
    if actual <= digits {
        (num, 0)
    } else {
        let dropped = actual - digits;
        (num / pow10(dropped), dropped)
    }
}
