/// Returns a mask with the low `len` bits set.
const fn low_mask(len: u32) -> u32 {
    if len >= 32 {
        !0
    } else {
        // !0 is equal to 0xffffffff
        !(!0u32 << len)
    }
}

/// Reads the `len`-bit field that starts at `start`.
///
/// `start` is 0-based from LSB (least significant bit).
pub const fn get_bits(bits: u32, start: u32, len: u32) -> u32 {
    (bits >> start) & low_mask(len)
}

/// Overwrites the `len`-bit field that starts at `start` with the low bits of `value`.
pub const fn set_bits(bits: u32, start: u32, len: u32, value: u32) -> u32 {
    let mask = low_mask(len) << start;
    (bits & !mask) | ((value << start) & mask)
}

pub const fn test_bit(bits: u32, bit_index: u32) -> bool {
    bits & (1 << bit_index) != 0
}

pub const fn set_bit(bits: u32, bit_index: u32) -> u32 {
    let mask = 1 << bit_index;
    bits | mask
}

pub const fn clear_bit(bits: u32, bit_index: u32) -> u32 {
    let mask = !(1 << bit_index);
    bits & mask
}

pub const fn toggle_bit(bits: u32, bit_index: u32) -> u32 {
    let mask = 1 << bit_index;
    bits ^ mask
}

/// Interprets the low `len` bits of `bits` as a two's complement integer.
pub const fn sign_extend(bits: u32, len: u32) -> i32 {
    let shift = 32 - len;
    ((bits << shift) as i32) >> shift
}
