//! Utility functions for Everybit.
//!
//! Small pure helpers used by the bit-array engine: an always-positive
//! modulo, 64-bit word reversal and the in-byte bit mask.

/// Return `n` modulo `m` as a value in `[0, m)`.
///
/// Unlike `%`, the result is never negative, so a negative dividend wraps
/// around: `modulo(-1, 10) == 9`.
///
/// # Panics
///
/// Panics if `m == 0`.
///
/// # Examples
///
/// ```
/// use everybit::utils::modulo;
///
/// assert_eq!(modulo(-1, 10), 9);
/// assert_eq!(modulo(23, 10), 3);
/// assert_eq!(modulo(-20, 10), 0);
/// ```
#[inline]
pub fn modulo(n: isize, m: usize) -> usize {
    assert!(m > 0, "modulo by zero");
    // i128 holds every isize and usize, so neither the cast nor the
    // remainder can overflow.
    (n as i128).rem_euclid(m as i128) as usize
}

/// Reverse the bit order of a 64-bit word.
///
/// Swaps adjacent 1-bit groups, then 2-bit, 4-bit, 8-bit and 16-bit groups,
/// and finally the two 32-bit halves. Branch-free.
///
/// # Examples
///
/// ```
/// use everybit::utils::reverse_word;
///
/// assert_eq!(reverse_word(1), 1 << 63);
/// assert_eq!(reverse_word(0xF0), 0x0F00_0000_0000_0000);
/// ```
#[inline(always)]
pub const fn reverse_word(mut x: u64) -> u64 {
    x = ((x >> 1) & 0x5555_5555_5555_5555) | ((x & 0x5555_5555_5555_5555) << 1);
    x = ((x >> 2) & 0x3333_3333_3333_3333) | ((x & 0x3333_3333_3333_3333) << 2);
    x = ((x >> 4) & 0x0F0F_0F0F_0F0F_0F0F) | ((x & 0x0F0F_0F0F_0F0F_0F0F) << 4);
    x = ((x >> 8) & 0x00FF_00FF_00FF_00FF) | ((x & 0x00FF_00FF_00FF_00FF) << 8);
    x = ((x >> 16) & 0x0000_FFFF_0000_FFFF) | ((x & 0x0000_FFFF_0000_FFFF) << 16);
    x.rotate_left(32)
}

/// Mask selecting bit `index` within its byte, counted from the LSB.
///
/// `bit_mask(5) == 0b0010_0000`.
#[inline(always)]
pub const fn bit_mask(index: usize) -> u8 {
    1 << (index & 7)
}
