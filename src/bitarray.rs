//! BitArray - Packed bit array with word-level range reversal and rotation.
//!
//! Bits are stored 8 per byte. Range reversal moves 64 bits at a time through
//! unaligned word loads and stores, and rotation is built from three
//! reversals, so both run in O(length) time with O(1) extra space.
//!
//! # Design
//!
//! - Uses `Vec<u8>` for storage
//! - Bit indexing: byte_idx = bit_idx / 8, bit_offset = bit_idx % 8 (from the LSB)
//! - The buffer carries `PADDING_BYTES` trailing bytes so that a two-word
//!   read at any in-range bit offset stays inside the allocation
//!
//! # Examples
//!
//! ```
//! use everybit::BitArray;
//!
//! let mut ba: BitArray = "1100 1010 0011 0101".parse().unwrap();
//! ba.rotate(0, 16, 3);
//! assert_eq!(ba.to_string(), "1011100101000110");
//! ```

use crate::error::{EverybitError, Result};
use crate::utils::{bit_mask, modulo, reverse_word};
use rand::Rng;
use std::fmt;
use std::ptr;
use std::str::FromStr;

/// Number of bits moved per word-level load or store
pub const WORD_BITS: usize = 64;

/// Number of bytes in one storage word
const WORD_BYTES: usize = WORD_BITS / 8;

/// Trailing bytes allocated past the last meaningful byte.
///
/// `load_word`/`store_word` touch two adjacent words, so one extra word keeps
/// every access in bounds even when the 64 bits end exactly at `bit_count`.
pub const PADDING_BYTES: usize = WORD_BYTES;

/// Number of bytes needed to hold `bit_count` bits.
#[inline(always)]
const fn bytes_for(bit_count: usize) -> usize {
    bit_count / 8 + (bit_count % 8 != 0) as usize
}

/// Mask keeping the low `n` bits of a byte (`n < 8`).
#[inline(always)]
const fn tail_mask(n: usize) -> u8 {
    (1u8 << n) - 1
}

/// Packed array of bits with in-place sub-range rotation.
///
/// All bit indices are 0-based.
#[derive(Clone)]
pub struct BitArray {
    /// Packed bits followed by `PADDING_BYTES` of padding
    bytes: Vec<u8>,
    /// Number of meaningful bits
    bit_count: usize,
}

impl BitArray {
    /// Create a new BitArray with `bit_count` bits, all initialized to 0.
    ///
    /// Returns `EverybitError::AllocationFailed` if the buffer cannot be
    /// allocated; nothing is left behind in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::BitArray;
    ///
    /// let ba = BitArray::new(1024).unwrap();
    /// assert_eq!(ba.bit_count(), 1024);
    /// assert_eq!(ba.num_set(), 0);
    /// ```
    pub fn new(bit_count: usize) -> Result<Self> {
        let len = bytes_for(bit_count)
            .checked_add(PADDING_BYTES)
            .ok_or(EverybitError::AllocationFailed { bytes: usize::MAX })?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| EverybitError::AllocationFailed { bytes: len })?;
        bytes.resize(len, 0);

        Ok(Self { bytes, bit_count })
    }

    /// Create a BitArray holding `bits`, index 0 first.
    pub fn from_bools(bits: &[bool]) -> Result<Self> {
        let mut ba = Self::new(bits.len())?;
        for (i, &bit) in bits.iter().enumerate() {
            ba.set(i, bit);
        }
        Ok(ba)
    }

    /// Release the buffer and reset the size to 0.
    ///
    /// Calling this on an already released array does nothing.
    pub fn free(&mut self) {
        self.bytes = Vec::new();
        self.bit_count = 0;
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Get number of bits in array.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Get bit at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= bit_count`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.bit_count,
            "bit index {} out of bounds (bit count: {})",
            index,
            self.bit_count
        );
        self.bytes[index >> 3] & bit_mask(index) != 0
    }

    /// Set bit at position `index` to `value`, leaving its neighbours alone.
    ///
    /// # Panics
    ///
    /// Panics if `index >= bit_count`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(
            index < self.bit_count,
            "bit index {} out of bounds (bit count: {})",
            index,
            self.bit_count
        );
        let mask = bit_mask(index);
        let byte = &mut self.bytes[index >> 3];
        *byte = (*byte & !mask) | (if value { mask } else { 0 });
    }

    // =========================================================================
    // Random Operations
    // =========================================================================

    /// Overwrite the whole buffer, padding included, with random data.
    pub fn fill_random(&mut self) {
        self.fill_random_with(&mut rand::thread_rng());
    }

    /// Overwrite the whole buffer with data drawn from `rng`, one 64-bit word
    /// at a time.
    pub fn fill_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for chunk in self.bytes.chunks_mut(WORD_BYTES) {
            let word = rng.gen::<u64>().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Rotate the bits in `[offset, offset + length)` by `amount` places.
    ///
    /// Positive amounts rotate right (towards higher indices), negative
    /// amounts rotate left. Amounts of any magnitude are accepted.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length > bit_count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::BitArray;
    ///
    /// let mut ba: BitArray = "10000000".parse().unwrap();
    /// ba.rotate(0, 8, 2);
    /// assert_eq!(ba.to_string(), "00100000");
    /// ba.rotate(0, 8, -3);
    /// assert_eq!(ba.to_string(), "00000001");
    /// ```
    pub fn rotate(&mut self, offset: usize, length: usize, amount: isize) {
        self.check_range(offset, length);
        if length == 0 || amount == 0 {
            return;
        }

        // Right by k is left by (length - k) mod length.
        let left = (length - modulo(amount, length)) % length;
        if left == 0 {
            return;
        }
        self.rotate_left(offset, length, left);
    }

    /// Reverse the order of the bits in `[offset, offset + length)`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length > bit_count`.
    pub fn reverse(&mut self, offset: usize, length: usize) {
        self.check_range(offset, length);
        self.reverse_range(offset, length);
    }

    fn check_range(&self, offset: usize, length: usize) {
        assert!(
            offset
                .checked_add(length)
                .is_some_and(|end| end <= self.bit_count),
            "bit range [{}, {} + {}) out of bounds (bit count: {})",
            offset,
            offset,
            length,
            self.bit_count
        );
    }

    /// Rotate `[offset, offset + length)` left by `left` (< length) places
    /// as three reversals: (A B) -> (A' B') -> (A' B')' = (B A).
    fn rotate_left(&mut self, offset: usize, length: usize, left: usize) {
        debug_assert!(left < length);
        self.reverse_range(offset, left);
        self.reverse_range(offset + left, length - left);
        self.reverse_range(offset, length);
    }

    /// Reverse a range already known to be in bounds.
    ///
    /// Swaps 64-bit blocks taken from both ends while two disjoint blocks fit,
    /// then finishes the middle (under 128 bits) one pair of bits at a time.
    fn reverse_range(&mut self, offset: usize, length: usize) {
        let blocks = length / (2 * WORD_BITS);

        for k in 0..blocks {
            let i = offset + k * WORD_BITS;
            let j = offset + length - (k + 1) * WORD_BITS;
            let left = self.load_word(i);
            let right = self.load_word(j);
            self.store_word(i, reverse_word(right));
            self.store_word(j, reverse_word(left));
        }

        let done = blocks * WORD_BITS;
        for k in 0..(length / 2 - done) {
            let i = offset + done + k;
            let j = offset + length - done - 1 - k;
            let bit_i = self.get(i);
            let bit_j = self.get(j);
            self.set(i, bit_j);
            self.set(j, bit_i);
        }
    }

    // =========================================================================
    // Word Access
    // =========================================================================

    /// Load the 64 bits starting at `bit_offset` (bit 0 of the result is bit
    /// `bit_offset` of the array).
    #[inline(always)]
    fn load_word(&self, bit_offset: usize) -> u64 {
        debug_assert!(bit_offset + WORD_BITS <= self.bit_count);
        let shift = bit_offset & 7;
        let (lo, hi) = self.raw_words(bit_offset >> 3);
        if shift == 0 {
            lo
        } else {
            (lo >> shift) | (hi << (WORD_BITS - shift))
        }
    }

    /// Store `value` into the 64 bits starting at `bit_offset`. Bits outside
    /// `[bit_offset, bit_offset + 64)` keep their contents.
    #[inline(always)]
    fn store_word(&mut self, bit_offset: usize, value: u64) {
        debug_assert!(bit_offset + WORD_BITS <= self.bit_count);
        let byte = bit_offset >> 3;
        let shift = bit_offset & 7;
        let (mut lo, mut hi) = self.raw_words(byte);
        if shift == 0 {
            lo = value;
        } else {
            let lo_mask = u64::MAX << shift;
            let hi_mask = u64::MAX >> (WORD_BITS - shift);
            lo = (lo & !lo_mask) | ((value << shift) & lo_mask);
            hi = (hi & !hi_mask) | ((value >> (WORD_BITS - shift)) & hi_mask);
        }
        self.set_raw_words(byte, lo, hi);
    }

    /// Read the two little-endian words at byte offsets `byte` and
    /// `byte + 8`.
    #[inline(always)]
    fn raw_words(&self, byte: usize) -> (u64, u64) {
        debug_assert!(byte + 2 * WORD_BYTES <= self.bytes.len());
        // SAFETY: callers only pass `byte = bit_offset / 8` with
        // `bit_offset + 64 <= bit_count`, so
        // `byte + 16 <= bit_count / 8 + 8 <= bytes_for(bit_count) + PADDING_BYTES`,
        // which is `self.bytes.len()`. Unaligned reads of plain integers are
        // valid for any initialized bytes.
        unsafe {
            let ptr = self.bytes.as_ptr().add(byte) as *const u64;
            (
                u64::from_le(ptr::read_unaligned(ptr)),
                u64::from_le(ptr::read_unaligned(ptr.add(1))),
            )
        }
    }

    /// Write the two little-endian words at byte offsets `byte` and
    /// `byte + 8`.
    #[inline(always)]
    fn set_raw_words(&mut self, byte: usize, lo: u64, hi: u64) {
        debug_assert!(byte + 2 * WORD_BYTES <= self.bytes.len());
        // SAFETY: same bound as `raw_words`; `&mut self` guarantees no other
        // reference into the buffer is alive.
        unsafe {
            let ptr = self.bytes.as_mut_ptr().add(byte) as *mut u64;
            ptr::write_unaligned(ptr, lo.to_le());
            ptr::write_unaligned(ptr.add(1), hi.to_le());
        }
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Count number of set bits.
    pub fn num_set(&self) -> usize {
        let full = self.bit_count / 8;
        let mut count: usize = self.bytes[..full]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum();
        let rem = self.bit_count % 8;
        if rem != 0 {
            count += (self.bytes[full] & tail_mask(rem)).count_ones() as usize;
        }
        count
    }

    /// Get all bit values, index 0 first.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.bit_count).map(|i| self.get(i)).collect()
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.bytes.capacity()
    }

    /// Print bits in compact format (for debugging).
    #[allow(dead_code)]
    pub fn print_bits(&self) {
        println!("{{{}}}", self);
    }
}

// =============================================================================
// Comparison and Formatting
// =============================================================================

impl PartialEq for BitArray {
    /// Compare meaningful bits only; padding and bits past `bit_count` in the
    /// last byte are ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.bit_count != other.bit_count {
            return false;
        }
        let full = self.bit_count / 8;
        if self.bytes[..full] != other.bytes[..full] {
            return false;
        }
        let rem = self.bit_count % 8;
        rem == 0 || (self.bytes[full] ^ other.bytes[full]) & tail_mask(rem) == 0
    }
}

impl Eq for BitArray {}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.bit_count {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("bit_count", &self.bit_count)
            .field("bits", &self.to_string())
            .finish()
    }
}

impl FromStr for BitArray {
    type Err = EverybitError;

    /// Parse a string of '0' and '1' characters, index 0 first. ASCII
    /// whitespace is skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => bits.push(false),
                '1' => bits.push(true),
                c if c.is_ascii_whitespace() => {}
                _ => {
                    return Err(EverybitError::InvalidBitString {
                        character,
                        position,
                    })
                }
            }
        }
        Self::from_bools(&bits)
    }
}
