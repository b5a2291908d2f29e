//! BitArrayBitvec - Naive reference bit array using the bitvec crate.
//!
//! Mirrors the public surface of [`BitArray`] but rotates one bit at a time,
//! so tests and benchmarks can check the word-level engine against it.
//!
//! # Design Notes
//!
//! - Uses `BitVec<u8, Lsb0>` for storage (same in-byte order as `BitArray`)
//! - `rotate` is O(length × amount); never use it outside tests and benches

use crate::bitarray::BitArray;
use crate::utils::modulo;
use bitvec::prelude::*;

/// Reference bit array backed by `bitvec`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArrayBitvec {
    /// Underlying bitvec storage with u8 elements, LSB0 ordering
    bv: BitVec<u8, Lsb0>,
}

impl BitArrayBitvec {
    /// Create a new BitArrayBitvec with `bit_count` bits, all initialized to 0.
    #[inline]
    pub fn new(bit_count: usize) -> Self {
        Self {
            bv: BitVec::repeat(false, bit_count),
        }
    }

    /// Get total number of bits.
    #[inline(always)]
    pub fn bit_count(&self) -> usize {
        self.bv.len()
    }

    /// Get bit at position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.bv.len(),
            "bit index {} out of bounds (bit count: {})",
            index,
            self.bv.len()
        );
        self.bv[index]
    }

    /// Set bit at position `index` to `value`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(
            index < self.bv.len(),
            "bit index {} out of bounds (bit count: {})",
            index,
            self.bv.len()
        );
        self.bv.set(index, value);
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// Rotate `[offset, offset + length)` by `amount` (positive = right),
    /// one bit at a time.
    pub fn rotate(&mut self, offset: usize, length: usize, amount: isize) {
        assert!(offset + length <= self.bv.len());
        if length == 0 {
            return;
        }
        let left = (length - modulo(amount, length)) % length;
        for _ in 0..left {
            self.rotate_left_one(offset, length);
        }
    }

    /// Rotate `[offset, offset + length)` left by a single bit: the first bit
    /// moves to the end and everything else shifts down.
    pub fn rotate_left_one(&mut self, offset: usize, length: usize) {
        assert!(offset + length <= self.bv.len());
        if length == 0 {
            return;
        }
        let first = self.bv[offset];
        for i in offset..offset + length - 1 {
            let next = self.bv[i + 1];
            self.bv.set(i, next);
        }
        self.bv.set(offset + length - 1, first);
    }

    /// Reverse the bits in `[offset, offset + length)`.
    pub fn reverse(&mut self, offset: usize, length: usize) {
        assert!(offset + length <= self.bv.len());
        self.bv[offset..offset + length].reverse();
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Count number of set bits.
    #[inline]
    pub fn num_set(&self) -> usize {
        self.bv.count_ones()
    }

    /// Get all bit values, index 0 first.
    pub fn to_bools(&self) -> Vec<bool> {
        self.bv.iter().by_vals().collect()
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.bv.capacity() / 8
    }
}

impl From<&BitArray> for BitArrayBitvec {
    fn from(ba: &BitArray) -> Self {
        Self {
            bv: ba.to_bools().into_iter().collect(),
        }
    }
}

impl PartialEq<BitArray> for BitArrayBitvec {
    fn eq(&self, other: &BitArray) -> bool {
        self.bit_count() == other.bit_count()
            && self.bv.iter().by_vals().enumerate().all(|(i, b)| other.get(i) == b)
    }
}
