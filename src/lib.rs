//! Everybit - Packed Bit Array with Fast Range Rotation
//!
//! Everybit provides a compact bit-vector type with constant-overhead indexed
//! access and in-place rotation of arbitrary sub-ranges.
//!
//! # Key Characteristics
//!
//! - 8 bits per byte, plus one word of trailing padding
//! - Range reversal in 64-bit blocks using unaligned word loads and stores
//! - Rotation by three reversals: O(length) time, O(1) extra space
//!
//! # Examples
//!
//! ## Basic BitArray Usage
//!
//! ```
//! use everybit::BitArray;
//!
//! let mut ba = BitArray::new(16).unwrap();
//! ba.set(0, true);
//! ba.set(1, true);
//! assert!(ba.get(1));
//! assert_eq!(ba.num_set(), 2);
//!
//! // Rotate the first 8 bits right by 3
//! ba.rotate(0, 8, 3);
//! assert_eq!(ba.to_string(), "0001100000000000");
//! ```
//!
//! ## Random Data
//!
//! ```
//! use everybit::BitArray;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut ba = BitArray::new(130).unwrap();
//! ba.fill_random_with(&mut rng);
//!
//! let original = ba.clone();
//! ba.reverse(0, 130);
//! ba.reverse(0, 130);
//! assert_eq!(ba, original);
//! ```
//!
//! # Safety
//!
//! Index and range checks are `assert!`s: out-of-range access panics in
//! every build. The word-level primitives use unaligned raw-pointer access,
//! kept in bounds by the trailing padding of the buffer.

pub mod bitarray;
pub mod bitarray_bitvec;
pub mod error;
pub mod utils;

// Re-exports for convenient access
pub use bitarray::{BitArray, PADDING_BYTES, WORD_BITS};
pub use bitarray_bitvec::BitArrayBitvec;
pub use error::{EverybitError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Everybit";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Everybit"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _ba = BitArray::new(32).unwrap();
        let _reference = BitArrayBitvec::new(32);
        let _result: Result<()> = Ok(());
        assert_eq!(WORD_BITS, 64);
        assert_eq!(PADDING_BYTES, 8);
    }
}
