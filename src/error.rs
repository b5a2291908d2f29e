//! Error types for Everybit.
//!
//! Out-of-range indices and ranges are caller bugs and panic; only the
//! conditions below are reported as values, using the `thiserror` crate.

use thiserror::Error;

/// The main error type for Everybit operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EverybitError {
    /// The bit buffer could not be allocated
    #[error("Allocation failed: could not reserve {bytes} bytes")]
    AllocationFailed {
        /// Number of bytes requested (saturated on size overflow)
        bytes: usize,
    },

    /// A bit string contained something other than '0', '1' or whitespace
    #[error("Invalid bit string: unexpected {character:?} at position {position}")]
    InvalidBitString {
        /// The offending character
        character: char,
        /// Character position within the input
        position: usize,
    },
}

/// A specialized `Result` type for Everybit operations.
///
/// This is a type alias for `Result<T, EverybitError>`.
pub type Result<T> = std::result::Result<T, EverybitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EverybitError::AllocationFailed { bytes: 1024 };
        assert_eq!(
            err.to_string(),
            "Allocation failed: could not reserve 1024 bytes"
        );

        let err = EverybitError::InvalidBitString {
            character: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid bit string: unexpected 'x' at position 3"
        );
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
