// ============================================================================
// Numeric Errors
// Error types for bounded integer arithmetic and codecs
// ============================================================================

use super::int::MAX_BIT_LEN;
use thiserror::Error as ThisError;

/// Errors returned by the checked arithmetic entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
pub enum ArithmeticError {
    /// Result magnitude needs more than 256 bits
    #[error("integer overflow")]
    Overflow,
    /// Zero divisor in a quotient or modulo
    #[error("divide by zero")]
    DivideByZero,
}

/// Result type alias for checked arithmetic
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Errors raised while decoding (or encoding into a fixed buffer) the
/// canonical string forms of an [`Int`](super::Int).
#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError)]
#[non_exhaustive]
pub enum CodecError {
    /// The text is not a well-formed integer.
    #[error("invalid integer: {text:?}")]
    InvalidInteger { text: String },

    /// The text is a well-formed integer whose magnitude needs more than
    /// [`MAX_BIT_LEN`] bits.
    #[error("integer out of range: {text}; got: {bit_len}, max: {max}", max = MAX_BIT_LEN)]
    OutOfRange { text: String, bit_len: u64 },

    /// Wire bytes are not valid UTF-8.
    #[error("invalid UTF-8 in integer encoding")]
    InvalidUtf8,

    /// The destination buffer cannot hold the encoded value.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

impl CodecError {
    /// True for well-formed input rejected only because of its magnitude.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CodecError::OutOfRange { .. })
    }
}

/// Errors raised by the digit grouping formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError)]
pub enum FormatError {
    #[error("cannot format empty string")]
    EmptyInput,
    #[error("expecting only digits 0-9, but got non-digits in {input:?}")]
    NonDigit { input: String },
}
