// ============================================================================
// Numeric Module
// 256-bit bounded signed integer for ledger arithmetic
// ============================================================================
//
// This module provides:
// - Int: signed integer with magnitude bounded to 256 bits
// - NullableInt: an Int or nil, where nil is distinct from zero
// - ArithmeticError / CodecError: checked arithmetic and decoding failures
//
// Design principles:
// - Every result is re-checked against the 256-bit bound
// - Checked methods return Result; operators panic naming the operation
// - All encodings are the canonical decimal string, never binary integers
// - Decoders reject out-of-range values, not just encoders

mod codec;
mod errors;
mod int;
#[cfg(feature = "serde")]
mod json;
mod nullable;
mod parse;

pub use errors::{ArithmeticError, ArithmeticResult, CodecError, FormatError};
pub use int::{max_int, min_int, Int, MAX_BIT_LEN};
pub use nullable::NullableInt;
