// ============================================================================
// Ledger Int Library
// 256-bit bounded signed integer for ledger accounting
// ============================================================================

//! # Ledger Int
//!
//! A signed integer type for ledgers where no arithmetic may silently
//! overflow, underflow or divide by zero.
//!
//! ## Features
//!
//! - **Hard 256-bit bound** on the magnitude, re-checked after every operation
//! - **Checked and panicking APIs** sharing one implementation per operation
//! - **Canonical decimal encodings** for text, JSON (`serde`) and wire bytes,
//!   all rejecting out-of-range values on decode
//! - **Nil vs. zero** kept apart by [`numeric::NullableInt`]
//! - **Digit grouping** of decimal strings for display
//!
//! ## Example
//!
//! ```rust
//! use ledger_int::prelude::*;
//!
//! let balance = Int::with_decimal(1_500, 6);
//! let fee = Int::from(2_500u64);
//!
//! // Checked path for untrusted operands
//! let remaining = balance.checked_sub(&fee).unwrap();
//! assert_eq!(remaining.to_string(), "1499997500");
//!
//! // Division by zero is an error, not a panic
//! assert_eq!(
//!     remaining.checked_quo(&Int::zero()),
//!     Err(ArithmeticError::DivideByZero)
//! );
//!
//! // Display grouping works on the canonical string
//! assert_eq!(format_grouped(&remaining.to_string()).unwrap(), "1'499'997'500");
//!
//! // Empty wire payloads decode to nil, which is not zero
//! assert!(NullableInt::unmarshal(&[]).unwrap().is_nil());
//! ```

pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        max_int, min_int, ArithmeticError, ArithmeticResult, CodecError, FormatError, Int,
        NullableInt, MAX_BIT_LEN,
    };
    pub use crate::utils::{format_grouped, write_grouped};
}

/// Asserts that two [`Int`](numeric::Int) values are equal, printing both
/// canonical strings on failure.
#[macro_export]
macro_rules! assert_int_eq {
    ($expected:expr, $actual:expr $(,)?) => {{
        let expected: &$crate::numeric::Int = &$expected;
        let actual: &$crate::numeric::Int = &$actual;
        if expected != actual {
            panic!("expected:\t{}\ngot:\t\t{}", expected, actual);
        }
    }};
}
