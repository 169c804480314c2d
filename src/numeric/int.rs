// ============================================================================
// Bounded Integer
// Signed integer wrapping a big integer with a hard 256-bit magnitude bound
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult, CodecError};
use super::parse;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// Maximum bit length of the magnitude of an [`Int`].
pub const MAX_BIT_LEN: u64 = 256;

/// Maximum number of 64-bit words a value may occupy before the exact bit
/// length needs checking.
const MAX_WORD_LEN: usize = (MAX_BIT_LEN / u64::BITS as u64) as usize;

/// Largest exponent `e` with `10^e < 2^256`.
const MAX_DECIMAL_EXP: i32 = 77;

/// Returns true when the magnitude of `value` needs more than [`MAX_BIT_LEN`]
/// bits.
///
/// The word count is cheap to read and almost always short-circuits the
/// exact bit length comparison.
#[inline]
pub(crate) fn big_int_overflows(value: &BigInt) -> bool {
    if value.iter_u64_digits().len() > MAX_WORD_LEN {
        return value.bits() > MAX_BIT_LEN;
    }
    false
}

/// Reports a contract violation on an unchecked entry point and aborts.
#[cold]
pub(crate) fn fatal(operation: &str, reason: impl fmt::Display) -> ! {
    tracing::error!(operation, %reason, "bounded integer contract violated");
    panic!("{operation}: {reason}");
}

/// Signed integer whose magnitude never exceeds 256 bits.
///
/// Values range over `-(2^256 - 1) ..= 2^256 - 1`. Every operation returns a
/// fresh value; nothing mutates a receiver in place.
///
/// # Calling conventions
/// - `checked_*` methods return an [`ArithmeticResult`] and are the only
///   entry points to use with untrusted operands.
/// - The operator impls (`+`, `-`, `*`, `/`, `%`) call the checked form and
///   panic with a message naming the operation when it fails.
///
/// # Example
/// ```
/// use ledger_int::numeric::{ArithmeticError, Int};
///
/// let max: Int = format!("0x{}", "f".repeat(64)).parse().unwrap();
/// assert_eq!(max.checked_add(&Int::one()), Err(ArithmeticError::Overflow));
/// assert_eq!(Int::from(7) + 5, Int::from(12));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(BigInt);

impl Int {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    #[inline]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        Self(BigInt::one())
    }

    /// Create from a big integer, copying it.
    ///
    /// # Panics
    /// If `value` needs more than 256 bits. Use [`Int::try_from`] for values
    /// whose range has not been validated.
    pub fn from_big_int(value: &BigInt) -> Self {
        if big_int_overflows(value) {
            fatal("Int::from_big_int", "out of bound");
        }
        Self(value.clone())
    }

    /// Create from a big integer, taking ownership of it instead of copying.
    ///
    /// # Panics
    /// If `value` needs more than 256 bits.
    pub fn from_big_int_owned(value: BigInt) -> Self {
        if big_int_overflows(&value) {
            fatal("Int::from_big_int_owned", "out of bound");
        }
        Self(value)
    }

    /// Parse an integer literal.
    ///
    /// Accepts an optional sign followed by decimal digits, or by a radix
    /// prefix: `0x`/`0X` (hex), `0o`/`0O` or a bare leading `0` (octal),
    /// `0b`/`0B` (binary). Digit separators such as `1_000` are rejected.
    /// Unlike the codec decoders, leading zeros select octal rather than
    /// being refused.
    ///
    /// # Errors
    /// `InvalidInteger` if the text is malformed, `OutOfRange` if the value
    /// needs more than 256 bits.
    pub fn parse_literal(s: &str) -> Result<Self, CodecError> {
        let value = parse::parse_literal(s).ok_or_else(|| {
            tracing::debug!(text = s, "rejected malformed integer literal");
            CodecError::InvalidInteger {
                text: s.to_string(),
            }
        })?;
        Self::validated(value, s)
    }

    /// Create `n * 10^decimals`.
    ///
    /// # Panics
    /// If `decimals` is negative or the result needs more than 256 bits.
    pub fn with_decimal(n: i64, decimals: i32) -> Self {
        Self::checked_with_decimal(n, decimals)
            .unwrap_or_else(|err| fatal("Int::with_decimal", err))
    }

    /// Create `n * 10^decimals`, reporting overflow instead of panicking.
    ///
    /// # Panics
    /// If `decimals` is negative.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value needs more than 256 bits.
    pub fn checked_with_decimal(n: i64, decimals: i32) -> ArithmeticResult<Self> {
        if decimals < 0 {
            fatal("Int::with_decimal", "decimal is negative");
        }
        if n == 0 {
            return Ok(Self::zero());
        }
        if decimals > MAX_DECIMAL_EXP {
            return Err(ArithmeticError::Overflow);
        }
        let scale = BigInt::from(10u8).pow(decimals as u32);
        Self::bounded(BigInt::from(n) * scale)
    }

    /// Wraps `value`, reporting an out-of-range error that names `text`.
    pub(crate) fn validated(value: BigInt, text: &str) -> Result<Self, CodecError> {
        if big_int_overflows(&value) {
            let bit_len = value.bits();
            tracing::debug!(text, bit_len, max = MAX_BIT_LEN, "rejected out-of-range integer");
            return Err(CodecError::OutOfRange {
                text: text.to_string(),
                bit_len,
            });
        }
        Ok(Self(value))
    }

    #[inline]
    fn bounded(value: BigInt) -> ArithmeticResult<Self> {
        if big_int_overflows(&value) {
            Err(ArithmeticError::Overflow)
        } else {
            Ok(Self(value))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Borrow the underlying big integer.
    #[inline]
    pub fn as_big_int(&self) -> &BigInt {
        &self.0
    }

    /// Copy out the underlying big integer.
    #[inline]
    pub fn to_big_int(&self) -> BigInt {
        self.0.clone()
    }

    /// Move out the underlying big integer.
    #[inline]
    pub fn into_big_int(self) -> BigInt {
        self.0
    }

    /// Number of bits in the magnitude; zero for the value zero.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    /// Returns -1, 0 or 1.
    #[inline]
    pub fn sign(&self) -> i32 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign() == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    /// True if [`Int::to_i64`] will not panic.
    #[inline]
    pub fn is_i64(&self) -> bool {
        self.0.to_i64().is_some()
    }

    /// Convert to `i64`.
    ///
    /// # Panics
    /// If the value does not fit. Check with [`Int::is_i64`] first.
    pub fn to_i64(&self) -> i64 {
        match self.0.to_i64() {
            Some(n) => n,
            None => fatal("Int::to_i64", "out of bound"),
        }
    }

    /// True if [`Int::to_u64`] will not panic.
    #[inline]
    pub fn is_u64(&self) -> bool {
        self.0.to_u64().is_some()
    }

    /// Convert to `u64`.
    ///
    /// # Panics
    /// If the value is negative or too large. Check with [`Int::is_u64`] first.
    pub fn to_u64(&self) -> u64 {
        match self.0.to_u64() {
            Some(n) => n,
            None => fatal("Int::to_u64", "out of bounds"),
        }
    }

    /// Convert to a scale-0 `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds the 96-bit decimal mantissa.
    pub fn to_decimal(&self) -> ArithmeticResult<Decimal> {
        let n = self.0.to_i128().ok_or(ArithmeticError::Overflow)?;
        Decimal::try_from_i128_with_scale(n, 0).map_err(|_| ArithmeticError::Overflow)
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum needs more than 256 bits.
    #[inline]
    pub fn checked_add(&self, rhs: &Int) -> ArithmeticResult<Int> {
        Self::bounded(&self.0 + &rhs.0)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference needs more than 256 bits, in
    /// either direction.
    #[inline]
    pub fn checked_sub(&self, rhs: &Int) -> ArithmeticResult<Int> {
        Self::bounded(&self.0 - &rhs.0)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the product needs more than 256 bits.
    #[inline]
    pub fn checked_mul(&self, rhs: &Int) -> ArithmeticResult<Int> {
        Self::bounded(&self.0 * &rhs.0)
    }

    /// Checked quotient, truncated toward zero.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_quo(&self, rhs: &Int) -> ArithmeticResult<Int> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Checked Euclidean modulus: the result lies in `0 .. |rhs|`.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_mod(&self, rhs: &Int) -> ArithmeticResult<Int> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok(Self(self.0.mod_floor(&rhs.0.abs())))
    }

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Int {
        Self(self.0.abs())
    }

    // ========================================================================
    // Raw Operand Shorthands
    // ========================================================================

    /// `self + rhs`, panicking on overflow.
    pub fn add_raw(&self, rhs: i64) -> Int {
        self + rhs
    }

    /// `self - rhs`, panicking on overflow.
    pub fn sub_raw(&self, rhs: i64) -> Int {
        self - rhs
    }

    /// `self * rhs`, panicking on overflow.
    pub fn mul_raw(&self, rhs: i64) -> Int {
        self * rhs
    }

    /// `self / rhs`, panicking on a zero divisor.
    pub fn quo_raw(&self, rhs: i64) -> Int {
        self / rhs
    }

    /// `self % rhs` (Euclidean), panicking on a zero divisor.
    pub fn mod_raw(&self, rhs: i64) -> Int {
        self % rhs
    }
}

/// Returns a copy of the smaller of `a` and `b`.
pub fn min_int(a: &Int, b: &Int) -> Int {
    if a > b {
        b.clone()
    } else {
        a.clone()
    }
}

/// Returns a copy of the larger of `a` and `b`.
pub fn max_int(a: &Int, b: &Int) -> Int {
    if a < b {
        b.clone()
    } else {
        a.clone()
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Int {
                #[inline]
                fn from(n: $t) -> Self {
                    Self(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<BigInt> for Int {
    type Error = ArithmeticError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        Self::bounded(value)
    }
}

impl TryFrom<&BigInt> for Int {
    type Error = ArithmeticError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if big_int_overflows(value) {
            return Err(ArithmeticError::Overflow);
        }
        Ok(Self(value.clone()))
    }
}

impl From<Int> for BigInt {
    #[inline]
    fn from(value: Int) -> Self {
        value.0
    }
}

impl FromStr for Int {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

// ============================================================================
// Unchecked Operators
// ============================================================================

macro_rules! impl_unchecked_op {
    ($trait:ident, $method:ident, $checked:ident, $name:literal) => {
        impl $trait<&Int> for &Int {
            type Output = Int;

            #[inline]
            fn $method(self, rhs: &Int) -> Int {
                self.$checked(rhs).unwrap_or_else(|err| fatal($name, err))
            }
        }

        impl $trait<Int> for Int {
            type Output = Int;

            #[inline]
            fn $method(self, rhs: Int) -> Int {
                <&Int as $trait<&Int>>::$method(&self, &rhs)
            }
        }

        impl $trait<&Int> for Int {
            type Output = Int;

            #[inline]
            fn $method(self, rhs: &Int) -> Int {
                <&Int as $trait<&Int>>::$method(&self, rhs)
            }
        }

        impl $trait<Int> for &Int {
            type Output = Int;

            #[inline]
            fn $method(self, rhs: Int) -> Int {
                <&Int as $trait<&Int>>::$method(self, &rhs)
            }
        }

        impl $trait<i64> for &Int {
            type Output = Int;

            #[inline]
            fn $method(self, rhs: i64) -> Int {
                <&Int as $trait<&Int>>::$method(self, &Int::from(rhs))
            }
        }

        impl $trait<i64> for Int {
            type Output = Int;

            #[inline]
            fn $method(self, rhs: i64) -> Int {
                <&Int as $trait<&Int>>::$method(&self, &Int::from(rhs))
            }
        }
    };
}

impl_unchecked_op!(Add, add, checked_add, "Int::add");
impl_unchecked_op!(Sub, sub, checked_sub, "Int::sub");
impl_unchecked_op!(Mul, mul, checked_mul, "Int::mul");
impl_unchecked_op!(Div, div, checked_quo, "Int::quo");
// Euclidean modulus, not the truncated remainder of the primitive types.
impl_unchecked_op!(Rem, rem, checked_mod, "Int::mod");

impl Neg for Int {
    type Output = Int;

    #[inline]
    fn neg(self) -> Int {
        Int(-self.0)
    }
}

impl Neg for &Int {
    type Output = Int;

    #[inline]
    fn neg(self) -> Int {
        Int(-&self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int({})", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 2^256 - 1
    fn max() -> Int {
        Int::from_big_int_owned((BigInt::one() << 256usize) - 1)
    }

    fn int(s: &str) -> Int {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_BIT_LEN, 256);
        assert_eq!(MAX_WORD_LEN, 4);
        assert!(Int::zero().is_zero());
        assert_eq!(Int::one(), Int::from(1u8));
        assert_eq!(max().bit_len(), 256);
    }

    #[test]
    fn test_overflow_check_boundary() {
        let limit = BigInt::one() << 256usize;
        assert!(big_int_overflows(&limit));
        assert!(big_int_overflows(&-limit.clone()));
        assert!(!big_int_overflows(&(limit.clone() - 1)));
        assert!(!big_int_overflows(&(1 - limit)));
        assert!(!big_int_overflows(&BigInt::zero()));
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Int::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Int::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Int::from(u128::MAX).bit_len(), 128);
    }

    #[test]
    fn test_from_big_int_copies() {
        let mut source = BigInt::from(42);
        let value = Int::from_big_int(&source);
        source += 1;
        assert_eq!(value, Int::from(42));
        assert_eq!(source, BigInt::from(43));
    }

    #[test]
    #[should_panic(expected = "Int::from_big_int: out of bound")]
    fn test_from_big_int_overflow_panics() {
        Int::from_big_int(&(BigInt::one() << 256usize));
    }

    #[test]
    #[should_panic(expected = "Int::from_big_int_owned: out of bound")]
    fn test_from_big_int_owned_overflow_panics() {
        Int::from_big_int_owned(-(BigInt::one() << 300usize));
    }

    #[test]
    fn test_try_from_big_int() {
        assert_eq!(Int::try_from(BigInt::from(-5)), Ok(Int::from(-5)));
        assert_eq!(
            Int::try_from(&(BigInt::one() << 256usize)),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(int("0x10"), Int::from(16));
        assert_eq!(int("0X1f"), Int::from(31));
        assert_eq!(int("010"), Int::from(8));
        assert_eq!(int("0o17"), Int::from(15));
        assert_eq!(int("0b101"), Int::from(5));
        assert_eq!(int("-0x10"), Int::from(-16));
        assert_eq!(int("+12"), Int::from(12));
        assert_eq!(int("0"), Int::zero());
        assert_eq!(int("-0"), Int::zero());
    }

    #[test]
    fn test_parse_literal_invalid() {
        for bad in ["", "-", "0x", "08", "1_000", "12a", " 1", "--1", "1e5"] {
            assert!(
                matches!(Int::parse_literal(bad), Err(CodecError::InvalidInteger { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_literal_out_of_range() {
        let just_over = (BigInt::one() << 256usize).to_string();
        let err = Int::parse_literal(&just_over).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutOfRange {
                text: just_over,
                bit_len: 257
            }
        );

        let hex_max = format!("0x{}", "f".repeat(64));
        assert_eq!(int(&hex_max), max());
        assert!(Int::parse_literal(&format!("0x1{}", "0".repeat(64))).is_err());
    }

    #[test]
    fn test_with_decimal() {
        assert_eq!(Int::with_decimal(3, 0), Int::from(3));
        assert_eq!(Int::with_decimal(-12, 3), Int::from(-12_000));
        assert_eq!(Int::with_decimal(0, 1_000_000), Int::zero());
        assert_eq!(Int::with_decimal(1, 77).to_string().len(), 78);
    }

    #[test]
    fn test_checked_with_decimal_overflow() {
        assert_eq!(Int::checked_with_decimal(2, 77), Err(ArithmeticError::Overflow));
        assert_eq!(Int::checked_with_decimal(-1, 78), Err(ArithmeticError::Overflow));
        assert_eq!(
            Int::checked_with_decimal(1, i32::MAX),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    #[should_panic(expected = "Int::with_decimal: decimal is negative")]
    fn test_with_decimal_negative_panics() {
        Int::with_decimal(1, -1);
    }

    #[test]
    #[should_panic(expected = "Int::with_decimal: integer overflow")]
    fn test_with_decimal_overflow_panics() {
        Int::with_decimal(i64::MAX, 70);
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Int::from(100).checked_add(&Int::from(50)), Ok(Int::from(150)));
        assert_eq!(max().checked_add(&Int::one()), Err(ArithmeticError::Overflow));
        assert_eq!(max().checked_add(&Int::from(-1)), Ok(max() - 1));
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(Int::from(30).checked_sub(&Int::from(100)), Ok(Int::from(-70)));
        let min = -max();
        assert_eq!(min.checked_sub(&Int::one()), Err(ArithmeticError::Overflow));
        assert_eq!(max().checked_sub(&min), Err(ArithmeticError::Overflow));
        assert_eq!(min.checked_sub(&min), Ok(Int::zero()));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(Int::from(-4).checked_mul(&Int::from(25)), Ok(Int::from(-100)));
        let half = Int::from_big_int_owned(BigInt::one() << 128usize);
        assert_eq!(half.checked_mul(&half), Err(ArithmeticError::Overflow));
        let just_under = Int::from_big_int_owned(BigInt::one() << 255usize);
        assert_eq!(just_under.checked_mul(&Int::from(2)), Err(ArithmeticError::Overflow));
        assert_eq!(max().checked_mul(&Int::from(-1)), Ok(-max()));
    }

    #[test]
    fn test_checked_quo() {
        assert_eq!(Int::from(7).checked_quo(&Int::from(2)), Ok(Int::from(3)));
        assert_eq!(Int::from(-7).checked_quo(&Int::from(2)), Ok(Int::from(-3)));
        assert_eq!(Int::from(7).checked_quo(&Int::from(-2)), Ok(Int::from(-3)));
        assert_eq!((-max()).checked_quo(&Int::from(-1)), Ok(max()));
        assert_eq!(
            Int::from(7).checked_quo(&Int::zero()),
            Err(ArithmeticError::DivideByZero)
        );
    }

    #[test]
    fn test_checked_mod_is_euclidean() {
        assert_eq!(Int::from(7).checked_mod(&Int::from(3)), Ok(Int::from(1)));
        assert_eq!(Int::from(-7).checked_mod(&Int::from(3)), Ok(Int::from(2)));
        assert_eq!(Int::from(7).checked_mod(&Int::from(-3)), Ok(Int::from(1)));
        assert_eq!(Int::from(-7).checked_mod(&Int::from(-3)), Ok(Int::from(2)));
        assert_eq!(Int::from(-6).checked_mod(&Int::from(3)), Ok(Int::zero()));
        assert_eq!(
            Int::zero().checked_mod(&Int::zero()),
            Err(ArithmeticError::DivideByZero)
        );
    }

    #[test]
    fn test_unchecked_operators() {
        let a = Int::from(12);
        let b = Int::from(5);
        assert_eq!(&a + &b, Int::from(17));
        assert_eq!(&a - &b, Int::from(7));
        assert_eq!(&a * &b, Int::from(60));
        assert_eq!(&a / &b, Int::from(2));
        assert_eq!(&a % &b, Int::from(2));
        assert_eq!(a.clone() + b.clone(), Int::from(17));
        assert_eq!(a.clone() - &b, Int::from(7));
        assert_eq!(&a * b, Int::from(60));
        assert_eq!(-&a, Int::from(-12));
        assert_eq!(-a, Int::from(-12));
    }

    #[test]
    fn test_raw_operands() {
        let a = Int::from(10);
        assert_eq!(a.add_raw(-3), Int::from(7));
        assert_eq!(a.sub_raw(15), Int::from(-5));
        assert_eq!(a.mul_raw(i64::MIN), Int::from(i64::MIN as i128 * 10));
        assert_eq!(a.quo_raw(-3), Int::from(-3));
        assert_eq!(a.mod_raw(-3), Int::from(1));
        assert_eq!(a.clone() + 1, Int::from(11));
    }

    #[test]
    #[should_panic(expected = "Int::add: integer overflow")]
    fn test_add_overflow_panics() {
        let _ = max() + 1;
    }

    #[test]
    #[should_panic(expected = "Int::sub: integer overflow")]
    fn test_sub_overflow_panics() {
        let _ = -max() - 1;
    }

    #[test]
    #[should_panic(expected = "Int::mul: integer overflow")]
    fn test_mul_overflow_panics() {
        let _ = max() * 2;
    }

    #[test]
    #[should_panic(expected = "Int::quo: divide by zero")]
    fn test_quo_by_zero_panics() {
        let _ = Int::one() / 0;
    }

    #[test]
    #[should_panic(expected = "Int::mod: divide by zero")]
    fn test_mod_by_zero_panics() {
        let _ = Int::one().mod_raw(0);
    }

    #[test]
    fn test_sign_queries() {
        assert_eq!(Int::from(-3).sign(), -1);
        assert_eq!(Int::zero().sign(), 0);
        assert_eq!(Int::from(3).sign(), 1);
        assert!(Int::from(-3).is_negative());
        assert!(Int::from(3).is_positive());
        assert!(!Int::zero().is_positive());
        assert!(!Int::zero().is_negative());
        assert_eq!(Int::from(-9).abs(), Int::from(9));
        assert_eq!((-max()).abs(), max());
    }

    #[test]
    fn test_comparison() {
        let a = Int::from(100);
        let b = Int::from(-50);
        assert!(a > b);
        assert!(a >= b);
        assert!(b < a);
        assert!(b <= a);
        assert!(a.ge(&a));
        assert_ne!(a, b);
        assert!(-max() < max());
    }

    #[test]
    fn test_min_max_return_fresh_values() {
        let a = Int::from(3);
        let b = Int::from(-4);
        assert_eq!(min_int(&a, &b), b);
        assert_eq!(max_int(&a, &b), a);
        assert_eq!(min_int(&a, &a), a);
        assert_eq!(max_int(&b, &b), b);
        assert_eq!(a, Int::from(3));
        assert_eq!(b, Int::from(-4));
    }

    #[test]
    fn test_primitive_conversions() {
        assert!(Int::from(i64::MIN).is_i64());
        assert_eq!(Int::from(i64::MIN).to_i64(), i64::MIN);
        assert!(!Int::from(u64::MAX).is_i64());
        assert!(Int::from(u64::MAX).is_u64());
        assert_eq!(Int::from(u64::MAX).to_u64(), u64::MAX);
        assert!(!Int::from(-1).is_u64());
    }

    #[test]
    #[should_panic(expected = "Int::to_i64: out of bound")]
    fn test_to_i64_out_of_bound_panics() {
        Int::from(u64::MAX).to_i64();
    }

    #[test]
    #[should_panic(expected = "Int::to_u64: out of bounds")]
    fn test_to_u64_negative_panics() {
        Int::from(-1).to_u64();
    }

    #[test]
    fn test_to_decimal() {
        let d = Int::from(-12345).to_decimal().unwrap();
        assert_eq!(d, Decimal::new(-12345, 0));
        assert_eq!(max().to_decimal(), Err(ArithmeticError::Overflow));
        let mantissa_max = Int::from((1u128 << 96) - 1);
        assert!(mantissa_max.to_decimal().is_ok());
        assert_eq!(
            Int::from(1u128 << 96).to_decimal(),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_big_int_accessors() {
        let value = Int::from(-77);
        assert_eq!(value.as_big_int(), &BigInt::from(-77));
        assert_eq!(value.to_big_int(), BigInt::from(-77));
        assert_eq!(BigInt::from(value.clone()), BigInt::from(-77));
        assert_eq!(value.into_big_int(), BigInt::from(-77));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(Int::from(-1234).to_string(), "-1234");
        assert_eq!(format!("{:?}", Int::from(5)), "Int(5)");
        assert_eq!(max().to_string().len(), 78);
    }

    fn arb_int() -> impl Strategy<Value = Int> {
        (any::<bool>(), proptest::collection::vec(any::<u32>(), 0..=8)).prop_map(
            |(negative, digits)| {
                let sign = if negative { Sign::Minus } else { Sign::Plus };
                Int::from_big_int_owned(BigInt::from_slice(sign, &digits))
            },
        )
    }

    proptest! {
        #[test]
        fn prop_comparator_totality(a in arb_int(), b in arb_int()) {
            let outcomes = [a < b, a == b, a > b];
            prop_assert_eq!(outcomes.iter().filter(|o| **o).count(), 1);
            prop_assert_eq!(a.cmp(&b), a.as_big_int().cmp(b.as_big_int()));
        }

        #[test]
        fn prop_checked_results_stay_in_range(a in arb_int(), b in arb_int()) {
            for result in [a.checked_add(&b), a.checked_sub(&b), a.checked_mul(&b)] {
                match result {
                    Ok(v) => prop_assert!(v.bit_len() <= MAX_BIT_LEN),
                    Err(err) => prop_assert_eq!(err, ArithmeticError::Overflow),
                }
            }
        }

        #[test]
        fn prop_checked_matches_unbounded_arithmetic(a in arb_int(), b in arb_int()) {
            let exact = a.as_big_int() + b.as_big_int();
            match a.checked_add(&b) {
                Ok(sum) => prop_assert_eq!(sum.into_big_int(), exact),
                Err(_) => prop_assert!(exact.bits() > MAX_BIT_LEN),
            }
        }

        #[test]
        fn prop_mod_in_euclidean_range(a in arb_int(), b in arb_int()) {
            prop_assume!(!b.is_zero());
            let m = a.checked_mod(&b).unwrap();
            prop_assert!(!m.is_negative());
            prop_assert!(m < b.abs());
            let q = a.checked_quo(&b).unwrap();
            prop_assert!(q.abs() <= a.abs());
        }

        #[test]
        fn prop_min_max_do_not_alias(a in arb_int(), b in arb_int()) {
            let (a0, b0) = (a.clone(), b.clone());
            let lo = min_int(&a, &b);
            let hi = max_int(&a, &b);
            prop_assert!(lo <= hi);
            prop_assert_eq!(a, a0);
            prop_assert_eq!(b, b0);
        }
    }
}
