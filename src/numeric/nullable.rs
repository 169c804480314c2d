// ============================================================================
// Nullable Integer
// An Int that may be absent, distinct from zero
// ============================================================================

use super::errors::CodecError;
use super::int::Int;
use num_bigint::BigInt;
use std::fmt;

/// An [`Int`] or nothing.
///
/// The nil state comes from default construction, from a big integer that
/// is itself absent, or from decoding an empty wire payload. It is never
/// equal to zero, but every encoder writes it as zero.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NullableInt(Option<Int>);

impl NullableInt {
    /// The nil value.
    #[inline]
    pub const fn nil() -> Self {
        Self(None)
    }

    /// Wrap an optional big integer, copying it.
    ///
    /// # Panics
    /// If the big integer needs more than 256 bits.
    pub fn from_big_int(value: Option<&BigInt>) -> Self {
        Self(value.map(Int::from_big_int))
    }

    /// Wrap an optional big integer, taking ownership of it.
    ///
    /// # Panics
    /// If the big integer needs more than 256 bits.
    pub fn from_big_int_owned(value: Option<BigInt>) -> Self {
        Self(value.map(Int::from_big_int_owned))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn get(&self) -> Option<&Int> {
        self.0.as_ref()
    }

    #[inline]
    pub fn into_inner(self) -> Option<Int> {
        self.0
    }

    /// The wrapped value, or zero when nil.
    pub fn unwrap_or_zero(self) -> Int {
        self.0.unwrap_or_else(Int::zero)
    }

    /// Copy of the underlying big integer, `None` when nil.
    pub fn to_big_int(&self) -> Option<BigInt> {
        self.0.as_ref().map(Int::to_big_int)
    }

    // ========================================================================
    // Wire
    // ========================================================================

    /// Wire bytes; nil encodes as zero.
    pub fn marshal(&self) -> Vec<u8> {
        match &self.0 {
            Some(value) => value.marshal(),
            None => Int::zero().marshal(),
        }
    }

    /// Write the wire bytes into `data`; nil encodes as zero.
    ///
    /// # Errors
    /// `BufferTooSmall` if `data` is shorter than [`NullableInt::size`].
    pub fn marshal_to(&self, data: &mut [u8]) -> Result<usize, CodecError> {
        match &self.0 {
            Some(value) => value.marshal_to(data),
            None => Int::zero().marshal_to(data),
        }
    }

    /// Length of the wire encoding.
    pub fn size(&self) -> usize {
        self.0.as_ref().map_or(1, Int::size)
    }

    /// Decode wire bytes. Empty input decodes to nil.
    ///
    /// # Errors
    /// `InvalidUtf8`, `InvalidInteger` or `OutOfRange` for non-empty input.
    pub fn unmarshal(data: &[u8]) -> Result<Self, CodecError> {
        if data.is_empty() {
            return Ok(Self::nil());
        }
        Int::unmarshal(data).map(|value| Self(Some(value)))
    }

    /// Decode wire bytes into `self`.
    ///
    /// Empty input leaves `self` unchanged, as does any error.
    pub fn unmarshal_into(&mut self, data: &[u8]) -> Result<(), CodecError> {
        if data.is_empty() {
            return Ok(());
        }
        self.0 = Some(Int::unmarshal(data)?);
        Ok(())
    }

    // ========================================================================
    // Legacy
    // ========================================================================

    #[inline]
    pub fn marshal_legacy(&self) -> Vec<u8> {
        self.marshal()
    }

    #[inline]
    pub fn unmarshal_legacy(data: &[u8]) -> Result<Self, CodecError> {
        Self::unmarshal(data)
    }
}

impl From<Int> for NullableInt {
    #[inline]
    fn from(value: Int) -> Self {
        Self(Some(value))
    }
}

impl From<Option<Int>> for NullableInt {
    #[inline]
    fn from(value: Option<Int>) -> Self {
        Self(value)
    }
}

impl fmt::Display for NullableInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("<nil>"),
        }
    }
}

impl fmt::Debug for NullableInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "NullableInt({value})"),
            None => f.write_str("NullableInt(nil)"),
        }
    }
}
