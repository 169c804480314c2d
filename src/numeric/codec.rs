// ============================================================================
// Text and Wire Codecs
// Canonical decimal string encodings of Int
// ============================================================================
//
// Every encoding here is the canonical decimal string of the value:
// - text:   the string itself
// - wire:   its UTF-8 bytes, with zero written as the single byte b'0'
// - legacy: byte-for-byte the wire encoding
//
// Decoders re-validate the 256-bit bound and report parse failures and range
// failures as distinct errors.

use super::errors::CodecError;
use super::int::Int;
use super::parse;

const ZERO_ENCODING: u8 = b'0';

impl Int {
    // ========================================================================
    // Text
    // ========================================================================

    /// Canonical decimal string.
    #[inline]
    pub fn marshal_text(&self) -> String {
        self.to_string()
    }

    /// Decode a decimal string.
    ///
    /// # Errors
    /// `InvalidInteger` for malformed text, `OutOfRange` for a well-formed
    /// value wider than 256 bits.
    pub fn unmarshal_text(text: &str) -> Result<Int, CodecError> {
        let value = parse::parse_decimal(text).ok_or_else(|| {
            tracing::debug!(text, "rejected malformed integer text");
            CodecError::InvalidInteger {
                text: text.to_string(),
            }
        })?;
        Int::validated(value, text)
    }

    // ========================================================================
    // Wire
    // ========================================================================

    /// Wire bytes: the UTF-8 canonical decimal string.
    pub fn marshal(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![ZERO_ENCODING];
        }
        self.marshal_text().into_bytes()
    }

    /// Write the wire bytes into `data`, returning the number written.
    ///
    /// # Errors
    /// `BufferTooSmall` if `data` is shorter than [`Int::size`].
    pub fn marshal_to(&self, data: &mut [u8]) -> Result<usize, CodecError> {
        if self.is_zero() {
            let Some(first) = data.first_mut() else {
                return Err(CodecError::BufferTooSmall {
                    needed: 1,
                    available: 0,
                });
            };
            *first = ZERO_ENCODING;
            return Ok(1);
        }

        let bz = self.marshal();
        if data.len() < bz.len() {
            return Err(CodecError::BufferTooSmall {
                needed: bz.len(),
                available: data.len(),
            });
        }
        data[..bz.len()].copy_from_slice(&bz);
        Ok(bz.len())
    }

    /// Length of the wire encoding.
    pub fn size(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        self.marshal_text().len()
    }

    /// Decode wire bytes.
    ///
    /// Empty input is rejected here; use
    /// [`NullableInt::unmarshal`](super::NullableInt::unmarshal) where an empty
    /// encoding stands for "no value".
    ///
    /// # Errors
    /// `InvalidUtf8`, `InvalidInteger` or `OutOfRange`.
    pub fn unmarshal(data: &[u8]) -> Result<Int, CodecError> {
        let text = std::str::from_utf8(data).map_err(|_| CodecError::InvalidUtf8)?;
        Int::unmarshal_text(text)
    }

    // ========================================================================
    // Legacy
    // ========================================================================

    /// Legacy wire bytes; identical to [`Int::marshal`].
    #[inline]
    pub fn marshal_legacy(&self) -> Vec<u8> {
        self.marshal()
    }

    /// Decode legacy wire bytes; identical to [`Int::unmarshal`].
    #[inline]
    pub fn unmarshal_legacy(data: &[u8]) -> Result<Int, CodecError> {
        Int::unmarshal(data)
    }
}
