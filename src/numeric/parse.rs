// ============================================================================
// Integer Text Parsing
// Strict digit validation ahead of big integer construction
// ============================================================================

use num_bigint::{BigInt, BigUint, Sign};

/// Parses the canonical decimal form `["-"] digit+`: no `+`, no leading
/// zeros, and no `-0`.
pub(crate) fn parse_decimal(s: &str) -> Option<BigInt> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.starts_with('0') && (negative || digits.len() > 1) {
        return None;
    }
    parse_magnitude(digits, 10).map(|magnitude| apply_sign(negative, magnitude))
}

/// Parses an optionally signed integer literal, selecting the radix from its
/// prefix: `0x`/`0X` hex, `0o`/`0O` octal, `0b`/`0B` binary, a bare leading
/// `0` octal, decimal otherwise.
pub(crate) fn parse_literal(s: &str) -> Option<BigInt> {
    let (negative, body) = split_sign(s);
    let (radix, digits) = split_radix_prefix(body);
    parse_magnitude(digits, radix).map(|magnitude| apply_sign(negative, magnitude))
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn split_radix_prefix(body: &str) -> (u32, &str) {
    let bytes = body.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, body);
    }
    match bytes[1] {
        b'x' | b'X' => (16, &body[2..]),
        b'o' | b'O' => (8, &body[2..]),
        b'b' | b'B' => (2, &body[2..]),
        _ => (8, &body[1..]),
    }
}

// `BigUint::parse_bytes` tolerates `_` separators, so digits are validated
// up front.
fn parse_magnitude(digits: &str, radix: u32) -> Option<BigUint> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
}

fn apply_sign(negative: bool, magnitude: BigUint) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}
