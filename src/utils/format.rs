// ============================================================================
// Digit Grouping Formatter
// Inserts thousands separators into decimal digit strings
// ============================================================================
//
// Operates purely on strings: the input is usually the canonical decimal
// form of an Int, but no Int is ever constructed here.
//
//     "1234567"  -> "1'234'567"
//     "-12345"   -> "-12'345"
//     "007"      -> "7"
//     "-000"     -> "0"

use crate::numeric::FormatError;

/// Separator inserted between groups of three digits.
pub const THOUSAND_SEPARATOR: char = '\'';

/// Group the digits of `v` in threes from the right.
///
/// # Errors
/// `EmptyInput` for an empty string, `NonDigit` if anything but ASCII digits
/// remains after removing the sign and zero padding.
///
/// # Example
/// ```
/// use ledger_int::utils::format_grouped;
///
/// assert_eq!(format_grouped("-1234567").unwrap(), "-1'234'567");
/// ```
pub fn format_grouped(v: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(v.len() + v.len() / 3);
    write_grouped(v, &mut out)?;
    Ok(out)
}

/// Append the grouped form of `v` to `out`.
///
/// Lets a caller formatting many values reuse one buffer. On error nothing
/// is appended.
///
/// # Errors
/// Same as [`format_grouped`].
pub fn write_grouped(v: &str, out: &mut String) -> Result<(), FormatError> {
    if v.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    let (negative, digits) = match v.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, v),
    };
    let digits = strip_zero_padding(digits);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::NonDigit {
            input: digits.to_string(),
        });
    }

    // Zero carries no sign.
    if negative && digits != "0" {
        out.push('-');
    }

    // One separator per full group ahead of the last.
    out.reserve(digits.len() + (digits.len() - 1) / 3);

    let (head, rest) = digits.split_at(digits.len() % 3);
    if !head.is_empty() {
        out.push_str(head);
        if !rest.is_empty() {
            out.push(THOUSAND_SEPARATOR);
        }
    }

    let mut start = 0;
    while start < rest.len() {
        let end = start + 3;
        out.push_str(&rest[start..end]);
        if end < rest.len() {
            out.push(THOUSAND_SEPARATOR);
        }
        start = end;
    }

    Ok(())
}

/// Drops leading zeros but keeps at least one digit.
fn strip_zero_padding(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        return "0";
    }
    trimmed
}
