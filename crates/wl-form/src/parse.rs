//! Integer parsing for form fields.

use tracing::warn;

/// Leading-integer parse: skips leading whitespace, accepts one sign, then
/// takes the longest run of ASCII digits. `"12abc"` is 12, `"3.9"` is 3.
/// Returns `None` when no digits lead the input. Always base 10: a `0x`
/// prefix is not honoured, so `"0x1F"` is 0.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a numeric form field for transmission.
///
/// Non-numeric input is still sent, as JSON `null`; the server decides what
/// to do with it. Each occurrence is logged.
pub fn int_field(field: &str, input: &str) -> Option<i64> {
    let parsed = parse_int(input);
    if parsed.is_none() {
        warn!(field, value = input, "non-numeric input sent as null");
    }
    parsed
}
