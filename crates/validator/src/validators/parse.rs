//! Lenient integer parsing for directive values

/// Parses a directive integer, falling back to `default` when no digit is
/// found.
///
/// Reads an optional leading `-` followed by the longest run of ASCII digits.
/// Whatever follows the run ends the scan without an error, so `"123.45"`
/// parses as `123` and `"10px"` as `10`. Leading whitespace is not skipped.
/// Values beyond the `i64` range saturate.
///
/// # Examples
///
/// ```rust
/// use envconfig_validator::validators::parse_int;
///
/// assert_eq!(parse_int("123.45", 0), 123);
/// assert_eq!(parse_int("-456", 0), -456);
/// assert_eq!(parse_int("abc", 10), 10);
/// ```
#[must_use]
pub fn parse_int(input: &str, default: i64) -> i64 {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;

    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    if seen_digit { value } else { default }
}
