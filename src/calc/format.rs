//! Display formatting for operands. The integer part gets `,` thousands
//! separators; the fractional part is whatever the user has typed so far
//! and is never rounded or padded, so "1." and "1.50" render exactly as
//! entered.

/// Format an operand for display. Absent stays absent.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    match operand.split_once('.') {
        Some((integer, fraction)) => Some(format!("{}.{}", group_integer(integer), fraction)),
        None => Some(group_integer(operand)),
    }
}

/// Insert thousands separators into an integer string, preserving a leading
/// sign. An empty integer part reads as zero, so a bare "." shows as "0.";
/// non-numeric operands ("inf", "NaN") pass through untouched.
fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.is_empty() {
        return format!("{}0", sign);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits[lead..].as_bytes().chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            grouped.push(',');
        }
        // Chunks of an ASCII-digit string are valid UTF-8.
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_stays_absent() {
        assert_eq!(format_operand(None), None);
    }

    #[test]
    fn small_integers_are_untouched() {
        assert_eq!(format_operand(Some("0")).as_deref(), Some("0"));
        assert_eq!(format_operand(Some("999")).as_deref(), Some("999"));
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_operand(Some("1000")).as_deref(), Some("1,000"));
        assert_eq!(format_operand(Some("1234567")).as_deref(), Some("1,234,567"));
        assert_eq!(format_operand(Some("123456")).as_deref(), Some("123,456"));
    }

    #[test]
    fn fraction_is_preserved_verbatim() {
        assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
        assert_eq!(format_operand(Some("1.50")).as_deref(), Some("1.50"));
        assert_eq!(
            format_operand(Some("0.30000000000000004")).as_deref(),
            Some("0.30000000000000004")
        );
    }

    #[test]
    fn bare_trailing_decimal_point() {
        assert_eq!(format_operand(Some("1.")).as_deref(), Some("1."));
        assert_eq!(format_operand(Some("1000.")).as_deref(), Some("1,000."));
    }

    #[test]
    fn empty_integer_part_reads_as_zero() {
        // Clicking "." first shows "0.", and an empty evaluation result
        // shows "0", matching how a calculator display reads them.
        assert_eq!(format_operand(Some(".")).as_deref(), Some("0."));
        assert_eq!(format_operand(Some(".5")).as_deref(), Some("0.5"));
        assert_eq!(format_operand(Some("")).as_deref(), Some("0"));
    }

    #[test]
    fn negative_numbers_keep_their_sign() {
        assert_eq!(format_operand(Some("-3")).as_deref(), Some("-3"));
        assert_eq!(format_operand(Some("-1234.5")).as_deref(), Some("-1,234.5"));
    }

    #[test]
    fn non_numeric_operands_pass_through() {
        assert_eq!(format_operand(Some("inf")).as_deref(), Some("inf"));
        assert_eq!(format_operand(Some("NaN")).as_deref(), Some("NaN"));
    }
}
