//! Brazilian currency formatting for the plan value field.
//!
//! The form keeps a raw digit buffer and derives the display string from
//! it on every keystroke; the formatted string itself is never fed back
//! into the formatter.

/// Keeps only ASCII digits from user input.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a digit buffer as Brazilian currency, reading the digits as an
/// integer amount of centavos.
///
/// # Examples
///
/// ```
/// use contracts::shared::money::format_brl;
///
/// assert_eq!(format_brl("1250"), "R$ 12,50");
/// assert_eq!(format_brl(""), "");
/// ```
pub fn format_brl(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return String::new();
    }

    // Cap the buffer so the parse below cannot overflow u64. Fifteen
    // digits is already far beyond any realistic plan price.
    let digits = if digits.len() > 15 {
        &digits[..15]
    } else {
        digits.as_str()
    };
    let cents: u64 = digits.parse().unwrap_or(0);

    let whole = cents / 100;
    let frac = cents % 100;

    // Thousands grouping with '.' on the whole part
    let plain = whole.to_string();
    let mut grouped = String::with_capacity(plain.len() + plain.len() / 3);
    for (i, c) in plain.chars().enumerate() {
        if i > 0 && (plain.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("R$ {},{:02}", grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl("1250"), "R$ 12,50");
        assert_eq!(format_brl("5"), "R$ 0,05");
        assert_eq!(format_brl("30000"), "R$ 300,00");
        assert_eq!(format_brl("123456789"), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_brl_strips_non_digits() {
        assert_eq!(format_brl("R$ 12,50"), "R$ 12,50");
        assert_eq!(format_brl("12a50"), "R$ 12,50");
        assert_eq!(format_brl("abc"), "");
        assert_eq!(format_brl(""), "");
    }

    #[test]
    fn test_format_brl_leading_zeros() {
        assert_eq!(format_brl("0012"), "R$ 0,12");
        assert_eq!(format_brl("0"), "R$ 0,00");
    }

    #[test]
    fn test_format_brl_shape() {
        // Two decimal digits, only digits and currency punctuation
        for raw in ["1", "12", "123", "9999999", "31415926535"] {
            let formatted = format_brl(raw);
            let (_, decimals) = formatted.rsplit_once(',').unwrap();
            assert_eq!(decimals.len(), 2);
            assert!(formatted
                .chars()
                .all(|c| c.is_ascii_digit() || ",.R$ ".contains(c)));
        }
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("R$ 1.234,56"), "123456");
        assert_eq!(digits_only(""), "");
    }
}
