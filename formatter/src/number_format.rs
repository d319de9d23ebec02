//! FILENAME: formatter/src/number_format.rs
//! PURPOSE: Locale-aware decimal formatting for measure values.
//! CONTEXT: Mirrors a locale's decimal style: grouping separators on the
//! integer part and at most three fraction digits with trailing zeros
//! dropped.

/// Separators of a locale's decimal style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub grouping: char,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        NumberSymbols {
            decimal: '.',
            grouping: ',',
        }
    }
}

impl NumberSymbols {
    /// Resolves the symbols from the language part of a locale such as
    /// "de_DE" or "id-ID". Unknown languages use the English symbols.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(|c: char| c == '_' || c == '-')
            .next()
            .unwrap_or(locale)
            .to_ascii_lowercase();

        match language.as_str() {
            "de" | "id" | "nl" | "es" | "it" | "pt" | "da" | "tr" | "el" => NumberSymbols {
                decimal: ',',
                grouping: '.',
            },
            "fr" | "nb" | "sv" | "fi" | "cs" | "pl" | "ru" | "uk" => NumberSymbols {
                decimal: ',',
                grouping: '\u{a0}',
            },
            _ => NumberSymbols::default(),
        }
    }
}

/// Maximum fraction digits shown by the decimal style.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number with the locale's decimal style.
pub fn format_decimal(value: f64, symbols: NumberSymbols) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let rounded = format!("{:.prec$}", value, prec = MAX_FRACTION_DIGITS);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');

    // "-0" after rounding a tiny negative number
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };

    add_thousands_separator(trimmed, symbols)
}

/// Formats an integer with the locale's grouping separator.
pub fn format_integer(value: i64, symbols: NumberSymbols) -> String {
    add_thousands_separator(&value.to_string(), symbols)
}

/// Groups the integer digits of a plain numeric string by thousands and
/// swaps in the locale's decimal separator.
fn add_thousands_separator(s: &str, symbols: NumberSymbols) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: Vec<char> = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    if negative {
        result.push('-');
    }

    let len = digits.len();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(symbols.grouping);
        }
        result.push(*c);
    }

    if let Some(decimal) = decimal_part {
        result.push(symbols.decimal);
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal_english() {
        let en = NumberSymbols::for_locale("en_US");
        assert_eq!(format_decimal(1234567.0, en), "1,234,567");
        assert_eq!(format_decimal(1234.5678, en), "1,234.568");
        assert_eq!(format_decimal(0.5, en), "0.5");
        assert_eq!(format_decimal(-1234.5, en), "-1,234.5");
        assert_eq!(format_decimal(-0.0001, en), "0");
    }

    #[test]
    fn test_format_decimal_other_locales() {
        assert_eq!(format_decimal(1234.5, NumberSymbols::for_locale("id")), "1.234,5");
        assert_eq!(format_decimal(1234.5, NumberSymbols::for_locale("de-DE")), "1.234,5");
        assert_eq!(
            format_decimal(1234.5, NumberSymbols::for_locale("fr")),
            "1\u{a0}234,5"
        );
        assert_eq!(format_decimal(12.0, NumberSymbols::for_locale("xx")), "12");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(-1234567, NumberSymbols::default()), "-1,234,567");
        assert_eq!(format_integer(999, NumberSymbols::default()), "999");
    }
}
