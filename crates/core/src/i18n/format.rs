//! Number and date formatting for the two supported locales.

use super::Locale;
use crate::types::Timestamp;

/// Most fraction digits kept when formatting a number.
const MAX_FRACTION_DIGITS: usize = 3;

struct Symbols {
    group: &'static str,
    decimal: &'static str,
    minus: &'static str,
}

fn symbols(locale: Locale) -> Symbols {
    match locale {
        Locale::En => Symbols {
            group: ",",
            decimal: ".",
            minus: "-",
        },
        Locale::Ar => Symbols {
            group: "\u{066C}",
            decimal: "\u{066B}",
            minus: "\u{061C}-",
        },
    }
}

/// Swap ASCII digits for the locale's digit set.
fn localize_digits(locale: Locale, text: &str) -> String {
    match locale {
        Locale::En => text.to_string(),
        Locale::Ar => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                None => c,
            })
            .collect(),
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Round the shortest round-trip decimal text of `value` (no sign) to
/// [`MAX_FRACTION_DIGITS`], half away from zero. Returns the integer and
/// fraction digits; the fraction keeps trailing zeros.
fn round_decimal(value: f64) -> (String, String) {
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if frac_part.len() <= MAX_FRACTION_DIGITS {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[MAX_FRACTION_DIGITS] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(MAX_FRACTION_DIGITS))
        .collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - MAX_FRACTION_DIGITS);
    (
        String::from_utf8_lossy(int_digits).into_owned(),
        String::from_utf8_lossy(frac_digits).into_owned(),
    )
}

/// Format `value` with grouping separators and at most three fraction
/// digits (`1234567.5` → `1,234,567.5` in English, `١٬٢٣٤٬٥٦٧٫٥` in Arabic).
pub fn format_number(locale: Locale, value: f64) -> String {
    if value.is_nan() {
        return match locale {
            Locale::En => "NaN".to_string(),
            Locale::Ar => "ليس رقمًا".to_string(),
        };
    }

    let sym = symbols(locale);
    if value.is_infinite() {
        let sign = if value < 0.0 { sym.minus } else { "" };
        return format!("{sign}∞");
    }

    let (int_part, frac_part) = round_decimal(value);
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();

    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push_str(sym.minus);
    }
    out.push_str(&group_thousands(&int_part, sym.group));
    if !frac_part.is_empty() {
        out.push_str(sym.decimal);
        out.push_str(frac_part);
    }

    localize_digits(locale, &out)
}

/// Medium-length date (`5 Jan 2024` in English, `٠٥‏/٠١‏/٢٠٢٤` in Arabic).
pub fn format_date(locale: Locale, date: Timestamp) -> String {
    match locale {
        Locale::En => date.format("%-d %b %Y").to_string(),
        Locale::Ar => {
            let numeric = date.format("%d\u{200F}/%m\u{200F}/%Y").to_string();
            localize_digits(locale, &numeric)
        }
    }
}
