//! Locale-aware number formatting for tooltip values.
//!
//! Matches the default `Number.prototype.toLocaleString()` output: shortest round-trip digits,
//! at most three fraction digits (rounded half away from zero on the decimal digits), trailing
//! zeros trimmed, and the integer part grouped in threes.

use ryu_js::Buffer;

const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
}

pub const EN_US: NumberLocale = NumberLocale {
    tag: "en-US",
    group_separator: ",",
    decimal_separator: ".",
};

pub const DE_DE: NumberLocale = NumberLocale {
    tag: "de-DE",
    group_separator: ".",
    decimal_separator: ",",
};

// ICU uses a narrow no-break space for French grouping.
pub const FR_FR: NumberLocale = NumberLocale {
    tag: "fr-FR",
    group_separator: "\u{202f}",
    decimal_separator: ",",
};

const PRESETS: &[NumberLocale] = &[EN_US, DE_DE, FR_FR];

impl Default for NumberLocale {
    fn default() -> Self {
        EN_US
    }
}

impl NumberLocale {
    /// Looks a locale up by BCP-47 tag (`de-AT`, `fr_CA`, `en`), matching on the language.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        PRESETS
            .iter()
            .find(|p| p.tag.split('-').next() == Some(lang.as_str()))
            .copied()
    }

    /// The host's default locale, or `en-US` when it is unknown or unsupported.
    pub fn system() -> Self {
        let detected = sys_locale::get_locale();
        let locale = detected
            .as_deref()
            .and_then(Self::from_tag)
            .unwrap_or_default();
        tracing::debug!(detected = ?detected, locale = locale.tag, "resolved number locale");
        locale
    }

    pub fn format(&self, value: f64) -> String {
        format_number(value, self)
    }
}

pub fn format_number(value: f64, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let (int_digits, frac_digits) = plain_digits(value.abs());
    let (int_digits, frac_digits) = round_fraction(&int_digits, &frac_digits, MAX_FRACTION_DIGITS);
    let frac_digits = frac_digits.trim_end_matches('0');

    let mut out = String::with_capacity(int_digits.len() * 2 + frac_digits.len() + 2);
    out.push_str(sign);
    push_grouped(&mut out, &int_digits, locale.group_separator);
    if !frac_digits.is_empty() {
        out.push_str(locale.decimal_separator);
        out.push_str(frac_digits);
    }
    out
}

/// Splits the shortest representation of a finite, non-negative value into integer and fraction
/// digits, expanding any exponent.
fn plain_digits(abs: f64) -> (String, String) {
    let mut buf = Buffer::new();
    let repr = buf.format_finite(abs);
    let (mantissa, exp) = match repr.split_once('e') {
        Some((m, e)) => (m, e.parse::<i64>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if exp == 0 {
        return (int_part.to_string(), frac_part.to_string());
    }

    let digits = format!("{int_part}{frac_part}");
    let point = int_part.len() as i64 + exp;
    if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{zeros}{digits}"))
    } else if point as usize >= digits.len() {
        let zeros = "0".repeat(point as usize - digits.len());
        (format!("{digits}{zeros}"), String::new())
    } else {
        let (i, f) = digits.split_at(point as usize);
        (i.to_string(), f.to_string())
    }
}

fn round_fraction(int_digits: &str, frac_digits: &str, max: usize) -> (String, String) {
    if frac_digits.len() <= max {
        return (int_digits.to_string(), frac_digits.to_string());
    }
    let round_up = frac_digits.as_bytes()[max] >= b'5';
    let mut digits: Vec<u8> = int_digits
        .bytes()
        .chain(frac_digits.bytes().take(max))
        .collect();
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    let split = digits.len() - max;
    let int: String = digits[..split].iter().map(|&b| b as char).collect();
    let frac: String = digits[split..].iter().map(|&b| b as char).collect();
    (int, frac)
}

fn push_grouped(out: &mut String, int_digits: &str, separator: &str) {
    let len = int_digits.len();
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
}
