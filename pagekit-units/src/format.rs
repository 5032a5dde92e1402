//! Fixed-point display of converted magnitudes

use crate::{convert, ConversionError, LengthUnit};

/// Fractional digits shown in the converter's output box
pub const DISPLAY_DIGITS: usize = 12;

/// Upper bound on requested fractional digits
pub const MAX_FIXED_DIGITS: usize = 100;

/// Enough fractional digits to print any finite f64 exactly
const EXACT_DIGITS: usize = 1100;

/// Format `value` with exactly `digits` fractional digits.
///
/// Rounds the exact binary value, with ties going away from zero. Negative
/// zero prints without a sign. Magnitudes of 1e21 and above fall back to
/// exponent form (`1e+21`), and non-finite values print as `NaN` / `Infinity`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return exponent_form(value);
    }

    let digits = digits.min(MAX_FIXED_DIGITS);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| char::from(b)));
    }
    out
}

fn exponent_form(value: f64) -> String {
    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// Convert and render with `DISPLAY_DIGITS` fractional digits
pub fn convert_display(from: LengthUnit, to: LengthUnit, value: f64) -> Result<String, ConversionError> {
    convert(from, to, value).map(|v| to_fixed(v, DISPLAY_DIGITS))
}
