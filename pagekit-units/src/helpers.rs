//! Argument extraction for unit functions

use pagekit_core::{Value, PageError};
use crate::{parse_magnitude, LengthUnit, MAX_FIXED_DIGITS};

/// Magnitude from a Number, or from Text typed into a form field
pub fn extract_magnitude(value: &Value, func: &str, arg: &str) -> Result<f64, PageError> {
    match value {
        Value::Number(n) if n.is_finite() => Ok(*n),
        Value::Number(n) => Err(PageError::invalid_magnitude(&n.to_string())),
        Value::Text(s) => parse_magnitude(s).map_err(PageError::from),
        Value::Error(e) => Err(e.clone()),
        other => Err(PageError::arg_type(func, arg, "Number", other.type_name())),
    }
}

pub fn extract_unit(value: &Value, func: &str, arg: &str) -> Result<LengthUnit, PageError> {
    match value {
        Value::Text(s) => s.parse::<LengthUnit>().map_err(PageError::from),
        Value::Error(e) => Err(e.clone()),
        other => Err(PageError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Optional digit count, falling back to `default` when missing or null
pub fn extract_digits_or(args: &[Value], index: usize, default: usize, func: &str) -> Result<usize, PageError> {
    match args.get(index) {
        Some(Value::Number(n)) => {
            if n.fract() != 0.0 || *n < 0.0 || *n > MAX_FIXED_DIGITS as f64 {
                return Err(PageError::domain_error(format!(
                    "{}(): digits must be an integer between 0 and {}, got {}",
                    func, MAX_FIXED_DIGITS, n
                )));
            }
            Ok(*n as usize)
        }
        Some(Value::Null) | None => Ok(default),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(PageError::arg_type(func, "digits", "Number", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::codes;

    #[test]
    fn test_extract_magnitude() {
        assert_eq!(extract_magnitude(&Value::Number(2.0), "f", "value"), Ok(2.0));
        assert_eq!(extract_magnitude(&Value::from(" 4.5 "), "f", "value"), Ok(4.5));
        let err = extract_magnitude(&Value::Number(f64::NAN), "f", "value").unwrap_err();
        assert_eq!(err.code, codes::INVALID_MAGNITUDE);
        let err = extract_magnitude(&Value::Bool(true), "f", "value").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits_or(&[], 0, 12, "f"), Ok(12));
        assert_eq!(extract_digits_or(&[Value::Number(3.0)], 0, 12, "f"), Ok(3));
        assert!(extract_digits_or(&[Value::Number(2.5)], 0, 12, "f").is_err());
        assert!(extract_digits_or(&[Value::Number(101.0)], 0, 12, "f").is_err());
        assert!(extract_digits_or(&[Value::Number(f64::NAN)], 0, 12, "f").is_err());
    }
}
