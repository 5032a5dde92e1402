//! Parsing raw form input for the converter

use crate::{format::convert_display, ConversionError, LengthUnit};

/// Parse the magnitude typed into the converter's input box
pub fn parse_magnitude(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::InvalidMagnitude(raw.to_string())),
    }
}

/// Full converter path from raw selector and input strings to display text
///
/// ```text
/// convert_str("cm", "meter", "250") → "2.500000000000"
/// ```
pub fn convert_str(from: &str, to: &str, raw: &str) -> Result<String, ConversionError> {
    let from_unit: LengthUnit = from.parse()?;
    let to_unit: LengthUnit = to.parse()?;
    let value = parse_magnitude(raw)?;
    convert_display(from_unit, to_unit, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_magnitude() {
        assert_eq!(parse_magnitude("12.5"), Ok(12.5));
        assert_eq!(parse_magnitude("  -3 "), Ok(-3.0));
        assert_eq!(parse_magnitude("1e3"), Ok(1000.0));
        assert_eq!(parse_magnitude(".5"), Ok(0.5));
    }

    #[test]
    fn test_parse_magnitude_rejects() {
        for raw in ["", "   ", "abc", "12abc", "inf", "NaN", "-infinity", "1e999"] {
            assert_eq!(
                parse_magnitude(raw),
                Err(ConversionError::InvalidMagnitude(raw.to_string())),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_convert_str() {
        assert_eq!(convert_str("cm", "meter", "250").unwrap(), "2.500000000000");
        assert_eq!(convert_str("foot", "inch", "1").unwrap(), "12.000000000000");
    }

    #[test]
    fn test_convert_str_errors() {
        assert_eq!(
            convert_str("yard", "meter", "1"),
            Err(ConversionError::UnknownUnit("yard".to_string()))
        );
        assert_eq!(
            convert_str("cm", "mile", "1"),
            Err(ConversionError::UnknownUnit("mile".to_string()))
        );
        assert_eq!(
            convert_str("cm", "meter", "x"),
            Err(ConversionError::InvalidMagnitude("x".to_string()))
        );
    }
}
