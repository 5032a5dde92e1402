//! Length units understood by the converter

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use pagekit_core::PageError;

/// One of the four length units offered by the converter form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "meter")]
    Meter,
    #[serde(rename = "inch")]
    Inch,
    #[serde(rename = "foot")]
    Foot,
}

impl LengthUnit {
    /// All units, in conversion table order
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    /// Canonical token, as used by the converter's unit selectors
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "meter",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
        }
    }

    /// Row/column of this unit in the factor table
    pub(crate) fn index(&self) -> usize {
        match self {
            LengthUnit::Centimeter => 0,
            LengthUnit::Meter => 1,
            LengthUnit::Inch => 2,
            LengthUnit::Foot => 3,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(LengthUnit::Centimeter),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}

/// Errors that can occur during conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid magnitude: '{0}' is not a finite number")]
    InvalidMagnitude(String),

    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),
}

impl From<ConversionError> for PageError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidMagnitude(raw) => PageError::invalid_magnitude(&raw),
            ConversionError::UnknownUnit(name) => PageError::unknown_unit(&name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::codes;

    #[test]
    fn test_parse_canonical_tokens() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.symbol().parse::<LengthUnit>(), Ok(unit));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("FT".parse::<LengthUnit>(), Ok(LengthUnit::Foot));
        assert_eq!(" feet ".parse::<LengthUnit>(), Ok(LengthUnit::Foot));
        assert_eq!("Metres".parse::<LengthUnit>(), Ok(LengthUnit::Meter));
        assert_eq!("in".parse::<LengthUnit>(), Ok(LengthUnit::Inch));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "yard".parse::<LengthUnit>(),
            Err(ConversionError::UnknownUnit("yard".to_string()))
        );
        assert!("".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&LengthUnit::Centimeter).unwrap();
        assert_eq!(json, "\"cm\"");
        let unit: LengthUnit = serde_json::from_str("\"foot\"").unwrap();
        assert_eq!(unit, LengthUnit::Foot);
    }

    #[test]
    fn test_into_page_error() {
        let err: PageError = ConversionError::UnknownUnit("yard".to_string()).into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        let err: PageError = ConversionError::InvalidMagnitude("abc".to_string()).into();
        assert_eq!(err.code, codes::INVALID_MAGNITUDE);
    }
}
