//! Fixed length conversion table
//!
//! Every (from, to) pair maps to a single multiply or divide by a constant.
//! The meter/inch and meter/foot pairs are not exact reciprocals of each
//! other (39.3700787 vs 39.37, 3.28084 vs 3.281). Results produced by the
//! converter have always used these constants, so they are kept as-is.

use crate::{ConversionError, LengthUnit};

/// How a magnitude is carried from one unit to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    Identity,
    Multiply(f64),
    Divide(f64),
}

impl Factor {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Factor::Identity => value,
            Factor::Multiply(k) => value * k,
            Factor::Divide(k) => value / k,
        }
    }

    /// True if `other` undoes `self` with the same constant
    fn is_inverse_of(&self, other: &Factor) -> bool {
        match (self, other) {
            (Factor::Identity, Factor::Identity) => true,
            (Factor::Multiply(a), Factor::Divide(b)) | (Factor::Divide(a), Factor::Multiply(b)) => a == b,
            _ => false,
        }
    }
}

use Factor::{Divide, Identity, Multiply};

/// Rows are the source unit, columns the target, both in `LengthUnit::ALL` order
pub const FACTORS: [[Factor; 4]; 4] = [
    // cm
    [Identity, Divide(100.0), Divide(2.54), Divide(30.48)],
    // meter
    [Multiply(100.0), Identity, Multiply(39.3700787), Multiply(3.28084)],
    // inch
    [Multiply(2.54), Divide(39.37), Identity, Divide(12.0)],
    // foot
    [Multiply(30.48), Divide(3.281), Multiply(12.0), Identity],
];

/// Look up the factor for a unit pair
pub fn factor(from: LengthUnit, to: LengthUnit) -> Factor {
    FACTORS[from.index()][to.index()]
}

/// Convert a finite magnitude between two length units
pub fn convert(from: LengthUnit, to: LengthUnit, value: f64) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidMagnitude(value.to_string()));
    }
    Ok(factor(from, to).apply(value))
}

/// Whether converting `a -> b` and `b -> a` use the same constant
///
/// Returns false for meter/inch and meter/foot.
pub fn is_reciprocal_pair(a: LengthUnit, b: LengthUnit) -> bool {
    factor(a, b).is_inverse_of(&factor(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LengthUnit::*;

    #[test]
    fn test_identity_on_diagonal() {
        for unit in LengthUnit::ALL {
            for x in [0.0, -0.0, 1.0, -7.25, 1e-300, 1.7976931348623157e308, 0.1 + 0.2] {
                assert_eq!(convert(unit, unit, x).unwrap().to_bits(), x.to_bits());
            }
        }
    }

    #[test]
    fn test_cm_meter() {
        assert_eq!(convert(Centimeter, Meter, 100.0), Ok(1.0));
        assert_eq!(convert(Meter, Centimeter, 1.0), Ok(100.0));
    }

    #[test]
    fn test_meter_inch_asymmetry() {
        assert_eq!(convert(Meter, Inch, 1.0), Ok(39.3700787));
        assert_eq!(convert(Inch, Meter, 1.0), Ok(1.0 / 39.37));

        let there = convert(Meter, Inch, 1.0).unwrap();
        let back = convert(Inch, Meter, there).unwrap();
        assert_eq!(back, 39.3700787 / 39.37);
        assert_ne!(back, 1.0);
        let drift = back - 1.0;
        assert!(drift > 1e-6 && drift < 1e-5, "drift {}", drift);
    }

    #[test]
    fn test_meter_foot_asymmetry() {
        assert_eq!(convert(Meter, Foot, 1.0), Ok(3.28084));
        assert_eq!(convert(Foot, Meter, 3.281), Ok(1.0));
        assert!(!is_reciprocal_pair(Meter, Foot));
        assert!(!is_reciprocal_pair(Inch, Meter));
    }

    #[test]
    fn test_reciprocal_pairs() {
        assert!(is_reciprocal_pair(Centimeter, Meter));
        assert!(is_reciprocal_pair(Centimeter, Inch));
        assert!(is_reciprocal_pair(Foot, Centimeter));
        assert!(is_reciprocal_pair(Inch, Foot));
        assert!(is_reciprocal_pair(Meter, Meter));
    }

    #[test]
    fn test_divide_entries_divide() {
        let x = 0.1;
        assert_eq!(convert(Centimeter, Inch, x).unwrap().to_bits(), (x / 2.54).to_bits());
        assert_eq!(convert(Foot, Meter, x).unwrap().to_bits(), (x / 3.281).to_bits());
    }

    #[test]
    fn test_whole_table() {
        assert_eq!(convert(Centimeter, Foot, 30.48), Ok(1.0));
        assert_eq!(convert(Inch, Centimeter, 1.0), Ok(2.54));
        assert_eq!(convert(Inch, Foot, 24.0), Ok(2.0));
        assert_eq!(convert(Foot, Centimeter, 1.0), Ok(30.48));
        assert_eq!(convert(Foot, Inch, 2.0), Ok(24.0));
    }

    #[test]
    fn test_negative_passes_through() {
        assert_eq!(convert(Meter, Centimeter, -2.0), Ok(-200.0));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(convert(Meter, Inch, f64::NAN), Err(ConversionError::InvalidMagnitude(_))));
        assert!(matches!(convert(Meter, Inch, f64::INFINITY), Err(ConversionError::InvalidMagnitude(_))));
        assert!(matches!(convert(Meter, Meter, f64::NEG_INFINITY), Err(ConversionError::InvalidMagnitude(_))));
    }
}
