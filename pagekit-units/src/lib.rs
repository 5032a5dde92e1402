//! PageKit Units - Length conversion
//!
//! Converts magnitudes between the four length units of the converter form:
//! centimeter, meter, inch and foot. Conversion goes through a fixed
//! 4×4 table of multiply/divide constants rather than a common base unit.

mod unit;
mod units;
mod format;
mod parse;
mod helpers;
mod convert;

pub use unit::{LengthUnit, ConversionError};
pub use units::{convert, factor, is_reciprocal_pair, Factor, FACTORS};
pub use format::{to_fixed, convert_display, DISPLAY_DIGITS, MAX_FIXED_DIGITS};
pub use parse::{parse_magnitude, convert_str};

use pagekit_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(convert::Convert)
        .with_function(convert::ConvertFixed)
        .with_function(convert::LengthUnits)
}
