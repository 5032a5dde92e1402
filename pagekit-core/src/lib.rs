//! PageKit Core - Fundamental types
//!
//! This crate provides the core types used throughout PageKit:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `PageError`: Structured errors returned to callers

mod value;
mod error;

pub use value::Value;
pub use error::{PageError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, PageError, Severity};
    pub use crate::error::codes;
}
