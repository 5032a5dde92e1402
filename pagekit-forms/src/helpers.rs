//! Helper functions for form field arguments

use pagekit_core::{Value, PageError};
use crate::AgeInput;

/// Extract text from a Value, handling null propagation
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<Option<&'a str>, PageError> {
    match value {
        Value::Text(s) => Ok(Some(s.as_str())),
        Value::Null => Ok(None),
        Value::Error(e) => Err(e.clone()),
        other => Err(PageError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Extract the age field, which may arrive as Number or Text
pub fn extract_age<'a>(value: &'a Value, func: &str, arg: &str) -> Result<Option<AgeInput<'a>>, PageError> {
    match value {
        Value::Number(n) => Ok(Some(AgeInput::Number(*n))),
        Value::Text(s) => Ok(Some(AgeInput::Text(s.as_str()))),
        Value::Null => Ok(None),
        Value::Error(e) => Err(e.clone()),
        other => Err(PageError::arg_type(func, arg, "Number or Text", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        let val = Value::Text("hello".to_string());
        assert_eq!(extract_text(&val, "f", "text").unwrap(), Some("hello"));
        assert_eq!(extract_text(&Value::Null, "f", "text").unwrap(), None);
        assert!(extract_text(&Value::Number(1.0), "f", "text").is_err());
    }

    #[test]
    fn test_extract_age() {
        assert_eq!(
            extract_age(&Value::Number(30.0), "f", "age").unwrap(),
            Some(AgeInput::Number(30.0))
        );
        assert_eq!(
            extract_age(&Value::Text("30".to_string()), "f", "age").unwrap(),
            Some(AgeInput::Text("30"))
        );
        assert!(extract_age(&Value::Bool(true), "f", "age").is_err());
    }

    #[test]
    fn test_errors_propagate() {
        let err = PageError::internal("upstream");
        let val = Value::Error(err.clone());
        assert_eq!(extract_text(&val, "f", "text").unwrap_err(), err);
        assert_eq!(extract_age(&val, "f", "age").unwrap_err(), err);
    }
}
