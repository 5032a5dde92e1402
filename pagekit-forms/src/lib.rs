//! PageKit Forms - Signup form validation
//!
//! Field rules for username, password, email and age, plus the aggregate
//! form verdict. Rules never fail: bad input simply does not pass.

mod rules;
mod helpers;
mod validate;

pub use rules::{
    validate_username, validate_password, validate_email, validate_age,
    validate_form, check_form, AgeInput, FormVerdict,
    MIN_USERNAME_LEN, MIN_PASSWORD_LEN, MIN_ROOT_DOMAIN_LEN, MIN_AGE, MAX_AGE,
    PASSWORD_SYMBOLS,
};

use pagekit_plugin::PluginRegistry;

/// Load form functions into registry
pub fn load_forms_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Field rules (4 functions)
        .with_function(validate::ValidateUsername)
        .with_function(validate::ValidatePassword)
        .with_function(validate::ValidateEmail)
        .with_function(validate::ValidateAge)

        // Whole form (2 functions)
        .with_function(validate::ValidateForm)
        .with_function(validate::CheckForm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_forms_library() {
        let registry = load_forms_library(PluginRegistry::new());

        assert!(registry.get_function("validate_username").is_some());
        assert!(registry.get_function("validate_password").is_some());
        assert!(registry.get_function("validate_email").is_some());
        assert!(registry.get_function("validate_age").is_some());
        assert!(registry.get_function("validate_form").is_some());
        assert!(registry.get_function("check_form").is_some());
    }
}
