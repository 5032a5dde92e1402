//! Form validation functions: validate_username, validate_password,
//! validate_email, validate_age, validate_form, check_form

use pagekit_plugin::prelude::*;
use crate::helpers::{extract_age, extract_text};
use crate::rules::{self, FormVerdict};
use std::collections::HashMap;

/// Run a text rule against the first argument. Null fails the rule.
fn call_text_rule(func: &str, args: &[Value], rule: fn(&str) -> bool) -> Value {
    if args.is_empty() {
        return Value::Error(PageError::arg_count(func, 1, 0));
    }

    match extract_text(&args[0], func, "text") {
        Ok(Some(s)) => Value::Bool(rule(s)),
        Ok(None) => Value::Bool(false),
        Err(e) => Value::Error(e),
    }
}

// ============ ValidateUsername ============

pub struct ValidateUsername;

static TEXT_ARGS: [ArgMeta; 1] = [ArgMeta::required("text", "Text", "Raw field value")];

static VALIDATE_USERNAME_EXAMPLES: [&str; 3] = [
    "validate_username(\"ab-12\") → true",
    "validate_username(\"abc\") → false",
    "validate_username(\"abcd!\") → false",
];

static VALIDATE_USERNAME_RELATED: [&str; 2] = ["validate_form", "check_form"];

impl FunctionPlugin for ValidateUsername {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "validate_username",
            description: "At least 4 characters: ASCII letters, digits and hyphens only",
            usage: "validate_username(text)",
            args: &TEXT_ARGS,
            returns: "Bool",
            examples: &VALIDATE_USERNAME_EXAMPLES,
            category: "forms",
            related: &VALIDATE_USERNAME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_text_rule("validate_username", args, rules::validate_username)
    }
}

// ============ ValidatePassword ============

pub struct ValidatePassword;

static VALIDATE_PASSWORD_EXAMPLES: [&str; 3] = [
    "validate_password(\"longpass1!\") → true",
    "validate_password(\"short1!\") → false",
    "validate_password(\"alllettersnosymbol1\") → false",
];

impl FunctionPlugin for ValidatePassword {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "validate_password",
            description: "At least 8 characters with a letter, a digit and one of !@#$%^&*-_()",
            usage: "validate_password(text)",
            args: &TEXT_ARGS,
            returns: "Bool",
            examples: &VALIDATE_PASSWORD_EXAMPLES,
            category: "forms",
            related: &VALIDATE_USERNAME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_text_rule("validate_password", args, rules::validate_password)
    }
}

// ============ ValidateEmail ============

pub struct ValidateEmail;

static VALIDATE_EMAIL_EXAMPLES: [&str; 3] = [
    "validate_email(\"a@b.com\") → true",
    "validate_email(\"a..b@c.com\") → false",
    "validate_email(\"a@b.c\") → false",
];

impl FunctionPlugin for ValidateEmail {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "validate_email",
            description: "Permissive email check: one @, no # or .., dotted domain with a 2+ character last label",
            usage: "validate_email(text)",
            args: &TEXT_ARGS,
            returns: "Bool",
            examples: &VALIDATE_EMAIL_EXAMPLES,
            category: "forms",
            related: &VALIDATE_USERNAME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        call_text_rule("validate_email", args, rules::validate_email)
    }
}

// ============ ValidateAge ============

pub struct ValidateAge;

static VALIDATE_AGE_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("age", "Number", "Age as Number or numeric Text"),
];

static VALIDATE_AGE_EXAMPLES: [&str; 3] = [
    "validate_age(15) → true",
    "validate_age(\"121\") → false",
    "validate_age(\"abc\") → false",
];

impl FunctionPlugin for ValidateAge {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "validate_age",
            description: "Age between 10 and 120 inclusive; non-numeric input fails",
            usage: "validate_age(age)",
            args: &VALIDATE_AGE_ARGS,
            returns: "Bool",
            examples: &VALIDATE_AGE_EXAMPLES,
            category: "forms",
            related: &VALIDATE_USERNAME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(PageError::arg_count("validate_age", 1, 0));
        }

        match extract_age(&args[0], "validate_age", "age") {
            Ok(Some(age)) => Value::Bool(rules::validate_age(age)),
            Ok(None) => Value::Bool(false),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ ValidateForm / CheckForm ============

static FORM_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("username", "Text", "Username field"),
    ArgMeta::required("password", "Text", "Password field"),
    ArgMeta::required("email", "Text", "Email field"),
    ArgMeta::required("age", "Number", "Age field (Number or numeric Text)"),
];

fn form_verdict(func: &str, args: &[Value]) -> Result<FormVerdict, PageError> {
    if args.len() < 4 {
        return Err(PageError::arg_count(func, 4, args.len()));
    }

    let username = extract_text(&args[0], func, "username")?;
    let password = extract_text(&args[1], func, "password")?;
    let email = extract_text(&args[2], func, "email")?;
    let age = extract_age(&args[3], func, "age")?;

    Ok(FormVerdict {
        username: username.is_some_and(rules::validate_username),
        password: password.is_some_and(rules::validate_password),
        email: email.is_some_and(rules::validate_email),
        age: age.is_some_and(|a| rules::validate_age(a)),
    })
}

pub struct ValidateForm;

static VALIDATE_FORM_EXAMPLES: [&str; 2] = [
    "validate_form(\"ab-12\", \"longpass1!\", \"a@b.com\", 15) → true",
    "validate_form(\"abc\", \"longpass1!\", \"a@b.com\", 15) → false",
];

static VALIDATE_FORM_RELATED: [&str; 5] = [
    "check_form", "validate_username", "validate_password", "validate_email", "validate_age",
];

impl FunctionPlugin for ValidateForm {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "validate_form",
            description: "True only if username, password, email and age all pass",
            usage: "validate_form(username, password, email, age)",
            args: &FORM_ARGS,
            returns: "Bool",
            examples: &VALIDATE_FORM_EXAMPLES,
            category: "forms",
            related: &VALIDATE_FORM_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match form_verdict("validate_form", args) {
            Ok(verdict) => Value::Bool(verdict.is_valid()),
            Err(e) => Value::Error(e),
        }
    }
}

pub struct CheckForm;

static CHECK_FORM_EXAMPLES: [&str; 1] = [
    "check_form(\"abc\", \"longpass1!\", \"a@b.com\", 15) → {username: false, password: true, email: true, age: true, valid: false}",
];

impl FunctionPlugin for CheckForm {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "check_form",
            description: "Validate every form field and report each verdict",
            usage: "check_form(username, password, email, age)",
            args: &FORM_ARGS,
            returns: "Object {username, password, email, age, valid: Bool}",
            examples: &CHECK_FORM_EXAMPLES,
            category: "forms",
            related: &VALIDATE_FORM_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let verdict = match form_verdict("check_form", args) {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };

        let mut obj = HashMap::new();
        obj.insert("username".to_string(), Value::Bool(verdict.username));
        obj.insert("password".to_string(), Value::Bool(verdict.password));
        obj.insert("email".to_string(), Value::Bool(verdict.email));
        obj.insert("age".to_string(), Value::Bool(verdict.age));
        obj.insert("valid".to_string(), Value::Bool(verdict.is_valid()));
        Value::Object(obj)
    }
}
