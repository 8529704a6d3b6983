//! Lead submission validator
//!
//! Validation semantics:
//! - The payload root must be a JSON object
//! - name, email and phone are required strings
//! - projectDetails may be absent, null, or a string
//! - Every field is checked; all issues are reported, in field order
//! - Undeclared fields are dropped from the output
//! - No trimming, coercion, or defaults
//!
//! The validator is pure: the same payload always yields the same result.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{FieldIssue, IssueCode, ValidationError, ValidationResult};
use super::types::{FieldRule, LeadSubmissionInput, EMAIL, INVALID_EMAIL, NAME, PHONE, PROJECT_DETAILS};

/// Validates an untyped payload into a [`LeadSubmissionInput`].
///
/// # Errors
///
/// Returns `ValidationError` listing every offending field when any rule
/// fails, or a single root issue when the payload is not an object.
pub fn validate(candidate: &Value) -> ValidationResult<LeadSubmissionInput> {
    let obj = candidate.as_object().ok_or_else(|| {
        ValidationError::single(FieldIssue::root(
            IssueCode::InvalidType,
            format!("Expected object, received {}", json_type_name(candidate)),
        ))
    })?;

    let mut issues = Vec::new();

    let name = required_string(obj, &NAME, &mut issues)
        .filter(|v| check_length(v, &NAME, &mut issues));

    let email = required_string(obj, &EMAIL, &mut issues).filter(|v| {
        if !is_valid_email(v) {
            issues.push(FieldIssue::new(IssueCode::InvalidString, EMAIL.key, INVALID_EMAIL));
            return false;
        }
        check_length(v, &EMAIL, &mut issues)
    });

    let phone = required_string(obj, &PHONE, &mut issues)
        .filter(|v| check_length(v, &PHONE, &mut issues));

    let project_details = match obj.get(PROJECT_DETAILS.key) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => {
            check_length(s, &PROJECT_DETAILS, &mut issues).then(|| Some(s.clone()))
        }
        Some(other) => {
            issues.push(FieldIssue::type_mismatch(
                PROJECT_DETAILS.key,
                "string",
                json_type_name(other),
            ));
            None
        }
    };

    match (name, email, phone, project_details) {
        (Some(name), Some(email), Some(phone), Some(project_details)) if issues.is_empty() => {
            Ok(LeadSubmissionInput {
                name,
                email,
                phone,
                project_details,
            })
        }
        _ => Err(ValidationError::new(issues)),
    }
}

/// Returns true when `value` is an acceptable email address.
///
/// Grammar: `local@domain` where the local part uses letters, digits and
/// `_ ' + - .`, does not start with a dot, ends in a letter, digit or
/// `_ + -`, and never contains `..`; the domain is dot-separated labels
/// ending in a top-level label of at least two letters.
pub fn is_valid_email(value: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    });

    !value.starts_with('.') && !value.contains("..") && pattern.is_match(value)
}

/// Extracts a required string field, recording an issue when it is
/// missing or not a string.
fn required_string(
    obj: &Map<String, Value>,
    rule: &FieldRule,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match obj.get(rule.key) {
        Some(Value::String(s)) => Some(s.clone()),
        None => {
            issues.push(FieldIssue::required(rule.key));
            None
        }
        Some(other) => {
            issues.push(FieldIssue::type_mismatch(rule.key, "string", json_type_name(other)));
            None
        }
    }
}

/// Checks character-count bounds, recording an issue on violation.
fn check_length(value: &str, rule: &FieldRule, issues: &mut Vec<FieldIssue>) -> bool {
    let len = value.chars().count();
    if len < rule.min_len {
        issues.push(FieldIssue::new(IssueCode::TooSmall, rule.key, rule.too_short));
        false
    } else if len > rule.max_len {
        issues.push(FieldIssue::new(IssueCode::TooBig, rule.key, rule.too_long_message()));
        false
    } else {
        true
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
