//! Lead submission shape and per-field length rules

use serde::{Deserialize, Serialize};

/// A normalized submission as returned by [`super::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmissionInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_details: Option<String>,
}

/// Length limits for one string field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Wire name of the field
    pub key: &'static str,
    /// Name used in messages
    pub label: &'static str,
    pub min_len: usize,
    pub max_len: usize,
    /// Message used when the value is too short
    pub too_short: &'static str,
}

impl FieldRule {
    pub fn too_long_message(&self) -> String {
        format!("{} must be at most {} characters", self.label, self.max_len)
    }
}

pub const NAME: FieldRule = FieldRule {
    key: "name",
    label: "Name",
    min_len: 2,
    max_len: 100,
    too_short: "Name must be at least 2 characters",
};

pub const EMAIL: FieldRule = FieldRule {
    key: "email",
    label: "Email",
    min_len: 0,
    max_len: 254,
    too_short: "Please enter a valid email address",
};

pub const PHONE: FieldRule = FieldRule {
    key: "phone",
    label: "Phone",
    min_len: 10,
    max_len: 32,
    too_short: "Please enter a valid phone number",
};

pub const PROJECT_DETAILS: FieldRule = FieldRule {
    key: "projectDetails",
    label: "Project details",
    min_len: 0,
    max_len: 5000,
    too_short: "",
};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
