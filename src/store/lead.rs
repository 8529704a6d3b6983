//! # Lead Submission Record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::LeadSubmissionInput;

/// A stored lead submission.
///
/// Created only by a [`super::LeadStore`]; `id` and `submitted_at` are
/// always store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_details: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub(crate) fn from_input(id: u64, input: LeadSubmissionInput, submitted_at: DateTime<Utc>) -> Self {
        let LeadSubmissionInput {
            name,
            email,
            phone,
            project_details,
        } = input;

        Self {
            id,
            name,
            email,
            phone,
            project_details,
            submitted_at,
        }
    }
}
