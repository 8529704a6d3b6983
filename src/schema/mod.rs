//! Lead submission schema
//!
//! The single source of truth for what a lead submission may contain.
//! Both the pre-submit check (see the `validate` CLI command) and the
//! authoritative HTTP boundary call [`validate`].
//!
//! # Rules
//!
//! | Field | Rule |
//! |---|---|
//! | name | string, 2..=100 characters |
//! | email | string, valid address, at most 254 characters |
//! | phone | string, 10..=32 characters |
//! | projectDetails | optional string, at most 5000 characters |

mod errors;
mod types;
mod validator;

pub use errors::{FieldIssue, IssueCode, ValidationError, ValidationResult};
pub use types::{FieldRule, LeadSubmissionInput, EMAIL, NAME, PHONE, PROJECT_DETAILS};
pub use validator::{is_valid_email, validate};
