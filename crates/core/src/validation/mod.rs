//! Request payload schemas.
//!
//! Shape checks come from serde (closed enums, required fields) and
//! constraint checks from `validator` derives. Rules the derive cannot
//! express go in [`Payload::extra_issues`].

pub mod campaign;
pub mod donation;
pub mod locale;
pub mod patient;
pub mod user;

use validator::Validate;

use crate::error::{issues_from, CoreError, ValidationIssue};

/// A deserialized request body that can check its own constraints.
pub trait Payload: Validate {
    /// Cross-field rules. Empty by default.
    fn extra_issues(&self) -> Vec<ValidationIssue> {
        Vec::new()
    }

    /// Run every rule, collecting all failures rather than stopping at the
    /// first one.
    fn check(&self) -> Result<(), CoreError> {
        let mut issues = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => issues_from(&errors),
        };
        issues.extend(self.extra_issues());

        if issues.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(issues))
        }
    }
}
