//! Job posting and application vocabulary.

use crate::error::CoreError;

pub const EMPLOYMENT_FULL_TIME: &str = "full-time";
pub const EMPLOYMENT_PART_TIME: &str = "part-time";
pub const EMPLOYMENT_CONTRACT: &str = "contract";
pub const EMPLOYMENT_INTERNSHIP: &str = "internship";

/// All valid job posting employment types.
pub const VALID_EMPLOYMENT_TYPES: &[&str] = &[
    EMPLOYMENT_FULL_TIME,
    EMPLOYMENT_PART_TIME,
    EMPLOYMENT_CONTRACT,
    EMPLOYMENT_INTERNSHIP,
];

pub const APPLICATION_NEW: &str = "new";
pub const APPLICATION_REVIEWING: &str = "reviewing";
pub const APPLICATION_INTERVIEW: &str = "interview";
pub const APPLICATION_REJECTED: &str = "rejected";
pub const APPLICATION_HIRED: &str = "hired";

/// All valid job application statuses, in pipeline order.
pub const VALID_APPLICATION_STATUSES: &[&str] = &[
    APPLICATION_NEW,
    APPLICATION_REVIEWING,
    APPLICATION_INTERVIEW,
    APPLICATION_REJECTED,
    APPLICATION_HIRED,
];

/// Validate an employment type against the known set.
pub fn validate_employment_type(value: &str) -> Result<(), CoreError> {
    if !VALID_EMPLOYMENT_TYPES.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid employment type '{value}'. Valid types: {}",
            VALID_EMPLOYMENT_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Validate a job application status against the known set.
pub fn validate_application_status(value: &str) -> Result<(), CoreError> {
    if !VALID_APPLICATION_STATUSES.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid application status '{value}'. Valid statuses: {}",
            VALID_APPLICATION_STATUSES.join(", ")
        )));
    }
    Ok(())
}
