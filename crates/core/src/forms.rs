//! Public submission payloads (contact, newsletter, job application) and
//! their field validation.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::i18n::Locale;

/// Body of `POST /contact`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 10, max = 5000))]
    pub message: String,
    /// Token issued by the CAPTCHA widget on the page.
    pub captcha_token: Option<String>,
}

/// Body of `POST /newsletter/subscribe`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsletterSignup {
    #[validate(email, length(max = 254))]
    pub email: String,
    /// Preferred newsletter language; defaults to the request locale.
    pub locale: Option<Locale>,
    pub captcha_token: Option<String>,
}

/// Body of `POST /careers/{slug}/apply`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobApplicationSubmission {
    #[validate(length(min = 2, max = 120))]
    pub full_name: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(length(max = 5000))]
    pub cover_letter: Option<String>,
    /// Link to a CV hosted elsewhere; the API does not accept file uploads.
    #[validate(url, length(max = 2048))]
    pub resume_url: Option<String>,
    #[validate(url, length(max = 2048))]
    pub linkedin_url: Option<String>,
    pub captcha_token: Option<String>,
}

/// Run derived validation and flatten failures into a [`CoreError::Validation`].
///
/// The message lists the offending field names in alphabetical order.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        CoreError::Validation(format!("Invalid value for: {}", fields.join(", ")))
    })
}

/// Trim a free-text field and turn blank input into `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Lowercase and trim an email address before storage or lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
