//! Job posting entity model and DTOs.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `job_postings` table.
///
/// A posting is open while `is_active` is set and `closes_at` is unset or in
/// the future.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobPosting {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: String,
    pub description: String,
    pub requirements: Option<String>,
    pub is_active: bool,
    pub closes_at: Option<Timestamp>,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl JobPosting {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] =
        &["title", "department", "location", "description", "requirements"];

    pub fn localize(&self, locale: Locale) -> LocalizedJobPosting {
        let l = self.localizer(locale);
        LocalizedJobPosting {
            id: self.id,
            slug: self.slug.clone(),
            locale,
            title: l.field("title"),
            department: l.optional_field("department"),
            location: l.optional_field("location"),
            employment_type: self.employment_type.clone(),
            description: l.field("description"),
            requirements: l.optional_field("requirements"),
            closes_at: self.closes_at,
        }
    }
}

impl Translatable for JobPosting {
    fn base_field(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "department" => self.department.as_deref(),
            "location" => self.location.as_deref(),
            "description" => Some(&self.description),
            "requirements" => self.requirements.as_deref(),
            _ => None,
        }
    }

    fn raw_translations(&self) -> Option<&Value> {
        Some(&self.translations)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedJobPosting {
    pub id: DbId,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: String,
    pub description: String,
    pub requirements: Option<String>,
    pub closes_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobPosting {
    pub slug: Option<String>,
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Defaults to `full-time` if omitted.
    pub employment_type: Option<String>,
    #[serde(default)]
    pub description: String,
    pub requirements: Option<String>,
    pub is_active: Option<bool>,
    pub closes_at: Option<Timestamp>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJobPosting {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub is_active: Option<bool>,
    pub closes_at: Option<Timestamp>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreateJobPosting, UpdateJobPosting);
