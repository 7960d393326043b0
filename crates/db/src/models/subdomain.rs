//! Subdomain micro-site entity model and DTOs.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `subdomains` table; `slug` is the DNS label.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subdomain {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub theme_color: Option<String>,
    pub is_active: bool,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Subdomain {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] = &["title", "description", "content"];

    pub fn localize(&self, locale: Locale) -> LocalizedSubdomain {
        let l = self.localizer(locale);
        LocalizedSubdomain {
            id: self.id,
            slug: self.slug.clone(),
            locale,
            title: l.field("title"),
            description: l.optional_field("description"),
            content: l.optional_field("content"),
            theme_color: self.theme_color.clone(),
        }
    }
}

impl Translatable for Subdomain {
    fn base_field(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "description" => self.description.as_deref(),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }

    fn raw_translations(&self) -> Option<&Value> {
        Some(&self.translations)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedSubdomain {
    pub id: DbId,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub theme_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubdomain {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub theme_color: Option<String>,
    pub is_active: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubdomain {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub theme_color: Option<String>,
    pub is_active: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreateSubdomain, UpdateSubdomain);
