//! Partner entity model and DTOs.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `partners` table. The partner name is not translated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partner {
    pub id: DbId,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Partner {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] = &["description"];

    pub fn localize(&self, locale: Locale) -> LocalizedPartner {
        let l = self.localizer(locale);
        LocalizedPartner {
            id: self.id,
            locale,
            name: self.name.clone(),
            logo_url: self.logo_url.clone(),
            website_url: self.website_url.clone(),
            description: l.optional_field("description"),
            sort_order: self.sort_order,
        }
    }
}

impl Translatable for Partner {
    fn base_field(&self, field: &str) -> Option<&str> {
        match field {
            "description" => self.description.as_deref(),
            _ => None,
        }
    }

    fn raw_translations(&self) -> Option<&Value> {
        Some(&self.translations)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedPartner {
    pub id: DbId,
    pub locale: Locale,
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartner {
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePartner {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreatePartner, UpdatePartner);
