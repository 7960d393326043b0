//! FAQ item entity model and DTOs.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from the `faq_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqItem {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FaqItem {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] = &["question", "answer"];

    pub fn localize(&self, locale: Locale) -> LocalizedFaqItem {
        let l = self.localizer(locale);
        LocalizedFaqItem {
            id: self.id,
            locale,
            question: l.field("question"),
            answer: l.field("answer"),
            category: self.category.clone(),
            sort_order: self.sort_order,
        }
    }
}

impl Translatable for FaqItem {
    fn base_field(&self, field: &str) -> Option<&str> {
        match field {
            "question" => Some(&self.question),
            "answer" => Some(&self.answer),
            _ => None,
        }
    }

    fn raw_translations(&self) -> Option<&Value> {
        Some(&self.translations)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedFaqItem {
    pub id: DbId,
    pub locale: Locale,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaqItem {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaqItem {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreateFaqItem, UpdateFaqItem);
