//! Announcement entity model and DTOs.
//!
//! An announcement is shown publicly while `is_active` is set and the current
//! time falls inside the optional `[starts_at, ends_at)` window.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub link_url: Option<String>,
    pub priority: i32,
    pub is_active: bool,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Announcement {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] = &["title", "content"];

    pub fn localize(&self, locale: Locale) -> LocalizedAnnouncement {
        let l = self.localizer(locale);
        LocalizedAnnouncement {
            id: self.id,
            locale,
            title: l.field("title"),
            content: l.optional_field("content"),
            link_url: self.link_url.clone(),
            priority: self.priority,
            ends_at: self.ends_at,
        }
    }
}

impl Translatable for Announcement {
    fn base_field(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }

    fn raw_translations(&self) -> Option<&Value> {
        Some(&self.translations)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedAnnouncement {
    pub id: DbId,
    pub locale: Locale,
    pub title: String,
    pub content: Option<String>,
    pub link_url: Option<String>,
    pub priority: i32,
    pub ends_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub content: Option<String>,
    pub link_url: Option<String>,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub content: Option<String>,
    pub link_url: Option<String>,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreateAnnouncement, UpdateAnnouncement);
