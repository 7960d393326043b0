//! Project entity model and DTOs.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] = &["title", "description", "content"];

    /// Public view of the project in `locale`.
    pub fn localize(&self, locale: Locale) -> LocalizedProject {
        let l = self.localizer(locale);
        LocalizedProject {
            id: self.id,
            slug: self.slug.clone(),
            locale,
            title: l.field("title"),
            description: l.optional_field("description"),
            content: l.optional_field("content"),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
            website_url: self.website_url.clone(),
            is_featured: self.is_featured,
            sort_order: self.sort_order,
        }
    }
}

impl Translatable for Project {
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

/// Single-locale project returned by public endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedProject {
    pub id: DbId,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
    pub translations: Option<Value>,
    /// Flat `<field>_<locale>` override keys.
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreateProject, UpdateProject);

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::models::TranslationInput;

    fn project() -> Project {
        Project {
            id: 7,
            slug: "ruzgar-santrali".into(),
            title: "Rüzgar Santrali".into(),
            description: Some("Ege kıyısında 40 MW".into()),
            content: None,
            category: Some("energy".into()),
            image_url: None,
            website_url: None,
            is_featured: true,
            is_published: true,
            sort_order: 1,
            translations: json!({ "en": { "title": "Wind Farm", "description": "" } }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn localize_prefers_override_and_falls_back() {
        let en = project().localize(Locale::En);
        assert_eq!(en.title, "Wind Farm");
        assert_eq!(en.description.as_deref(), Some("Ege kıyısında 40 MW"));
        assert_eq!(en.content, None);
        assert_eq!(en.locale, Locale::En);

        let tr = project().localize(Locale::Tr);
        assert_eq!(tr.title, "Rüzgar Santrali");
    }

    #[test]
    fn create_dto_captures_flat_locale_keys() {
        let dto: CreateProject = serde_json::from_value(json!({
            "title": "Güneş",
            "title_en": "Sun",
            "is_published": true
        }))
        .unwrap();
        assert_eq!(dto.localized_fields()["title_en"], "Sun");
        assert!(dto.explicit_translations().is_none());
        assert_eq!(dto.is_published, Some(true));
    }
}
