//! Blog post entity model and DTOs.

use heptapus_core::i18n::{Locale, Translatable};
use heptapus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub author_id: Option<DbId>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub translations: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BlogPost {
    pub const TRANSLATABLE_FIELDS: &'static [&'static str] = &["title", "excerpt", "content"];

    /// Public view of the post in `locale`.
    pub fn localize(&self, locale: Locale) -> LocalizedBlogPost {
        let l = self.localizer(locale);
        LocalizedBlogPost {
            id: self.id,
            slug: self.slug.clone(),
            locale,
            title: l.field("title"),
            excerpt: l.optional_field("excerpt"),
            content: l.field("content"),
            cover_image_url: self.cover_image_url.clone(),
            published_at: self.published_at,
        }
    }
}

impl Translatable for BlogPost {
    fn base_field(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "excerpt" => self.excerpt.as_deref(),
            "content" => Some(&self.content),
            _ => None,
        }
    }

    fn raw_translations(&self) -> Option<&Value> {
        Some(&self.translations)
    }
}

/// Single-locale blog post returned by public endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedBlogPost {
    pub id: DbId,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub published_at: Option<Timestamp>,
}

/// DTO for creating a new blog post.
///
/// `author_id` is taken from the authenticated user, not the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    pub cover_image_url: Option<String>,
    pub is_published: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

/// DTO for updating an existing blog post. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_published: Option<bool>,
    pub translations: Option<Value>,
    #[serde(flatten)]
    pub localized: Map<String, Value>,
}

super::impl_translation_input!(CreateBlogPost, UpdateBlogPost);
