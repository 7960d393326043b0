//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Translatable entities additionally implement
//! [`heptapus_core::i18n::Translatable`] and expose a `localize` method that
//! produces the public, single-locale view of the row.

pub mod announcement;
pub mod blog_post;
pub mod contact_message;
pub mod dashboard;
pub mod faq;
pub mod job_application;
pub mod job_posting;
pub mod media;
pub mod partner;
pub mod project;
pub mod setting;
pub mod subdomain;
pub mod subscriber;
pub mod user;

use serde_json::{Map, Value};

/// Admin payload that may carry per-locale overrides.
///
/// Overrides arrive either as a `translations` object or as flat
/// `<field>_<locale>` keys captured by `#[serde(flatten)]`. Handlers resolve
/// both into a single JSON value with
/// [`heptapus_core::i18n::collect_translations`] and store it back through
/// [`TranslationInput::set_translations`] before calling the repository.
pub trait TranslationInput {
    fn explicit_translations(&self) -> Option<&Value>;
    fn localized_fields(&self) -> &Map<String, Value>;
    fn set_translations(&mut self, value: Option<Value>);
}

macro_rules! impl_translation_input {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::TranslationInput for $ty {
                fn explicit_translations(&self) -> Option<&serde_json::Value> {
                    self.translations.as_ref()
                }

                fn localized_fields(&self) -> &serde_json::Map<String, serde_json::Value> {
                    &self.localized
                }

                fn set_translations(&mut self, value: Option<serde_json::Value>) {
                    self.translations = value;
                }
            }
        )+
    };
}

pub(crate) use impl_translation_input;
