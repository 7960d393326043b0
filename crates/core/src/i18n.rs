//! Locale handling and translation fallback for content records.
//!
//! Content records keep their default-locale (Turkish) text in their own
//! columns and carry a JSON side-table of per-locale overrides:
//!
//! ```json
//! { "en": { "title": "Solar Farm" }, "de": { "title": "Solarpark" } }
//! ```
//!
//! Reads go through [`get_translated_field`], which falls back to the
//! default-locale column whenever an override is missing or blank.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// A language the site publishes content in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
    De,
    Ar,
}

impl Locale {
    /// The locale stored in each record's primary columns.
    pub const DEFAULT: Locale = Locale::Tr;

    /// Every supported locale, default first.
    pub const ALL: [Locale; 4] = [Locale::Tr, Locale::En, Locale::De, Locale::Ar];

    /// Two-letter code used in URLs and in the translations blob.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
            Locale::De => "de",
            Locale::Ar => "ar",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// Locales whose content lives in the translations blob.
    pub fn overrides() -> impl Iterator<Item = Locale> {
        Self::ALL.into_iter().filter(|l| !l.is_default())
    }

    /// Parse a language tag such as `en`, `en-US` or `EN_gb`.
    ///
    /// Only the primary subtag is significant.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "tr" => Some(Locale::Tr),
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unsupported locale '{s}'. Supported locales: {}",
                Locale::ALL.map(Locale::code).join(", ")
            ))
        })
    }
}

/// Pick the first supported locale from an `Accept-Language` header value.
///
/// Entries are ordered by their `q` weight (default `1.0`); entries with
/// `q=0` and the `*` wildcard are ignored.
pub fn negotiate_locale(accept_language: &str) -> Option<Locale> {
    let mut candidates: Vec<(f32, &str)> = accept_language
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let q = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (q > 0.0).then_some((q, tag))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
    candidates.into_iter().find_map(|(_, tag)| Locale::from_tag(tag))
}

// ---------------------------------------------------------------------------
// Translations blob
// ---------------------------------------------------------------------------

/// Per-locale overrides: locale code -> field name -> value.
pub type Translations = BTreeMap<String, BTreeMap<String, String>>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Resolve the display value of `field` for `locale`.
///
/// The default locale always reads `base`. Any other locale reads its
/// override when one exists and is not blank, and `base` otherwise. A
/// missing `base` resolves to an empty string.
pub fn get_translated_field(
    base: Option<&str>,
    translations: &Translations,
    field: &str,
    locale: Locale,
) -> String {
    let base = base.unwrap_or_default();
    if locale.is_default() {
        return base.to_string();
    }

    translations
        .get(locale.code())
        .and_then(|fields| fields.get(field))
        .map(String::as_str)
        .filter(|value| !is_blank(value))
        .unwrap_or(base)
        .to_string()
}

/// Decode a stored translations blob.
///
/// Accepts an object of objects, or a JSON string holding one (rows written
/// before the column became JSONB). Unsupported locales, the default locale,
/// non-string values and blank values are dropped. Malformed input yields
/// an empty map.
pub fn parse_translations(raw: Option<&Value>) -> Translations {
    match raw {
        Some(Value::Object(map)) => translations_from_object(map),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => translations_from_object(&map),
            _ => Translations::new(),
        },
        _ => Translations::new(),
    }
}

fn translations_from_object(map: &Map<String, Value>) -> Translations {
    let mut out = Translations::new();
    for (code, fields) in map {
        let Some(locale) = Locale::from_tag(code) else {
            continue;
        };
        if locale.is_default() {
            continue;
        }
        let Value::Object(fields) = fields else {
            continue;
        };

        let values: BTreeMap<String, String> = fields
            .iter()
            .filter_map(|(name, value)| match value {
                Value::String(s) if !is_blank(s) => Some((name.clone(), s.clone())),
                _ => None,
            })
            .collect();

        if !values.is_empty() {
            out.entry(locale.code().to_string())
                .or_default()
                .extend(values);
        }
    }
    out
}

/// Build overrides from flat admin form keys of the form `<field>_<locale>`.
///
/// Only the listed translatable `fields` and non-default locales are read.
/// Values are trimmed; blank values are skipped and a locale without any
/// value is omitted.
pub fn build_translations(fields: &[&str], form: &Map<String, Value>) -> Translations {
    let mut out = Translations::new();
    for locale in Locale::overrides() {
        let values: BTreeMap<String, String> = fields
            .iter()
            .filter_map(|field| {
                let key = format!("{field}_{}", locale.code());
                match form.get(&key) {
                    Some(Value::String(s)) if !is_blank(s) => {
                        Some((field.to_string(), s.trim().to_string()))
                    }
                    _ => None,
                }
            })
            .collect();

        if !values.is_empty() {
            out.insert(locale.code().to_string(), values);
        }
    }
    out
}

/// Merge `overlay` into `base`; overlay values win field by field.
pub fn merge_translations(mut base: Translations, overlay: Translations) -> Translations {
    for (code, fields) in overlay {
        base.entry(code).or_default().extend(fields);
    }
    base
}

/// Combine the two admin input shapes into the overrides to store.
///
/// `explicit` is a `translations` object from the request body and replaces
/// `existing` wholesale; flat `<field>_<locale>` keys in `form` are then laid
/// over the result. Only the listed `fields` are kept. Returns `None` when the
/// request carries neither shape, meaning the stored column stays as it is.
pub fn collect_translations(
    fields: &[&str],
    explicit: Option<&Value>,
    form: &Map<String, Value>,
    existing: Option<&Value>,
) -> Option<Translations> {
    let flat = build_translations(fields, form);
    if explicit.is_none() && flat.is_empty() {
        return None;
    }

    let base = parse_translations(explicit.or(existing));
    let mut merged = merge_translations(base, flat);
    for values in merged.values_mut() {
        values.retain(|name, _| fields.contains(&name.as_str()));
    }
    merged.retain(|_, values| !values.is_empty());
    Some(merged)
}

/// Encode translations for storage in a JSONB column.
pub fn translations_to_json(translations: &Translations) -> Value {
    let map: Map<String, Value> = translations
        .iter()
        .map(|(code, fields)| {
            let fields: Map<String, Value> = fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            (code.clone(), Value::Object(fields))
        })
        .collect();
    Value::Object(map)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A record with default-locale columns and a translations blob.
pub trait Translatable {
    /// The default-locale value of `field`, if the record has one.
    fn base_field(&self, field: &str) -> Option<&str>;

    /// The raw translations column.
    fn raw_translations(&self) -> Option<&Value>;

    /// Parse the translations once and resolve fields for `locale`.
    fn localizer(&self, locale: Locale) -> Localizer<'_, Self> {
        let translations = if locale.is_default() {
            Translations::new()
        } else {
            parse_translations(self.raw_translations())
        };
        Localizer {
            record: self,
            translations,
            locale,
        }
    }
}

/// Field resolver bound to one record and one locale.
pub struct Localizer<'a, T: ?Sized> {
    record: &'a T,
    translations: Translations,
    locale: Locale,
}

impl<T: Translatable + ?Sized> Localizer<'_, T> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn field(&self, field: &str) -> String {
        get_translated_field(
            self.record.base_field(field),
            &self.translations,
            field,
            self.locale,
        )
    }

    /// Like [`Self::field`], but `None` when nothing resolves.
    pub fn optional_field(&self, field: &str) -> Option<String> {
        let value = self.field(field);
        (!value.is_empty()).then_some(value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    struct Post {
        title: String,
        excerpt: Option<String>,
        translations: Option<Value>,
    }

    impl Translatable for Post {
        fn base_field(&self, field: &str) -> Option<&str> {
            match field {
                "title" => Some(&self.title),
                "excerpt" => self.excerpt.as_deref(),
                _ => None,
            }
        }

        fn raw_translations(&self) -> Option<&Value> {
            self.translations.as_ref()
        }
    }

    fn sample() -> Translations {
        parse_translations(Some(&json!({
            "en": { "title": "Wind Farm", "excerpt": "   " },
            "de": { "title": "Windpark" }
        })))
    }

    #[test]
    fn default_locale_always_reads_base() {
        let t = sample();
        assert_eq!(
            get_translated_field(Some("Rüzgar Santrali"), &t, "title", Locale::Tr),
            "Rüzgar Santrali"
        );
        // Even a (stray) "tr" override must not shadow the column.
        let mut t = t;
        t.insert("tr".into(), BTreeMap::from([("title".into(), "x".into())]));
        assert_eq!(
            get_translated_field(Some("Rüzgar Santrali"), &t, "title", Locale::Tr),
            "Rüzgar Santrali"
        );
    }

    #[test]
    fn override_wins_when_present() {
        let t = sample();
        assert_eq!(
            get_translated_field(Some("Rüzgar Santrali"), &t, "title", Locale::En),
            "Wind Farm"
        );
        assert_eq!(
            get_translated_field(Some("Rüzgar Santrali"), &t, "title", Locale::De),
            "Windpark"
        );
    }

    #[test]
    fn missing_or_blank_override_falls_back() {
        let t = sample();
        assert_eq!(
            get_translated_field(Some("Özet"), &t, "excerpt", Locale::En),
            "Özet"
        );
        assert_eq!(
            get_translated_field(Some("Rüzgar Santrali"), &t, "title", Locale::Ar),
            "Rüzgar Santrali"
        );
    }

    #[test]
    fn missing_base_resolves_to_empty() {
        let t = Translations::new();
        assert_eq!(get_translated_field(None, &t, "excerpt", Locale::En), "");
        assert_eq!(get_translated_field(None, &t, "excerpt", Locale::Tr), "");
    }

    #[test]
    fn parse_drops_noise() {
        let t = parse_translations(Some(&json!({
            "en": { "title": "Hello", "views": 3, "excerpt": "" },
            "tr": { "title": "Merhaba" },
            "fr": { "title": "Bonjour" },
            "de": "not an object",
            "ar": {}
        })));
        assert_eq!(t.len(), 1);
        assert_eq!(t["en"].len(), 1);
        assert_eq!(t["en"]["title"], "Hello");
    }

    #[test]
    fn parse_accepts_stringified_blob() {
        let raw = Value::String(r#"{"en":{"title":"Hello"}}"#.into());
        let t = parse_translations(Some(&raw));
        assert_eq!(t["en"]["title"], "Hello");
    }

    #[test]
    fn parse_tolerates_garbage() {
        assert!(parse_translations(None).is_empty());
        assert!(parse_translations(Some(&Value::Null)).is_empty());
        assert!(parse_translations(Some(&json!([1, 2]))).is_empty());
        assert!(parse_translations(Some(&Value::String("{not json".into()))).is_empty());
    }

    #[test]
    fn build_reads_suffixed_form_keys() {
        let form = json!({
            "title": "Başlık",
            "title_en": "  Title ",
            "title_de": "",
            "content_de": "Inhalt",
            "content_tr": "ignored",
            "slug_en": "ignored-not-translatable"
        });
        let t = build_translations(&["title", "content"], form.as_object().unwrap());
        assert_eq!(t.len(), 2);
        assert_eq!(t["en"]["title"], "Title");
        assert!(!t["en"].contains_key("content"));
        assert_eq!(t["de"]["content"], "Inhalt");
        assert!(!t["de"].contains_key("title"));
        assert!(!t.contains_key("tr"));
    }

    #[test]
    fn merge_overlay_wins_per_field() {
        let base = sample();
        let overlay = BTreeMap::from([(
            "en".to_string(),
            BTreeMap::from([("title".to_string(), "Wind Park".to_string())]),
        )]);
        let merged = merge_translations(base, overlay);
        assert_eq!(merged["en"]["title"], "Wind Park");
        assert_eq!(merged["de"]["title"], "Windpark");
    }

    #[test]
    fn collect_without_input_keeps_column() {
        let form = Map::new();
        let existing = json!({ "en": { "title": "Old" } });
        assert_eq!(
            collect_translations(&["title"], None, &form, Some(&existing)),
            None
        );
    }

    #[test]
    fn collect_overlays_flat_keys_on_existing() {
        let form = json!({ "content_en": "New body" });
        let existing = json!({ "en": { "title": "Old" } });
        let t = collect_translations(
            &["title", "content"],
            None,
            form.as_object().unwrap(),
            Some(&existing),
        )
        .unwrap();
        assert_eq!(t["en"]["title"], "Old");
        assert_eq!(t["en"]["content"], "New body");
    }

    #[test]
    fn collect_explicit_replaces_and_filters_fields() {
        let explicit = json!({ "de": { "title": "Neu", "secret": "x" } });
        let existing = json!({ "en": { "title": "Old" } });
        let t = collect_translations(&["title"], Some(&explicit), &Map::new(), Some(&existing))
            .unwrap();
        assert!(!t.contains_key("en"));
        assert_eq!(t["de"].len(), 1);
        assert_eq!(t["de"]["title"], "Neu");
    }

    #[test]
    fn json_encoding_parses_back() {
        let t = sample();
        let encoded = translations_to_json(&t);
        assert_eq!(parse_translations(Some(&encoded)), t);
    }

    #[test]
    fn localizer_resolves_record_fields() {
        let post = Post {
            title: "Güneş".into(),
            excerpt: None,
            translations: Some(json!({ "en": { "title": "Sun" } })),
        };
        let en = post.localizer(Locale::En);
        assert_eq!(en.field("title"), "Sun");
        assert_eq!(en.optional_field("excerpt"), None);
        assert_eq!(post.localizer(Locale::Tr).field("title"), "Güneş");
        assert_eq!(post.localizer(Locale::De).field("title"), "Güneş");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag(" DE_at "), Some(Locale::De));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!("ar".parse::<Locale>().unwrap(), Locale::Ar);
        assert_matches!("xx".parse::<Locale>(), Err(CoreError::Validation(_)));
        assert_eq!(Locale::default(), Locale::Tr);
        assert_eq!(Locale::overrides().count(), 3);
    }

    #[test]
    fn accept_language_negotiation() {
        assert_eq!(negotiate_locale("de-DE,de;q=0.9,en;q=0.8"), Some(Locale::De));
        assert_eq!(negotiate_locale("fr-FR, en;q=0.5, tr;q=0.7"), Some(Locale::Tr));
        assert_eq!(negotiate_locale("en;q=0, ar"), Some(Locale::Ar));
        assert_eq!(negotiate_locale("*, fr"), None);
        assert_eq!(negotiate_locale(""), None);
    }
}
