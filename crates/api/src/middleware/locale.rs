//! Content locale negotiation.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use heptapus_core::i18n::{negotiate_locale, Locale};
use serde::Deserialize;

/// Locale resolved for the current request.
///
/// Order: `?locale=`, then `Accept-Language`, then the default locale.
/// Unsupported values fall through to the next source; this extractor never
/// rejects a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

#[derive(Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

impl<S: Send + Sync> FromRequestParts<S> for RequestLocale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestLocale(resolve(parts)))
    }
}

fn resolve(parts: &Parts) -> Locale {
    let from_query = Query::<LocaleQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(q)| q.locale)
        .and_then(|tag| Locale::from_tag(&tag));
    if let Some(locale) = from_query {
        return locale;
    }

    parts
        .headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(negotiate_locale)
        .unwrap_or(Locale::DEFAULT)
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn locale_for(uri: &str, accept_language: Option<&str>) -> Locale {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = accept_language {
            builder = builder.header(ACCEPT_LANGUAGE, value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        resolve(&parts)
    }

    #[test]
    fn query_wins_over_header() {
        assert_eq!(locale_for("/projects?locale=de", Some("en")), Locale::De);
    }

    #[test]
    fn header_used_when_query_absent_or_unsupported() {
        assert_eq!(locale_for("/projects", Some("ar-SA,en;q=0.5")), Locale::Ar);
        assert_eq!(locale_for("/projects?locale=xx", Some("en-GB")), Locale::En);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(locale_for("/projects", None), Locale::Tr);
        assert_eq!(locale_for("/projects?locale=fr", Some("fr-FR")), Locale::Tr);
    }
}
