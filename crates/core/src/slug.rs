//! URL slug generation and validation.

use crate::error::CoreError;

/// Maximum slug length accepted by the database columns.
pub const MAX_SLUG_LENGTH: usize = 120;

/// Map Turkish (and common Latin) letters onto their ASCII base letter.
fn transliterate(c: char) -> Option<char> {
    let mapped = match c {
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        'ı' | 'I' | 'İ' | 'î' | 'Î' => 'i',
        'ö' | 'Ö' => 'o',
        'ş' | 'Ş' => 's',
        'ü' | 'Ü' | 'û' | 'Û' => 'u',
        'â' | 'Â' | 'ä' | 'Ä' => 'a',
        'ß' => 's',
        c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
        _ => return None,
    };
    Some(mapped)
}

/// Generate a URL-safe slug from a title.
///
/// Transliterates Turkish letters, replaces everything else that is not
/// ASCII alphanumeric with hyphens, collapses consecutive hyphens, trims
/// leading/trailing hyphens and caps the length at [`MAX_SLUG_LENGTH`].
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = true;
    for c in title.chars() {
        match transliterate(c) {
            Some(c) => {
                result.push(c);
                prev_hyphen = false;
            }
            None if !prev_hyphen => {
                result.push('-');
                prev_hyphen = true;
            }
            None => {}
        }
    }

    result.truncate(MAX_SLUG_LENGTH);
    result.trim_matches('-').to_string()
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens, bounded length).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

/// Use `explicit` when given (validated), otherwise derive a slug from `title`.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => generate_slug(title),
    };
    validate_slug(&slug)?;
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_letters_are_transliterated() {
        assert_eq!(generate_slug("Güneş Enerjisi Çözümleri"), "gunes-enerjisi-cozumleri");
        assert_eq!(generate_slug("İstanbul Ofisi Açıldı!"), "istanbul-ofisi-acildi");
        assert_eq!(generate_slug("ĞÜŞİÖÇ ğüşıöç"), "gusioc-gusioc");
    }

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(generate_slug("  Hello --  World?! "), "hello-world");
        assert_eq!(generate_slug("2026: Year in Review"), "2026-year-in-review");
    }

    #[test]
    fn unslugifiable_title_gives_empty() {
        assert_eq!(generate_slug("!!!"), "");
        assert!(resolve_slug(None, "!!!").is_err());
    }

    #[test]
    fn long_titles_are_capped() {
        let slug = generate_slug(&"a ".repeat(200));
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn validate_rejects_bad_slugs() {
        assert!(validate_slug("ok-slug-1").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Upper").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("güneş").is_err());
    }

    #[test]
    fn explicit_slug_takes_precedence() {
        assert_eq!(resolve_slug(Some("custom"), "Title").unwrap(), "custom");
        assert_eq!(resolve_slug(Some("  "), "My Title").unwrap(), "my-title");
        assert!(resolve_slug(Some("Not Valid"), "Title").is_err());
    }
}
