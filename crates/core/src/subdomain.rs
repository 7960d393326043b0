//! Subdomain micro-site naming rules and `Host` header resolution.

use crate::error::CoreError;

/// Labels that belong to the main site and cannot host a micro-site.
///
/// `current` is taken by the `/sites/current` route.
pub const RESERVED_LABELS: &[&str] = &[
    "www", "api", "admin", "mail", "static", "cdn", "current",
];

/// Maximum length of a single DNS label.
const MAX_LABEL_LENGTH: usize = 63;

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validate a micro-site slug: a lowercase DNS label that is not reserved.
pub fn validate_subdomain_slug(slug: &str) -> Result<(), CoreError> {
    if !is_dns_label(slug) {
        return Err(CoreError::Validation(format!(
            "Subdomain '{slug}' must be 1-{MAX_LABEL_LENGTH} lowercase letters, digits or \
             inner hyphens"
        )));
    }
    if RESERVED_LABELS.contains(&slug) {
        return Err(CoreError::Validation(format!(
            "Subdomain '{slug}' is reserved"
        )));
    }
    Ok(())
}

/// Extract the micro-site label from a `Host` header.
///
/// `host` may carry a port. Returns `None` for the bare base domain, reserved
/// labels, nested subdomains and hosts outside `base_domain`.
///
/// ```
/// use heptapus_core::subdomain::subdomain_from_host;
///
/// assert_eq!(
///     subdomain_from_host("energy.heptapus.com:443", "heptapus.com"),
///     Some("energy".to_string())
/// );
/// assert_eq!(subdomain_from_host("www.heptapus.com", "heptapus.com"), None);
/// ```
pub fn subdomain_from_host(host: &str, base_domain: &str) -> Option<String> {
    let host = host.trim().to_ascii_lowercase();
    let host = host.split(':').next().unwrap_or_default().trim_end_matches('.');
    let base = base_domain.trim().trim_matches('.').to_ascii_lowercase();
    if base.is_empty() {
        return None;
    }

    let label = host.strip_suffix(&base)?.strip_suffix('.')?;
    if label.contains('.') || RESERVED_LABELS.contains(&label) || !is_dns_label(label) {
        return None;
    }
    Some(label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_resolution() {
        let base = "heptapus.com";
        assert_eq!(subdomain_from_host("energy.heptapus.com", base), Some("energy".into()));
        assert_eq!(subdomain_from_host("Energy.Heptapus.COM:8080", base), Some("energy".into()));
        assert_eq!(subdomain_from_host("heptapus.com", base), None);
        assert_eq!(subdomain_from_host("a.b.heptapus.com", base), None);
        assert_eq!(subdomain_from_host("admin.heptapus.com", base), None);
        assert_eq!(subdomain_from_host("energy.example.com", base), None);
        assert_eq!(subdomain_from_host("evilheptapus.com", base), None);
        assert_eq!(subdomain_from_host("energy.heptapus.com", ""), None);
    }

    #[test]
    fn slug_rules() {
        assert!(validate_subdomain_slug("energy").is_ok());
        assert!(validate_subdomain_slug("r-and-d2").is_ok());
        assert!(validate_subdomain_slug("").is_err());
        assert!(validate_subdomain_slug("-lead").is_err());
        assert!(validate_subdomain_slug("trail-").is_err());
        assert!(validate_subdomain_slug("Upper").is_err());
        assert!(validate_subdomain_slug("www").is_err());
        assert!(validate_subdomain_slug("current").is_err());
        assert!(validate_subdomain_slug(&"a".repeat(64)).is_err());
    }
}
