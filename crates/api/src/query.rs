//! Shared query parameter types for API handlers.

use heptapus_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamped `(limit, offset)` ready for a SQL `LIMIT ... OFFSET ...`.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
            clamp_offset(self.offset),
        )
    }
}

/// `?featured=true` on the public project list.
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    #[serde(default)]
    pub featured: bool,
}

/// `?category=` on the public FAQ list.
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

/// Admin inbox filters (`?unread=true`, `?active=true`) plus pagination.
#[derive(Debug, Deserialize)]
pub struct InboxParams {
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub active: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl InboxParams {
    pub fn page(&self) -> (i64, i64) {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
        .resolve()
    }
}

/// `?mime=image/` filter for the media library.
#[derive(Debug, Deserialize)]
pub struct MediaListParams {
    pub mime: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl MediaListParams {
    pub fn page(&self) -> (i64, i64) {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
        .resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_caps() {
        assert_eq!(PaginationParams::default().resolve(), (DEFAULT_PAGE_LIMIT, 0));
        let params = PaginationParams {
            limit: Some(10_000),
            offset: Some(-5),
        };
        assert_eq!(params.resolve(), (MAX_PAGE_LIMIT, 0));
    }
}
