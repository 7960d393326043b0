pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects, /blog, /faq, /partners, /announcements,
/// /careers, /contact, /newsletter, /settings, /sites    public site (see `public`)
///
/// /auth/login                                           login
/// /auth/register                                        first-user / open registration
/// /auth/me                                              current user (requires auth)
///
/// /admin/...                                            content management (see `admin`)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
