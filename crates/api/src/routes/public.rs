//! Public site routes. No authentication; content is resolved for the
//! request locale.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    announcement, blog, careers, contact, faq, newsletter, partner, project, setting, site,
};
use crate::state::AppState;

/// Public routes, merged at the `/api/v1` root.
///
/// ```text
/// GET  /projects                  -> project::list_published (?featured=true)
/// GET  /projects/{slug}           -> project::get_published
/// GET  /blog                      -> blog::list_published (?limit=&offset=)
/// GET  /blog/{slug}               -> blog::get_published
/// GET  /faq                       -> faq::list_active (?category=)
/// GET  /partners                  -> partner::list_active
/// GET  /announcements             -> announcement::list_current
/// GET  /careers                   -> careers::list_open
/// GET  /careers/{slug}            -> careers::get_open
/// POST /careers/{slug}/apply      -> careers::apply
/// POST /contact                   -> contact::submit
/// POST /newsletter/subscribe      -> newsletter::subscribe
/// POST /newsletter/unsubscribe    -> newsletter::unsubscribe
/// GET  /settings                  -> setting::public_map
/// GET  /sites/current             -> site::current
/// GET  /sites/{slug}              -> site::get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list_published))
        .route("/projects/{slug}", get(project::get_published))
        .route("/blog", get(blog::list_published))
        .route("/blog/{slug}", get(blog::get_published))
        .route("/faq", get(faq::list_active))
        .route("/partners", get(partner::list_active))
        .route("/announcements", get(announcement::list_current))
        .route("/careers", get(careers::list_open))
        .route("/careers/{slug}", get(careers::get_open))
        .route("/careers/{slug}/apply", post(careers::apply))
        .route("/contact", post(contact::submit))
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route("/newsletter/unsubscribe", post(newsletter::unsubscribe))
        .route("/settings", get(setting::public_map))
        .route("/sites/current", get(site::current))
        .route("/sites/{slug}", get(site::get_by_slug))
}
