//! Route definitions for `/admin`.
//!
//! Content routes require `editor` or `admin`; user management and settings
//! writes require `admin`. Guards live on the handlers as extractors.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    announcement, blog, careers, contact, dashboard, faq, media, newsletter, partner, project,
    setting, site, user,
};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /dashboard                        -> dashboard::stats
///
/// GET    /projects | POST                  -> project::list | create
/// GET    /projects/{id} | PUT | DELETE     -> project::get_by_id | update | delete
/// (same shape for /blog, /faq, /partners, /announcements, /jobs, /subdomains, /media)
///
/// GET    /jobs/{id}/applications           -> careers::list_applications
/// PUT    /applications/{id}/status         -> careers::update_application_status
///
/// GET    /contact                          -> contact::list (?unread=true)
/// PUT    /contact/{id}/read                -> contact::mark_read
/// DELETE /contact/{id}                     -> contact::delete
///
/// GET    /subscribers                      -> newsletter::list (?active=true)
/// DELETE /subscribers/{id}                 -> newsletter::delete
///
/// GET    /settings | PUT                   -> setting::list | upsert (admin)
/// DELETE /settings/{key}                   -> setting::delete (admin)
///
/// GET    /users | POST                     -> user::list_users | create_user (admin)
/// GET    /users/{id} | PUT | DELETE        -> user::get_user | update_user | deactivate_user
/// POST   /users/{id}/reset-password        -> user::reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::stats))
        // Projects.
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        // Blog.
        .route("/blog", get(blog::list).post(blog::create))
        .route(
            "/blog/{id}",
            get(blog::get_by_id).put(blog::update).delete(blog::delete),
        )
        // FAQ.
        .route("/faq", get(faq::list).post(faq::create))
        .route(
            "/faq/{id}",
            get(faq::get_by_id).put(faq::update).delete(faq::delete),
        )
        // Partners.
        .route("/partners", get(partner::list).post(partner::create))
        .route(
            "/partners/{id}",
            get(partner::get_by_id)
                .put(partner::update)
                .delete(partner::delete),
        )
        // Announcements.
        .route(
            "/announcements",
            get(announcement::list).post(announcement::create),
        )
        .route(
            "/announcements/{id}",
            get(announcement::get_by_id)
                .put(announcement::update)
                .delete(announcement::delete),
        )
        // Careers.
        .route("/jobs", get(careers::list).post(careers::create))
        .route(
            "/jobs/{id}",
            get(careers::get_by_id)
                .put(careers::update)
                .delete(careers::delete),
        )
        .route("/jobs/{id}/applications", get(careers::list_applications))
        .route(
            "/applications/{id}/status",
            put(careers::update_application_status),
        )
        // Subdomains.
        .route("/subdomains", get(site::list).post(site::create))
        .route(
            "/subdomains/{id}",
            get(site::get_by_id).put(site::update).delete(site::delete),
        )
        // Media.
        .route("/media", get(media::list).post(media::create))
        .route(
            "/media/{id}",
            get(media::get_by_id).put(media::update).delete(media::delete),
        )
        // Inbox.
        .route("/contact", get(contact::list))
        .route("/contact/{id}", axum::routing::delete(contact::delete))
        .route("/contact/{id}/read", put(contact::mark_read))
        .route("/subscribers", get(newsletter::list))
        .route(
            "/subscribers/{id}",
            axum::routing::delete(newsletter::delete),
        )
        // Settings.
        .route("/settings", get(setting::list).put(setting::upsert))
        .route("/settings/{key}", axum::routing::delete(setting::delete))
        // Users.
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::deactivate_user),
        )
        .route("/users/{id}/reset-password", post(user::reset_password))
}
