//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireEditor`] -- requires `editor` or `admin`.
//! - [`locale::RequestLocale`] -- the content locale negotiated for the request.

pub mod auth;
pub mod locale;
pub mod rbac;
