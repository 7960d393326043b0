use std::sync::Arc;

use crate::captcha::CaptchaVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything non-trivial sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: heptapus_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Verifies CAPTCHA tokens on public submission forms.
    pub captcha: Arc<CaptchaVerifier>,
}
