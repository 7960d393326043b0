//! Server-side CAPTCHA verification for public forms.
//!
//! Speaks the siteverify protocol shared by Cloudflare Turnstile and
//! hCaptcha: the token is POSTed as a form together with the secret, and the
//! provider answers `{"success": bool, "error-codes": [...]}`.

use std::time::Duration;

use serde::Deserialize;

/// Cloudflare Turnstile siteverify endpoint.
pub const DEFAULT_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// HTTP timeout for one verification call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// CAPTCHA provider settings.
#[derive(Debug, Clone)]
pub struct CaptchaConfig {
    /// Provider secret. `None` disables verification entirely.
    pub secret: Option<String>,
    pub verify_url: String,
}

impl CaptchaConfig {
    /// Load from the environment.
    ///
    /// | Env Var              | Default                  |
    /// |----------------------|--------------------------|
    /// | `CAPTCHA_SECRET`     | unset (verification off) |
    /// | `CAPTCHA_VERIFY_URL` | Turnstile siteverify     |
    pub fn from_env() -> Self {
        let secret = std::env::var("CAPTCHA_SECRET")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let verify_url =
            std::env::var("CAPTCHA_VERIFY_URL").unwrap_or_else(|_| DEFAULT_VERIFY_URL.into());
        Self { secret, verify_url }
    }

    /// Verification disabled; every submission passes.
    pub fn disabled() -> Self {
        Self {
            secret: None,
            verify_url: DEFAULT_VERIFY_URL.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptchaError {
    #[error("CAPTCHA token is missing")]
    MissingToken,

    /// The provider answered but refused the token.
    #[error("CAPTCHA verification failed: {}", .0.join(", "))]
    Rejected(Vec<String>),

    /// The provider could not be reached or answered garbage.
    #[error("CAPTCHA provider request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Verifies CAPTCHA tokens against the configured provider.
pub struct CaptchaVerifier {
    client: reqwest::Client,
    config: CaptchaConfig,
}

impl CaptchaVerifier {
    pub fn new(config: CaptchaConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.secret.is_some()
    }

    /// Check `token` with the provider. Passes trivially when disabled.
    pub async fn verify(
        &self,
        token: Option<&str>,
        remote_ip: Option<&str>,
    ) -> Result<(), CaptchaError> {
        let Some(secret) = self.config.secret.as_deref() else {
            return Ok(());
        };
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(CaptchaError::MissingToken)?;

        let mut form = vec![("secret", secret), ("response", token)];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip));
        }

        let response: SiteverifyResponse = self
            .client
            .post(&self.config.verify_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.success {
            Ok(())
        } else {
            tracing::info!(error_codes = ?response.error_codes, "CAPTCHA token rejected");
            Err(CaptchaError::Rejected(response.error_codes))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::routing::post;
    use axum::{Form, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    use super::*;

    /// Serve a fake siteverify endpoint that accepts only the token `good`.
    async fn spawn_provider() -> String {
        async fn siteverify(Form(form): Form<HashMap<String, String>>) -> Json<Value> {
            let ok = form.get("secret").map(String::as_str) == Some("s3cret")
                && form.get("response").map(String::as_str) == Some("good");
            if ok {
                Json(json!({"success": true}))
            } else {
                Json(json!({"success": false, "error-codes": ["invalid-input-response"]}))
            }
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/siteverify", post(siteverify));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/siteverify")
    }

    fn enabled(verify_url: String) -> CaptchaVerifier {
        CaptchaVerifier::new(CaptchaConfig {
            secret: Some("s3cret".into()),
            verify_url,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn disabled_accepts_anything() {
        let verifier = CaptchaVerifier::new(CaptchaConfig::disabled()).unwrap();
        assert!(!verifier.is_enabled());
        assert!(verifier.verify(None, None).await.is_ok());
    }

    #[tokio::test]
    async fn missing_token_is_rejected_before_calling_out() {
        let verifier = enabled("http://127.0.0.1:1/unreachable".into());
        assert_matches!(
            verifier.verify(Some("   "), None).await,
            Err(CaptchaError::MissingToken)
        );
    }

    #[tokio::test]
    async fn provider_verdict_is_honoured() {
        let verifier = enabled(spawn_provider().await);
        assert!(verifier.verify(Some("good"), Some("10.0.0.1")).await.is_ok());
        assert_matches!(
            verifier.verify(Some("bad"), None).await,
            Err(CaptchaError::Rejected(codes)) if codes == vec!["invalid-input-response"]
        );
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_request_error() {
        let verifier = enabled("http://127.0.0.1:1/siteverify".into());
        assert_matches!(
            verifier.verify(Some("good"), None).await,
            Err(CaptchaError::Request(_))
        );
    }
}
