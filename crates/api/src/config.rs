use crate::auth::jwt::JwtConfig;
use crate::captcha::CaptchaConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Registrable domain under which micro-sites live, e.g. `heptapus.com`.
    pub base_domain: String,
    /// Whether `/auth/register` stays open once the first account exists.
    pub allow_registration: bool,
    pub jwt: JwtConfig,
    pub captcha: CaptchaConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BASE_DOMAIN`          | `heptapus.com`             |
    /// | `ALLOW_REGISTRATION`   | `false`                    |
    ///
    /// JWT and CAPTCHA settings are read by [`JwtConfig::from_env`] and
    /// [`CaptchaConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let base_domain = std::env::var("BASE_DOMAIN").unwrap_or_else(|_| "heptapus.com".into());

        let allow_registration = std::env::var("ALLOW_REGISTRATION")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            base_domain,
            allow_registration,
            jwt: JwtConfig::from_env(),
            captcha: CaptchaConfig::from_env(),
        }
    }
}
