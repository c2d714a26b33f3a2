//! Environment-driven server configuration.
//!
//! DESIGN
//! ======
//! Everything is read once at startup (after `dotenvy` has loaded `.env`).
//! Optional integrations resolve to `None` when their variables are missing
//! so the server still boots with those features disabled.

use crate::services::auth::GitHubConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PUBLIC_ORIGIN: &str = "http://localhost:3000";

const DEFAULT_SIGNIN_PER_EMAIL: usize = 5;
const DEFAULT_SIGNIN_GLOBAL: usize = 100;
const DEFAULT_SIGNIN_WINDOW_SECS: u64 = 900;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{key} is invalid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Resend credentials for outgoing mail.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
}

/// Sliding-window limits for magic-link requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInLimits {
    pub per_email: usize,
    pub global: usize,
    pub window_secs: u64,
}

impl Default for SignInLimits {
    fn default() -> Self {
        Self {
            per_email: DEFAULT_SIGNIN_PER_EMAIL,
            global: DEFAULT_SIGNIN_GLOBAL,
            window_secs: DEFAULT_SIGNIN_WINDOW_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Scheme + host used to build absolute links (magic links).
    pub public_origin: String,
    /// Log and return magic links instead of requiring a mailer.
    pub echo_links: bool,
    pub cookie_secure: bool,
    pub resend: Option<ResendConfig>,
    pub github: Option<GitHubConfig>,
    pub signin_limits: SignInLimits,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_string("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = match env_string("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let public_origin = env_string("PUBLIC_ORIGIN")
            .map_or_else(|| DEFAULT_PUBLIC_ORIGIN.to_owned(), |o| o.trim_end_matches('/').to_owned());
        let github = GitHubConfig::from_env();
        let cookie_secure = cookie_secure_from(
            env_bool("COOKIE_SECURE"),
            github.as_ref().map(|g| g.redirect_uri.as_str()),
            &public_origin,
        );
        let resend = match (env_string("RESEND_API_KEY"), env_string("RESEND_FROM")) {
            (Some(api_key), Some(from)) => Some(ResendConfig { api_key, from }),
            _ => None,
        };
        let defaults = SignInLimits::default();

        Ok(Self {
            database_url,
            port,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            public_origin,
            echo_links: env_bool("AUTH_ECHO_LINKS").unwrap_or(false),
            cookie_secure,
            resend,
            github,
            signin_limits: SignInLimits {
                per_email: env_parse("SIGNIN_RATE_LIMIT_PER_EMAIL", defaults.per_email),
                global: env_parse("SIGNIN_RATE_LIMIT_GLOBAL", defaults.global),
                window_secs: env_parse("SIGNIN_RATE_LIMIT_WINDOW_SECS", defaults.window_secs),
            },
        })
    }
}

/// Explicit `COOKIE_SECURE` wins; otherwise secure cookies follow HTTPS
/// deployment (OAuth redirect or public origin).
pub(crate) fn cookie_secure_from(explicit: Option<bool>, redirect_uri: Option<&str>, public_origin: &str) -> bool {
    if let Some(value) = explicit {
        return value;
    }
    redirect_uri.is_some_and(|uri| uri.starts_with("https://")) || public_origin.starts_with("https://")
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
