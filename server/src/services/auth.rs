//! GitHub OAuth service — authorize URL, code exchange, profile fetch, user upsert.

use reqwest::Url;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::email_auth;

const AUTHORIZE_ENDPOINT: &str = "https://github.com/login/oauth/authorize";
const TOKEN_ENDPOINT: &str = "https://github.com/login/oauth/access_token";
const USER_ENDPOINT: &str = "https://api.github.com/user";

/// GitHub OAuth configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GitHubConfig {
    /// Load from `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET`, `GITHUB_REDIRECT_URI`.
    /// Returns `None` if any are missing (GitHub sign-in will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GITHUB_CLIENT_ID").ok()?;
        let client_secret = std::env::var("GITHUB_CLIENT_SECRET").ok()?;
        let redirect_uri = std::env::var("GITHUB_REDIRECT_URI").ok()?;
        Some(Self { client_id, client_secret, redirect_uri })
    }

    /// Build the GitHub authorization URL carrying the CSRF `state`.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        Url::parse_with_params(
            AUTHORIZE_ENDPOINT,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", "read:user user:email"),
                ("state", state),
            ],
        )
        .map_or_else(|_| AUTHORIZE_ENDPOINT.to_owned(), String::from)
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl GitHubUser {
    /// Display name, falling back to the login handle.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }

    /// Public profile email, normalized the way magic-link accounts store it.
    #[must_use]
    pub fn contact_email(&self) -> Option<String> {
        self.email.as_deref().and_then(email_auth::normalize_email)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("github token exchange failed: {0}")]
    TokenExchange(String),
    #[error("github api error: {0}")]
    GitHubApi(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Exchange an OAuth code for an access token.
///
/// # Errors
///
/// Returns [`AuthError::TokenExchange`] on transport failure or an
/// unexpected response body.
pub async fn exchange_code(config: &GitHubConfig, code: &str) -> Result<String, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .post(TOKEN_ENDPOINT)
        .header("Accept", "application/json")
        .json(&serde_json::json!({
            "client_id": config.client_id,
            "client_secret": config.client_secret,
            "code": code,
            "redirect_uri": config.redirect_uri,
        }))
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    let token_resp: TokenResponse =
        serde_json::from_str(&body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated GitHub user's profile.
///
/// # Errors
///
/// Returns [`AuthError::GitHubApi`] on transport failure or non-2xx status.
pub async fn fetch_github_user(access_token: &str) -> Result<GitHubUser, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(USER_ENDPOINT)
        .header("Authorization", format!("Bearer {access_token}"))
        .header("User-Agent", "chatkeep")
        .send()
        .await
        .map_err(|e| AuthError::GitHubApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::GitHubApi(format!("{status}: {body}")));
    }

    resp.json::<GitHubUser>()
        .await
        .map_err(|e| AuthError::GitHubApi(e.to_string()))
}

/// Upsert a user from their GitHub profile. Returns the user's UUID.
///
/// The profile email is stored only while no other account holds it, and
/// never replaces an email the user already has.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn upsert_user(pool: &PgPool, gh: &GitHubUser) -> Result<Uuid, AuthError> {
    let row = sqlx::query(
        r"INSERT INTO users (github_id, name, avatar_url, email)
          VALUES ($1, $2, $3, CASE WHEN EXISTS (SELECT 1 FROM users WHERE email = $4) THEN NULL ELSE $4 END)
          ON CONFLICT (github_id) DO UPDATE SET
              name = EXCLUDED.name,
              avatar_url = EXCLUDED.avatar_url,
              email = COALESCE(users.email, EXCLUDED.email)
          RETURNING id",
    )
    .bind(gh.id)
    .bind(gh.display_name())
    .bind(&gh.avatar_url)
    .bind(gh.contact_email())
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
