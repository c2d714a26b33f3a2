//! Email magic-link auth service.
//!
//! DESIGN
//! ======
//! A sign-in request mints a random token, stores only its SHA-256 next to
//! the normalized email, and mails a link to
//! `/api/auth/callback/email?token=..&email=..&callbackUrl=..`. Following the
//! link consumes the token (`DELETE ... RETURNING`, so it works once) and
//! upserts the user by email.
//!
//! Callback targets are restricted to same-site relative paths; anything else
//! falls back to `/profile`.

use reqwest::Url;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::session::{bytes_to_hex, generate_token};

/// Where users land when no usable callback URL was supplied.
pub const DEFAULT_CALLBACK: &str = "/profile";
pub const MAGIC_LINK_SUBJECT: &str = "Sign in to ChatKeep";
const MAGIC_LINK_TEMPLATE: &str = include_str!("../../templates/magic_link.html");
const CALLBACK_PATH: &str = "/api/auth/callback/email";

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("expired or unknown sign-in link")]
    VerificationFailed,
    #[error("invalid public origin: {0}")]
    InvalidOrigin(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Random 32-byte hex token placed in the magic link.
#[must_use]
pub fn generate_verification_token() -> String {
    generate_token()
}

#[must_use]
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Accept only same-site relative paths as post-login targets.
#[must_use]
pub fn sanitize_callback(callback: Option<&str>) -> String {
    let Some(raw) = callback.map(str::trim) else {
        return DEFAULT_CALLBACK.to_owned();
    };
    // Browsers drop tab/CR/LF while parsing, so "/\t/host" would become "//host".
    if raw.chars().any(char::is_control) {
        return DEFAULT_CALLBACK.to_owned();
    }
    let relative = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    if relative { raw.to_owned() } else { DEFAULT_CALLBACK.to_owned() }
}

/// Absolute URL of the magic-link callback.
///
/// # Errors
///
/// Returns [`EmailAuthError::InvalidOrigin`] if `origin` is not a valid URL.
pub fn magic_link_url(origin: &str, token: &str, email: &str, callback: &str) -> Result<String, EmailAuthError> {
    let base = format!("{}{CALLBACK_PATH}", origin.trim_end_matches('/'));
    Url::parse_with_params(&base, &[("token", token), ("email", email), ("callbackUrl", callback)])
        .map(String::from)
        .map_err(|e| EmailAuthError::InvalidOrigin(format!("{origin}: {e}")))
}

fn name_from_email(email: &str) -> String {
    let local = email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user");
    local.to_owned()
}

/// Store a fresh verification token for `email`, replacing older unused ones.
/// Returns the raw token for the link; only its hash is persisted.
///
/// # Errors
///
/// Returns [`EmailAuthError::InvalidEmail`] or a database error.
pub async fn create_verification_token(pool: &PgPool, email: &str) -> Result<String, EmailAuthError> {
    let normalized = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;

    sqlx::query("DELETE FROM verification_tokens WHERE email = $1")
        .bind(&normalized)
        .execute(pool)
        .await?;

    let token = generate_verification_token();
    sqlx::query("INSERT INTO verification_tokens (token_hash, email) VALUES ($1, $2)")
        .bind(hash_token(&token))
        .bind(&normalized)
        .execute(pool)
        .await?;

    Ok(token)
}

/// Consume a magic-link token. Succeeds at most once per token.
///
/// # Errors
///
/// Returns [`EmailAuthError::VerificationFailed`] for unknown, expired, or
/// already-used tokens, or when the email does not match.
pub async fn consume_verification_token(pool: &PgPool, email: &str, token: &str) -> Result<String, EmailAuthError> {
    let normalized = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let row = sqlx::query(
        "DELETE FROM verification_tokens
         WHERE token_hash = $1 AND email = $2 AND expires_at > now()
         RETURNING email",
    )
    .bind(hash_token(token.trim()))
    .bind(&normalized)
    .fetch_optional(pool)
    .await?;

    row.map(|r| r.get("email"))
        .ok_or(EmailAuthError::VerificationFailed)
}

/// Find or create the user owning `email`.
///
/// # Errors
///
/// Returns a database error if the upsert fails.
pub async fn upsert_email_user(pool: &PgPool, email: &str) -> Result<Uuid, EmailAuthError> {
    let normalized = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let row = sqlx::query(
        r"INSERT INTO users (email, name)
          VALUES ($1, $2)
          ON CONFLICT (email) DO UPDATE SET name = users.name
          RETURNING id",
    )
    .bind(&normalized)
    .bind(name_from_email(&normalized))
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn render_magic_link_template(email: &str, url: &str) -> String {
    MAGIC_LINK_TEMPLATE
        .replace("{{EMAIL}}", &escape_html(email))
        .replace("{{URL}}", &escape_html(url))
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
