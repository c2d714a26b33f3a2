//! Auth routes — email magic links, GitHub OAuth, session management.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

use crate::rate_limit::RateLimitError;
use crate::services::email_auth::{self, EmailAuthError};
use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";
const OAUTH_CALLBACK_COOKIE_NAME: &str = "oauth_callback";
/// Where a failed magic-link verification sends the browser.
const VERIFY_FAILED_REDIRECT: &str = "/login?error=verification";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(30))
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn short_lived_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::minutes(10))
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// EMAIL MAGIC LINK
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSignInBody {
    pub email: String,
    pub callback_url: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EmailSignInResponse {
    pub ok: bool,
    /// The magic link itself, only when link echoing is enabled.
    pub url: Option<String>,
}

pub(crate) fn email_auth_error_to_status(err: &EmailAuthError) -> StatusCode {
    match err {
        EmailAuthError::InvalidEmail => StatusCode::BAD_REQUEST,
        EmailAuthError::VerificationFailed => StatusCode::UNAUTHORIZED,
        EmailAuthError::InvalidOrigin(_) | EmailAuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn rate_limit_error_to_status(err: &RateLimitError) -> StatusCode {
    match err {
        RateLimitError::PerEmailExceeded { .. } | RateLimitError::GlobalExceeded { .. } => {
            StatusCode::TOO_MANY_REQUESTS
        }
    }
}

/// `POST /api/auth/signin/email` — mint a magic link and mail it.
pub async fn signin_email(
    State(state): State<AppState>,
    Json(body): Json<EmailSignInBody>,
) -> Result<Json<EmailSignInResponse>, StatusCode> {
    let email = email_auth::normalize_email(&body.email).ok_or(StatusCode::BAD_REQUEST)?;
    if state.mailer.is_none() && !state.echo_links {
        tracing::warn!("email sign-in requested but no mailer is configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    state.rate_limiter.check_and_record(&email).map_err(|e| {
        tracing::warn!(error = %e, "email sign-in rate limited");
        rate_limit_error_to_status(&e)
    })?;

    let callback = email_auth::sanitize_callback(body.callback_url.as_deref());
    let token = email_auth::create_verification_token(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "verification token creation failed");
            email_auth_error_to_status(&e)
        })?;
    let url = email_auth::magic_link_url(&state.public_origin, &token, &email, &callback).map_err(|e| {
        tracing::error!(error = %e, "magic link build failed");
        email_auth_error_to_status(&e)
    })?;

    if let Some(mailer) = &state.mailer {
        let html = email_auth::render_magic_link_template(&email, &url);
        if let Err(e) = mailer.send(&email, email_auth::MAGIC_LINK_SUBJECT, &html).await {
            tracing::error!(error = %e, "magic link delivery failed");
            return Err(StatusCode::BAD_GATEWAY);
        }
    }

    if state.echo_links {
        tracing::info!(%email, %url, "magic link (echo enabled)");
        return Ok(Json(EmailSignInResponse { ok: true, url: Some(url) }));
    }
    Ok(Json(EmailSignInResponse { ok: true, url: None }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCallbackQuery {
    pub token: String,
    pub email: String,
    pub callback_url: Option<String>,
}

/// `GET /api/auth/callback/email` — consume the link, start a session, redirect.
pub async fn callback_email(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<EmailCallbackQuery>,
) -> Response {
    let email = match email_auth::consume_verification_token(&state.pool, &params.email, &params.token).await {
        Ok(email) => email,
        Err(EmailAuthError::VerificationFailed | EmailAuthError::InvalidEmail) => {
            return Redirect::temporary(VERIFY_FAILED_REDIRECT).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "magic link verification failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to verify sign-in link").into_response();
        }
    };

    let user_id = match email_auth::upsert_email_user(&state.pool, &email).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "email user upsert failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response();
        }
    };

    start_session(&state, jar, user_id, &email_auth::sanitize_callback(params.callback_url.as_deref())).await
}

async fn start_session(state: &AppState, jar: CookieJar, user_id: Uuid, redirect_to: &str) -> Response {
    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };
    tracing::info!(%user_id, "session started");
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (jar, Redirect::temporary(redirect_to)).into_response()
}

// =============================================================================
// GITHUB OAUTH
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubStartQuery {
    pub callback_url: Option<String>,
}

/// `GET /auth/github` — redirect to GitHub authorization page.
pub async fn github_redirect(State(state): State<AppState>, Query(params): Query<GitHubStartQuery>) -> Response {
    let Some(config) = &state.github else {
        return (StatusCode::SERVICE_UNAVAILABLE, "GitHub OAuth not configured").into_response();
    };

    let oauth_state = session::generate_token();
    let callback = email_auth::sanitize_callback(params.callback_url.as_deref());
    let jar = CookieJar::new()
        .add(short_lived_cookie(OAUTH_STATE_COOKIE_NAME, oauth_state.clone(), state.cookie_secure))
        .add(short_lived_cookie(OAUTH_CALLBACK_COOKIE_NAME, callback, state.cookie_secure));
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct GitHubCallbackQuery {
    code: String,
    state: Option<String>,
}

/// `GET /auth/github/callback` — exchange code, upsert user, set cookie, redirect.
pub async fn github_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<GitHubCallbackQuery>,
) -> Response {
    let Some(config) = &state.github else {
        return (StatusCode::SERVICE_UNAVAILABLE, "GitHub OAuth not configured").into_response();
    };

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    };
    let expected_state = jar
        .get(OAUTH_STATE_COOKIE_NAME)
        .map(Cookie::value)
        .unwrap_or_default();
    if expected_state.is_empty() || expected_state != callback_state {
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }
    let redirect_to = email_auth::sanitize_callback(jar.get(OAUTH_CALLBACK_COOKIE_NAME).map(Cookie::value));

    let access_token = match auth_svc::exchange_code(config, &params.code).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return (StatusCode::BAD_GATEWAY, "OAuth code exchange failed").into_response();
        }
    };

    let gh_user = match auth_svc::fetch_github_user(&access_token).await {
        Ok(u) => u,
        Err(e) => {
            tracing::error!(error = %e, "github user fetch failed");
            return (StatusCode::BAD_GATEWAY, "Failed to fetch GitHub profile").into_response();
        }
    };

    let user_id = match auth_svc::upsert_user(&state.pool, &gh_user).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "user upsert failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response();
        }
    };

    let jar = jar
        .add(expired_cookie(OAUTH_STATE_COOKIE_NAME, state.cookie_secure))
        .add(expired_cookie(OAUTH_CALLBACK_COOKIE_NAME, state.cookie_secure));
    start_session(&state, jar, user_id, &redirect_to).await
}

// =============================================================================
// SESSION
// =============================================================================

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }
    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
