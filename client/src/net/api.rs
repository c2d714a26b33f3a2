//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration. Record and share mutations
//! surface an [`ApiReply`] so components can branch on the status code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::SuccessResponse;
use super::types::{CreateRecordRequest, Record, ShareRequest, Story, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Collection endpoint for records.
pub const RECORDS_ENDPOINT: &str = "/api/record";
/// Share creation endpoint.
pub const SHARE_ENDPOINT: &str = "/api/share";

const STATUS_CONFLICT: u16 = 409;

#[cfg(any(test, feature = "hydrate"))]
fn record_endpoint(record_id: &str) -> String {
    format!("{RECORDS_ENDPOINT}/{record_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn share_endpoint(share_id: &str) -> String {
    format!("{SHARE_ENDPOINT}/{share_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn records_failed_message(status: u16) -> String {
    format!("record request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign-in request failed: {status}")
}

// =============================================================================
// MUTATION REPLIES
// =============================================================================

/// Status and acknowledgement of a record/share mutation.
///
/// `success` is only read from the body for 2xx responses; anything else is
/// reported as `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub success: bool,
}

impl ApiReply {
    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the server reported that the resource already exists.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status == STATUS_CONFLICT
    }
}

/// Backend operations used by record cards.
///
/// `Err` means the request never produced a response (network failure).
#[allow(async_fn_in_trait)]
pub trait RecordsApi {
    /// `POST /api/share`.
    async fn create_share(&self, request: &ShareRequest) -> Result<ApiReply, String>;
    /// `DELETE /api/record/{id}`.
    async fn delete_record(&self, record_id: &str) -> Result<ApiReply, String>;
}

/// [`RecordsApi`] backed by browser `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRecordsApi;

impl RecordsApi for HttpRecordsApi {
    async fn create_share(&self, request: &ShareRequest) -> Result<ApiReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(SHARE_ENDPOINT)
                .json(request)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            Ok(read_reply(resp).await)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }

    async fn delete_record(&self, record_id: &str) -> Result<ApiReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&record_endpoint(record_id))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            Ok(read_reply(resp).await)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record_id;
            Err("not available on server".to_owned())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_reply(resp: gloo_net::http::Response) -> ApiReply {
    let status = resp.status();
    if !resp.ok() {
        return ApiReply { status, success: false };
    }
    let success = resp
        .json::<SuccessResponse>()
        .await
        .map(|body| body.success)
        .unwrap_or(false);
    ApiReply { status, success }
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct EmailSignInResponse {
    ok: bool,
    url: Option<String>,
}

/// Ask the server to email a sign-in link via `POST /api/auth/signin/email`.
///
/// Returns the link itself when the server runs with link echoing enabled.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_sign_in(email: &str, callback_url: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "callbackUrl": callback_url });
        let resp = gloo_net::http::Request::post("/api/auth/signin/email")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        let body: EmailSignInResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("sign-in request failed".to_owned());
        }
        Ok(body.url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, callback_url);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// RECORDS & SHARES
// =============================================================================

/// Fetch the current user's records from `GET /api/record`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_records() -> Result<Vec<Record>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(RECORDS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(records_failed_message(resp.status()));
        }
        resp.json::<Vec<Record>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Save a transcript as a new record via `POST /api/record`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn create_record(request: &CreateRecordRequest) -> Result<Record, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(RECORDS_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(records_failed_message(resp.status()));
        }
        resp.json::<Record>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch a public share from `GET /api/share/{id}`.
pub async fn fetch_share(share_id: &str) -> Option<Story> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&share_endpoint(share_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Story>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = share_id;
        None
    }
}
