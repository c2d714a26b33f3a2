//! Identity-provider sign-in capability.
//!
//! DESIGN
//! ======
//! UI code only asks "did the sign-in request go through?" (`SignInResult::ok`).
//! Provider mechanics live on the server: the email provider mails a magic
//! link, OAuth providers are a browser redirect into the server's flow.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

/// Supported sign-in providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Email,
    GitHub,
}

impl Provider {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::GitHub => "github",
        }
    }
}

/// Options accepted by [`IdentityProvider::sign_in`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInOptions {
    pub email: Option<String>,
    /// When `false` the caller handles navigation itself.
    pub redirect: bool,
    /// Where the user lands once the flow completes.
    pub callback_url: String,
}

/// Outcome of a sign-in request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInResult {
    pub ok: bool,
    pub error: Option<String>,
    /// Follow-up URL (OAuth redirect, or the echoed magic link in development).
    pub url: Option<String>,
}

impl SignInResult {
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { ok: false, error: Some(error.into()), url: None }
    }
}

#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn sign_in(&self, provider: Provider, options: SignInOptions) -> SignInResult;
}

/// Server path that starts the OAuth flow for a provider.
#[must_use]
pub fn oauth_start_url(provider: Provider, callback_url: &str) -> Option<String> {
    match provider {
        Provider::Email => None,
        Provider::GitHub => Some(format!("/auth/github?callbackUrl={}", urlencoding::encode(callback_url))),
    }
}

/// [`IdentityProvider`] backed by the chatkeep server.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerIdentity;

impl IdentityProvider for ServerIdentity {
    async fn sign_in(&self, provider: Provider, options: SignInOptions) -> SignInResult {
        match provider {
            Provider::Email => {
                let Some(email) = options.email.as_deref() else {
                    return SignInResult::failed("email required");
                };
                match super::api::request_email_sign_in(email, &options.callback_url).await {
                    Ok(url) => {
                        if options.redirect {
                            redirect_to(&options.callback_url);
                        }
                        SignInResult { ok: true, error: None, url }
                    }
                    Err(e) => SignInResult::failed(e),
                }
            }
            Provider::GitHub => {
                let url = oauth_start_url(provider, &options.callback_url);
                if options.redirect {
                    if let Some(url) = url.as_deref() {
                        redirect_to(url);
                    }
                }
                SignInResult { ok: url.is_some(), error: None, url }
            }
        }
    }
}

fn redirect_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
