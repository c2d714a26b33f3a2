//! Email magic-link form shared by the login and register pages.
//!
//! The form never redirects on its own: it asks the identity provider to mail
//! a link (`redirect: false`) and reports the outcome through a toast. The
//! magic link lands the user on `/profile` once they click it.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::net::identity::{IdentityProvider, Provider, ServerIdentity, SignInOptions};
use crate::state::toast::ToastState;
use crate::util::effects::Notifier;

/// Where the magic link sends a freshly signed-in user.
pub const SIGN_IN_CALLBACK: &str = "/profile";

pub const EMAIL_SENT: &str = "Email sent!";
pub const EMAIL_NOT_SENT: &str = "Email not sent!";

/// Headline for the form in login or register mode.
#[must_use]
pub fn headline(login: bool) -> &'static str {
    if login { "Sign In" } else { "Register" }
}

/// Label of the email submit button.
pub const SUBMIT_LABEL: &str = "Sign In With Email";

/// `(prompt, link text, link target)` of the cross-link under the form.
#[must_use]
pub fn cross_link(login: bool) -> (&'static str, &'static str, &'static str) {
    if login {
        ("New User?", "Sign up", "/register")
    } else {
        ("Already have an account with us?", "Log In", "/login")
    }
}

/// Request a magic link for `email` and toast the outcome.
pub async fn submit_email<I, N>(identity: &I, notifier: &N, email: &str)
where
    I: IdentityProvider,
    N: Notifier,
{
    let options = SignInOptions {
        email: Some(email.to_owned()),
        redirect: false,
        callback_url: SIGN_IN_CALLBACK.to_owned(),
    };
    let result = identity.sign_in(Provider::Email, options).await;
    if result.ok {
        notifier.success(EMAIL_SENT);
    } else {
        notifier.error(EMAIL_NOT_SENT);
    }
}

#[component]
pub fn AuthForm(#[prop(optional)] login: bool) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let (prompt, link_text, link_href) = cross_link(login);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = email.get().trim().to_owned();

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                submit_email(&ServerIdentity, &toasts, &value).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, toasts, ServerIdentity);
        }
    };

    view! {
        <div class="login-card">
            <h1>{headline(login)}</h1>
            <p class="login-card__subtitle">"We'll email you a sign-in link."</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {SUBMIT_LABEL}
                </button>
            </form>
            <p class="login-message">
                {prompt} " " <a href=link_href>{link_text}</a>
            </p>
        </div>
    }
}
