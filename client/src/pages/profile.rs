//! Profile page: where the magic-link callback lands.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.resolve(None));
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    view! {
        <div class="profile-page">
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        let email = user.email.clone().unwrap_or_default();
                        view! {
                            <div class="profile-card">
                                {user.avatar_url.clone().map(|src| view! { <img class="profile-card__avatar" src=src alt=""/> })}
                                <h1>{user.name.clone()}</h1>
                                <p class="profile-card__email">{email}</p>
                                <p class="profile-card__method">"Signed in with " {user.auth_method.clone()}</p>
                            </div>
                        }
                    })
            }}
            <div class="profile-actions">
                <a class="btn btn--primary" href="/dashboard">"Go to dashboard"</a>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </div>
        </div>
    }
}
