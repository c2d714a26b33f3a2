//! Top bar of the landing layout: sidebar toggle, brand, account link.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn LandingHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let account_link = move || {
        if auth.get().user.is_some() {
            ("/dashboard", "Dashboard")
        } else {
            ("/login", "Sign In")
        }
    };

    view! {
        <header class="landing-header">
            <button
                class="icon-button"
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <a class="landing-header__brand" href="/">
                "ChatKeep"
            </a>
            <a class="landing-header__account" href=move || account_link().0>
                {move || account_link().1}
            </a>
        </header>
    }
}
