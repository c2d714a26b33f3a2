//! User settings dropdown at the bottom of the sidebar.

#[cfg(test)]
#[path = "side_user_settings_test.rs"]
mod side_user_settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::LOGIN_PATH;
use crate::util::effects::{Navigator, RouterNavigator};

/// The menu's only action: go to the login page.
pub fn select_login<N: Navigator>(nav: &N) {
    nav.push(LOGIN_PATH);
}

#[component]
pub fn SideUserSettings() -> impl IntoView {
    let nav = RouterNavigator(use_navigate());
    let open = RwSignal::new(false);

    view! {
        <div class="user-settings">
            <button
                class="user-settings__trigger"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "Settings"
            </button>
            <Show when=move || open.get()>
                <ul class="user-settings__menu" role="menu">
                    <li role="menuitem">
                        <button
                            class="user-settings__item"
                            on:click={
                                let nav = nav.clone();
                                move |_| {
                                    open.set(false);
                                    select_login(&nav);
                                }
                            }
                        >
                            "Login"
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
