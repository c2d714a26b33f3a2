//! Collapsible navigation sidebar for the landing layout.

use leptos::prelude::*;

use crate::components::side_user_settings::SideUserSettings;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || !ui.get().sidebar_hidden>
            <aside class="sidebar">
                <nav class="sidebar__nav">
                    <a class="sidebar__link" href="/mode/file">"Import transcript"</a>
                    <a class="sidebar__link" href="/dashboard">"My records"</a>
                </nav>
                <div class="sidebar__footer">
                    <SideUserSettings/>
                </div>
            </aside>
        </Show>
    }
}
