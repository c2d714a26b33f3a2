//! Landing layout: sidebar plus the file-mode import screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/` and `/mode/file`. The shell reads the sidebar flag from
//! `UiState` and only reserves the sidebar gutter while it is visible.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::file_main::FileMain;
use crate::components::landing_header::LandingHeader;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

/// Layout class for the content shell.
#[must_use]
pub fn shell_class(sidebar_hidden: bool) -> &'static str {
    if sidebar_hidden { "h-screen" } else { "h-screen md:ml-80" }
}

/// Header and file-mode main, offset for the sidebar when it is shown.
#[component]
pub fn FileModePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class=move || shell_class(ui.get().sidebar_hidden)>
            <LandingHeader/>
            <FileMain/>
        </div>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Sidebar/>
        <FileModePage/>
    }
}
