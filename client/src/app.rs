//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage,
    landing::LandingPage,
    login::{LoginPage, RegisterPage},
    profile::ProfilePage,
    share::SharePage,
};
use crate::state::{auth::AuthState, records::RecordsState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the current user once, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let records = RwSignal::new(RecordsState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(records);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| a.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chatkeep.css"/>
        <Title text="ChatKeep"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=(StaticSegment("mode"), StaticSegment("file")) view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=(StaticSegment("s"), ParamSegment("id")) view=SharePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
