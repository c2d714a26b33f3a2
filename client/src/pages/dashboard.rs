//! Dashboard page listing the signed-in user's records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Records are fetched over REST whenever
//! `RecordsState::refresh_seq` changes; cards bump the sequence through the
//! refresh callback after a successful delete.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::record_card::RecordCard;
use crate::state::auth::AuthState;
use crate::state::records::RecordsState;
use crate::util::auth::install_unauth_redirect;

/// Text shown in place of the list, if any.
#[must_use]
pub fn list_status(state: &RecordsState) -> Option<String> {
    if let Some(error) = &state.error {
        return Some(format!("Could not load records: {error}"));
    }
    if state.loading && state.items.is_empty() {
        return Some("Loading records...".to_owned());
    }
    if state.items.is_empty() {
        return Some("No records yet. Import a transcript to get started.".to_owned());
    }
    None
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let records = expect_context::<RwSignal<RecordsState>>();
    install_unauth_redirect(auth, use_navigate());

    // Re-fetch once the user is known and on every refresh request.
    let refresh_seq = Memo::new(move |_| records.with(|s| s.refresh_seq));
    let signed_in = Memo::new(move |_| auth.with(|a| a.user.is_some()));
    Effect::new(move || {
        let seq = refresh_seq.get();
        if !signed_in.get() {
            return;
        }
        records.update(RecordsState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_records().await;
            if let Err(e) = &result {
                log::warn!("record list failed (seq {seq}): {e}");
            }
            records.update(|s| s.finish_load(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    let on_refresh = Callback::new(move |()| records.update(RecordsState::request_refresh));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"My records"</h1>
                <a class="btn" href="/mode/file">"Import transcript"</a>
            </header>
            {move || records.with(list_status).map(|text| view! { <p class="dashboard-status">{text}</p> })}
            <div class="record-list">
                <For
                    each=move || records.get().items
                    key=|record| (record.id.clone(), record.updated_at)
                    children=move |record| view! { <RecordCard record=record on_refresh=on_refresh/> }
                />
            </div>
        </div>
    }
}
