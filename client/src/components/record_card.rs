//! Dashboard card for one saved record.
//!
//! DESIGN
//! ======
//! The card owns three actions: toggle sharing, copy the share link, delete
//! the record. Their logic lives on [`CardEffects`] so it can run against
//! fake capabilities in tests; the component only wires DOM events to it.
//!
//! The share switch is optimistic. It flips before the request resolves and
//! is left as-is whatever the outcome: a 409 still hands the user a working
//! link, and other failures are reported without rolling the switch back.
//! Switching off never touches the server.

#[cfg(test)]
#[path = "record_card_test.rs"]
mod record_card_test;

use leptos::prelude::*;

use crate::net::api::{HttpRecordsApi, RecordsApi};
use crate::net::types::{Record, ShareRequest, Story};
use crate::state::toast::ToastState;
use crate::util::effects::{BrowserClipboard, Clipboard, Notifier, ViewRefresh};
use crate::util::format::format_date;

pub const GENERIC_ERROR: &str = "Error: Something went wrong";

#[must_use]
pub fn share_exists_message(record_id: &str) -> String {
    format!("Share already exists: {record_id}")
}

#[must_use]
pub fn link_copied_message(record_id: &str) -> String {
    format!("Share: {record_id} link copied")
}

#[must_use]
pub fn deleted_message(record_id: &str) -> String {
    format!("Record: {record_id} deleted")
}

/// Capabilities a record card acts through.
#[derive(Clone)]
pub struct CardEffects<A, N, C, R> {
    pub api: A,
    pub notifier: N,
    pub clipboard: C,
    pub refresh: R,
}

impl<A, N, C, R> CardEffects<A, N, C, R>
where
    A: RecordsApi,
    N: Notifier,
    C: Clipboard,
    R: ViewRefresh,
{
    /// Handle the share switch changing to `value`.
    pub async fn switch_share(&self, record: &Record, origin: &str, value: bool, set_enabled: impl Fn(bool)) {
        set_enabled(value);
        if !value {
            return;
        }

        let Ok(request) = ShareRequest::from_story(&Story::from_record(record)) else {
            self.notifier.error(GENERIC_ERROR);
            return;
        };
        let Ok(reply) = self.api.create_share(&request).await else {
            self.notifier.error(GENERIC_ERROR);
            return;
        };

        if !reply.ok() {
            if reply.is_conflict() {
                self.clipboard.write_text(&record.share_link(origin));
                self.notifier.error(&share_exists_message(&record.id));
                return;
            }
            self.notifier.error(GENERIC_ERROR);
            return;
        }

        if !reply.success {
            self.notifier.error(GENERIC_ERROR);
            return;
        }

        self.clipboard.write_text(&record.share_link(origin));
        self.notifier.success(&link_copied_message(&record.id));
    }

    /// Copy the share link. Assumes the share already exists.
    pub fn copy_link(&self, record: &Record, origin: &str) {
        self.clipboard.write_text(&record.share_link(origin));
        self.notifier.success(&link_copied_message(&record.id));
    }

    /// Delete the record and ask the enclosing view to refresh on success.
    pub async fn delete(&self, record: &Record) {
        match self.api.delete_record(&record.id).await {
            Ok(reply) if reply.ok() && reply.success => {
                self.notifier.success(&deleted_message(&record.id));
                self.refresh.refresh();
            }
            _ => self.notifier.error(GENERIC_ERROR),
        }
    }
}

type BrowserCardEffects = CardEffects<HttpRecordsApi, RwSignal<ToastState>, BrowserClipboard, Callback<()>>;

/// A record row with share switch, copy-link and delete controls.
#[component]
pub fn RecordCard(record: Record, on_refresh: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let effects: BrowserCardEffects =
        CardEffects { api: HttpRecordsApi, notifier: toasts, clipboard: BrowserClipboard, refresh: on_refresh };
    let enable_share = RwSignal::new(false);

    let title = record.title.clone();
    let created = format_date(record.created_at);
    let updated = format_date(record.updated_at);

    let on_switch = {
        let record = record.clone();
        let effects = effects.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_checked(&ev);
            #[cfg(feature = "hydrate")]
            {
                let record = record.clone();
                let effects = effects.clone();
                leptos::task::spawn_local(async move {
                    let origin = crate::util::effects::current_origin();
                    effects
                        .switch_share(&record, &origin, value, move |v| enable_share.set(v))
                        .await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&record, &effects);
                enable_share.set(value);
            }
        }
    };

    let on_copy = Callback::new({
        let record = record.clone();
        let effects = effects.clone();
        move |()| effects.copy_link(&record, &crate::util::effects::current_origin())
    });

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let record = record.clone();
            let effects = effects.clone();
            leptos::task::spawn_local(async move {
                effects.delete(&record).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&record, &effects);
        }
    };

    view! {
        <div class="record-card">
            <div class="record-card__meta">
                <p class="record-card__title">{title}</p>
                <p class="record-card__date">{created}</p>
            </div>
            <div class="record-card__actions">
                <div class="record-card__controls">
                    <div class="record-card__share">
                        <label class="switch">
                            <input
                                class="switch__input"
                                type="checkbox"
                                role="switch"
                                prop:checked=move || enable_share.get()
                                on:change=on_switch
                            />
                            <span class="switch__track" aria-hidden="true"></span>
                        </label>
                        <p>"Share"</p>
                        <Show when=move || enable_share.get()>
                            <button
                                class="icon-button"
                                title="Copy share link"
                                aria-label="Copy share link"
                                on:click=move |_| on_copy.run(())
                            >
                                "⧉"
                            </button>
                        </Show>
                    </div>
                    <p class="record-card__date">{updated}</p>
                </div>
                <button class="btn btn--danger" title="Delete record" aria-label="Delete record" on:click=on_delete>
                    "✕"
                </button>
            </div>
        </div>
    }
}
