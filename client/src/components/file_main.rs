//! Transcript import: paste or load a JSON chat export and save it as a record.
//!
//! Accepted input is a JSON array of `{role, content}` objects. Anything else
//! is rejected before it reaches the server.

#[cfg(test)]
#[path = "file_main_test.rs"]
mod file_main_test;

use leptos::prelude::*;

use crate::net::types::{ChatMessage, CreateRecordRequest};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::effects::Notifier;

const TITLE_MAX_CHARS: usize = 60;
pub const DEFAULT_TITLE: &str = "Untitled Chat";

/// Parse a pasted transcript.
///
/// # Errors
///
/// Returns a user-facing message when the text is not a non-empty JSON array
/// of `{role, content}` messages.
pub fn parse_transcript(text: &str) -> Result<Vec<ChatMessage>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Paste a transcript first".to_owned());
    }
    let messages: Vec<ChatMessage> =
        serde_json::from_str(trimmed).map_err(|e| format!("Invalid transcript: {e}"))?;
    if messages.is_empty() {
        return Err("Transcript has no messages".to_owned());
    }
    Ok(messages)
}

/// Title derived from the first user message, shortened to a single line.
#[must_use]
pub fn derive_title(messages: &[ChatMessage]) -> String {
    let Some(first) = messages.iter().find(|m| m.role == "user") else {
        return DEFAULT_TITLE.to_owned();
    };
    let line = first.content.lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return DEFAULT_TITLE.to_owned();
    }
    if line.chars().count() <= TITLE_MAX_CHARS {
        return line.to_owned();
    }
    let mut title: String = line.chars().take(TITLE_MAX_CHARS).collect();
    title.push('…');
    title
}

/// Build the create request for a parsed transcript.
#[must_use]
pub fn record_request(messages: &[ChatMessage]) -> CreateRecordRequest {
    CreateRecordRequest {
        title: derive_title(messages),
        content: serde_json::to_value(messages).unwrap_or(serde_json::Value::Array(Vec::new())),
    }
}

#[component]
pub fn FileMain() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let parsed = Memo::new(move |_| parse_transcript(&text.get()));
    let preview = move || match parsed.get() {
        Ok(messages) => format!("{} messages · {}", messages.len(), derive_title(&messages)),
        Err(e) => e,
    };

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        if auth.get().user.is_none() {
            toasts.error("Sign in to save transcripts");
            return;
        }
        let messages = match parsed.get() {
            Ok(messages) => messages,
            Err(e) => {
                toasts.error(&e);
                return;
            }
        };
        let request = record_request(&messages);

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_record(&request).await {
                    Ok(record) => {
                        toasts.success(&format!("Record: {} saved", record.id));
                        text.set(String::new());
                    }
                    Err(e) => {
                        log::warn!("create record failed: {e}");
                        toasts.error(crate::components::record_card::GENERIC_ERROR);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <main class="file-main">
            <h2 class="file-main__title">"Import a chat transcript"</h2>
            <textarea
                class="file-main__input"
                rows="14"
                placeholder=r#"[{"role":"user","content":"Hello"}]"#
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <p class="file-main__preview">{preview}</p>
            <button
                class="btn btn--primary"
                disabled=move || busy.get() || parsed.get().is_err()
                on:click=on_save
            >
                "Save record"
            </button>
        </main>
    }
}
