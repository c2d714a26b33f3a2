//! Renders the toast queue from context.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <div class=format!("toast {}", toast.kind.css_modifier())>
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|state| state.dismiss(toast.id))
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
