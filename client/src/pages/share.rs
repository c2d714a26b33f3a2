//! Public share page at `/s/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Story, chat_messages};
use crate::util::format::format_date;

#[component]
pub fn SharePage() -> impl IntoView {
    let params = use_params_map();
    let share_id = move || params.read().get("id").unwrap_or_default();
    let story = RwSignal::new(None::<Story>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let id = share_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            story.set(crate::net::api::fetch_share(&id).await);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="share-page">
            {move || {
                if loading.get() {
                    return view! { <p class="share-page__status">"Loading..."</p> }.into_any();
                }
                let Some(story) = story.get() else {
                    return view! { <p class="share-page__status">"Share not found"</p> }.into_any();
                };
                let messages = chat_messages(&story.messages);
                view! {
                    <article class="share">
                        <h1 class="share__title">{story.title.clone()}</h1>
                        <p class="share__date">{format_date(story.timestamp)}</p>
                        <ol class="share__messages">
                            {messages
                                .into_iter()
                                .map(|m| {
                                    view! {
                                        <li class=format!("share__message share__message--{}", m.role)>
                                            <span class="share__role">{m.role.clone()}</span>
                                            <p class="share__content">{m.content}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </article>
                }
                .into_any()
            }}
        </div>
    }
}
