//! Side-effect capabilities injected into component logic.
//!
//! DESIGN
//! ======
//! Components talk to the outside world (toasts, clipboard, router, view
//! refresh) through these small traits. Browser implementations live next to
//! the traits; tests substitute recording fakes.
//!
//! TRADE-OFFS
//! ==========
//! Browser effects are fire-and-forget. SSR and native builds compile the
//! browser implementations to no-ops.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen in the browser.
#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// User-visible transient notifications.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut pushed = None;
        self.update(|state| pushed = Some(state.push(kind, message)));

        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = pushed {
                let toasts = *self;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(TOAST_TTL).await;
                    toasts.update(|state| state.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pushed;
        }
    }
}

/// Write-only system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// [`Clipboard`] backed by `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(text);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    }
}

/// Client-side route changes.
pub trait Navigator {
    fn push(&self, path: &str);
}

/// [`Navigator`] wrapping the closure returned by `use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn push(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Asks the enclosing view to re-fetch its data.
pub trait ViewRefresh {
    fn refresh(&self);
}

impl ViewRefresh for Callback<()> {
    fn refresh(&self) {
        self.run(());
    }
}

/// `window.location.origin`, or an empty string outside the browser.
#[must_use]
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
