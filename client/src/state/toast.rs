//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Components never render toasts themselves; they go through the
//! [`Notifier`](crate::util::effects::Notifier) capability, which pushes into
//! this queue. `ToastHost` renders the queue and dismisses entries.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
