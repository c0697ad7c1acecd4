//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Each toast lives for [`TOAST_VISIBLE_MS`], then flips to `leaving` so the
//! exit animation can play for [`TOAST_EXIT_MS`] before it is dropped. The
//! timers live in `util::toast`; this module only holds the queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_EXIT_MS: u32 = 300;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub leaving: bool,
}

/// Ordered toast stack, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: String, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message, kind, leaving: false });
        id
    }

    /// Start the exit animation for `id`.
    pub fn begin_leave(&mut self, id: u64) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    /// Whether toast `id` is playing its exit animation. Unknown ids are not.
    #[must_use]
    pub fn is_leaving(&self, id: u64) -> bool {
        self.items.iter().any(|t| t.id == id && t.leaving)
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
