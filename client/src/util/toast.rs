//! Toast dispatch with timed dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::{TOAST_EXIT_MS, TOAST_VISIBLE_MS};

/// Show `message` and schedule its removal.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let mut id = 0;
    toasts.update(|t| id = t.push(message.into(), kind));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_VISIBLE_MS).await;
        toasts.update(|t| t.begin_leave(id));
        gloo_timers::future::TimeoutFuture::new(TOAST_EXIT_MS).await;
        toasts.update(|t| t.remove(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
