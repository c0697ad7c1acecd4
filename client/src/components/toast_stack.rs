//! Fixed-position stack of transient notifications.

use leptos::prelude::*;

use crate::pages::renamer_actions::RenamerContext;
use crate::state::toast::Toast;

/// Rows are keyed by toast id so a removal never shifts another toast's
/// exit animation onto a reused node.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RenamerContext>().toasts;

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.with(|state| state.items.clone())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let kind = toast.kind.as_str();
                    let class = move || {
                        let leaving = if toasts.with(|state| state.is_leaving(id)) { " toast--leaving" } else { "" };
                        format!("toast toast--{kind}{leaving}")
                    };
                    view! {
                        <div class=class>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
