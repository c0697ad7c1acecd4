//! Directory-browser modal for picking the media directory.

use leptos::prelude::*;

use crate::net::types::DirEntry;
use crate::pages::renamer_actions::RenamerContext;
use crate::state::browser::BrowserState;

/// Single-click highlights a folder, double-click opens it, "Select" commits
/// the highlighted folder (or the listed one when nothing is highlighted).
#[component]
pub fn BrowserModal() -> impl IntoView {
    let ctx = expect_context::<RenamerContext>();
    let browser = ctx.browser;
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // Move focus into the modal on open so Escape reaches its handler.
    Effect::new(move || {
        let open = browser.with(|b| b.open);
        let _ = browser.with(|b| b.focus_seq);
        if open && let Some(modal) = modal_ref.get() {
            let _ = modal.focus();
        }
    });

    let close = move || browser.update(BrowserState::close);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });

    view! {
        <Show when=move || browser.with(|b| b.open)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    node_ref=modal_ref
                    class="modal modal--browser"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="modal__header">
                        <h3>"Select Directory"</h3>
                        <button class="modal__close" on:click=move |_| close() title="Close">
                            "✕"
                        </button>
                    </div>
                    <div class="browser-nav">
                        <button
                            class="btn btn-sm btn-secondary"
                            disabled=move || !browser.with(BrowserState::can_go_up)
                            on:click=move |_| ctx.browser_go_up()
                        >
                            "Up"
                        </button>
                        <span class="browser-nav__path">{move || browser.with(|b| b.current.clone())}</span>
                    </div>
                    <ul class="browser-list" class:loading=move || browser.with(|b| b.loading)>
                        {move || {
                            browser.with(|b| {
                                b.items
                                    .iter()
                                    .map(|item| directory_row(ctx, item.clone(), b.is_highlighted(&item.path)))
                                    .collect_view()
                            })
                        }}
                    </ul>
                    <div class="modal__footer">
                        <button class="btn btn-secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn btn-primary" on:click=move |_| ctx.select_browser_path()>
                            "Select"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn directory_row(ctx: RenamerContext, entry: DirEntry, highlighted: bool) -> impl IntoView {
    let DirEntry { name, path } = entry;
    let open_path = path.clone();

    view! {
        <li
            class="browser-item"
            class:selected=highlighted
            on:click=move |_| ctx.browser.update(|b| b.highlight(path.clone()))
            on:dblclick=move |_| ctx.load_browser_directory(open_path.clone())
        >
            <span class="browser-item__icon">"📁"</span>
            {name}
        </li>
    }
}
