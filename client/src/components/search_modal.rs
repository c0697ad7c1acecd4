//! Search modal for matching a file against TMDB or MusicBrainz.

use leptos::prelude::*;

use crate::pages::renamer_actions::RenamerContext;
use crate::state::search::{SearchState, SearchStatus};
use crate::util::labels::{result_meta, result_overview, result_title};

#[component]
pub fn SearchModal() -> impl IntoView {
    let ctx = expect_context::<RenamerContext>();
    let search = ctx.search;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Refocus the query input each time the modal opens.
    Effect::new(move || {
        let open = search.with(|s| s.open);
        let _ = search.with(|s| s.focus_seq);
        if open && let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let close = move || search.update(SearchState::close);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });
    let on_query_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            ctx.perform_search();
        }
    };

    view! {
        <Show when=move || search.with(|s| s.open)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal modal--search"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="modal__header">
                        <h3>{move || search.with(SearchState::title)}</h3>
                        <button class="modal__close" on:click=move |_| close() title="Close">
                            "✕"
                        </button>
                    </div>
                    <div class="search-bar">
                        <input
                            node_ref=input_ref
                            type="text"
                            placeholder="Search..."
                            prop:value=move || search.with(|s| s.query.clone())
                            on:input=move |ev| search.update(|s| s.query = event_target_value(&ev))
                            on:keydown=on_query_keydown
                        />
                        <button
                            class="btn btn-primary"
                            disabled=move || search.with(SearchState::is_searching)
                            on:click=move |_| ctx.perform_search()
                        >
                            "Search"
                        </button>
                    </div>
                    <div class="search-results">{move || search.with(|s| render_results(ctx, s))}</div>
                </div>
            </div>
        </Show>
    }
}

fn render_results(ctx: RenamerContext, state: &SearchState) -> AnyView {
    match &state.status {
        SearchStatus::Idle => ().into_any(),
        SearchStatus::Searching => {
            view! {
                <div class="loading">
                    <div class="spinner"></div>
                    "Searching..."
                </div>
            }
            .into_any()
        }
        SearchStatus::Failed(message) => {
            let message = message.clone();
            view! { <div class="empty-state"><p>{message}</p></div> }.into_any()
        }
        SearchStatus::Done if state.results.is_empty() => {
            view! { <div class="empty-state"><p>"No results found"</p></div> }.into_any()
        }
        SearchStatus::Done => state
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let title = result_title(result).to_owned();
                let meta = result_meta(result);
                let overview = result_overview(result);
                view! {
                    <div
                        class="search-result"
                        class:selected=state.highlighted == Some(index)
                        on:click=move |_| ctx.select_search_result(index)
                    >
                        <div class="search-result__title">{title}</div>
                        <div class="search-result__meta">{meta}</div>
                        {(!overview.is_empty()).then(|| view! { <div class="search-result__overview">{overview}</div> })}
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    }
}
