//! Scanned-file list with selection and per-row actions.
//!
//! DESIGN
//! ======
//! The list re-renders wholesale from `FilesState` on every change, the same
//! way the rows would be rebuilt after each scan, match, or rename. Rows stay
//! dumb: they get a snapshot of their entry and report clicks back through
//! the shared `RenamerContext` actions.

use leptos::prelude::*;

use crate::pages::renamer_actions::RenamerContext;
use crate::state::files::{FileEntry, FilesState, ScanStatus};
use crate::util::labels::detected_summary;

#[component]
pub fn FilesPanel() -> impl IntoView {
    let ctx = expect_context::<RenamerContext>();
    let files = ctx.files;

    let select_label = move || {
        if files.with(|f| !f.entries.is_empty() && f.all_selected()) { "Deselect All" } else { "Select All" }
    };

    view! {
        <Show when=move || files.with(FilesState::visible)>
            <section class="panel files-panel">
                <div class="panel-header">
                    <h2>
                        "Files "
                        <span class="badge">{move || files.with(|f| f.count)}</span>
                    </h2>
                    <div class="panel-actions">
                        <button class="btn btn-secondary" on:click=move |_| files.update(FilesState::toggle_all)>
                            {select_label}
                        </button>
                        <button
                            class="btn btn-success"
                            disabled=move || files.with(|f| f.renaming)
                            on:click=move |_| ctx.rename_selected()
                        >
                            "Rename Selected"
                        </button>
                    </div>
                </div>
                <div class="files-list">{move || files.with(render_files)}</div>
            </section>
        </Show>
    }
}

fn render_files(state: &FilesState) -> AnyView {
    match &state.status {
        ScanStatus::Idle => ().into_any(),
        ScanStatus::Scanning => {
            view! {
                <div class="loading">
                    <div class="spinner"></div>
                    "Scanning..."
                </div>
            }
            .into_any()
        }
        ScanStatus::Failed(message) => {
            let message = message.clone();
            view! {
                <div class="empty-state">
                    <h3>"Error"</h3>
                    <p>{message}</p>
                </div>
            }
            .into_any()
        }
        ScanStatus::Ready if state.entries.is_empty() => {
            view! {
                <div class="empty-state">
                    <h3>"No files found"</h3>
                    <p>"Try changing the mode or directory"</p>
                </div>
            }
            .into_any()
        }
        ScanStatus::Ready => state
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                view! { <FileRow index=index entry=entry.clone() selected=state.is_selected(index)/> }
            })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn FileRow(index: usize, entry: FileEntry, selected: bool) -> impl IntoView {
    let ctx = expect_context::<RenamerContext>();
    let files = ctx.files;
    let kind = entry.file.kind;
    let detected = detected_summary(kind, entry.file.detected_info.as_ref());
    let has_match = entry.new_name.is_some();

    view! {
        <div class="file-item" class:selected=selected class:renamed=entry.renamed>
            <input
                type="checkbox"
                class="file-checkbox"
                prop:checked=selected
                on:change=move |_| files.update(|f| f.toggle(index))
            />
            <div class="file-info">
                <div class="file-name">{entry.file.filename}</div>
                <span class=format!("file-type {}", kind.as_str())>{kind.as_str()}</span>
                <div class="file-detected">{detected}</div>
                {entry.new_name.map(|name| view! { <div class="file-new-name">{name}</div> })}
                {entry
                    .target_exists
                    .then(|| view! { <div class="file-warning">"A file with this name already exists"</div> })}
                {entry.rename_error.map(|message| view! { <div class="file-error">{message}</div> })}
            </div>
            <div class="file-actions">
                <button class="btn btn-sm btn-primary" on:click=move |_| ctx.open_search(index)>
                    "Search"
                </button>
                <Show when=move || has_match>
                    <button
                        class="btn btn-sm btn-success"
                        disabled=move || files.with(|f| f.renaming)
                        on:click=move |_| ctx.rename_file(index)
                    >
                        "Rename"
                    </button>
                </Show>
            </div>
        </div>
    }
}
