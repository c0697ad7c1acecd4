//! Renamer page: settings, scanned files, and the modals that act on them.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the `RenamerContext` signals, provides
//! them to every component, and loads the backend config once on mount.

use leptos::prelude::*;

use crate::components::browser_modal::BrowserModal;
use crate::components::files_panel::FilesPanel;
use crate::components::search_modal::SearchModal;
use crate::components::settings_panel::SettingsPanel;
use crate::components::toast_stack::ToastStack;
use crate::pages::renamer_actions::RenamerContext;

#[component]
pub fn RenamerPage() -> impl IntoView {
    let ctx = RenamerContext::new();
    provide_context(ctx);

    // Effects only run in the browser, so this is the client-side mount hook.
    Effect::new(move || ctx.load_config());

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Media Renamer"</h1>
                <p>"Rename movies, TV shows, and music using TMDB and MusicBrainz metadata"</p>
            </header>
            <SettingsPanel/>
            <FilesPanel/>
            <BrowserModal/>
            <SearchModal/>
            <ToastStack/>
        </div>
    }
}
