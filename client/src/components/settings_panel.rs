//! Settings form: API key, media directory, scan mode, dry run.

use leptos::prelude::*;

use crate::net::types::ScanMode;
use crate::pages::renamer_actions::RenamerContext;
use crate::state::files::ScanStatus;
use crate::state::settings::SettingsState;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = expect_context::<RenamerContext>();
    let settings = ctx.settings;
    let files = ctx.files;

    let key_placeholder = move || {
        if settings.with(|s| s.api_key_configured) {
            "Key configured on server"
        } else {
            "Enter your TMDB API key"
        }
    };

    view! {
        <section class="panel settings-panel">
            <h2>"Settings"</h2>

            <div class="form-group">
                <label for="tmdb-api-key">"TMDB API Key"</label>
                <div class="input-with-button">
                    <input
                        id="tmdb-api-key"
                        type=move || settings.with(SettingsState::api_key_input_type)
                        autocomplete="off"
                        placeholder=key_placeholder
                        prop:value=move || settings.with(|s| s.api_key.clone())
                        on:input=move |ev| settings.update(|s| s.api_key = event_target_value(&ev))
                    />
                    <button
                        class="btn btn-secondary"
                        title="Show or hide the key"
                        on:click=move |_| settings.update(SettingsState::toggle_api_key_visibility)
                    >
                        {move || if settings.with(|s| s.show_api_key) { "Hide" } else { "Show" }}
                    </button>
                </div>
            </div>

            <div class="form-group">
                <label for="media-dir">"Media Directory"</label>
                <div class="input-with-button">
                    <input
                        id="media-dir"
                        type="text"
                        prop:value=move || settings.with(|s| s.media_dir.clone())
                        on:input=move |ev| settings.update(|s| s.media_dir = event_target_value(&ev))
                    />
                    <button class="btn btn-secondary" on:click=move |_| ctx.open_browser()>
                        "Browse"
                    </button>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="mode-select">"Mode"</label>
                    <select
                        id="mode-select"
                        prop:value=move || settings.with(|s| s.mode.as_str())
                        on:change=move |ev| {
                            let mode = ScanMode::parse(&event_target_value(&ev));
                            settings.update(|s| s.mode = mode);
                            ctx.persist_preferences();
                        }
                    >
                        {ScanMode::ALL
                            .iter()
                            .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <label class="checkbox-label">
                    <input
                        id="dry-run"
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.dry_run)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            settings.update(|s| s.dry_run = checked);
                            ctx.persist_preferences();
                        }
                    />
                    "Dry run (preview only)"
                </label>
            </div>

            <div class="button-row">
                <button
                    class="btn btn-secondary"
                    disabled=move || settings.with(|s| s.saving)
                    on:click=move |_| ctx.save_settings()
                >
                    "Save Settings"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || files.with(|f| f.status == ScanStatus::Scanning)
                    on:click=move |_| ctx.scan_files()
                >
                    "Scan Files"
                </button>
            </div>
        </section>
    }
}
