//! Sticky footer with the document type switch.

use leptos::prelude::*;
use overlay::PanelCore;

use crate::state::panel::log_actions;

/// Footer button that toggles between the PDF and spreadsheet documents.
///
/// Switching clears every overlay card.
#[component]
pub fn FileTypeFooter() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelCore>>();

    let next_label = move || {
        let next = panel.with(|p| p.file_type().toggled());
        format!("Switch to {}", next.as_str().to_uppercase())
    };

    let on_toggle = move |_| {
        panel.update(|p| log_actions(&p.toggle_file_type()));
    };

    view! {
        <footer class="file-type-footer">
            <button class="button-link" on:click=on_toggle>
                {next_label}
            </button>
        </footer>
    }
}
