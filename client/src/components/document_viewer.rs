//! Embedded document viewer with height measurement and a render gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The document itself is rendered by the browser: PDFs load directly in a
//! frame, spreadsheets through the Office web viewer. This component decides
//! which frame to show, rebuilds it only when the URI changes, and stores the
//! measured height back into the panel so the viewer is sized consistently.

use leptos::prelude::*;
use overlay::PanelCore;
use overlay::document::{FileType, embed_url};
use overlay::render_gate::RenderGate;

/// The document panel's viewer area.
#[component]
pub fn DocumentViewer() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelCore>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let initial = panel.with_untracked(|p| (p.file_type(), p.current_uri().to_owned()));
    let gate = StoredValue::new(RenderGate::new());
    gate.update_value(|g| {
        g.should_render(&initial.1);
    });
    let rendered = RwSignal::new(initial);

    // Only hand a new document to the frame when the gate accepts its URI.
    Effect::new(move |_| {
        let (file_type, uri) = panel.with(|p| (p.file_type(), p.current_uri().to_owned()));
        if gate.try_update_value(|g| g.should_render(&uri)).unwrap_or(false) {
            rendered.set((file_type, uri));
        }
    });

    // Measure after mount and after every document switch. The core keeps
    // only the first PDF height.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            rendered.track();
            let Some(el) = container_ref.get() else {
                return;
            };
            let scroll_height = crate::util::measure::scroll_height(&el);
            if let Some(height) = panel.try_update(|p| p.apply_measured_height(scroll_height)) {
                log::debug!("viewer height set to {height}");
            }
        });
    }

    let height_style = move || panel.with(|p| format!("height: {};", p.viewer_height()));
    let show_header = move || panel.with(|p| !p.config().disable_header);
    let header_label = move || panel.with(|p| p.config().header_label(p.current_uri()).unwrap_or_default());

    let frame = move || {
        let (file_type, uri) = rendered.get();
        let src = embed_url(file_type, &uri);
        let title = match file_type {
            FileType::Pdf => "PDF document",
            FileType::Xlsx => "Spreadsheet",
        };
        view! { <iframe class="document-viewer__frame" src=src title=title></iframe> }
    };

    view! {
        <div class="document-viewer">
            <Show when=show_header>
                <div class="document-viewer__header">
                    <span class="document-viewer__file-name">{header_label}</span>
                </div>
            </Show>
            <div node_ref=container_ref class="document-viewer__body" style=height_style>
                {frame}
            </div>
        </div>
    }
}
