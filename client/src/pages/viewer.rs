//! Viewer page: the document panel with its overlay cards.
//!
//! ARCHITECTURE
//! ============
//! The document sits in the right panel; the left panel hosts one
//! `OverlayCard` per panel card and the shape palette. Cards are keyed by id,
//! so removing one never re-creates the others.

use leptos::prelude::*;
use overlay::PanelCore;
use overlay::card::CardId;

use crate::components::document_viewer::DocumentViewer;
use crate::components::file_type_footer::FileTypeFooter;
use crate::components::overlay_card::OverlayCard;
use crate::components::shape_buttons::ShapeButtons;

/// Card ids in list order.
fn card_ids(panel: &PanelCore) -> Vec<CardId> {
    panel.cards().iter().map(|c| c.id).collect()
}

/// The single page of the app.
#[component]
pub fn ViewerPage() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelCore>>();

    view! {
        <div class="pdf-viewer-with-draggable">
            <div class="right-panel">
                <DocumentViewer/>
            </div>
            <div class="left-panel">
                <div class="shapes-container">
                    <For each=move || panel.with(card_ids) key=|id| *id let:id>
                        <OverlayCard id=id/>
                    </For>
                </div>
                <ShapeButtons/>
            </div>
        </div>
        <FileTypeFooter/>
    }
}
