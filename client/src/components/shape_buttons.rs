//! Palette of buttons that add a new overlay card.

use leptos::prelude::*;
use overlay::PanelCore;
use overlay::shape::ShapeKind;

/// One button per shape kind; each click appends a default card.
#[component]
pub fn ShapeButtons() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelCore>>();

    let buttons = ShapeKind::ALL
        .into_iter()
        .map(|kind| {
            let on_click = move |_| {
                panel.update(|p| {
                    let id = p.add_shape(kind);
                    #[cfg(feature = "hydrate")]
                    {
                        log::debug!("panel added {kind} card {id}");
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = id;
                    }
                });
            };
            view! {
                <button class=format!("shape-button shape-button--{}", kind.as_str()) on:click=on_click>
                    {kind.as_str()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="button-shape-container">{buttons}</div> }
}
