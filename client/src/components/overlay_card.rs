//! Draggable, resizable, editable shape overlay.
//!
//! ARCHITECTURE
//! ============
//! The card owns no state of its own. Geometry, text and shape live in the
//! `PanelCore` card with the same id; pointer and input events are forwarded
//! to the core and the view re-reads the card on every change. Pointer capture
//! is taken on the card root so moves keep arriving while the pointer is
//! outside the card.

use leptos::prelude::*;
use overlay::PanelCore;
use overlay::card::CardId;
use overlay::input::{CardPart, ResizeAnchor};

use crate::state::panel::{log_actions, log_rejected};
#[cfg(feature = "hydrate")]
use crate::util::pointer::{CARD_CONTROL_SELECTOR, pointer_event_hits_control, pointer_point};

/// One overlay card, rendered from the panel card with `id`.
#[component]
pub fn OverlayCard(id: CardId) -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelCore>>();
    let card_ref = NodeRef::<leptos::html::Div>::new();

    let box_style = move || panel.with(|p| p.card(id).map(|c| c.box_style()).unwrap_or_default());
    let clip_style = move || panel.with(|p| p.card(id).map_or("", |c| c.kind.clip_style()));
    let kind_name = move || panel.with(|p| p.card(id).map_or("square", |c| c.kind.as_str()));
    let text = move || panel.with(|p| p.card(id).map(|c| c.text.clone()).unwrap_or_default());
    let dragging = move || panel.with(|p| p.card(id).is_some_and(|c| c.dragging));
    let selected = move || panel.with(|p| p.selected_card().is_some_and(|c| c.id == id));
    let gesture_active = move || panel.with_untracked(|p| p.input().target() == Some(id));

    let start_gesture = move |ev: leptos::ev::PointerEvent, part: CardPart| {
        #[cfg(feature = "hydrate")]
        {
            if part == CardPart::Body && pointer_event_hits_control(&ev, CARD_CONTROL_SELECTOR) {
                // Controls keep their own pointer handling; the card is still selected.
                panel.update(|p| match p.select_card(id) {
                    Ok(actions) => log_actions(&actions),
                    Err(err) => log_rejected("select", &err),
                });
                return;
            }
            ev.stop_propagation();
            ev.prevent_default();
            if let Some(el) = card_ref.get_untracked() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
            let point = pointer_point(&ev);
            panel.update(|p| match p.on_pointer_down(id, part, point) {
                Ok(actions) => log_actions(&actions),
                Err(err) => log_rejected("pointer down", &err),
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, part, card_ref);
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !gesture_active() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let point = pointer_point(&ev);
            panel.update(|p| log_actions(&p.on_pointer_move(point)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        if !gesture_active() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = card_ref.get_untracked() {
                let _ = el.release_pointer_capture(ev.pointer_id());
            }
            let point = pointer_point(&ev);
            panel.update(|p| log_actions(&p.on_pointer_up(point)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_cancel = move |_| {
        if gesture_active() {
            panel.update(|p| log_actions(&p.cancel_gesture()));
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        panel.update(|p| {
            if let Err(err) = p.set_text(id, value) {
                log_rejected("set text", &err);
            }
        });
    };

    let on_cycle_shape = move |_| {
        panel.update(|p| {
            let Some(next) = p.card(id).map(|c| c.kind.next()) else {
                return;
            };
            if let Err(err) = p.change_shape(id, next) {
                log_rejected("change shape", &err);
            }
        });
    };

    let on_remove = move |_| {
        panel.update(|p| {
            if let Err(err) = p.remove_card(id) {
                log_rejected("remove", &err);
            }
        });
    };

    let handles = ResizeAnchor::ALL
        .into_iter()
        .map(|anchor| {
            let class = format!("overlay-card__handle overlay-card__handle--{}", anchor.as_str());
            view! {
                <div
                    class=class
                    on:pointerdown=move |ev| start_gesture(ev, CardPart::Handle(anchor))
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="draggable-container">
            <div
                node_ref=card_ref
                class=move || format!("overlay-card overlay-card--{}", kind_name())
                class:overlay-card--dragging=dragging
                class:overlay-card--selected=selected
                style=box_style
                on:pointerdown=move |ev| start_gesture(ev, CardPart::Body)
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                <textarea
                    class="overlay-card__text"
                    style=clip_style
                    prop:value=text
                    on:input=on_input
                ></textarea>
                <div class="overlay-card__actions">
                    <button class="overlay-card__shape" title="Change shape" on:click=on_cycle_shape>
                        {kind_name}
                    </button>
                    <button class="overlay-card__remove" title="Remove" on:click=on_remove>
                        "\u{00D7}"
                    </button>
                </div>
                {handles}
            </div>
        </div>
    }
}
