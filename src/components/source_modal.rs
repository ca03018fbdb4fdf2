//! Modal listing the source documents behind a bot reply.

use leptos::prelude::*;

use crate::bindings::{Payload, Trigger, backdrop_trigger};
use crate::state::widget::WidgetState;

/// Document cards over a backdrop. Clicks on the backdrop itself close the
/// modal; clicks inside the card area do not.
#[component]
pub fn SourceModal(dispatch: Callback<(Trigger, Payload)>) -> impl IntoView {
    let widget = expect_context::<RwSignal<WidgetState>>();

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let on_surface = ev.target() == ev.current_target();
        if let Some(trigger) = backdrop_trigger(on_surface) {
            dispatch.run((trigger, Payload::None));
        }
    };
    let on_close_click = move |_| dispatch.run((Trigger::ModalCloseClick, Payload::None));

    view! {
        <div
            class="context-modal"
            style:display=move || if widget.with(WidgetState::is_modal_open) { "block" } else { "none" }
            on:click=on_backdrop
        >
            <div class="context-modal__content">
                <div class="context-modal__header">
                    <h3>"Source Documents"</h3>
                    <button class="context-modal__close" on:click=on_close_click title="Close sources">
                        "✕"
                    </button>
                </div>
                <div class="context-modal__body">
                    {move || {
                        widget
                            .with(|w| w.modal.cards().to_vec())
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <div class="context-doc">
                                        <h4>{card.title}</h4>
                                        <p>{card.body}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
