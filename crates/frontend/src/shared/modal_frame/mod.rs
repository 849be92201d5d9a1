use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn class(self) -> &'static str {
        match self {
            ModalSize::Small => "modal modal--sm",
            ModalSize::Medium => "modal",
            ModalSize::Large => "modal modal--lg",
        }
    }
}

/// Overlay plus dialog surface with a title bar.
#[component]
pub fn ModalFrame(
    #[prop(into)]
    title: String,
    #[prop(optional)]
    size: ModalSize,
    #[prop(optional)]
    z_index: Option<i32>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_target = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    // Press and release must both land on the overlay; a text selection
    // dragged out of the dialog must not close it.
    let on_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(is_overlay_target(&ev));
    };
    let on_overlay_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get_untracked() && is_overlay_target(&ev);
        pressed_on_overlay.set(false);
        if close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=on_mouse_down
            on:click=on_overlay_click
        >
            <div class=size.class() on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
