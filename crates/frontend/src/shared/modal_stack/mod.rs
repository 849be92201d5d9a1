//! Stack of editor dialogs rendered at the application root.
//!
//! Pages push a builder closure; the builder receives a [`ModalHandle`]
//! so the dialog can close itself after a save.

use crate::shared::modal_frame::{ModalFrame, ModalSize};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    size: ModalSize,
    builder: ModalBuilder,
}

#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Opens a dialog with the default width.
    pub fn open<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.open_sized(title, ModalSize::Medium, builder)
    }

    pub fn open_sized<F>(&self, title: impl Into<String>, size: ModalSize, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let entry = ModalEntry {
            id,
            title: title.into(),
            size,
            builder: Arc::new(builder),
        };
        self.stack.update(|s| s.push(entry));

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Removal is deferred to the next tick: closing synchronously from the
    /// click that triggered it would drop the handler mid-dispatch.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn close_top(&self) {
        if let Some(id) = self.stack.with_untracked(|s| s.last().map(|e| e.id)) {
            self.close_deferred(id);
        }
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modals() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not provided")
}

/// Renders the dialog stack. Mounted once, at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modals();

    // Escape closes only the topmost dialog
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if key_event.key() == "Escape" && svc.is_open() {
                    svc.close_top();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <For
            each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(_, entry)| entry.id
            children=move |(depth, entry)| {
                let id = entry.id;
                let handle = ModalHandle { id, svc };
                let body = (entry.builder)(handle);
                view! {
                    <ModalFrame
                        title=entry.title.clone()
                        size=entry.size
                        z_index=1000 + depth as i32
                        on_close=Callback::new(move |_| svc.close_deferred(id))
                    >
                        {body}
                    </ModalFrame>
                }
            }
        />
    }
}
