//! Toast-style notices.
//!
//! Same shape as the modal stack: a context-provided service owning a
//! signal of entries, plus a host component mounted once at the root.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiError;
use crate::shared::config::NOTICE_TIMEOUT_MS;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    id: u64,
    kind: NoticeKind,
    text: String,
}

#[derive(Clone, Copy)]
pub struct NoticeService {
    items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Notice {
                id,
                kind,
                text: text.into(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text);
    }

    /// Logs a failed call and tells the user what failed.
    pub fn api_error(&self, action: &str, err: &ApiError) {
        log::error!("{}: {}", action, err);
        self.error(format!("{}: {}", action, err));
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>()
        .expect("NoticeService not provided in context (provide it in app root)")
}

/// Renders active notices. Must be mounted exactly once.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_notices();

    view! {
        <div class="notice-host">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class={notice.kind.class()} role="status">
                            <span class="notice__text">{notice.text}</span>
                            <button class="notice__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
