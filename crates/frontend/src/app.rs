use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notice::{NoticeHost, NoticeService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ModalStackService::new());
    provide_context(NoticeService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <NoticeHost />
        </AuthProvider>
    }
}
