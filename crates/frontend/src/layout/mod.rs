pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;

/// UI state of the admin shell.
#[derive(Clone, Copy)]
pub struct LayoutState {
    pub sidebar_open: RwSignal<bool>,
}

impl LayoutState {
    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

/// Admin shell:
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |      children      |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let state = LayoutState {
        sidebar_open: RwSignal::new(true),
    };
    provide_context(state);

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:hidden=move || !state.sidebar_open.get()>
                    <Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
