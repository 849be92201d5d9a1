use contracts::system::roles::permissions;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{path, NavigateOptions};
use thaw::Spinner;

use crate::dashboards::d400_analysis::ui::dashboard::AnalysisDashboard;
use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_sale_program::ui::list::SaleProgramList;
use crate::layout::Shell;
use crate::routes::admin_pages::{landing_path, ADMIN_ROOT};
use crate::shared::modal_stack::ModalHost;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::auth::route_tracker::RouteTracker;
use crate::system::pages::error::{ErrorPage, ForbiddenPage, NotFoundPage};
use crate::system::pages::login::LoginPage;
use crate::system::roles::ui::list::RoleList;
use crate::system::users::ui::list::UserList;

/// Everything under `/admin`: the shell, the session tracker and the page.
#[component]
fn AdminLayout() -> impl IntoView {
    view! {
        <RouteTracker />
        <Shell>
            <Outlet />
        </Shell>
    }
}

/// `/admin` itself: waits for the permission set, then opens the first
/// page it allows.
#[component]
fn AdminLanding() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = auth
            .permissions
            .with(|granted| granted.as_deref().map(landing_path));
        if let Some(path) = target {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <div class="page-loading"><Spinner /></div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=ADMIN_ROOT /> } />
                <Route path=path!("/signin") view=LoginPage />
                <Route path=path!("/error") view=ErrorPage />
                <Route path=path!("/forbidden") view=ForbiddenPage />
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=AdminLanding />
                    <Route
                        path=path!("analysis")
                        view=|| view! {
                            <RequirePermission permission=permissions::ANALYSIS>
                                <AnalysisDashboard />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("brands")
                        view=|| view! {
                            <RequirePermission permission=permissions::BRANDS>
                                <BrandList />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("categories")
                        view=|| view! {
                            <RequirePermission permission=permissions::CATEGORIES>
                                <CategoryList />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("products")
                        view=|| view! {
                            <RequirePermission permission=permissions::PRODUCTS>
                                <ProductList />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("orders")
                        view=|| view! {
                            <RequirePermission permission=permissions::ORDERS>
                                <OrderList />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("sale-programs")
                        view=|| view! {
                            <RequirePermission permission=permissions::SALE_PROGRAMS>
                                <SaleProgramList />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("users")
                        view=|| view! {
                            <RequirePermission permission=permissions::USERS>
                                <UserList />
                            </RequirePermission>
                        }
                    />
                    <Route
                        path=path!("roles")
                        view=|| view! {
                            <RequirePermission permission=permissions::ROLES>
                                <RoleList />
                            </RequirePermission>
                        }
                    />
                </ParentRoute>
            </Routes>
            // Inside the router so dialog bodies can navigate
            <ModalHost />
        </Router>
    }
}
