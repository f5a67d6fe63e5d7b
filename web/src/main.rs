use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use shared::route::{ADMIN_ROOT, AdminRoute};

mod components;
mod logging;
mod pages;

fn main() {
    logging::init();
    tracing::info!("mounting admin panel at {}", ADMIN_ROOT);
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <NavigationShell />
            <main>
                <Routes fallback=|| view! { <div class="container"><h1>"Page not found"</h1></div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=ADMIN_ROOT /> } />
                    <Route path=path!("/admin") view=|| view! { <pages::AdminPage route=AdminRoute::Dashboard /> } />
                    <Route path=path!("/admin/") view=|| view! { <pages::AdminPage route=AdminRoute::Dashboard /> } />
                    <Route path=path!("/admin/analytics") view=|| view! { <pages::AdminPage route=AdminRoute::Analytics /> } />
                    <Route path=path!("/admin/game-mode") view=|| view! { <pages::AdminPage route=AdminRoute::GameMode /> } />
                    <Route path=path!("/admin/users") view=|| view! { <pages::AdminPage route=AdminRoute::Users /> } />
                    <Route path=path!("/admin/settings") view=|| view! { <pages::AdminPage route=AdminRoute::Settings /> } />
                    <Route path=path!("/admin/deposit-requests") view=|| view! { <pages::AdminPage route=AdminRoute::DepositRequests /> } />
                    <Route path=path!("/admin/withdrawal-requests") view=|| view! { <pages::AdminPage route=AdminRoute::WithdrawalRequests /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Feeds the router's location into the navigation, which must sit inside `<Router>`
#[component]
fn NavigationShell() -> impl IntoView {
    let location = use_location();
    view! { <components::AdminNavigation pathname=location.pathname /> }
}
