use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::drawer::{DrawerEvent, DrawerState};
use shared::model::render;
use shared::nav_link::NavLink;
use shared::navigator::follow_drawer_link;

use crate::components::{CloseIcon, MenuIcon};

/// Top bar plus slide-out drawer.
///
/// `pathname` comes from the router; the component never reads the location
/// itself. Everything shown is derived from a single [`render`] of the
/// pathname and drawer state.
#[component]
pub fn AdminNavigation(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    let drawer = RwSignal::new(DrawerState::default());
    let navigate = StoredValue::new_local(use_navigate());
    let nav = Memo::new(move |_| render(&pathname.get(), drawer.get()));

    let transition = move |event: DrawerEvent| drawer.update(|state| *state = state.apply(event));

    let follow = move |link: NavLink| {
        navigate.with_value(|navigate| {
            let navigator = |path: &str| navigate(path, NavigateOptions::default());
            drawer.set(follow_drawer_link(drawer.get_untracked(), &link, &navigator));
        })
    };

    let brand = nav.with_untracked(|view| view.brand);

    view! {
        <header class="admin-nav">
            <nav class="top-bar">
                <Show when=move || nav.with(|view| view.hamburger_visible)>
                    <button
                        class="hamburger"
                        aria-label="Open menu"
                        on:click=move |_| transition(DrawerEvent::HamburgerActivated)
                    >
                        <MenuIcon />
                    </button>
                </Show>
                <A href=brand.path attr:class="brand">{brand.label}</A>
                <div class="mode-links">
                    {move || {
                        nav.get()
                            .mode_links
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <A href=entry.link.path attr:class=entry.class()>
                                        {entry.link.label}
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </nav>

            {move || {
                nav.get()
                    .drawer
                    .map(|entries| {
                        view! {
                            <div
                                class="drawer-backdrop"
                                on:click=move |_| transition(DrawerEvent::Backdrop)
                            >
                                <aside class="drawer-panel" on:click=|ev| ev.stop_propagation()>
                                    <button
                                        class="drawer-close"
                                        aria-label="Close menu"
                                        on:click=move |_| transition(DrawerEvent::CloseButton)
                                    >
                                        <CloseIcon />
                                    </button>
                                    <ul class="drawer-links">
                                        {entries
                                            .into_iter()
                                            .map(|entry| {
                                                let link = entry.link;
                                                view! {
                                                    <li>
                                                        <a
                                                            href=link.path
                                                            class=entry.class()
                                                            on:click=move |ev| {
                                                                ev.prevent_default();
                                                                follow(link);
                                                            }
                                                        >
                                                            {link.label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </aside>
                            </div>
                        }
                    })
            }}
        </header>
    }
}
