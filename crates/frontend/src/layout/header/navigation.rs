//! Navigation component - application top bar.
//!
//! Contains the mobile menu toggle and the route links, with the active
//! route highlighted. The menu state belongs to each Navigation instance;
//! selecting an item closes the menu before the router takes over.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("/", "Planos"),
    ("/alunos", "Alunos"),
    ("/turmas", "Turmas"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="nav">
            <div class="nav__bar">
                <button
                    class="nav__menu-toggle"
                    on:click=move |_| set_is_open.update(|open| *open = !*open)
                >
                    {icon("menu")}
                </button>
                <div class="nav__avatar"></div>
            </div>

            // Mobile menu, rendered only while open. Plain anchors: the
            // router intercepts same-origin links for client-side routing.
            <Show when=move || is_open.get()>
                <div class="nav__menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|(path, label)| {
                            let path = *path;
                            view! {
                                <a
                                    href=path
                                    class=move || {
                                        if pathname.get() == path {
                                            "nav__link nav__link--active"
                                        } else {
                                            "nav__link"
                                        }
                                    }
                                    on:click=move |_| set_is_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
