//! Authenticated page chrome: collapsible sidebar, header and user menu.

#[cfg(test)]
#[path = "main_layout_test.rs"]
mod main_layout_test;

#[cfg(feature = "csr")]
use gradnote::Navigator as _;
use gradnote::AuthState;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::notice::NoticeBanner;
use crate::state::ui::UiState;

/// One sidebar entry. Groups carry `children` and no route of their own.
pub struct MenuItem {
    pub label: &'static str,
    pub path: Option<&'static str>,
    pub children: &'static [MenuItem],
}

const fn link(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem { label, path: Some(path), children: &[] }
}

const fn group(label: &'static str, children: &'static [MenuItem]) -> MenuItem {
    MenuItem { label, path: None, children }
}

pub const MENU: &[MenuItem] = &[
    link("Dashboard", "/"),
    group(
        "Mistakes",
        &[link("Mistake list", "/questions"), link("Submit mistake", "/questions/new")],
    ),
    group(
        "Knowledge",
        &[link("Knowledge points", "/knowledge"), link("My marks", "/knowledge/user-marks")],
    ),
    link("Settings", "/settings"),
];

pub const PROFILE_PATH: &str = "/profile";

/// Brand text for the sidebar header.
fn brand(collapsed: bool) -> &'static str {
    if collapsed { "GN" } else { "GradNote" }
}

/// Whether `item` or one of its children is the current route.
fn is_active(item: &MenuItem, pathname: &str) -> bool {
    item.path.is_some_and(|path| path == pathname) || item.children.iter().any(|child| is_active(child, pathname))
}

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let user_menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        user_menu_open.set(false);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::browser::api_client();
            let dispatch = crate::state::auth::SignalDispatch(auth);
            if let Err(e) = gradnote::session::logout(&client, &dispatch).await {
                log::warn!("logout: {e}");
            }
            crate::net::browser::BrowserNavigator.redirect(gradnote::LOGIN_ROUTE);
        });
    };

    let menu_entry = move |item: &'static MenuItem| {
        let label = match item.path {
            Some(path) => view! { <a class="sidebar__link" href=path>{item.label}</a> }.into_any(),
            None => view! { <span class="sidebar__group">{item.label}</span> }.into_any(),
        };
        view! {
            <li class="sidebar__item" class:sidebar__item--active=move || is_active(item, &pathname.get())>
                {label}
                <Show when=move || !item.children.is_empty() && !ui.get().sidebar_collapsed>
                    <ul class="sidebar__children">
                        {item
                            .children
                            .iter()
                            .map(|child| {
                                let path = child.path.unwrap_or(gradnote::HOME_ROUTE);
                                view! {
                                    <li>
                                        <a
                                            class="sidebar__link sidebar__link--child"
                                            class:sidebar__link--active=move || pathname.get() == path
                                            href=path
                                        >
                                            {child.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </li>
        }
    };

    view! {
        <div class="layout" class:layout--collapsed=move || ui.get().sidebar_collapsed>
            <aside class="sidebar">
                <h1 class="sidebar__brand">{move || brand(ui.get().sidebar_collapsed)}</h1>
                <ul class="sidebar__menu">{MENU.iter().map(menu_entry).collect_view()}</ul>
            </aside>
            <div class="layout__main">
                <header class="layout__header">
                    <button
                        class="layout__toggle"
                        title="Toggle menu"
                        on:click=move |_| ui.update(UiState::toggle_sidebar)
                    >
                        {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                    </button>
                    <div class="user-menu">
                        <button
                            class="user-menu__trigger"
                            on:click=move |_| user_menu_open.update(|open| *open = !*open)
                        >
                            <span class="user-menu__avatar" aria-hidden="true"></span>
                            <span class="user-menu__name">{move || auth.get().display_name().to_owned()}</span>
                        </button>
                        <Show when=move || user_menu_open.get()>
                            <ul class="user-menu__list">
                                <li>
                                    <a href=PROFILE_PATH on:click=move |_| user_menu_open.set(false)>
                                        "Profile"
                                    </a>
                                </li>
                                <li>
                                    <button on:click=on_logout>"Log out"</button>
                                </li>
                            </ul>
                        </Show>
                    </div>
                </header>
                <NoticeBanner/>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
