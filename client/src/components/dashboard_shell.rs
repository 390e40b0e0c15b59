//! Dashboard chrome wrapping every protected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two presentations share one navigation list and one logout callback: a
//! compact header with a slide-in sheet and avatar menu for narrow screens,
//! and a full sidebar for wide ones. CSS decides which is visible. Page
//! content renders only once the route guard reports an authorized session.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::require_auth::RequireAuth;
use crate::state::auth::{use_auth, use_auth_state};
use crate::state::ui::{Overlay, UiState};
use crate::state::user::User;
use crate::util::nav::{NavItem, link_class, nav_items};

const BRAND: &str = "CareCompanion";

#[component]
pub fn DashboardShell(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let logout = Callback::new(move |()| auth.logout());

    view! {
        <RequireAuth>
            <div class="shell">
                <CompactHeader logout=logout/>
                <Sidebar logout=logout/>
                <main class="shell__main">{children()}</main>
            </div>
        </RequireAuth>
    }
}

fn use_nav_items() -> Memo<Vec<NavItem>> {
    let location = use_location();
    Memo::new(move |_| nav_items(&location.pathname.get()))
}

fn current_user() -> Signal<Option<User>> {
    let auth = use_auth_state();
    Signal::derive(move || auth.get().user)
}

#[component]
fn NavLinks(items: Memo<Vec<NavItem>>, #[prop(optional)] on_pick: Option<Callback<()>>) -> impl IntoView {
    view! {
        <nav class="nav-list">
            <For
                each=move || items.get()
                key=|item| (item.entry.path, item.active)
                children=move |item| {
                    view! {
                        <a
                            href=item.entry.path
                            class=link_class(item.active)
                            aria-current=item.active.then_some("page")
                            on:click=move |_| {
                                if let Some(cb) = on_pick {
                                    cb.run(());
                                }
                            }
                        >
                            <span class="nav-link__icon" aria-hidden="true">{item.entry.icon.glyph()}</span>
                            {item.entry.label}
                        </a>
                    }
                }
            />
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <button
            class="btn btn--ghost btn--icon"
            title="Toggle theme"
            on:click=move |_| {
                let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                ui.update(|u| u.dark_mode = next);
            }
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}

#[component]
fn Avatar(user: Signal<Option<User>>) -> impl IntoView {
    view! {
        <span class="avatar">
            {move || user.get().map_or_else(|| "U".to_owned(), |u| u.initial())}
        </span>
    }
}

/// Narrow-screen header: menu sheet trigger, brand, theme, avatar menu.
#[component]
fn CompactHeader(logout: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let items = use_nav_items();
    let user = current_user();
    let close = Callback::new(move |()| ui.update(UiState::close_overlay));

    view! {
        <header class="shell__compact">
            <button
                class="btn btn--ghost btn--icon"
                on:click=move |_| ui.update(|u| u.toggle_overlay(Overlay::NavSheet))
            >
                "☰"
                <span class="sr-only">"Toggle Menu"</span>
            </button>
            <span class="shell__brand">{BRAND}</span>
            <div class="shell__compact-actions">
                <ThemeToggle/>
                <button
                    class="btn btn--ghost btn--icon"
                    on:click=move |_| ui.update(|u| u.toggle_overlay(Overlay::UserMenu))
                >
                    <Avatar user=user/>
                </button>
            </div>
            <Show when=move || ui.get().overlay == Overlay::UserMenu>
                <div class="menu">
                    <button
                        class="menu__item"
                        on:click=move |_| {
                            close.run(());
                            logout.run(());
                        }
                    >
                        "Log out"
                    </button>
                </div>
            </Show>
            <Show when=move || ui.get().overlay == Overlay::NavSheet>
                <div class="sheet-backdrop" on:click=move |_| close.run(())></div>
                <aside class="sheet">
                    <span class="shell__brand">{BRAND}</span>
                    <NavLinks items=items on_pick=close/>
                    <button
                        class="btn btn--ghost btn--block"
                        on:click=move |_| {
                            close.run(());
                            logout.run(());
                        }
                    >
                        "Log out"
                    </button>
                </aside>
            </Show>
        </header>
    }
}

/// Wide-screen sidebar: brand, navigation, user badge, theme, logout.
#[component]
fn Sidebar(logout: Callback<()>) -> impl IntoView {
    let items = use_nav_items();
    let user = current_user();

    view! {
        <aside class="shell__sidebar">
            <span class="shell__brand">{BRAND}</span>
            <NavLinks items=items/>
            <div class="shell__user">
                <div class="user-badge">
                    <Avatar user=user/>
                    <div class="user-badge__text">
                        <p class="user-badge__name">{move || user.get().map(|u| u.name).unwrap_or_default()}</p>
                        <p class="user-badge__role">
                            {move || user.get().map(|u| u.role.as_str()).unwrap_or_default()}
                        </p>
                    </div>
                    <ThemeToggle/>
                </div>
                <button class="btn btn--ghost btn--block" on:click=move |_| logout.run(())>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
