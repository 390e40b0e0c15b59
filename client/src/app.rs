//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, live_feed::LiveFeedPage, login::LoginPage, reminders::RemindersPage,
    settings::SettingsPage, signup::SignupPage, tasks::TasksPage, visitors::VisitorsPage,
};
use crate::state::auth::AuthProvider;
use crate::state::toast::ToastQueue;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastQueue::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(toasts);
    provide_context(ui);

    // Theme preference lives in localStorage, so read it after hydration.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/carecompanion.css"/>
        <Title text="CareCompanion"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("live-feed")) view=LiveFeedPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("reminders")) view=RemindersPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("visitors")) view=VisitorsPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("tasks")) view=TasksPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("settings")) view=SettingsPage/>
                </Routes>
            </Router>
            <ToastHost/>
        </AuthProvider>
    }
}
