//! Settings page: account, appearance, devices and alert preferences.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::state::auth::{use_auth, use_auth_state};
use crate::state::settings::{Alert, FontSize, SettingsState, SettingsTab, role_label};
use crate::state::ui::UiState;
use crate::state::user::Role;
use crate::util::dark_mode::{self, ThemeChoice};

#[cfg(feature = "hydrate")]
const SAVE_CONFIRMATION: std::time::Duration = std::time::Duration::from_secs(1);

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <Settings/>
        </DashboardShell>
    }
}

#[component]
fn Settings() -> impl IntoView {
    let auth = use_auth_state();
    let settings = RwSignal::new(SettingsState::for_user(auth.get_untracked().user.as_ref()));
    let tab = RwSignal::new(SettingsTab::Account);

    let on_save = move |_| {
        if !settings.try_update(SettingsState::begin_save).unwrap_or(false) {
            return;
        }
        log::info!("settings saved");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(SAVE_CONFIRMATION).await;
            settings.update(SettingsState::finish_save);
        });
        #[cfg(not(feature = "hydrate"))]
        settings.update(SettingsState::finish_save);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Settings"</h1>
                    <p class="muted">"Manage your account and application preferences"</p>
                </div>
                <button class="btn" disabled=move || settings.get().saving on:click=on_save>
                    {move || if settings.get().saving { "✓ Saved" } else { "Save Changes" }}
                </button>
            </div>

            <div class="tabs" role="tablist">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__trigger"
                                role="tab"
                                class:tabs__trigger--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                SettingsTab::Account => view! { <AccountTab settings=settings/> }.into_any(),
                SettingsTab::Appearance => view! { <AppearanceTab settings=settings/> }.into_any(),
                SettingsTab::Devices => {
                    view! {
                        <div class="card">
                            <h2>"Connected Devices"</h2>
                            <p class="muted">"Manage devices connected to your elderly care system"</p>
                            <p class="muted">"No devices connected yet."</p>
                        </div>
                    }
                        .into_any()
                }
                SettingsTab::Alerts => view! { <AlertsTab settings=settings/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AccountTab(settings: RwSignal<SettingsState>) -> impl IntoView {
    let auth = use_auth();
    let user = use_auth_state();
    let initial = move || user.get().user.map_or_else(|| "U".to_owned(), |u| u.initial());

    let password_field = move |label: &'static str, get: fn(&SettingsState) -> String, set: fn(&mut SettingsState, String)| {
        view! {
            <label class="form__field">
                <span>{label}</span>
                <input
                    class="input"
                    type="password"
                    prop:value=move || settings.with(get)
                    on:input=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="stack">
            <div class="card">
                <h2>"Profile Information"</h2>
                <p class="muted">"Update your account information"</p>
                <div class="profile">
                    <span class="avatar avatar--lg">{initial}</span>
                    <div>
                        <p class="row__title">{move || user.get().user.map(|u| u.name).unwrap_or_default()}</p>
                        <p class="muted">{move || user.get().user.map(|u| u.email).unwrap_or_default()}</p>
                    </div>
                </div>
                <div class="form">
                    <label class="form__field">
                        <span>"Full Name"</span>
                        <input
                            class="input"
                            prop:value=move || settings.get().profile.name
                            on:input=move |ev| settings.update(|s| s.profile.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            class="input"
                            type="email"
                            prop:value=move || settings.get().profile.email
                            on:input=move |ev| settings.update(|s| s.profile.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Role"</span>
                        <select
                            class="input"
                            prop:value=move || settings.get().profile.role.as_str()
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    settings.update(|s| s.profile.role = role);
                                }
                            }
                        >
                            {[Role::Family, Role::Caregiver]
                                .into_iter()
                                .map(|r| view! { <option value=r.as_str()>{role_label(r)}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
            </div>

            <div class="card">
                <h2>"Security"</h2>
                <p class="muted">"Manage your password and security settings"</p>
                <div class="form">
                    {password_field("Current Password", |s| s.profile.current_password.clone(), |s, v| s.profile.current_password = v)}
                    {password_field("New Password", |s| s.profile.new_password.clone(), |s, v| s.profile.new_password = v)}
                    {password_field("Confirm New Password", |s| s.profile.confirm_password.clone(), |s, v| {
                        s.profile.confirm_password = v;
                    })}
                </div>
            </div>

            <div class="card card--danger">
                <h2>"Danger Zone"</h2>
                <p class="muted">"Irreversible account actions"</p>
                <p class="alert alert--destructive">
                    "Deleting your account will remove all your data and cannot be undone."
                </p>
                <div class="toolbar">
                    <button class="btn btn--destructive" disabled>"Delete Account"</button>
                    <button class="btn btn--outline" on:click=move |_| auth.logout()>"Log Out"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AppearanceTab(settings: RwSignal<SettingsState>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let choice = RwSignal::new(dark_mode::current_choice());

    let switch = move |label: &'static str, get: fn(&SettingsState) -> bool, set: fn(&mut SettingsState, bool)| {
        view! {
            <label class="switch">
                <span>{label}</span>
                <input
                    type="checkbox"
                    prop:checked=move || settings.with(get)
                    on:change=move |ev| settings.update(|s| set(s, event_target_checked(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="card">
            <h2>"Theme"</h2>
            <p class="muted">"Customize the appearance of the application"</p>
            <div class="form">
                <span>"Color Theme"</span>
                <div class="card-grid card-grid--3">
                    {ThemeChoice::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    class="theme-option"
                                    class:theme-option--active=move || choice.get() == c
                                    on:click=move |_| {
                                        let dark = dark_mode::choose(c);
                                        choice.set(c);
                                        ui.update(|u| u.dark_mode = dark);
                                    }
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label class="form__field">
                    <span>"Font Size"</span>
                    <select
                        class="input"
                        prop:value=move || settings.get().appearance.font_size.value()
                        on:change=move |ev| {
                            if let Some(size) = FontSize::parse(&event_target_value(&ev)) {
                                settings.update(|s| s.appearance.font_size = size);
                            }
                        }
                    >
                        {FontSize::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                {switch("Reduce Motion", |s| s.appearance.reduce_motion, |s, on| s.appearance.reduce_motion = on)}
                {switch("High Contrast", |s| s.appearance.high_contrast, |s, on| s.appearance.high_contrast = on)}
            </div>
        </div>
    }
}

#[component]
fn AlertsTab(settings: RwSignal<SettingsState>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Alert Preferences"</h2>
            <p class="muted">"Configure how you receive notifications"</p>
            <div class="form">
                {Alert::ALL
                    .into_iter()
                    .map(|alert| {
                        view! {
                            <label class="switch">
                                <span class="switch__text">
                                    <span>{alert.label()}</span>
                                    <span class="muted">{alert.description()}</span>
                                </span>
                                <input
                                    type="checkbox"
                                    prop:checked=move || settings.get().alerts.get(alert)
                                    on:change=move |ev| settings.update(|s| s.alerts.set(alert, event_target_checked(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
