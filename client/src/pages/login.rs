//! Login page for the allow-listed demo account.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::{AuthError, use_auth};
use crate::state::toast::{ToastVariant, use_toasts};
use crate::state::user::User;

/// Toast `(variant, title, description)` for a finished login attempt.
pub(crate) fn login_toast(outcome: &Result<User, AuthError>) -> (ToastVariant, &'static str, String) {
    match outcome {
        Ok(user) => (ToastVariant::Default, "Login successful", format!("Welcome back, {}!", user.name)),
        Err(_) => (ToastVariant::Destructive, "Login failed", "Invalid email or password".to_owned()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let auth = auth.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = auth.login(&email_value, &password_value).await;
            let (variant, title, description) = login_toast(&outcome);
            toasts.update(|q| {
                q.push(title, description, variant);
            });
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="auth-page__brand">"♥ CareCompanion"</a>
            <div class="card auth-card">
                <h1>"Welcome back"</h1>
                <p class="muted">"Enter your credentials to access your account"</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            class="input"
                            type="email"
                            placeholder="name@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            class="input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
