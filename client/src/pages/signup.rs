//! Account creation page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::state::toast::{notify, notify_error, use_toasts};
use crate::state::user::Role;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SignupError {
    #[error("Please make sure your passwords match.")]
    PasswordMismatch,
}

impl SignupForm {
    /// Check the form before calling signup.
    pub(crate) fn validate(&self) -> Result<(), SignupError> {
        if self.password == self.confirm {
            Ok(())
        } else {
            Err(SignupError::PasswordMismatch)
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let form = RwSignal::new(SignupForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        if let Err(e) = values.validate() {
            notify_error(toasts, "Passwords don't match", &e.to_string());
            return;
        }
        busy.set(true);
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.signup(&values.name, &values.email, &values.password, values.role).await;
            notify(toasts, "Account created", "Welcome to CareCompanion!");
            busy.set(false);
        });
    };

    let role_option = move |role: Role, label: &'static str| {
        view! {
            <label class="radio">
                <input
                    type="radio"
                    name="role"
                    value=role.as_str()
                    prop:checked=move || form.get().role == role
                    on:change=move |ev| {
                        if let Some(r) = Role::parse(&event_target_value(&ev)) {
                            form.update(|f| f.role = r);
                        }
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <a href="/" class="auth-page__brand">"♥ CareCompanion"</a>
            <div class="card auth-card">
                <h1>"Create an account"</h1>
                <p class="muted">"Enter your information to create your account"</p>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Full Name"</span>
                        <input
                            class="input"
                            placeholder="John Doe"
                            required
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            class="input"
                            type="email"
                            placeholder="name@example.com"
                            required
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            class="input"
                            type="password"
                            required
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Confirm Password"</span>
                        <input
                            class="input"
                            type="password"
                            required
                            prop:value=move || form.get().confirm
                            on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                        />
                    </label>
                    <fieldset class="form__field">
                        <legend>"I am a:"</legend>
                        {role_option(Role::Family, "Family Member")}
                        {role_option(Role::Caregiver, "Caregiver")}
                    </fieldset>
                    <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
