//! Gate for protected routes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth_state;
use crate::util::auth::{GuardState, install_unauth_redirect};

/// Renders `children` only for a signed-in user. While the session is still
/// loading a placeholder is shown; once it settles without a user the viewer
/// is sent to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_state();
    install_unauth_redirect(auth, use_navigate());

    let guard = Memo::new(move |_| GuardState::from(&auth.get()));

    view! {
        <Show
            when=move || guard.get() == GuardState::Authorized
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>
                            {move || {
                                if guard.get() == GuardState::Pending { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
