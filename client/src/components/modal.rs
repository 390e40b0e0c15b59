//! Dialog frame shared by the add/schedule forms.

use leptos::prelude::*;

/// Backdrop plus card. Clicking the backdrop or pressing Escape closes it.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 class="dialog__title">{title}</h2>
                {(!description.is_empty()).then(|| view! { <p class="dialog__description">{description.clone()}</p> })}
                {children()}
            </div>
        </div>
    }
}
