//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastVariant, use_toasts};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn ToastHost() -> impl IntoView {
    let queue = use_toasts();

    // Schedule a dismissal for each newly pushed toast.
    #[cfg(feature = "hydrate")]
    {
        let scheduled = StoredValue::new(0_u64);
        Effect::new(move || {
            let newest = queue.with(|q| q.toasts().last().map(|t| t.id));
            let Some(id) = newest else {
                return;
            };
            if id <= scheduled.get_value() {
                return;
            }
            scheduled.set_value(id);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(AUTO_DISMISS).await;
                queue.update(|q| {
                    q.dismiss(id);
                });
            });
        });
    }

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| {
                                    queue.update(|q| {
                                        q.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
