//! Visitors page: known visitors, unknown detections, upcoming visits.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::modal::Modal;
use crate::state::form::FormError;
use crate::state::toast::{notify, notify_error, use_toasts};
use crate::state::visitors::{
    RELATIONSHIPS, UnknownStatus, VisitorBook, VisitorDraft, VisitorOutcome, VisitorTab,
};

#[component]
pub fn VisitorsPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <Visitors/>
        </DashboardShell>
    }
}

/// Which dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogMode {
    Add,
    Schedule,
}

#[component]
fn Visitors() -> impl IntoView {
    let book = RwSignal::new(VisitorBook::seeded());
    let query = RwSignal::new(String::new());
    let tab = RwSignal::new(VisitorTab::Known);
    let dialog = RwSignal::new(None::<DialogMode>);
    let toasts = use_toasts();

    let report = move |result: Option<Result<VisitorOutcome, FormError>>| match result {
        Some(Ok(outcome)) => {
            dialog.set(None);
            notify(toasts, "Success", &outcome.message());
        }
        Some(Err(e)) => notify_error(toasts, "Error", &e.to_string()),
        None => {}
    };
    let on_submit = Callback::new(move |(mode, draft): (DialogMode, VisitorDraft)| {
        let result = book.try_update(|b| match mode {
            DialogMode::Add => b.add_visitor(&draft),
            DialogMode::Schedule => b.schedule_visit(&draft),
        });
        report(result);
    });
    let on_remove_visit = move |id: u32| {
        let removed = book.try_update(|b| b.remove_visit(id)).unwrap_or(false);
        if removed {
            notify(toasts, "Success", "Visit removed from schedule");
        }
    };

    let known = Memo::new(move |_| book.with(|b| b.known(&query.get())));

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Visitors"</h1>
                    <p class="muted">"Manage known visitors and view visitor history"</p>
                </div>
                <div class="toolbar">
                    <input
                        class="input search"
                        type="search"
                        placeholder="Search visitors..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=move |_| dialog.set(Some(DialogMode::Add))>"+ Add Visitor"</button>
                </div>
            </div>

            <div class="tabs" role="tablist">
                {VisitorTab::ALL
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

            <Show when=move || tab.get() == VisitorTab::Known>
                <div class="card">
                    <h2>"Known Visitors"</h2>
                    <p class="muted">"People who have been approved for recognition"</p>
                    <Show when=move || !known.get().is_empty() fallback=|| view! { <p class="empty">"No visitors found"</p> }>
                        <ul class="rows">
                            <For
                                each=move || known.get()
                                key=|v| v.id
                                children=move |v| {
                                    let initial = v.name.chars().next().map(String::from).unwrap_or_default();
                                    view! {
                                        <li class="row">
                                            <span class="avatar">{initial}</span>
                                            <div class="row__text">
                                                <p class="row__title">{v.name}</p>
                                                <p class="row__meta">
                                                    <span class="badge">{v.role}</span>
                                                    {format!("Last visit: {}", v.last_visit)}
                                                </p>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </Show>

            <Show when=move || tab.get() == VisitorTab::Unknown>
                <div class="card">
                    <h2>"Unknown Visitors"</h2>
                    <p class="muted">"Recent unidentified visitors detected by the system"</p>
                    <ul class="rows">
                        {move || {
                            book.with(|b| {
                                b.unknown()
                                    .iter()
                                    .map(|v| {
                                        let delivery = v.status == UnknownStatus::Delivery;
                                        view! {
                                            <li class="row">
                                                <span class="avatar">"?"</span>
                                                <div class="row__text">
                                                    <p class="row__title">
                                                        {if delivery { "Delivery Person" } else { "Unknown Visitor" }}
                                                    </p>
                                                    <p class="row__meta">
                                                        <span class="badge" class:badge--destructive=!delivery>{v.status.label()}</span>
                                                        {format!("Detected: {}", v.timestamp)}
                                                    </p>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </div>
            </Show>

            <Show when=move || tab.get() == VisitorTab::Upcoming>
                <div class="card">
                    <h2>"Upcoming Visits"</h2>
                    <p class="muted">"Scheduled visits for the next 7 days"</p>
                    <ul class="rows">
                        <For
                            each=move || book.with(|b| b.upcoming().to_vec())
                            key=|v| v.id
                            children=move |v| {
                                let id = v.id;
                                view! {
                                    <li class="row">
                                        <div class="row__text">
                                            <p class="row__title">{v.name}</p>
                                            <p class="row__meta">
                                                <span class="badge">{v.role}</span>
                                                {format!("{} at {}", v.date, v.time)}
                                            </p>
                                        </div>
                                        <button class="btn btn--ghost btn--icon" title="Remove visit" on:click=move |_| on_remove_visit(id)>
                                            "🗑"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <button class="btn btn--block" on:click=move |_| dialog.set(Some(DialogMode::Schedule))>
                        "+ Schedule New Visit"
                    </button>
                </div>
            </Show>

            {move || {
                dialog
                    .get()
                    .map(|mode| {
                        view! {
                            <VisitorDialog mode=mode on_submit=on_submit on_close=Callback::new(move |()| dialog.set(None))/>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn VisitorDialog(
    mode: DialogMode,
    on_submit: Callback<(DialogMode, VisitorDraft)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(VisitorDraft::default());
    let scheduling = move || mode == DialogMode::Schedule || draft.get().schedule_visit;

    let (title, description) = match mode {
        DialogMode::Add => ("Add New Visitor", "Add a new trusted visitor and optionally schedule a visit."),
        DialogMode::Schedule => ("Schedule Visit", "Schedule an upcoming visit for a known visitor."),
    };
    let submit_label = move || match mode {
        DialogMode::Schedule => "Schedule Visit",
        DialogMode::Add if draft.get().schedule_visit => "Add & Schedule Visit",
        DialogMode::Add => "Add Visitor",
    };

    view! {
        <Modal title=title description=description on_close=on_close>
            <form
                class="form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run((mode, draft.get_untracked()));
                }
            >
                <label class="form__field">
                    <span>{if mode == DialogMode::Add { "Full Name *" } else { "Visitor Name *" }}</span>
                    <input
                        class="input"
                        placeholder="Enter visitor's name"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>{if mode == DialogMode::Add { "Relationship" } else { "Relationship *" }}</span>
                    <select
                        class="input"
                        prop:value=move || draft.get().role
                        on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                    >
                        <option value="">"Select relationship"</option>
                        {RELATIONSHIPS.iter().map(|r| view! { <option value=*r>{*r}</option> }).collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    <span>"Notes"</span>
                    <textarea
                        class="input"
                        placeholder="Add any additional information"
                        prop:value=move || draft.get().notes
                        on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || mode == DialogMode::Add>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().schedule_visit
                            on:change=move |ev| draft.update(|d| d.schedule_visit = event_target_checked(&ev))
                        />
                        "Schedule an upcoming visit"
                    </label>
                </Show>
                <Show when=scheduling>
                    <div class="form__row">
                        <label class="form__field">
                            <span>"Visit Date *"</span>
                            <input
                                class="input"
                                type="date"
                                prop:value=move || draft.get().date
                                on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            <span>"Visit Time *"</span>
                            <input
                                class="input"
                                type="time"
                                prop:value=move || draft.get().time
                                on:input=move |ev| draft.update(|d| d.time = event_target_value(&ev))
                            />
                        </label>
                    </div>
                </Show>
                <div class="dialog__actions">
                    <button class="btn btn--outline" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn" type="submit">{submit_label}</button>
                </div>
            </form>
        </Modal>
    }
}
