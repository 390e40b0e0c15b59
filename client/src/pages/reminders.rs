//! Reminders page: search, today/upcoming/completed tabs, add dialog.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::modal::Modal;
use crate::state::reminders::{Frequency, Reminder, ReminderBook, ReminderDraft, ReminderTab};
use crate::state::toast::{notify, notify_error, use_toasts};

#[component]
pub fn RemindersPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <Reminders/>
        </DashboardShell>
    }
}

fn tab_copy(tab: ReminderTab) -> (&'static str, &'static str, &'static str) {
    match tab {
        ReminderTab::Today => ("Today's Reminders", "Scheduled reminders for today", "No reminders for today"),
        ReminderTab::Upcoming => ("Upcoming Reminders", "Scheduled reminders for the future", "No upcoming reminders"),
        ReminderTab::Completed => (
            "Completed Reminders",
            "Reminders that have been marked as completed",
            "No completed reminders",
        ),
    }
}

#[component]
fn Reminders() -> impl IntoView {
    let book = RwSignal::new(ReminderBook::seeded());
    let query = RwSignal::new(String::new());
    let tab = RwSignal::new(ReminderTab::Today);
    let adding = RwSignal::new(false);
    let toasts = use_toasts();

    let visible = Memo::new(move |_| book.with(|b| b.tab(tab.get(), &query.get())));

    let on_complete = Callback::new(move |id: u32| {
        book.update(|b| {
            b.complete(id);
        });
    });
    let on_delete = Callback::new(move |id: u32| {
        book.update(|b| {
            b.remove(id);
        });
    });
    let on_save = Callback::new(move |draft: ReminderDraft| {
        let result = book.try_update(|b| b.add(&draft));
        match result {
            Some(Ok(_)) => {
                adding.set(false);
                notify(toasts, "Reminder added", &draft.title);
            }
            Some(Err(e)) => notify_error(toasts, "Error", &e.to_string()),
            None => {}
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Reminders"</h1>
                    <p class="muted">"Manage medication and task reminders with Alexa integration"</p>
                </div>
                <button class="btn" on:click=move |_| adding.set(true)>"+ Add Reminder"</button>
            </div>

            <input
                class="input search"
                type="search"
                placeholder="Search reminders..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="tabs" role="tablist">
                {ReminderTab::ALL
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

            <div class="card">
                <h2>{move || tab_copy(tab.get()).0}</h2>
                <p class="muted">{move || tab_copy(tab.get()).1}</p>
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=move || view! { <p class="empty">{tab_copy(tab.get()).2}</p> }
                >
                    <ul class="rows">
                        <For
                            each=move || visible.get()
                            key=|r| (r.id, r.completed)
                            children=move |r| view! { <ReminderRow reminder=r on_complete=on_complete on_delete=on_delete/> }
                        />
                    </ul>
                </Show>
            </div>

            <Show when=move || adding.get()>
                <AddReminderDialog on_save=on_save on_close=Callback::new(move |()| adding.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn ReminderRow(reminder: Reminder, on_complete: Callback<u32>, on_delete: Callback<u32>) -> impl IntoView {
    let id = reminder.id;
    let when = match &reminder.date {
        Some(date) => format!("{date} · {}", reminder.time),
        None => reminder.time.clone(),
    };
    view! {
        <li class="row" class:row--done=reminder.completed>
            <div class="row__text">
                <p class="row__title">{reminder.title}</p>
                <p class="muted">{reminder.description}</p>
                <p class="row__meta">
                    {when}
                    <span class="badge">{reminder.frequency.label()}</span>
                    {reminder.alexa.then_some(view! { <span class="badge badge--accent">"Alexa"</span> })}
                </p>
            </div>
            <div class="row__actions">
                {(!reminder.completed)
                    .then_some(view! {
                        <button class="btn btn--outline btn--icon" title="Mark complete" on:click=move |_| on_complete.run(id)>
                            "✓"
                        </button>
                    })}
                <button class="btn btn--ghost btn--icon" title="Delete" on:click=move |_| on_delete.run(id)>
                    "🗑"
                </button>
            </div>
        </li>
    }
}

#[component]
fn AddReminderDialog(on_save: Callback<ReminderDraft>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(ReminderDraft::default());

    view! {
        <Modal title="Add New Reminder" description="Create a new reminder that can be announced by Alexa." on_close=on_close>
            <form
                class="form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_save.run(draft.get_untracked());
                }
            >
                <label class="form__field">
                    <span>"Reminder Title"</span>
                    <input
                        class="input"
                        placeholder="e.g., Take Medication"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Description"</span>
                    <textarea
                        class="input"
                        placeholder="Add details about this reminder"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form__row">
                    <label class="form__field">
                        <span>"Time"</span>
                        <input
                            class="input"
                            type="time"
                            prop:value=move || draft.get().time
                            on:input=move |ev| draft.update(|d| d.time = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Frequency"</span>
                        <select
                            class="input"
                            prop:value=move || draft.get().frequency.value()
                            on:change=move |ev| {
                                if let Some(f) = Frequency::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.frequency = f);
                                }
                            }
                        >
                            {Frequency::ALL
                                .into_iter()
                                .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <label class="form__field">
                    <span>"Date"</span>
                    <input
                        class="input"
                        type="date"
                        prop:value=move || draft.get().date
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                    />
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().alexa
                        on:change=move |ev| draft.update(|d| d.alexa = event_target_checked(&ev))
                    />
                    "Announce with Alexa"
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--outline" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn" type="submit">"Add Reminder"</button>
                </div>
            </form>
        </Modal>
    }
}
