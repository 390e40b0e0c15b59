//! Tasks page: search, today/upcoming/all tabs, status toggling, add dialog.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::components::modal::Modal;
use crate::state::tasks::{Priority, Task, TaskDraft, TaskList, TaskStatus, TaskTab};
use crate::state::toast::{notify, notify_error, use_toasts};

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <Tasks/>
        </DashboardShell>
    }
}

#[derive(Clone, Copy)]
struct Section {
    title: &'static str,
    caption: &'static str,
    empty: &'static str,
}

#[component]
fn Tasks() -> impl IntoView {
    let list = RwSignal::new(TaskList::seeded());
    let query = RwSignal::new(String::new());
    let tab = RwSignal::new(TaskTab::Today);
    let adding = RwSignal::new(false);
    let toasts = use_toasts();

    let on_toggle = Callback::new(move |id: u32| {
        list.update(|l| {
            l.toggle(id);
        });
    });
    let on_delete = Callback::new(move |id: u32| {
        list.update(|l| {
            l.remove(id);
        });
    });
    let on_save = Callback::new(move |draft: TaskDraft| match list.try_update(|l| l.add(&draft)) {
        Some(Ok(_)) => {
            adding.set(false);
            notify(toasts, "Task added", &draft.title);
        }
        Some(Err(e)) => notify_error(toasts, "Error", &e.to_string()),
        None => {}
    });

    let section = move |section: Section, rows: Signal<Vec<Task>>| {
        view! {
            <div class="card">
                <h2>{section.title}</h2>
                <p class="muted">{section.caption}</p>
                <Show when=move || !rows.get().is_empty() fallback=move || view! { <p class="empty">{section.empty}</p> }>
                    <ul class="rows">
                        <For
                            each=move || rows.get()
                            key=|t| (t.id, t.status == TaskStatus::Completed)
                            children=move |t| view! { <TaskRow task=t on_toggle=on_toggle on_delete=on_delete/> }
                        />
                    </ul>
                </Show>
            </div>
        }
    };

    let progress = move || {
        let (done, total) = list.with(TaskList::today_progress);
        format!("{done} of {total} completed today")
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Tasks"</h1>
                    <p class="muted">"Manage daily tasks and to-do items with Alexa integration"</p>
                </div>
                <button class="btn" on:click=move |_| adding.set(true)>"+ Add Task"</button>
            </div>

            <div class="search-row">
                <input
                    class="input search"
                    type="search"
                    placeholder="Search tasks..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="muted">{progress}</span>
            </div>

            <div class="tabs" role="tablist">
                {TaskTab::ALL
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
                TaskTab::Today => section(
                    Section { title: "Today's Tasks", caption: "Tasks scheduled for today", empty: "No tasks for today" },
                    Signal::derive(move || list.with(|l| l.due_today(&query.get()))),
                )
                    .into_any(),
                TaskTab::Upcoming => section(
                    Section {
                        title: "Upcoming Tasks",
                        caption: "Tasks scheduled for the future",
                        empty: "No upcoming tasks",
                    },
                    Signal::derive(move || list.with(|l| l.upcoming(&query.get()))),
                )
                    .into_any(),
                TaskTab::All => view! {
                    <div class="stack">
                        {section(
                            Section {
                                title: "Pending Tasks",
                                caption: "Tasks that need to be completed",
                                empty: "No pending tasks",
                            },
                            Signal::derive(move || list.with(|l| l.with_status(TaskStatus::Pending, &query.get()))),
                        )}
                        {section(
                            Section {
                                title: "Completed Tasks",
                                caption: "Tasks that have been completed",
                                empty: "No completed tasks",
                            },
                            Signal::derive(move || list.with(|l| l.with_status(TaskStatus::Completed, &query.get()))),
                        )}
                    </div>
                }
                    .into_any(),
            }}

            <Show when=move || adding.get()>
                <AddTaskDialog on_save=on_save on_close=Callback::new(move |()| adding.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn TaskRow(task: Task, on_toggle: Callback<u32>, on_delete: Callback<u32>) -> impl IntoView {
    let id = task.id;
    let done = task.status == TaskStatus::Completed;
    view! {
        <li class="row" class:row--done=done>
            <input type="checkbox" class="row__check" prop:checked=done on:change=move |_| on_toggle.run(id)/>
            <div class="row__text">
                <p class="row__title">{task.title}</p>
                <p class="muted">{task.description}</p>
                <p class="row__meta">
                    {format!("{} · {}", task.due_date, task.due_time)}
                    <span class=format!("badge badge--{}", task.priority.value())>{task.priority.label()}</span>
                    {task.alexa.then_some(view! { <span class="badge badge--accent">"Alexa"</span> })}
                </p>
            </div>
            <button class="btn btn--ghost btn--icon" title="Delete" on:click=move |_| on_delete.run(id)>
                "🗑"
            </button>
        </li>
    }
}

#[component]
fn AddTaskDialog(on_save: Callback<TaskDraft>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::default());

    view! {
        <Modal title="Add New Task" description="Create a new task that can be announced by Alexa." on_close=on_close>
            <form
                class="form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_save.run(draft.get_untracked());
                }
            >
                <label class="form__field">
                    <span>"Task Title"</span>
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
                        placeholder="Add details about this task"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form__row">
                    <label class="form__field">
                        <span>"Priority"</span>
                        <select
                            class="input"
                            prop:value=move || draft.get().priority.value()
                            on:change=move |ev| {
                                if let Some(p) = Priority::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.priority = p);
                                }
                            }
                        >
                            {Priority::ALL
                                .into_iter()
                                .map(|p| view! { <option value=p.value()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form__field">
                        <span>"Status"</span>
                        <select
                            class="input"
                            on:change=move |ev| {
                                if let Some(s) = TaskStatus::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.status = s);
                                }
                            }
                        >
                            <option value="pending">"Pending"</option>
                            <option value="completed">"Completed"</option>
                        </select>
                    </label>
                </div>
                <div class="form__row">
                    <label class="form__field">
                        <span>"Due Date"</span>
                        <input
                            class="input"
                            type="date"
                            prop:value=move || draft.get().due_date
                            on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Due Time"</span>
                        <input
                            class="input"
                            type="time"
                            prop:value=move || draft.get().due_time
                            on:input=move |ev| draft.update(|d| d.due_time = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().alexa
                        on:change=move |ev| draft.update(|d| d.alexa = event_target_checked(&ev))
                    />
                    "Alexa Integration"
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--outline" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn" type="submit">"Add Task"</button>
                </div>
            </form>
        </Modal>
    }
}
