//! Dashboard overview: status cards, recent activity and today's schedule.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::state::overview::{RECENT_ACTIVITY, STATUS_CARDS, TODAYS_SCHEDULE};
use crate::state::toast::{notify_error, use_toasts};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <Overview/>
        </DashboardShell>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let toasts = use_toasts();
    let on_sos = move |_| notify_error(toasts, "SOS call placed", "Emergency contacts are being notified.");

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Dashboard"</h1>
                <button class="btn btn--destructive" on:click=on_sos>"SOS Call"</button>
            </div>

            <div class="card-grid card-grid--4">
                {STATUS_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="card stat-card">
                                <div class="stat-card__head">
                                    <span>{card.title}</span>
                                    <span aria-hidden="true">{card.icon.glyph()}</span>
                                </div>
                                <div class="stat-card__value" class:text-ok=card.healthy>{card.value}</div>
                                <p class="muted">{card.caption}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="split">
                <div class="card">
                    <h2>"Live Feed"</h2>
                    <p class="muted">"Real-time camera feed from the living room"</p>
                    <div class="feed-placeholder">
                        <p>"Live feed will appear here"</p>
                        <a href="/dashboard/live-feed" class="btn btn--outline">"Connect Camera"</a>
                    </div>
                </div>
                <div class="card">
                    <h2>"Recent Activity"</h2>
                    <p class="muted">"Latest events and notifications"</p>
                    <ul class="activity">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|a| {
                                view! {
                                    <li class=format!("activity__item {}", a.tone.class())>
                                        <p class="activity__title">{a.title}</p>
                                        <p class="muted">{a.detail}</p>
                                        <p class="activity__ago">{a.ago}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="card">
                <h2>"Today's Reminders"</h2>
                <p class="muted">"Scheduled reminders and tasks for today"</p>
                <ul class="schedule">
                    {TODAYS_SCHEDULE
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="schedule__item">
                                    <span aria-hidden="true">{item.icon.glyph()}</span>
                                    <div class="schedule__text">
                                        <p class="schedule__title">{item.title}</p>
                                        <p class="muted">{item.detail}</p>
                                    </div>
                                    <span class="schedule__time">{item.time}</span>
                                    <span class="badge" class:badge--done=item.done>{item.status_label()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
