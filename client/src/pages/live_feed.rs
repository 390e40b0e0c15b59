//! Live camera page: room tabs, the embedded stream and its controls.

use leptos::prelude::*;

use crate::components::dashboard_shell::DashboardShell;
use crate::state::live_feed::{FeedControls, LiveFeedState, ROOMS, stream_alt};
use crate::state::toast::{notify_error, use_toasts};

#[component]
pub fn LiveFeedPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <LiveFeed/>
        </DashboardShell>
    }
}

#[component]
fn LiveFeed() -> impl IntoView {
    let feed = RwSignal::new(LiveFeedState::default());
    let toasts = use_toasts();

    let toggle = move |flip: fn(&mut FeedControls)| move |_: leptos::ev::MouseEvent| feed.update(|f| flip(&mut f.controls));

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h1>"Live Feed"</h1>
                    <p class="muted">"Monitor your loved one in real-time through connected cameras"</p>
                </div>
                <div class="toolbar">
                    <button class="btn btn--outline btn--icon" title="Mute" on:click=toggle(|c: &mut FeedControls| c.muted = !c.muted)>
                        {move || if feed.get().controls.muted { "🔇" } else { "🎙" }}
                    </button>
                    <button class="btn btn--outline btn--icon" title="Camera" on:click=toggle(|c: &mut FeedControls| c.camera_on = !c.camera_on)>
                        {move || if feed.get().controls.camera_on { "📷" } else { "🚫" }}
                    </button>
                    <button class="btn btn--outline btn--icon" title="Speaker" on:click=toggle(|c: &mut FeedControls| c.speaker_on = !c.speaker_on)>
                        {move || if feed.get().controls.speaker_on { "🔊" } else { "🔈" }}
                    </button>
                    <button class="btn btn--outline btn--icon" title="Fullscreen" on:click=toggle(|c: &mut FeedControls| c.fullscreen = !c.fullscreen)>
                        "⛶"
                    </button>
                    <button
                        class="btn btn--destructive"
                        on:click=move |_| notify_error(toasts, "SOS call placed", "Emergency contacts are being notified.")
                    >
                        "SOS"
                    </button>
                </div>
            </div>

            <div class="tabs" role="tablist">
                {ROOMS
                    .iter()
                    .map(|room| {
                        let id = room.id;
                        view! {
                            <button
                                class="tabs__trigger"
                                role="tab"
                                class:tabs__trigger--active=move || feed.get().room.id == id
                                on:click=move |_| {
                                    feed.update(|f| {
                                        f.select(id);
                                    });
                                }
                            >
                                {room.name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card feed" class:feed--fullscreen=move || feed.get().controls.fullscreen>
                <div class="feed__frame">
                    {move || {
                        let state = feed.get();
                        match state.stream_src() {
                            Some(src) => view! { <img class="feed__img" src=src alt=stream_alt(&state.room)/> }.into_any(),
                            None => {
                                view! {
                                    <div class="feed__off">
                                        <p class="muted">"Camera is turned off"</p>
                                        <button
                                            class="btn btn--outline"
                                            on:click=move |_| feed.update(|f| f.controls.camera_on = true)
                                        >
                                            "Turn On Camera"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    }}
                    <div class="feed__live">
                        <span class="dot dot--ok"></span>
                        "Live"
                    </div>
                </div>
            </div>

            <div class="card-grid card-grid--3">
                <div class="card">
                    <h3>"Status"</h3>
                    <p class="text-ok">"Normal Activity"</p>
                    <p class="muted">"Last updated: 2 minutes ago"</p>
                </div>
                <div class="card">
                    <h3>"Emotion Analysis"</h3>
                    <p>"Calm"</p>
                    <p class="muted">"No signs of distress detected"</p>
                </div>
                <div class="card">
                    <h3>"Fall Detection"</h3>
                    <p class="text-ok">"No Falls Detected"</p>
                    <p class="muted">"System monitoring movement"</p>
                </div>
            </div>

            <div class="card">
                <h2>"Recent Alerts"</h2>
                <p class="muted">"Notifications from this camera in the past 24 hours"</p>
                <ul class="activity">
                    <li class="activity__item tone-destructive">
                        <p class="activity__title">"Unknown Visitor"</p>
                        <p class="muted">"Delivery person detected at entrance"</p>
                        <p class="activity__ago">"3 hours ago"</p>
                    </li>
                    <li class="activity__item tone-primary">
                        <p class="activity__title">"Motion Detected"</p>
                        <p class="muted">"Movement in the living room"</p>
                        <p class="activity__ago">"5 hours ago"</p>
                    </li>
                </ul>
            </div>
        </div>
    }
}
