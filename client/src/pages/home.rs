//! Public landing page.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Voice Reminders",
        body: "Alexa-integrated to-do lists and medication reminders that can be managed remotely.",
    },
    Feature {
        title: "AI Monitoring",
        body: "Fall detection and emotion analysis with real-time alerts to caregivers.",
    },
    Feature {
        title: "Live Feed & SOS",
        body: "Real-time video monitoring and emergency SOS system for immediate assistance.",
    },
];

const STEPS: [Feature; 4] = [
    Feature {
        title: "Set Up Your System",
        body: "Connect your cameras and Alexa devices to the CareCompanion platform.",
    },
    Feature {
        title: "Add Known Visitors",
        body: "Upload photos of family members and regular visitors for face recognition.",
    },
    Feature {
        title: "Manage Tasks & Reminders",
        body: "Create voice-activated reminders for medications and daily tasks.",
    },
    Feature {
        title: "Monitor & Receive Alerts",
        body: "Get real-time notifications for falls, unknown visitors, or emotional distress.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <a href="/" class="landing__brand">"♥ CareCompanion"</a>
                <nav class="landing__nav">
                    <a href="#features">"Features"</a>
                    <a href="#how-it-works">"How It Works"</a>
                </nav>
                <div class="landing__actions">
                    <a href="/login" class="btn btn--ghost">"Log in"</a>
                    <a href="/signup" class="btn">"Sign up"</a>
                </div>
            </header>

            <section class="landing__hero">
                <h1>
                    "Caring for your loved ones, "
                    <span class="text-primary">"even when you're away"</span>
                </h1>
                <p class="landing__lede">
                    "An AI-powered monitoring system that provides peace of mind for families and caregivers of elderly loved ones."
                </p>
                <div class="landing__cta">
                    <a href="/signup" class="btn">"Get Started"</a>
                    <a href="#how-it-works" class="btn btn--outline">"Learn More"</a>
                </div>
            </section>

            <section id="features" class="landing__section">
                <h2>"Key Features"</h2>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="card">
                                    <h3>{f.title}</h3>
                                    <p class="muted">{f.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="how-it-works" class="landing__section">
                <h2>"How It Works"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|s| {
                            view! {
                                <li class="steps__item">
                                    <h3>{s.title}</h3>
                                    <p class="muted">{s.body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="landing__banner">
                <h2>"Ready to get started?"</h2>
                <p>"Join thousands of families who trust CareCompanion for their elderly care monitoring needs."</p>
                <a href="/signup" class="btn btn--inverse">"Sign Up Now"</a>
            </section>

            <footer class="landing__footer">
                <p>"CareCompanion · Caring since 2024"</p>
            </footer>
        </div>
    }
}
