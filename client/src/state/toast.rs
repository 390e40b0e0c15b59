//! Dismissible notification queue.
//!
//! Pages push toasts to surface outcomes (failed login, scheduled visit).
//! The queue is capped; pushing past the cap drops the oldest entry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Queue a toast and return its id.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        if self.toasts.len() > TOAST_LIMIT {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id`. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Shared toast queue, provided at the app root.
pub fn use_toasts() -> RwSignal<ToastQueue> {
    expect_context::<RwSignal<ToastQueue>>()
}

pub fn notify(queue: RwSignal<ToastQueue>, title: &str, description: &str) {
    queue.update(|q| {
        q.push(title, description, ToastVariant::Default);
    });
}

pub fn notify_error(queue: RwSignal<ToastQueue>, title: &str, description: &str) {
    queue.update(|q| {
        q.push(title, description, ToastVariant::Destructive);
    });
}
