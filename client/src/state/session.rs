//! Durable session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` exists per running app. It owns the current `User`
//! and the loading flag, mirrors the user into a single durable key-value
//! slot, and fans every change out to subscribed observers (the Leptos
//! provider mirrors it into an `RwSignal`).
//!
//! INVARIANTS
//! ==========
//! - `loading` starts `true` and only `restore` or an explicit
//!   `set_loading(false)` clears it.
//! - `restore` takes effect once; later calls are ignored.
//! - Observers run after the state lock is released, so they may call
//!   `snapshot`. They must not `subscribe` from inside a notification.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::auth::AuthState;
use super::user::User;
use crate::util::storage;

/// Storage key holding the serialized user record.
pub const SESSION_KEY: &str = "user";

/// A single durable text slot.
pub trait SessionSlot: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, raw: &str);
    fn remove(&self);
}

/// Slot backed by browser `localStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageSlot {
    key: &'static str,
}

impl Default for LocalStorageSlot {
    fn default() -> Self {
        Self { key: SESSION_KEY }
    }
}

impl SessionSlot for LocalStorageSlot {
    fn load(&self) -> Option<String> {
        storage::read_item(self.key)
    }

    fn store(&self, raw: &str) {
        storage::write_item(self.key, raw);
    }

    fn remove(&self) {
        storage::remove_item(self.key);
    }
}

/// In-process slot. Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    /// Slot pre-populated with `raw`, as if a previous run had saved it.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Arc::new(Mutex::new(Some(raw.into()))) }
    }

    /// Current raw contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        lock(&self.raw).clone()
    }
}

impl SessionSlot for MemorySlot {
    fn load(&self) -> Option<String> {
        self.raw()
    }

    fn store(&self, raw: &str) {
        *lock(&self.raw) = Some(raw.to_owned());
    }

    fn remove(&self) {
        *lock(&self.raw) = None;
    }
}

/// Callback invoked with the new state after every mutation.
pub type Observer = Box<dyn Fn(&AuthState) + Send + Sync>;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Decode a stored record. Anything that is not exactly a `User` is treated
/// as "no session".
fn decode(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("ignoring unreadable session record: {e}");
            None
        }
    }
}

pub struct SessionStore {
    slot: Box<dyn SessionSlot>,
    state: Mutex<AuthState>,
    observers: Mutex<Vec<Observer>>,
    restored: AtomicBool,
}

impl SessionStore {
    #[must_use]
    pub fn new(slot: impl SessionSlot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
            state: Mutex::new(AuthState::default()),
            observers: Mutex::new(Vec::new()),
            restored: AtomicBool::new(false),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        lock(&self.state).clone()
    }

    pub fn subscribe(&self, observer: impl Fn(&AuthState) + Send + Sync + 'static) {
        lock(&self.observers).push(Box::new(observer));
    }

    /// Rehydrate the user from the slot and clear `loading`.
    pub fn restore(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            log::debug!("session restore already ran");
            return;
        }
        let user = self.slot.load().as_deref().and_then(decode);
        if let Some(user) = &user {
            log::info!("restored session for {}", user.id);
        }
        self.apply(|state| {
            state.user = user;
            state.loading = false;
        });
    }

    /// Persist `user` and make it current.
    pub fn save(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => self.slot.store(&raw),
            Err(e) => log::warn!("session record not persisted: {e}"),
        }
        self.apply(|state| state.user = Some(user));
    }

    /// Drop the durable record and the current user.
    pub fn clear(&self) {
        self.slot.remove();
        self.apply(|state| state.user = None);
    }

    pub fn set_loading(&self, loading: bool) {
        self.apply(|state| state.loading = loading);
    }

    fn apply(&self, mutate: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = lock(&self.state);
            mutate(&mut state);
            state.clone()
        };
        for observer in lock(&self.observers).iter() {
            observer(&snapshot);
        }
    }
}
