//! Central registry and synchronous dispatcher for typed events.
//!
//! This module provides the [`Emitter`], which owns the per-key and
//! any-event listener registries and performs direct in-call-stack
//! delivery.

use crate::emitter::event::Event;
use crate::emitter::listener::Listener;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Central registry and synchronous dispatcher for typed events.
///
/// `E` is the caller's event schema; `C` is the context listeners observe
/// as their first argument. A type that embeds an emitter passes itself at
/// publish time, so listeners see the most-derived instance rather than the
/// emitter. Standalone callers use `Emitter<(), E>` and pass `&()`.
///
/// Mutation during dispatch is snapshot-isolated: [`publish`](Self::publish)
/// copies the matching listener lists before invoking anything, so a
/// listener may subscribe, unsubscribe, publish, or clear reentrantly.
/// Registrations and removals made while an emission is in flight take
/// effect from the next emission.
pub struct Emitter<C, E: Event> {
    /// Map of event keys to listeners, created lazily per key.
    listeners: RwLock<HashMap<E::Key, Vec<Listener<C, E>>>>,
    /// Listeners invoked on every emission regardless of key.
    any_listeners: RwLock<Vec<Listener<C, E>>>,
}

impl<C, E: Event> Emitter<C, E> {
    /// Create an emitter with empty registries.
    pub fn new() -> Self {
        Emitter {
            listeners: RwLock::new(HashMap::new()),
            any_listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register `listener` under `key`.
    ///
    /// Listener lists keep registration order and allow duplicates: the
    /// same handle registered twice under one key is invoked twice per
    /// emission.
    pub fn subscribe(&self, key: E::Key, listener: Listener<C, E>) -> &Self {
        let mut listeners = self.listeners.write().unwrap();
        listeners.entry(key).or_default().push(listener);
        self
    }

    /// Remove every registration of `listener` under `key`.
    ///
    /// Removing a listener that was never registered is a no-op.
    pub fn unsubscribe(&self, key: E::Key, listener: &Listener<C, E>) -> &Self {
        let mut listeners = self.listeners.write().unwrap();
        if let Some(entries) = listeners.get_mut(&key) {
            entries.retain(|entry| !Arc::ptr_eq(entry, listener));
        }
        self
    }

    /// Register a listener invoked once per emission, for every key.
    ///
    /// Any-listeners receive the full event value, so they observe both the
    /// key and the payload of every emission, including emissions for keys
    /// that have no key-specific listeners.
    pub fn subscribe_any(&self, listener: Listener<C, E>) -> &Self {
        self.any_listeners.write().unwrap().push(listener);
        self
    }

    /// Remove every registration of an any-listener.
    ///
    /// Same presence contract as [`unsubscribe`](Self::unsubscribe): absent
    /// listeners are a no-op.
    pub fn unsubscribe_any(&self, listener: &Listener<C, E>) -> &Self {
        self.any_listeners
            .write()
            .unwrap()
            .retain(|entry| !Arc::ptr_eq(entry, listener));
        self
    }

    /// Dispatch `event` to every listener registered for its key, then to
    /// every any-listener, synchronously and in registration order.
    ///
    /// The first listener error aborts the pass and propagates to the
    /// caller; listeners later in the pass are not invoked. Use
    /// [`publish_logged`](Self::publish_logged) to isolate failures
    /// instead.
    pub fn publish(&self, cx: &C, event: E) -> Result<&Self> {
        let (keyed, any) = self.snapshot(event.key());
        for listener in keyed.iter().chain(any.iter()) {
            listener(cx, &event)?;
        }
        Ok(self)
    }

    /// Dispatch like [`publish`](Self::publish), but isolate listener
    /// failures from each other: every listener in the pass is invoked, and
    /// each failure is logged rather than propagated.
    pub fn publish_logged(&self, cx: &C, event: E) -> &Self {
        let (keyed, any) = self.snapshot(event.key());
        for listener in keyed.iter().chain(any.iter()) {
            if let Err(e) = listener(cx, &event) {
                log::error!("Error handling {:?} event: {}", event.key(), e);
            }
        }
        self
    }

    /// Drop every registration, per-key and any-listener alike.
    ///
    /// Idempotent. Until listeners are re-registered, subsequent emissions
    /// invoke nothing.
    pub fn clear(&self) -> &Self {
        self.listeners.write().unwrap().clear();
        self.any_listeners.write().unwrap().clear();
        self
    }

    /// Get the number of listeners registered under `key`.
    pub fn listener_count(&self, key: E::Key) -> usize {
        let listeners = self.listeners.read().unwrap();
        listeners.get(&key).map_or(0, |entries| entries.len())
    }

    /// Get the number of registered any-listeners.
    pub fn any_listener_count(&self) -> usize {
        self.any_listeners.read().unwrap().len()
    }

    /// Get the total number of registrations, per-key and any-listener
    /// alike.
    pub fn total_listener_count(&self) -> usize {
        let keyed: usize = self
            .listeners
            .read()
            .unwrap()
            .values()
            .map(|entries| entries.len())
            .sum();
        keyed + self.any_listener_count()
    }

    // Point-in-time copy of both registries, taken before any listener runs
    // so reentrant mutation cannot disturb the pass.
    fn snapshot(&self, key: E::Key) -> (Vec<Listener<C, E>>, Vec<Listener<C, E>>) {
        let keyed = self
            .listeners
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default();
        let any = self.any_listeners.read().unwrap().clone();
        (keyed, any)
    }
}

impl<C, E: Event> Default for Emitter<C, E> {
    fn default() -> Self {
        Emitter::new()
    }
}

impl<C, E: Event> std::fmt::Debug for Emitter<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("keys", &self.listeners.read().unwrap().len())
            .field("any_listeners", &self.any_listener_count())
            .field("total_listeners", &self.total_listener_count())
            .finish()
    }
}
