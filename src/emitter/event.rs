//! Event schema contract for the Ripple emitter.
//!
//! Callers describe their event vocabulary by implementing [`Event`] on a
//! type of their own, usually an enum with one variant per event class.

use std::fmt::Debug;
use std::hash::Hash;

/// Contract between an emitter and the events it dispatches.
///
/// The associated [`Key`](Event::Key) enumerates the event classes of the
/// schema; [`key`](Event::key) names the class an event value belongs to.
/// Model payloads as variant fields: a unit variant is an event class with
/// no payload, and the event value itself is the tagged record delivered to
/// any-listeners.
pub trait Event {
    /// Discrete identifier naming a class of events in the schema.
    type Key: Copy + Eq + Hash + Debug;

    /// The key naming this event's class.
    fn key(&self) -> Self::Key;
}
