//! Listener definitions for the Ripple emitter.
//!
//! A listener is a shared synchronous callback. Its first argument is the
//! context the owning emitter was published through, its second the event
//! being dispatched.

use crate::utils::error::Result;
use std::sync::Arc;

/// Shared callback invoked with the bound context and the dispatched event.
///
/// Listener identity is reference identity: clones of one `Arc` count as
/// the same listener when unsubscribing, separately created `Arc`s never
/// match even when they wrap the same function.
pub type Listener<C, E> = Arc<dyn Fn(&C, &E) -> Result<()> + Send + Sync>;

/// Wrap a closure into the shared [`Listener`] form.
///
/// Keep a clone of the returned handle if the listener should be removable
/// later.
pub fn listener<C, E, F>(f: F) -> Listener<C, E>
where
    F: Fn(&C, &E) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}
