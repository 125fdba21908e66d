//! Ripple: a strongly-typed synchronous event emitter.
//!
//! Ripple is an in-memory publish-subscribe primitive. An [`Emitter`] owns
//! two registries: listeners keyed by event class, and any-listeners that
//! fire once per emission regardless of key. Dispatch is direct and
//! synchronous; a listener error aborts the pass and propagates to the
//! publisher.
//!
//! The event vocabulary is caller-defined through the [`Event`] trait.
//! Payload typing is expressed with enum variants, so a unit variant models
//! an event class without payload.
//!
//! # Example
//!
//! ```
//! use ripple::{listener, Emitter, Event};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum FeedKind {
//!     Data,
//!     Loaded,
//! }
//!
//! enum FeedEvent {
//!     Data(String),
//!     Loaded,
//! }
//!
//! impl Event for FeedEvent {
//!     type Key = FeedKind;
//!
//!     fn key(&self) -> FeedKind {
//!         match self {
//!             FeedEvent::Data(_) => FeedKind::Data,
//!             FeedEvent::Loaded => FeedKind::Loaded,
//!         }
//!     }
//! }
//!
//! let emitter: Emitter<(), FeedEvent> = Emitter::new();
//! emitter
//!     .subscribe(
//!         FeedKind::Data,
//!         listener(|_: &(), event: &FeedEvent| {
//!             if let FeedEvent::Data(chunk) = event {
//!                 println!("received {}", chunk);
//!             }
//!             Ok(())
//!         }),
//!     )
//!     .subscribe_any(listener(|_: &(), event: &FeedEvent| {
//!         println!("saw {:?}", event.key());
//!         Ok(())
//!     }));
//!
//! emitter.publish(&(), FeedEvent::Data("chunk".to_string())).unwrap();
//! emitter.publish(&(), FeedEvent::Loaded).unwrap();
//! ```
//!
//! A type that embeds an emitter passes itself as the publish context, so
//! its listeners observe the embedding instance rather than the emitter.

pub mod emitter;
pub mod utils;

pub use emitter::listener;
pub use emitter::Emitter;
pub use emitter::Event;
pub use emitter::Listener;
pub use utils::error::Result;
pub use utils::error::RippleError;
