//! Error definitions for the Ripple event emitter.
//!
//! Registration and removal never fail; the only failure path in the crate
//! is a listener callback reporting an error during dispatch.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RippleError>;

/// Errors surfaced by Ripple operations.
#[derive(Debug, Error)]
pub enum RippleError {
    /// A listener callback failed while handling an event. Propagated
    /// unchanged out of `publish` to its caller.
    #[error("Listener error: {0}")]
    Listener(String),
}
