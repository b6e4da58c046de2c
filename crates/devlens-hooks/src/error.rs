//! Error type surfaced by hook invocation.
//!
//! The contract itself has no failure modes: registration cannot fail, and
//! payload shapes are enforced by the type system. The only error surface is
//! a handler returning an error while a hook is being called, which is
//! wrapped here so the caller knows which hook it came from. Recovery policy
//! belongs to the caller.

use thiserror::Error;

use crate::hooks::definitions::Hook;

/// A hook handler returned an error during invocation.
#[derive(Debug, Error)]
#[error("handler for hook '{hook}' failed: {source}")]
pub struct HookError {
    /// The hook whose handler failed.
    pub hook: Hook,
    /// The underlying handler error.
    #[source]
    pub source: anyhow::Error,
}

impl HookError {
    /// Wraps a handler error with the hook it was registered for.
    pub fn new(hook: Hook, source: anyhow::Error) -> Self {
        Self { hook, source }
    }
}
