//! Handler abstraction for hook points.

use std::fmt;

use async_trait::async_trait;
use futures::future::BoxFuture;

/// A callback registered against exactly one hook point.
///
/// `P` is the payload shape of that hook point and `C` is the execution
/// context type shared by all hooks in one registry instance. Handlers
/// communicate results only by mutating the payload in place; a returned
/// error aborts the invocation and is surfaced to the caller as
/// [`HookError`](crate::error::HookError).
#[async_trait]
pub trait HookHandler<P, C>: Send + Sync {
    /// Handles a hook invocation.
    async fn handle(&self, payload: &mut P, ctx: &C) -> anyhow::Result<()>;
}

/// A closure-based hook handler for quick handler creation.
///
/// Covers both completion styles the contract allows: [`HandlerFn::new`]
/// wraps an asynchronous closure, [`HandlerFn::sync`] a synchronous one.
pub struct HandlerFn<P, C> {
    /// Handler function.
    f: Box<dyn for<'a> Fn(&'a mut P, &'a C) -> BoxFuture<'a, anyhow::Result<()>> + Send + Sync>,
}

impl<P, C> fmt::Debug for HandlerFn<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn")
            .field("f", &"<closure>")
            .finish()
    }
}

impl<P, C> HandlerFn<P, C> {
    /// Creates a handler from an asynchronous closure.
    ///
    /// The closure returns a boxed future borrowing the payload and context:
    ///
    /// ```rust,ignore
    /// HandlerFn::new(|payload, ctx| Box::pin(async move {
    ///     payload.name = lookup(ctx).await?;
    ///     Ok(())
    /// }))
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut P, &'a C) -> BoxFuture<'a, anyhow::Result<()>>
            + Send
            + Sync
            + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Creates a handler from a synchronous closure.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&mut P, &C) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            f: Box::new(move |payload, ctx| {
                let result = f(payload, ctx);
                Box::pin(async move { result })
            }),
        }
    }
}

#[async_trait]
impl<P: Send, C: Sync> HookHandler<P, C> for HandlerFn<P, C> {
    async fn handle(&self, payload: &mut P, ctx: &C) -> anyhow::Result<()> {
        (self.f)(payload, ctx).await
    }
}
