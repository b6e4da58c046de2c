//! Hook system — identifiers, payload shapes, handlers, and the registry.

pub mod definitions;
pub mod handler;
pub mod payloads;
pub mod registry;

pub use definitions::{Hook, HookPayload, UnknownHook};
pub use handler::{HandlerFn, HookHandler};
pub use registry::HookRegistry;
