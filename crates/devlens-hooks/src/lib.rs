//! # devlens-hooks
//!
//! Typed plugin-hook contract for the DevLens framework inspector. Provides:
//!
//! - A closed set of named extension points ([`Hook`])
//! - One payload shape per hook point, mutated in place by handlers
//! - A registration facade with one statically typed method per hook
//!   ([`HookRegistry`]), generic over a shared execution context
//! - Opaque handles for objects owned by the inspected application
//!
//! This crate is the contract between a framework backend and the inspector
//! frontend: backends register handlers, the inspector side builds payloads
//! and calls them. Scheduling, transport, and cross-process serialization of
//! live handles live outside this crate.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use devlens_hooks::prelude::*;
//!
//! let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
//!
//! registry.on_get_component_name(HandlerFn::sync(|payload, _ctx| {
//!     if let Some(component) = payload.instance.downcast_ref::<MyComponent>() {
//!         payload.name = component.display_name();
//!     }
//!     Ok(())
//! }));
//!
//! let mut payload =
//!     HookPayload::GetComponentName(GetComponentNamePayload::new(instance));
//! registry.call(&mut payload, &ctx).await?;
//! ```

pub mod component;
pub mod edit;
pub mod error;
pub mod handles;
pub mod hooks;
pub mod inspector;

pub use component::{
    ComponentBounds, ComponentDevtoolsOptions, ComponentTreeNode, InspectedComponentData,
};
pub use edit::{EditStatePayload, StateSetter};
pub use error::HookError;
pub use handles::{AppHandle, ElementHandle, InstanceHandle};
pub use hooks::{HandlerFn, Hook, HookHandler, HookPayload, HookRegistry};
pub use inspector::{CustomInspectorNode, CustomInspectorState, TimelineEvent};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::component::{
        ComponentBounds, ComponentDevtoolsOptions, ComponentTreeNode, InspectedComponentData,
    };
    pub use crate::edit::{EditStatePayload, StateSetter};
    pub use crate::error::HookError;
    pub use crate::handles::{AppHandle, ElementHandle, InstanceHandle};
    pub use crate::hooks::definitions::{Hook, HookPayload};
    pub use crate::hooks::handler::{HandlerFn, HookHandler};
    pub use crate::hooks::payloads::*;
    pub use crate::hooks::registry::HookRegistry;
    pub use crate::inspector::{CustomInspectorNode, CustomInspectorState, TimelineEvent};
}
