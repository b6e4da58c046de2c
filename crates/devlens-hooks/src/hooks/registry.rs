//! Hook registry — the registration facade of the contract.
//!
//! One registration method per hook point, each statically typed to that
//! hook's payload shape, plus the minimal invocation path: handlers run
//! sequentially in registration order against the same mutable payload.
//! Prioritisation, halting, timeouts, and any cross-handler coordination
//! are the responsibility of the embedding dispatcher, not this contract.

use std::fmt;

use tracing::{debug, info};

use super::definitions::{Hook, HookPayload};
use super::handler::HookHandler;
use super::payloads::*;
use crate::error::HookError;

/// Registry of hook handlers, one handler list per hook point.
///
/// `C` is the execution context type passed to every handler registered in
/// this instance. Registering a handler for one hook never affects any
/// other hook.
pub struct HookRegistry<C> {
    transform_call: Vec<Box<dyn HookHandler<TransformCallPayload, C>>>,
    get_app_record_name: Vec<Box<dyn HookHandler<GetAppRecordNamePayload, C>>>,
    get_app_root_instance: Vec<Box<dyn HookHandler<GetAppRootInstancePayload, C>>>,
    register_application: Vec<Box<dyn HookHandler<RegisterApplicationPayload, C>>>,
    walk_component_tree: Vec<Box<dyn HookHandler<WalkComponentTreePayload, C>>>,
    visit_component_tree: Vec<Box<dyn HookHandler<VisitComponentTreePayload, C>>>,
    walk_component_parents: Vec<Box<dyn HookHandler<WalkComponentParentsPayload, C>>>,
    inspect_component: Vec<Box<dyn HookHandler<InspectComponentPayload, C>>>,
    get_component_bounds: Vec<Box<dyn HookHandler<GetComponentBoundsPayload, C>>>,
    get_component_name: Vec<Box<dyn HookHandler<GetComponentNamePayload, C>>>,
    get_component_instances: Vec<Box<dyn HookHandler<GetComponentInstancesPayload, C>>>,
    get_element_component: Vec<Box<dyn HookHandler<GetElementComponentPayload, C>>>,
    get_component_root_elements: Vec<Box<dyn HookHandler<GetComponentRootElementsPayload, C>>>,
    edit_component_state: Vec<Box<dyn HookHandler<EditComponentStatePayload, C>>>,
    get_component_devtools_options:
        Vec<Box<dyn HookHandler<GetComponentDevtoolsOptionsPayload, C>>>,
    get_component_render_code: Vec<Box<dyn HookHandler<GetComponentRenderCodePayload, C>>>,
    inspect_timeline_event: Vec<Box<dyn HookHandler<InspectTimelineEventPayload, C>>>,
    get_inspector_tree: Vec<Box<dyn HookHandler<GetInspectorTreePayload, C>>>,
    get_inspector_state: Vec<Box<dyn HookHandler<GetInspectorStatePayload, C>>>,
    edit_inspector_state: Vec<Box<dyn HookHandler<EditInspectorStatePayload, C>>>,
}

impl<C> HookRegistry<C> {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            transform_call: Vec::new(),
            get_app_record_name: Vec::new(),
            get_app_root_instance: Vec::new(),
            register_application: Vec::new(),
            walk_component_tree: Vec::new(),
            visit_component_tree: Vec::new(),
            walk_component_parents: Vec::new(),
            inspect_component: Vec::new(),
            get_component_bounds: Vec::new(),
            get_component_name: Vec::new(),
            get_component_instances: Vec::new(),
            get_element_component: Vec::new(),
            get_component_root_elements: Vec::new(),
            edit_component_state: Vec::new(),
            get_component_devtools_options: Vec::new(),
            get_component_render_code: Vec::new(),
            inspect_timeline_event: Vec::new(),
            get_inspector_tree: Vec::new(),
            get_inspector_state: Vec::new(),
            edit_inspector_state: Vec::new(),
        }
    }

    fn register<P>(
        entries: &mut Vec<Box<dyn HookHandler<P, C>>>,
        hook: Hook,
        handler: Box<dyn HookHandler<P, C>>,
    ) {
        entries.push(handler);
        info!(
            hook = %hook,
            handlers = entries.len(),
            "Hook handler registered"
        );
    }

    // ── Registration — one method per hook point ──

    /// Registers a handler for `transformCall`.
    pub fn on_transform_call<H>(&mut self, handler: H)
    where
        H: HookHandler<TransformCallPayload, C> + 'static,
    {
        Self::register(
            &mut self.transform_call,
            Hook::TransformCall,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getAppRecordName`.
    pub fn on_get_app_record_name<H>(&mut self, handler: H)
    where
        H: HookHandler<GetAppRecordNamePayload, C> + 'static,
    {
        Self::register(
            &mut self.get_app_record_name,
            Hook::GetAppRecordName,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getAppRootInstance`.
    pub fn on_get_app_root_instance<H>(&mut self, handler: H)
    where
        H: HookHandler<GetAppRootInstancePayload, C> + 'static,
    {
        Self::register(
            &mut self.get_app_root_instance,
            Hook::GetAppRootInstance,
            Box::new(handler),
        );
    }

    /// Registers a handler for `registerApplication`.
    pub fn on_register_application<H>(&mut self, handler: H)
    where
        H: HookHandler<RegisterApplicationPayload, C> + 'static,
    {
        Self::register(
            &mut self.register_application,
            Hook::RegisterApplication,
            Box::new(handler),
        );
    }

    /// Registers a handler for `walkComponentTree`.
    pub fn on_walk_component_tree<H>(&mut self, handler: H)
    where
        H: HookHandler<WalkComponentTreePayload, C> + 'static,
    {
        Self::register(
            &mut self.walk_component_tree,
            Hook::WalkComponentTree,
            Box::new(handler),
        );
    }

    /// Registers a handler for `visitComponentTree`.
    pub fn on_visit_component_tree<H>(&mut self, handler: H)
    where
        H: HookHandler<VisitComponentTreePayload, C> + 'static,
    {
        Self::register(
            &mut self.visit_component_tree,
            Hook::VisitComponentTree,
            Box::new(handler),
        );
    }

    /// Registers a handler for `walkComponentParents`.
    pub fn on_walk_component_parents<H>(&mut self, handler: H)
    where
        H: HookHandler<WalkComponentParentsPayload, C> + 'static,
    {
        Self::register(
            &mut self.walk_component_parents,
            Hook::WalkComponentParents,
            Box::new(handler),
        );
    }

    /// Registers a handler for `inspectComponent`.
    pub fn on_inspect_component<H>(&mut self, handler: H)
    where
        H: HookHandler<InspectComponentPayload, C> + 'static,
    {
        Self::register(
            &mut self.inspect_component,
            Hook::InspectComponent,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getComponentBounds`.
    pub fn on_get_component_bounds<H>(&mut self, handler: H)
    where
        H: HookHandler<GetComponentBoundsPayload, C> + 'static,
    {
        Self::register(
            &mut self.get_component_bounds,
            Hook::GetComponentBounds,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getComponentName`.
    pub fn on_get_component_name<H>(&mut self, handler: H)
    where
        H: HookHandler<GetComponentNamePayload, C> + 'static,
    {
        Self::register(
            &mut self.get_component_name,
            Hook::GetComponentName,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getComponentInstances`.
    pub fn on_get_component_instances<H>(&mut self, handler: H)
    where
        H: HookHandler<GetComponentInstancesPayload, C> + 'static,
    {
        Self::register(
            &mut self.get_component_instances,
            Hook::GetComponentInstances,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getElementComponent`.
    pub fn on_get_element_component<H>(&mut self, handler: H)
    where
        H: HookHandler<GetElementComponentPayload, C> + 'static,
    {
        Self::register(
            &mut self.get_element_component,
            Hook::GetElementComponent,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getComponentRootElements`.
    pub fn on_get_component_root_elements<H>(&mut self, handler: H)
    where
        H: HookHandler<GetComponentRootElementsPayload, C> + 'static,
    {
        Self::register(
            &mut self.get_component_root_elements,
            Hook::GetComponentRootElements,
            Box::new(handler),
        );
    }

    /// Registers a handler for `editComponentState`.
    pub fn on_edit_component_state<H>(&mut self, handler: H)
    where
        H: HookHandler<EditComponentStatePayload, C> + 'static,
    {
        Self::register(
            &mut self.edit_component_state,
            Hook::EditComponentState,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getAppDevtoolsOptions`.
    pub fn on_get_component_devtools_options<H>(&mut self, handler: H)
    where
        H: HookHandler<GetComponentDevtoolsOptionsPayload, C> + 'static,
    {
        Self::register(
            &mut self.get_component_devtools_options,
            Hook::GetComponentDevtoolsOptions,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getComponentRenderCode`.
    pub fn on_get_component_render_code<H>(&mut self, handler: H)
    where
        H: HookHandler<GetComponentRenderCodePayload, C> + 'static,
    {
        Self::register(
            &mut self.get_component_render_code,
            Hook::GetComponentRenderCode,
            Box::new(handler),
        );
    }

    /// Registers a handler for `inspectTimelineEvent`.
    pub fn on_inspect_timeline_event<H>(&mut self, handler: H)
    where
        H: HookHandler<InspectTimelineEventPayload, C> + 'static,
    {
        Self::register(
            &mut self.inspect_timeline_event,
            Hook::InspectTimelineEvent,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getInspectorTree`.
    pub fn on_get_inspector_tree<H>(&mut self, handler: H)
    where
        H: HookHandler<GetInspectorTreePayload, C> + 'static,
    {
        Self::register(
            &mut self.get_inspector_tree,
            Hook::GetInspectorTree,
            Box::new(handler),
        );
    }

    /// Registers a handler for `getInspectorState`.
    pub fn on_get_inspector_state<H>(&mut self, handler: H)
    where
        H: HookHandler<GetInspectorStatePayload, C> + 'static,
    {
        Self::register(
            &mut self.get_inspector_state,
            Hook::GetInspectorState,
            Box::new(handler),
        );
    }

    /// Registers a handler for `editInspectorState`.
    pub fn on_edit_inspector_state<H>(&mut self, handler: H)
    where
        H: HookHandler<EditInspectorStatePayload, C> + 'static,
    {
        Self::register(
            &mut self.edit_inspector_state,
            Hook::EditInspectorState,
            Box::new(handler),
        );
    }

    // ── Invocation ──

    /// Calls every handler registered for the payload's hook point.
    ///
    /// Handlers run sequentially in registration order against the same
    /// mutable payload, each awaited to completion before the next starts.
    /// The first handler error aborts the run and is returned tagged with
    /// the hook identifier. No registered handlers is a no-op.
    pub async fn call(&self, payload: &mut HookPayload, ctx: &C) -> Result<(), HookError> {
        match payload {
            HookPayload::TransformCall(p) => {
                Self::run(Hook::TransformCall, &self.transform_call, p, ctx).await
            }
            HookPayload::GetAppRecordName(p) => {
                Self::run(Hook::GetAppRecordName, &self.get_app_record_name, p, ctx).await
            }
            HookPayload::GetAppRootInstance(p) => {
                Self::run(
                    Hook::GetAppRootInstance,
                    &self.get_app_root_instance,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::RegisterApplication(p) => {
                Self::run(
                    Hook::RegisterApplication,
                    &self.register_application,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::WalkComponentTree(p) => {
                Self::run(Hook::WalkComponentTree, &self.walk_component_tree, p, ctx).await
            }
            HookPayload::VisitComponentTree(p) => {
                Self::run(Hook::VisitComponentTree, &self.visit_component_tree, p, ctx).await
            }
            HookPayload::WalkComponentParents(p) => {
                Self::run(
                    Hook::WalkComponentParents,
                    &self.walk_component_parents,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::InspectComponent(p) => {
                Self::run(Hook::InspectComponent, &self.inspect_component, p, ctx).await
            }
            HookPayload::GetComponentBounds(p) => {
                Self::run(Hook::GetComponentBounds, &self.get_component_bounds, p, ctx).await
            }
            HookPayload::GetComponentName(p) => {
                Self::run(Hook::GetComponentName, &self.get_component_name, p, ctx).await
            }
            HookPayload::GetComponentInstances(p) => {
                Self::run(
                    Hook::GetComponentInstances,
                    &self.get_component_instances,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::GetElementComponent(p) => {
                Self::run(
                    Hook::GetElementComponent,
                    &self.get_element_component,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::GetComponentRootElements(p) => {
                Self::run(
                    Hook::GetComponentRootElements,
                    &self.get_component_root_elements,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::EditComponentState(p) => {
                Self::run(Hook::EditComponentState, &self.edit_component_state, p, ctx).await
            }
            HookPayload::GetComponentDevtoolsOptions(p) => {
                Self::run(
                    Hook::GetComponentDevtoolsOptions,
                    &self.get_component_devtools_options,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::GetComponentRenderCode(p) => {
                Self::run(
                    Hook::GetComponentRenderCode,
                    &self.get_component_render_code,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::InspectTimelineEvent(p) => {
                Self::run(
                    Hook::InspectTimelineEvent,
                    &self.inspect_timeline_event,
                    p,
                    ctx,
                )
                .await
            }
            HookPayload::GetInspectorTree(p) => {
                Self::run(Hook::GetInspectorTree, &self.get_inspector_tree, p, ctx).await
            }
            HookPayload::GetInspectorState(p) => {
                Self::run(Hook::GetInspectorState, &self.get_inspector_state, p, ctx).await
            }
            HookPayload::EditInspectorState(p) => {
                Self::run(Hook::EditInspectorState, &self.edit_inspector_state, p, ctx).await
            }
        }
    }

    async fn run<P>(
        hook: Hook,
        handlers: &[Box<dyn HookHandler<P, C>>],
        payload: &mut P,
        ctx: &C,
    ) -> Result<(), HookError> {
        if handlers.is_empty() {
            return Ok(());
        }

        debug!(
            hook = %hook,
            handler_count = handlers.len(),
            "Calling hook"
        );

        for handler in handlers {
            handler
                .handle(payload, ctx)
                .await
                .map_err(|source| HookError::new(hook, source))?;
        }

        Ok(())
    }

    // ── Introspection ──

    /// Returns the number of handlers registered for a hook point.
    pub fn handler_count(&self, hook: Hook) -> usize {
        match hook {
            Hook::TransformCall => self.transform_call.len(),
            Hook::GetAppRecordName => self.get_app_record_name.len(),
            Hook::GetAppRootInstance => self.get_app_root_instance.len(),
            Hook::RegisterApplication => self.register_application.len(),
            Hook::WalkComponentTree => self.walk_component_tree.len(),
            Hook::VisitComponentTree => self.visit_component_tree.len(),
            Hook::WalkComponentParents => self.walk_component_parents.len(),
            Hook::InspectComponent => self.inspect_component.len(),
            Hook::GetComponentBounds => self.get_component_bounds.len(),
            Hook::GetComponentName => self.get_component_name.len(),
            Hook::GetComponentInstances => self.get_component_instances.len(),
            Hook::GetElementComponent => self.get_element_component.len(),
            Hook::GetComponentRootElements => self.get_component_root_elements.len(),
            Hook::EditComponentState => self.edit_component_state.len(),
            Hook::GetComponentDevtoolsOptions => self.get_component_devtools_options.len(),
            Hook::GetComponentRenderCode => self.get_component_render_code.len(),
            Hook::InspectTimelineEvent => self.inspect_timeline_event.len(),
            Hook::GetInspectorTree => self.get_inspector_tree.len(),
            Hook::GetInspectorState => self.get_inspector_state.len(),
            Hook::EditInspectorState => self.edit_inspector_state.len(),
        }
    }

    /// Returns whether any handlers are registered for a hook point.
    pub fn has_handlers(&self, hook: Hook) -> bool {
        self.handler_count(hook) > 0
    }

    /// Returns all hook points with at least one registered handler.
    pub fn registered_hooks(&self) -> Vec<Hook> {
        Hook::ALL
            .into_iter()
            .filter(|hook| self.has_handlers(*hook))
            .collect()
    }

    /// Returns the total number of registered handlers across all hooks.
    pub fn total_handlers(&self) -> usize {
        Hook::ALL
            .into_iter()
            .map(|hook| self.handler_count(hook))
            .sum()
    }
}

impl<C> Default for HookRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for HookRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("registered_hooks", &self.registered_hooks())
            .field("total_handlers", &self.total_handlers())
            .finish()
    }
}
