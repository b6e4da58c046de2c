//! One payload shape per hook point.
//!
//! Every payload follows the same pattern: input fields describe what is
//! being inspected and are set by the caller through the constructor; output
//! slots start empty and are filled in place by registered handlers. The
//! payload is the only channel between caller and handler — handlers return
//! no data of their own.

use std::fmt;

use serde_json::Value;

use crate::component::{
    ComponentBounds, ComponentDevtoolsOptions, ComponentTreeNode, InspectedComponentData,
};
use crate::edit::{EditStatePayload, StateSetter};
use crate::handles::{AppHandle, ElementHandle, InstanceHandle};
use crate::inspector::{CustomInspectorNode, CustomInspectorState, TimelineEvent};

/// Payload for `transformCall` — rewrite the arguments of a bridged call.
#[derive(Debug, Clone)]
pub struct TransformCallPayload {
    /// Name of the call being transformed.
    pub call_name: String,
    /// Arguments as supplied by the caller.
    pub in_args: Vec<Value>,
    /// Arguments after transformation. Starts as a copy of `in_args`, so an
    /// unhandled hook is the identity transform.
    pub out_args: Vec<Value>,
}

impl TransformCallPayload {
    /// Creates the payload for a call about to be transformed.
    pub fn new(call_name: impl Into<String>, in_args: Vec<Value>) -> Self {
        let out_args = in_args.clone();
        Self {
            call_name: call_name.into(),
            in_args,
            out_args,
        }
    }
}

/// Payload for `getAppRecordName` — resolve an app record's display name.
#[derive(Debug, Clone)]
pub struct GetAppRecordNamePayload {
    /// The app whose name is requested.
    pub app: AppHandle,
    /// Output slot: the resolved name.
    pub name: String,
}

impl GetAppRecordNamePayload {
    /// Creates the payload for an app name request.
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            name: String::new(),
        }
    }
}

/// Payload for `getAppRootInstance` — resolve an app's root component.
#[derive(Debug, Clone)]
pub struct GetAppRootInstancePayload {
    /// The app whose root instance is requested.
    pub app: AppHandle,
    /// Output slot: the root component instance.
    pub root: Option<InstanceHandle>,
}

impl GetAppRootInstancePayload {
    /// Creates the payload for a root instance request.
    pub fn new(app: AppHandle) -> Self {
        Self { app, root: None }
    }
}

/// Payload for `registerApplication` — side-effect only.
#[derive(Debug, Clone)]
pub struct RegisterApplicationPayload {
    /// The app being registered.
    pub app: AppHandle,
}

impl RegisterApplicationPayload {
    /// Creates the payload for an app registration notification.
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

/// Payload for `walkComponentTree` — collect the tree below an instance.
#[derive(Debug, Clone)]
pub struct WalkComponentTreePayload {
    /// Instance to start walking from.
    pub instance: InstanceHandle,
    /// Maximum depth to descend.
    pub max_depth: usize,
    /// Filter string from the inspector search box; empty means no filter.
    pub filter: String,
    /// Output slot: the collected tree nodes.
    pub tree_data: Vec<ComponentTreeNode>,
}

impl WalkComponentTreePayload {
    /// Creates the payload for a tree walk.
    pub fn new(instance: InstanceHandle, max_depth: usize, filter: impl Into<String>) -> Self {
        Self {
            instance,
            max_depth,
            filter: filter.into(),
            tree_data: Vec::new(),
        }
    }
}

/// Payload for `visitComponentTree` — fired once per node during a walk.
#[derive(Debug, Clone)]
pub struct VisitComponentTreePayload {
    /// The app owning the tree.
    pub app: AppHandle,
    /// The instance being visited.
    pub instance: InstanceHandle,
    /// Filter string active for the walk.
    pub filter: String,
    /// In/out slot: the node built for this instance, open to decoration.
    pub tree_node: ComponentTreeNode,
}

impl VisitComponentTreePayload {
    /// Creates the payload for a single tree node visit.
    pub fn new(
        app: AppHandle,
        instance: InstanceHandle,
        filter: impl Into<String>,
        tree_node: ComponentTreeNode,
    ) -> Self {
        Self {
            app,
            instance,
            filter: filter.into(),
            tree_node,
        }
    }
}

/// Payload for `walkComponentParents` — collect an instance's parent chain.
#[derive(Debug, Clone)]
pub struct WalkComponentParentsPayload {
    /// Instance whose parents are requested.
    pub instance: InstanceHandle,
    /// Output slot: parents, closest first.
    pub parent_instances: Vec<InstanceHandle>,
}

impl WalkComponentParentsPayload {
    /// Creates the payload for a parent walk.
    pub fn new(instance: InstanceHandle) -> Self {
        Self {
            instance,
            parent_instances: Vec::new(),
        }
    }
}

/// Payload for `inspectComponent` — gather a component's detailed state.
#[derive(Debug, Clone)]
pub struct InspectComponentPayload {
    /// The app owning the component.
    pub app: AppHandle,
    /// The component being inspected.
    pub instance: InstanceHandle,
    /// Output slot: the inspected state.
    pub instance_data: InspectedComponentData,
}

impl InspectComponentPayload {
    /// Creates the payload for a component inspection.
    pub fn new(app: AppHandle, instance: InstanceHandle) -> Self {
        Self {
            app,
            instance,
            instance_data: InspectedComponentData::default(),
        }
    }
}

/// Payload for `getComponentBounds` — resolve on-screen bounds.
#[derive(Debug, Clone)]
pub struct GetComponentBoundsPayload {
    /// The component whose bounds are requested.
    pub instance: InstanceHandle,
    /// Output slot: the resolved bounds.
    pub bounds: ComponentBounds,
}

impl GetComponentBoundsPayload {
    /// Creates the payload for a bounds request.
    pub fn new(instance: InstanceHandle) -> Self {
        Self {
            instance,
            bounds: ComponentBounds::default(),
        }
    }
}

/// Payload for `getComponentName` — resolve a component's display name.
#[derive(Debug, Clone)]
pub struct GetComponentNamePayload {
    /// The component whose name is requested.
    pub instance: InstanceHandle,
    /// Output slot: the resolved name.
    pub name: String,
}

impl GetComponentNamePayload {
    /// Creates the payload for a name request.
    pub fn new(instance: InstanceHandle) -> Self {
        Self {
            instance,
            name: String::new(),
        }
    }
}

/// Payload for `getComponentInstances` — collect all instances of an app.
#[derive(Debug, Clone)]
pub struct GetComponentInstancesPayload {
    /// The app whose instances are requested.
    pub app: AppHandle,
    /// Output slot: the collected instances.
    pub instances: Vec<InstanceHandle>,
}

impl GetComponentInstancesPayload {
    /// Creates the payload for an instance listing.
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            instances: Vec::new(),
        }
    }
}

/// Payload for `getElementComponent` — resolve the component owning an
/// element.
#[derive(Debug, Clone)]
pub struct GetElementComponentPayload {
    /// The rendered element.
    pub element: ElementHandle,
    /// Output slot: the owning component, if any.
    pub instance: Option<InstanceHandle>,
}

impl GetElementComponentPayload {
    /// Creates the payload for an element-to-component lookup.
    pub fn new(element: ElementHandle) -> Self {
        Self {
            element,
            instance: None,
        }
    }
}

/// Payload for `getComponentRootElements` — collect rendered root elements.
#[derive(Debug, Clone)]
pub struct GetComponentRootElementsPayload {
    /// The component whose root elements are requested.
    pub instance: InstanceHandle,
    /// Output slot: the root elements.
    pub root_elements: Vec<ElementHandle>,
}

impl GetComponentRootElementsPayload {
    /// Creates the payload for a root element listing.
    pub fn new(instance: InstanceHandle) -> Self {
        Self {
            instance,
            root_elements: Vec::new(),
        }
    }
}

/// Payload for `editComponentState` — apply a user edit to component state.
///
/// Handlers write the edit back into host state through [`StateSetter`];
/// the payload itself has no output slot.
#[derive(Clone)]
pub struct EditComponentStatePayload {
    /// The app owning the component.
    pub app: AppHandle,
    /// The component being edited.
    pub instance: InstanceHandle,
    /// Path to the edited field inside the component's state.
    pub path: Vec<String>,
    /// Which state section is being edited (e.g. `"data"`, `"props"`).
    pub value_type: String,
    /// The requested edit.
    pub state: EditStatePayload,
    /// Write-back callback supplied by the caller.
    pub set: StateSetter,
}

impl EditComponentStatePayload {
    /// Creates the payload for a component state edit.
    pub fn new(
        app: AppHandle,
        instance: InstanceHandle,
        path: Vec<String>,
        value_type: impl Into<String>,
        state: EditStatePayload,
        set: StateSetter,
    ) -> Self {
        Self {
            app,
            instance,
            path,
            value_type: value_type.into(),
            state,
            set,
        }
    }
}

impl fmt::Debug for EditComponentStatePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditComponentStatePayload")
            .field("app", &self.app)
            .field("instance", &self.instance)
            .field("path", &self.path)
            .field("value_type", &self.value_type)
            .field("state", &self.state)
            .field("set", &"<closure>")
            .finish()
    }
}

/// Payload for `getAppDevtoolsOptions` — resolve per-component options.
#[derive(Debug, Clone)]
pub struct GetComponentDevtoolsOptionsPayload {
    /// The component whose options are requested.
    pub instance: InstanceHandle,
    /// Output slot: the resolved options.
    pub options: ComponentDevtoolsOptions,
}

impl GetComponentDevtoolsOptionsPayload {
    /// Creates the payload for a devtools options request.
    pub fn new(instance: InstanceHandle) -> Self {
        Self {
            instance,
            options: ComponentDevtoolsOptions::default(),
        }
    }
}

/// Payload for `getComponentRenderCode` — resolve a component's render code.
#[derive(Debug, Clone)]
pub struct GetComponentRenderCodePayload {
    /// The component whose render code is requested.
    pub instance: InstanceHandle,
    /// Output slot: the render code.
    pub code: String,
}

impl GetComponentRenderCodePayload {
    /// Creates the payload for a render code request.
    pub fn new(instance: InstanceHandle) -> Self {
        Self {
            instance,
            code: String::new(),
        }
    }
}

/// Payload for `inspectTimelineEvent` — expand a timeline event.
#[derive(Debug, Clone)]
pub struct InspectTimelineEventPayload {
    /// The app that recorded the event.
    pub app: AppHandle,
    /// The timeline layer the event belongs to.
    pub layer_id: String,
    /// The event being inspected.
    pub event: TimelineEvent,
    /// Whether all events of a group are requested, not just the selected
    /// one.
    pub all: bool,
    /// Output slot: the expanded event data.
    pub data: Value,
}

impl InspectTimelineEventPayload {
    /// Creates the payload for a timeline event inspection.
    pub fn new(app: AppHandle, layer_id: impl Into<String>, event: TimelineEvent) -> Self {
        Self {
            app,
            layer_id: layer_id.into(),
            event,
            all: false,
            data: Value::Null,
        }
    }

    /// Requests all events of the group instead of the selected one.
    pub fn with_all(mut self) -> Self {
        self.all = true;
        self
    }
}

/// Payload for `getInspectorTree` — collect a custom inspector's root nodes.
#[derive(Debug, Clone)]
pub struct GetInspectorTreePayload {
    /// The app the inspector is attached to.
    pub app: AppHandle,
    /// The custom inspector being queried.
    pub inspector_id: String,
    /// Filter string from the inspector search box; empty means no filter.
    pub filter: String,
    /// Output slot: the root nodes.
    pub root_nodes: Vec<CustomInspectorNode>,
}

impl GetInspectorTreePayload {
    /// Creates the payload for an inspector tree request.
    pub fn new(
        app: AppHandle,
        inspector_id: impl Into<String>,
        filter: impl Into<String>,
    ) -> Self {
        Self {
            app,
            inspector_id: inspector_id.into(),
            filter: filter.into(),
            root_nodes: Vec::new(),
        }
    }
}

/// Payload for `getInspectorState` — resolve a custom inspector node's state.
#[derive(Debug, Clone)]
pub struct GetInspectorStatePayload {
    /// The app the inspector is attached to.
    pub app: AppHandle,
    /// The custom inspector being queried.
    pub inspector_id: String,
    /// The selected node.
    pub node_id: String,
    /// Output slot: the node's state panel content.
    pub state: CustomInspectorState,
}

impl GetInspectorStatePayload {
    /// Creates the payload for an inspector state request.
    pub fn new(
        app: AppHandle,
        inspector_id: impl Into<String>,
        node_id: impl Into<String>,
    ) -> Self {
        Self {
            app,
            inspector_id: inspector_id.into(),
            node_id: node_id.into(),
            state: CustomInspectorState::default(),
        }
    }
}

/// Payload for `editInspectorState` — apply a user edit to custom inspector
/// state.
///
/// Like [`EditComponentStatePayload`], handlers write through the setter.
#[derive(Clone)]
pub struct EditInspectorStatePayload {
    /// The app the inspector is attached to.
    pub app: AppHandle,
    /// The custom inspector being edited.
    pub inspector_id: String,
    /// The selected node.
    pub node_id: String,
    /// Path to the edited field inside the node's state.
    pub path: Vec<String>,
    /// Which state section is being edited.
    pub value_type: String,
    /// The requested edit.
    pub state: EditStatePayload,
    /// Write-back callback supplied by the caller.
    pub set: StateSetter,
}

impl EditInspectorStatePayload {
    /// Creates the payload for an inspector state edit.
    pub fn new(
        app: AppHandle,
        inspector_id: impl Into<String>,
        node_id: impl Into<String>,
        path: Vec<String>,
        value_type: impl Into<String>,
        state: EditStatePayload,
        set: StateSetter,
    ) -> Self {
        Self {
            app,
            inspector_id: inspector_id.into(),
            node_id: node_id.into(),
            path,
            value_type: value_type.into(),
            state,
            set,
        }
    }
}

impl fmt::Debug for EditInspectorStatePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditInspectorStatePayload")
            .field("app", &self.app)
            .field("inspector_id", &self.inspector_id)
            .field("node_id", &self.node_id)
            .field("path", &self.path)
            .field("value_type", &self.value_type)
            .field("state", &self.state)
            .field("set", &"<closure>")
            .finish()
    }
}
