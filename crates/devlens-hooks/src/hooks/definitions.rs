//! Hook identifiers and the payload sum type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::payloads::*;

/// Enumeration of all hook points exposed by the inspector backend.
///
/// The set is closed: it cannot be extended at runtime, and every identifier
/// is associated with exactly one payload shape (see [`HookPayload`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Hook {
    // ── Calls ──
    /// Fired to let the backend rewrite the arguments of a bridged call.
    TransformCall,

    // ── App ──
    /// Fired to resolve the display name of an app record.
    GetAppRecordName,
    /// Fired to resolve the root component instance of an app.
    GetAppRootInstance,
    /// Fired when an application is registered with the inspector.
    RegisterApplication,

    // ── Component tree ──
    /// Fired to collect the component tree below an instance.
    WalkComponentTree,
    /// Fired for each tree node while the tree is being walked.
    VisitComponentTree,
    /// Fired to collect the parent chain of an instance.
    WalkComponentParents,

    // ── Component ──
    /// Fired to gather the detailed state of a component.
    InspectComponent,
    /// Fired to resolve the on-screen bounds of a component.
    GetComponentBounds,
    /// Fired to resolve the display name of a component.
    GetComponentName,
    /// Fired to collect all component instances of an app.
    GetComponentInstances,
    /// Fired to resolve the component owning a rendered element.
    GetElementComponent,
    /// Fired to collect the root elements rendered by a component.
    GetComponentRootElements,
    /// Fired when the user edits component state from the inspector.
    EditComponentState,
    /// Fired to resolve per-component devtools options.
    ///
    /// Keeps the historical wire name `getAppDevtoolsOptions`.
    #[serde(rename = "getAppDevtoolsOptions")]
    GetComponentDevtoolsOptions,
    /// Fired to resolve the render code of a component.
    GetComponentRenderCode,

    // ── Timeline ──
    /// Fired to expand a timeline event into inspectable data.
    InspectTimelineEvent,

    // ── Custom inspectors ──
    /// Fired to collect the root nodes of a custom inspector tree.
    GetInspectorTree,
    /// Fired to resolve the state panel of a custom inspector node.
    GetInspectorState,
    /// Fired when the user edits custom inspector state.
    EditInspectorState,
}

impl Hook {
    /// All hook points, in declaration order.
    pub const ALL: [Hook; 20] = [
        Self::TransformCall,
        Self::GetAppRecordName,
        Self::GetAppRootInstance,
        Self::RegisterApplication,
        Self::WalkComponentTree,
        Self::VisitComponentTree,
        Self::WalkComponentParents,
        Self::InspectComponent,
        Self::GetComponentBounds,
        Self::GetComponentName,
        Self::GetComponentInstances,
        Self::GetElementComponent,
        Self::GetComponentRootElements,
        Self::EditComponentState,
        Self::GetComponentDevtoolsOptions,
        Self::GetComponentRenderCode,
        Self::InspectTimelineEvent,
        Self::GetInspectorTree,
        Self::GetInspectorState,
        Self::EditInspectorState,
    ];

    /// Returns the stable wire name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransformCall => "transformCall",
            Self::GetAppRecordName => "getAppRecordName",
            Self::GetAppRootInstance => "getAppRootInstance",
            Self::RegisterApplication => "registerApplication",
            Self::WalkComponentTree => "walkComponentTree",
            Self::VisitComponentTree => "visitComponentTree",
            Self::WalkComponentParents => "walkComponentParents",
            Self::InspectComponent => "inspectComponent",
            Self::GetComponentBounds => "getComponentBounds",
            Self::GetComponentName => "getComponentName",
            Self::GetComponentInstances => "getComponentInstances",
            Self::GetElementComponent => "getElementComponent",
            Self::GetComponentRootElements => "getComponentRootElements",
            Self::EditComponentState => "editComponentState",
            // Historical wire name, kept for client compatibility.
            Self::GetComponentDevtoolsOptions => "getAppDevtoolsOptions",
            Self::GetComponentRenderCode => "getComponentRenderCode",
            Self::InspectTimelineEvent => "inspectTimelineEvent",
            Self::GetInspectorTree => "getInspectorTree",
            Self::GetInspectorState => "getInspectorState",
            Self::EditInspectorState => "editInspectorState",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Hook {
    type Err = UnknownHook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| UnknownHook(s.to_string()))
    }
}

/// Error returned when parsing a string that names no known hook point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hook '{0}'")]
pub struct UnknownHook(pub String);

/// The payload passed through a hook invocation, one variant per hook point.
///
/// The closed sum type is what ties each identifier to its payload shape:
/// constructing a variant with the wrong shape is a compile error, and
/// [`HookRegistry::call`](super::registry::HookRegistry::call) routes each
/// variant to the handlers registered for exactly that hook.
#[derive(Debug)]
pub enum HookPayload {
    /// Payload for [`Hook::TransformCall`].
    TransformCall(TransformCallPayload),
    /// Payload for [`Hook::GetAppRecordName`].
    GetAppRecordName(GetAppRecordNamePayload),
    /// Payload for [`Hook::GetAppRootInstance`].
    GetAppRootInstance(GetAppRootInstancePayload),
    /// Payload for [`Hook::RegisterApplication`].
    RegisterApplication(RegisterApplicationPayload),
    /// Payload for [`Hook::WalkComponentTree`].
    WalkComponentTree(WalkComponentTreePayload),
    /// Payload for [`Hook::VisitComponentTree`].
    VisitComponentTree(VisitComponentTreePayload),
    /// Payload for [`Hook::WalkComponentParents`].
    WalkComponentParents(WalkComponentParentsPayload),
    /// Payload for [`Hook::InspectComponent`].
    InspectComponent(InspectComponentPayload),
    /// Payload for [`Hook::GetComponentBounds`].
    GetComponentBounds(GetComponentBoundsPayload),
    /// Payload for [`Hook::GetComponentName`].
    GetComponentName(GetComponentNamePayload),
    /// Payload for [`Hook::GetComponentInstances`].
    GetComponentInstances(GetComponentInstancesPayload),
    /// Payload for [`Hook::GetElementComponent`].
    GetElementComponent(GetElementComponentPayload),
    /// Payload for [`Hook::GetComponentRootElements`].
    GetComponentRootElements(GetComponentRootElementsPayload),
    /// Payload for [`Hook::EditComponentState`].
    EditComponentState(EditComponentStatePayload),
    /// Payload for [`Hook::GetComponentDevtoolsOptions`].
    GetComponentDevtoolsOptions(GetComponentDevtoolsOptionsPayload),
    /// Payload for [`Hook::GetComponentRenderCode`].
    GetComponentRenderCode(GetComponentRenderCodePayload),
    /// Payload for [`Hook::InspectTimelineEvent`].
    InspectTimelineEvent(InspectTimelineEventPayload),
    /// Payload for [`Hook::GetInspectorTree`].
    GetInspectorTree(GetInspectorTreePayload),
    /// Payload for [`Hook::GetInspectorState`].
    GetInspectorState(GetInspectorStatePayload),
    /// Payload for [`Hook::EditInspectorState`].
    EditInspectorState(EditInspectorStatePayload),
}

impl HookPayload {
    /// Returns the hook point this payload belongs to.
    pub fn hook(&self) -> Hook {
        match self {
            Self::TransformCall(_) => Hook::TransformCall,
            Self::GetAppRecordName(_) => Hook::GetAppRecordName,
            Self::GetAppRootInstance(_) => Hook::GetAppRootInstance,
            Self::RegisterApplication(_) => Hook::RegisterApplication,
            Self::WalkComponentTree(_) => Hook::WalkComponentTree,
            Self::VisitComponentTree(_) => Hook::VisitComponentTree,
            Self::WalkComponentParents(_) => Hook::WalkComponentParents,
            Self::InspectComponent(_) => Hook::InspectComponent,
            Self::GetComponentBounds(_) => Hook::GetComponentBounds,
            Self::GetComponentName(_) => Hook::GetComponentName,
            Self::GetComponentInstances(_) => Hook::GetComponentInstances,
            Self::GetElementComponent(_) => Hook::GetElementComponent,
            Self::GetComponentRootElements(_) => Hook::GetComponentRootElements,
            Self::EditComponentState(_) => Hook::EditComponentState,
            Self::GetComponentDevtoolsOptions(_) => Hook::GetComponentDevtoolsOptions,
            Self::GetComponentRenderCode(_) => Hook::GetComponentRenderCode,
            Self::InspectTimelineEvent(_) => Hook::InspectTimelineEvent,
            Self::GetInspectorTree(_) => Hook::GetInspectorTree,
            Self::GetInspectorState(_) => Hook::GetInspectorState,
            Self::EditInspectorState(_) => Hook::EditInspectorState,
        }
    }
}
