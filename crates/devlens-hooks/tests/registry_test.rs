//! Integration tests for the hook registry: registration independence,
//! multi-handler invocation against a shared payload, and edit write-back.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use devlens_hooks::prelude::*;

/// Execution context shared by all handlers of one backend, the way a real
/// framework backend would carry its own state through hook invocations.
#[derive(Debug)]
struct BackendContext {
    framework: String,
}

/// Stand-in for a live component instance owned by the inspected app.
#[derive(Debug, PartialEq)]
struct FakeComponent {
    name: String,
    bounds: ComponentBounds,
}

fn counter_component() -> FakeComponent {
    FakeComponent {
        name: "Counter".to_string(),
        bounds: ComponentBounds::new(8.0, 16.0, 320.0, 240.0),
    }
}

fn backend_ctx() -> BackendContext {
    BackendContext {
        framework: "devlens".to_string(),
    }
}

#[tokio::test]
async fn handler_fills_output_slot_from_opaque_instance() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_get_component_name(HandlerFn::sync(
        |payload: &mut GetComponentNamePayload, _: &BackendContext| {
            if let Some(component) = payload.instance.downcast_ref::<FakeComponent>() {
                payload.name = component.name.clone();
            }
            Ok(())
        },
    ));

    let mut payload =
        HookPayload::GetComponentName(GetComponentNamePayload::new(InstanceHandle::new(
            counter_component(),
        )));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::GetComponentName(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(p.name, "Counter");
}

#[tokio::test]
async fn async_handler_reads_context() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_get_app_record_name(HandlerFn::new(
        |payload: &mut GetAppRecordNamePayload, ctx: &BackendContext| {
            Box::pin(async move {
                payload.name = format!("{} app", ctx.framework);
                Ok(())
            })
        },
    ));

    let mut payload =
        HookPayload::GetAppRecordName(GetAppRecordNamePayload::new(AppHandle::new(())));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::GetAppRecordName(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(p.name, "devlens app");
}

#[tokio::test]
async fn handlers_run_in_registration_order_on_shared_payload() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_walk_component_tree(HandlerFn::sync(
        |payload: &mut WalkComponentTreePayload, _: &BackendContext| {
            payload.tree_data.push(ComponentTreeNode::new(json!("first")));
            Ok(())
        },
    ));
    registry.on_walk_component_tree(HandlerFn::sync(
        |payload: &mut WalkComponentTreePayload, _: &BackendContext| {
            payload
                .tree_data
                .push(ComponentTreeNode::new(json!("second")));
            Ok(())
        },
    ));

    let mut payload = HookPayload::WalkComponentTree(WalkComponentTreePayload::new(
        InstanceHandle::new(counter_component()),
        10,
        "",
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::WalkComponentTree(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(
        p.tree_data,
        vec![
            ComponentTreeNode::new(json!("first")),
            ComponentTreeNode::new(json!("second")),
        ]
    );
    // Inputs are untouched by handlers that only fill their output slot.
    assert_eq!(p.max_depth, 10);
    assert_eq!(p.filter, "");
}

#[tokio::test]
async fn second_handler_does_not_disturb_unrelated_fields() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    // First handler resolves the bounds from the instance.
    registry.on_get_component_bounds(HandlerFn::sync(
        |payload: &mut GetComponentBoundsPayload, _: &BackendContext| {
            if let Some(component) = payload.instance.downcast_ref::<FakeComponent>() {
                payload.bounds = component.bounds;
            }
            Ok(())
        },
    ));
    // Second handler only observes; the resolved bounds must survive it.
    let observed = Arc::new(Mutex::new(ComponentBounds::default()));
    let observed_in_handler = Arc::clone(&observed);
    registry.on_get_component_bounds(HandlerFn::sync(
        move |payload: &mut GetComponentBoundsPayload, _: &BackendContext| {
            *observed_in_handler.lock().unwrap() = payload.bounds;
            Ok(())
        },
    ));

    let instance = InstanceHandle::new(counter_component());
    let mut payload =
        HookPayload::GetComponentBounds(GetComponentBoundsPayload::new(instance.clone()));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::GetComponentBounds(p) = payload else {
        panic!("payload variant changed");
    };
    let expected = ComponentBounds::new(8.0, 16.0, 320.0, 240.0);
    assert_eq!(p.bounds, expected);
    assert_eq!(*observed.lock().unwrap(), expected);
    assert!(p.instance.ptr_eq(&instance));
}

#[tokio::test]
async fn registration_for_one_hook_leaves_others_untouched() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_inspect_component(HandlerFn::sync(
        |payload: &mut InspectComponentPayload, _: &BackendContext| {
            payload.instance_data = InspectedComponentData::new(json!({ "state": [] }));
            Ok(())
        },
    ));

    assert_eq!(registry.registered_hooks(), vec![Hook::InspectComponent]);

    // A hook without handlers stays a no-op.
    let mut payload = HookPayload::GetComponentRenderCode(GetComponentRenderCodePayload::new(
        InstanceHandle::new(counter_component()),
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::GetComponentRenderCode(p) = payload else {
        panic!("payload variant changed");
    };
    assert!(p.code.is_empty());
}

#[tokio::test]
async fn handler_error_names_the_hook_and_stops_the_run() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_get_inspector_state(HandlerFn::sync(
        |_: &mut GetInspectorStatePayload, _: &BackendContext| anyhow::bail!("store not ready"),
    ));
    let ran_second = Arc::new(Mutex::new(false));
    let ran_second_in_handler = Arc::clone(&ran_second);
    registry.on_get_inspector_state(HandlerFn::sync(
        move |_: &mut GetInspectorStatePayload, _: &BackendContext| {
            *ran_second_in_handler.lock().unwrap() = true;
            Ok(())
        },
    ));

    let mut payload = HookPayload::GetInspectorState(GetInspectorStatePayload::new(
        AppHandle::new(()),
        "router",
        "route-1",
    ));
    let err = registry
        .call(&mut payload, &backend_ctx())
        .await
        .unwrap_err();

    assert_eq!(err.hook, Hook::GetInspectorState);
    assert!(err.to_string().contains("getInspectorState"));
    assert!(err.to_string().contains("store not ready"));
    assert!(!*ran_second.lock().unwrap());
}

#[tokio::test]
async fn edit_component_state_writes_through_setter() {
    // Host state lives outside the contract; the handler writes into it
    // through the setter carried by the payload.
    let host_state = Arc::new(Mutex::new(json!({ "count": 0 })));
    let setter_state = Arc::clone(&host_state);
    let set: StateSetter = Arc::new(move |_target: &mut Value, path, value| {
        let mut state = setter_state.lock().unwrap();
        if let [field] = path {
            state[field] = value;
        }
    });

    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_edit_component_state(HandlerFn::sync(
        |payload: &mut EditComponentStatePayload, _: &BackendContext| {
            if let Some(value) = payload.state.value() {
                let mut scratch = Value::Null;
                (payload.set)(&mut scratch, &payload.path, value.clone());
            }
            Ok(())
        },
    ));

    let mut payload = HookPayload::EditComponentState(EditComponentStatePayload::new(
        AppHandle::new(()),
        InstanceHandle::new(counter_component()),
        vec!["count".to_string()],
        "data",
        EditStatePayload::set(json!(42)),
        set,
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    assert_eq!(*host_state.lock().unwrap(), json!({ "count": 42 }));
}

#[tokio::test]
async fn transform_call_defaults_to_identity() {
    let registry: HookRegistry<BackendContext> = HookRegistry::new();
    let mut payload = HookPayload::TransformCall(TransformCallPayload::new(
        "addTimelineEvent",
        vec![json!("layer"), json!({ "time": 1 })],
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::TransformCall(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(p.out_args, p.in_args);
}

#[tokio::test]
async fn register_application_is_side_effect_only() {
    let seen_apps = Arc::new(Mutex::new(0usize));
    let seen_in_handler = Arc::clone(&seen_apps);

    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_register_application(HandlerFn::sync(
        move |_: &mut RegisterApplicationPayload, _: &BackendContext| {
            *seen_in_handler.lock().unwrap() += 1;
            Ok(())
        },
    ));

    let mut payload =
        HookPayload::RegisterApplication(RegisterApplicationPayload::new(AppHandle::new(())));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    assert_eq!(*seen_apps.lock().unwrap(), 1);
}

#[tokio::test]
async fn element_lookup_resolves_owning_component() {
    let owner = InstanceHandle::new(counter_component());
    let owner_for_handler = owner.clone();

    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_get_element_component(HandlerFn::sync(
        move |payload: &mut GetElementComponentPayload, _: &BackendContext| {
            payload.instance = Some(owner_for_handler.clone());
            Ok(())
        },
    ));

    let mut payload = HookPayload::GetElementComponent(GetElementComponentPayload::new(
        ElementHandle::new("div#app"),
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::GetElementComponent(p) = payload else {
        panic!("payload variant changed");
    };
    assert!(p.instance.as_ref().is_some_and(|i| i.ptr_eq(&owner)));
}

#[tokio::test]
async fn custom_inspector_tree_and_state() {
    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_get_inspector_tree(HandlerFn::sync(
        |payload: &mut GetInspectorTreePayload, _: &BackendContext| {
            if payload.inspector_id == "router" {
                payload
                    .root_nodes
                    .push(CustomInspectorNode::new(json!({ "id": "route-1" })));
            }
            Ok(())
        },
    ));
    registry.on_get_inspector_state(HandlerFn::sync(
        |payload: &mut GetInspectorStatePayload, _: &BackendContext| {
            payload.state = CustomInspectorState::new(json!({ "path": "/home" }));
            Ok(())
        },
    ));

    let ctx = backend_ctx();

    let mut payload = HookPayload::GetInspectorTree(GetInspectorTreePayload::new(
        AppHandle::new(()),
        "router",
        "",
    ));
    registry.call(&mut payload, &ctx).await.unwrap();
    let HookPayload::GetInspectorTree(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(p.root_nodes.len(), 1);

    // The same inspector id against an unrelated inspector yields nothing.
    let mut payload = HookPayload::GetInspectorTree(GetInspectorTreePayload::new(
        AppHandle::new(()),
        "pinia",
        "",
    ));
    registry.call(&mut payload, &ctx).await.unwrap();
    let HookPayload::GetInspectorTree(p) = payload else {
        panic!("payload variant changed");
    };
    assert!(p.root_nodes.is_empty());

    let mut payload = HookPayload::GetInspectorState(GetInspectorStatePayload::new(
        AppHandle::new(()),
        "router",
        "route-1",
    ));
    registry.call(&mut payload, &ctx).await.unwrap();
    let HookPayload::GetInspectorState(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(p.state.as_value()["path"], "/home");
}

#[tokio::test]
async fn edit_inspector_state_remove_carries_no_value() {
    let removed = Arc::new(Mutex::new(Vec::<String>::new()));
    let removed_in_handler = Arc::clone(&removed);

    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_edit_inspector_state(HandlerFn::sync(
        move |payload: &mut EditInspectorStatePayload, _: &BackendContext| {
            assert!(payload.state.value().is_none());
            if payload.state.is_remove() {
                removed_in_handler
                    .lock()
                    .unwrap()
                    .extend(payload.path.iter().cloned());
            }
            Ok(())
        },
    ));

    let set: StateSetter = Arc::new(|_, _, _| {});
    let mut payload = HookPayload::EditInspectorState(EditInspectorStatePayload::new(
        AppHandle::new(()),
        "router",
        "route-1",
        vec!["query".to_string()],
        "state",
        EditStatePayload::Remove,
        set,
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    assert_eq!(*removed.lock().unwrap(), vec!["query".to_string()]);
}

#[tokio::test]
async fn walk_component_parents_returns_opaque_handles() {
    let parent = InstanceHandle::new(counter_component());
    let parent_for_handler = parent.clone();

    let mut registry: HookRegistry<BackendContext> = HookRegistry::new();
    registry.on_walk_component_parents(HandlerFn::sync(
        move |payload: &mut WalkComponentParentsPayload, _: &BackendContext| {
            payload.parent_instances.push(parent_for_handler.clone());
            Ok(())
        },
    ));

    let mut payload = HookPayload::WalkComponentParents(WalkComponentParentsPayload::new(
        InstanceHandle::new(()),
    ));
    registry.call(&mut payload, &backend_ctx()).await.unwrap();

    let HookPayload::WalkComponentParents(p) = payload else {
        panic!("payload variant changed");
    };
    assert_eq!(p.parent_instances.len(), 1);
    assert!(p.parent_instances[0].ptr_eq(&parent));
}
