//! Opaque references to objects owned by the inspected application.
//!
//! The hook contract never looks inside an app, a component instance, or a
//! rendered element — it only carries references to them between the caller
//! and the registered handlers. Each reference kind gets its own newtype so
//! that an element cannot be passed where an instance is expected.
//!
//! Handles wrap live host objects and are therefore not serializable;
//! shipping them across a process boundary is outside this contract.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Macro to define an opaque handle newtype around `Arc<dyn Any>`.
macro_rules! define_handle {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Arc<dyn Any + Send + Sync>);

        impl $name {
            /// Wraps a host object into an opaque handle.
            pub fn new<T: Any + Send + Sync>(value: T) -> Self {
                Self(Arc::new(value))
            }

            /// Borrows the underlying host object if it is of type `T`.
            pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
                self.0.downcast_ref::<T>()
            }

            /// Returns whether both handles refer to the same host object.
            pub fn ptr_eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

define_handle!(
    /// Opaque reference to an application registered with the inspector.
    AppHandle
);

define_handle!(
    /// Opaque reference to a component instance inside an inspected app.
    InstanceHandle
);

define_handle!(
    /// Opaque reference to a rendered element (DOM node or platform view).
    ElementHandle
);

/// Macro to define a pass-through record newtype around `serde_json::Value`.
///
/// These shapes are produced and consumed by the backend and the inspector
/// UI; the contract forwards them without interpreting their contents.
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub serde_json::Value);

        impl $name {
            /// Wraps a raw value.
            pub fn new(value: serde_json::Value) -> Self {
                Self(value)
            }

            /// Returns a reference to the raw value.
            pub fn as_value(&self) -> &serde_json::Value {
                &self.0
            }

            /// Consumes the record, returning the raw value.
            pub fn into_value(self) -> serde_json::Value {
                self.0
            }

            /// Returns whether the record has not been filled in yet.
            pub fn is_empty(&self) -> bool {
                self.0.is_null()
            }
        }

        impl From<serde_json::Value> for $name {
            fn from(value: serde_json::Value) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use define_record;
