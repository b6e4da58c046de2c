//! Edit operations applied to inspected state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An edit requested by the inspector UI against a piece of inspected state.
///
/// The two variants are mutually exclusive by construction: a removal can
/// never carry a replacement value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditStatePayload {
    /// Replace the value at the target path, optionally renaming its key.
    #[serde(rename_all = "camelCase")]
    Set {
        /// The new value to write.
        value: Value,
        /// New key name, when the edit also renames the field.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_key: Option<String>,
    },
    /// Remove the entry at the target path.
    Remove,
}

impl EditStatePayload {
    /// Creates a plain value replacement.
    pub fn set(value: Value) -> Self {
        Self::Set {
            value,
            new_key: None,
        }
    }

    /// Creates a value replacement that also renames the key.
    pub fn set_renamed(value: Value, new_key: impl Into<String>) -> Self {
        Self::Set {
            value,
            new_key: Some(new_key.into()),
        }
    }

    /// Returns the value being written, or `None` for a removal.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Set { value, .. } => Some(value),
            Self::Remove => None,
        }
    }

    /// Returns the new key name, if the edit renames the field.
    pub fn new_key(&self) -> Option<&str> {
        match self {
            Self::Set { new_key, .. } => new_key.as_deref(),
            Self::Remove => None,
        }
    }

    /// Returns whether this edit removes the entry.
    pub fn is_remove(&self) -> bool {
        matches!(self, Self::Remove)
    }
}

/// Callback a hook handler uses to write an edited value back into host
/// state.
///
/// Arguments: the target object, the path into it, and the value to write.
/// The implementation is supplied by the caller that owns the state; the
/// contract only carries the callback inside the edit payloads.
pub type StateSetter = Arc<dyn Fn(&mut Value, &[String], Value) + Send + Sync>;
