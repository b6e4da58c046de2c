//! Custom-inspector and timeline collaborator shapes.

use crate::handles::define_record;

define_record!(
    /// A node in a custom inspector tree.
    CustomInspectorNode
);

define_record!(
    /// The state panel content for a selected custom inspector node.
    CustomInspectorState
);

define_record!(
    /// An event recorded on a timeline layer.
    TimelineEvent
);
