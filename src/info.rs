//! Decomposition records.

use std::fmt;

use serde::Serialize;

/// Intent signaled by a path's trailing segment.
///
/// List paths always carry [`ActionMode::View`]. The action mode hints at
/// how a UI should render the target; it does not limit the operations a
/// UI may offer (a view-mode page can still expose update controls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    View,
    Create,
    Edit,
}

impl ActionMode {
    /// Wire/display form of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionMode::View => "view",
            ActionMode::Create => "create",
            ActionMode::Edit => "edit",
        }
    }
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of a resource path, produced by
/// [`extract_path_info`](crate::extract::extract_path_info).
///
/// Exactly one of `is_item`/`is_list` is true. `ctx_resource_name` and
/// `ctx_pub_id` are present iff the path is a context-list path
/// (3 segments, non-edit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathInfo {
    /// Name of the final, displayed resource.
    pub resource_name: String,

    /// Public identifier of the displayed resource, for item paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_id: Option<String>,

    /// Whether the path's identifier matches the UUID shape. Refers to
    /// `pub_id` for item paths and `ctx_pub_id` for context lists; false
    /// when the path carries no identifier.
    pub is_uuid: bool,

    /// Context resource name, only for context-list paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx_resource_name: Option<String>,

    /// Context resource identifier, only for context-list paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx_pub_id: Option<String>,

    /// True iff the path addresses a single item.
    pub is_item: bool,

    /// True iff the path addresses a collection.
    pub is_list: bool,

    /// Intent signaled by the path's trailing segment.
    pub action_mode: ActionMode,
}
