//! Path decomposition.
//!
//! Turns a canonical path string into a structured [`PathInfo`] record.
//! Classification runs over an explicit [`PathShape`] decision table so
//! the precedence between path forms (item beats global-list beats create
//! beats context-list) is visible and testable.

use tracing::trace;

use crate::errors::PathError;
use crate::ident::is_uuid;
use crate::info::{ActionMode, PathInfo};

/// Recognized segment shapes, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathShape {
    /// `/{resource}/{id}/` or `/{resource}/{id}/edit/`.
    Item,
    /// `/{resource}/`.
    GlobalList,
    /// `/{resource}/create/`.
    CreateItem,
    /// `/{ctx}/{ctx_id}/{resource}/`.
    ContextList,
}

/// Classify a segment list. Arm order encodes the precedence: a 2-segment
/// path is an item unless the second segment is `create`, and a 3-segment
/// path is an item when it ends in `edit`. Shapes outside the grammar
/// (zero segments, four or more) return `None`.
fn classify(segments: &[&str]) -> Option<PathShape> {
    match segments {
        [_, id] if *id != "create" => Some(PathShape::Item),
        [_, _, "edit"] => Some(PathShape::Item),
        [_] => Some(PathShape::GlobalList),
        [_, "create"] => Some(PathShape::CreateItem),
        [_, _, _] => Some(PathShape::ContextList),
        _ => None,
    }
}

/// Split a canonical path into segments, discarding any `?query` suffix.
/// Stringent: exactly one leading and one trailing `/` are required.
fn split_path(path: &str) -> Result<Vec<&str>, PathError> {
    let path_name = path.split_once('?').map_or(path, |(name, _query)| name);
    let inner = path_name
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .ok_or_else(|| PathError::Format {
            path: path.to_owned(),
        })?;
    Ok(inner.split('/').collect())
}

/// Decompose `path` into a [`PathInfo`] record.
///
/// Validates the path form only; resource names are not checked against
/// any registry. Call [`validate_path`](crate::validate::validate_path)
/// when the names matter.
///
/// ```
/// use resource_paths::prelude::*;
///
/// let info = extract_path_info("/persons/C6B4E077-91F1-4BC3-A857-42EFC7B9D247/")?;
/// assert_eq!(info.resource_name, "persons");
/// assert!(info.is_item && info.is_uuid);
/// assert_eq!(info.action_mode, ActionMode::View);
/// # Ok::<(), PathError>(())
/// ```
pub fn extract_path_info(path: &str) -> Result<PathInfo, PathError> {
    let segments = split_path(path)?;

    // The action mode reads the path as given; a query suffix therefore
    // suppresses edit/create detection.
    let action_mode = if path.ends_with("/edit/") {
        ActionMode::Edit
    } else if path.ends_with("/create/") {
        ActionMode::Create
    } else {
        ActionMode::View
    };

    let shape = classify(&segments).ok_or_else(|| PathError::Format {
        path: path.to_owned(),
    })?;
    trace!(path, ?shape, ?action_mode, "decomposed resource path");

    let info = match shape {
        PathShape::Item => {
            let pub_id = segments[1];
            PathInfo {
                resource_name: segments[0].to_owned(),
                pub_id: Some(pub_id.to_owned()),
                is_uuid: is_uuid(pub_id),
                ctx_resource_name: None,
                ctx_pub_id: None,
                is_item: true,
                is_list: false,
                action_mode,
            }
        }
        PathShape::GlobalList => PathInfo {
            resource_name: segments[0].to_owned(),
            pub_id: None,
            is_uuid: false,
            ctx_resource_name: None,
            ctx_pub_id: None,
            is_item: false,
            is_list: true,
            action_mode,
        },
        PathShape::CreateItem => PathInfo {
            resource_name: segments[0].to_owned(),
            pub_id: None,
            is_uuid: false,
            ctx_resource_name: None,
            ctx_pub_id: None,
            is_item: true,
            is_list: false,
            action_mode,
        },
        PathShape::ContextList => {
            let ctx_pub_id = segments[1];
            PathInfo {
                resource_name: segments[2].to_owned(),
                pub_id: None,
                is_uuid: is_uuid(ctx_pub_id),
                ctx_resource_name: Some(segments[0].to_owned()),
                ctx_pub_id: Some(ctx_pub_id.to_owned()),
                is_item: false,
                is_list: true,
                action_mode,
            }
        }
    };
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_encodes_shape_precedence() {
        assert_eq!(classify(&["persons"]), Some(PathShape::GlobalList));
        assert_eq!(classify(&["persons", "self"]), Some(PathShape::Item));
        assert_eq!(classify(&["persons", "create"]), Some(PathShape::CreateItem));
        assert_eq!(classify(&["persons", "abc", "edit"]), Some(PathShape::Item));
        assert_eq!(
            classify(&["places", "abc", "persons"]),
            Some(PathShape::ContextList)
        );
    }

    #[test]
    fn classify_rejects_shapes_outside_the_grammar() {
        assert_eq!(classify(&[]), None);
        assert_eq!(classify(&["a", "b", "c", "d"]), None);
    }

    #[test]
    fn split_path_requires_leading_and_trailing_slash() {
        assert!(split_path("/persons/").is_ok());
        assert!(split_path("persons/").is_err());
        assert!(split_path("/persons").is_err());
        assert!(split_path("persons").is_err());
    }

    #[test]
    fn split_path_discards_query_suffix() {
        let segments = split_path("/persons/?sort=name").expect("canonical path");
        assert_eq!(segments, vec!["persons"]);
    }
}
