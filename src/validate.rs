//! Path validation against a resource registry.

use tracing::debug;

use crate::errors::PathError;
use crate::extract::extract_path_info;
use crate::ident::id_matches;
use crate::registry::ResourceRegistry;

/// Check `path` for proper form, known resource names, and plausible
/// identifier forms.
///
/// Returns the path unchanged on success so calls can be chained with the
/// generators and the decomposer:
///
/// ```
/// use resource_paths::prelude::*;
///
/// let mut registry = ResourceRegistry::new();
/// registry.add_resource("persons");
///
/// let path = generate_item_create_path("persons");
/// let info = extract_path_info(validate_path(&registry, &path)?)?;
/// assert!(info.is_item);
/// # Ok::<(), PathError>(())
/// ```
///
/// Identifier checks are purely syntactic (UUID shape or a registered
/// alternate-ID pattern); no check is made that a specific item or
/// context resource exists. The context pairing may still be invalid
/// under context mapping even when both names are registered.
pub fn validate_path<'p>(
    registry: &ResourceRegistry,
    path: &'p str,
) -> Result<&'p str, PathError> {
    let info = extract_path_info(path)?;

    // Resource names first.
    if !registry.is_resource_defined(&info.resource_name) {
        debug!(path, resource = %info.resource_name, "unknown resource in path");
        return Err(PathError::UnknownResource {
            name: info.resource_name,
            path: path.to_owned(),
        });
    }
    if let Some(ctx_name) = &info.ctx_resource_name {
        if !registry.is_resource_defined(ctx_name) {
            debug!(path, resource = %ctx_name, "unknown context resource in path");
            return Err(PathError::UnknownResource {
                name: ctx_name.clone(),
                path: path.to_owned(),
            });
        }
    }

    // Then the form of any IDs present.
    if let Some(pub_id) = &info.pub_id {
        if !id_matches(registry, &info.resource_name, pub_id) {
            debug!(path, id = %pub_id, "identifier form not accepted for resource");
            return Err(PathError::InvalidIdentifier {
                id: pub_id.clone(),
                path: path.to_owned(),
            });
        }
    }
    if let (Some(ctx_name), Some(ctx_id)) = (&info.ctx_resource_name, &info.ctx_pub_id) {
        if !id_matches(registry, ctx_name, ctx_id) {
            debug!(path, id = %ctx_id, "context identifier form not accepted for resource");
            return Err(PathError::InvalidIdentifier {
                id: ctx_id.clone(),
                path: path.to_owned(),
            });
        }
    }

    Ok(path)
}
