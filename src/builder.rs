//! Path generators.
//!
//! Pure string builders for each recognized path form. None of these
//! validate that a resource name is registered; call
//! [`validate_path`](crate::validate::validate_path) on the result when
//! that matters. Only [`generate_context_list_path`] consults the
//! registry, and only for context mapping.
//!
//! Missing identifiers are explicit: generators take `Option<&str>` and a
//! `None` inserts the placeholder. An empty string counts as a provided
//! identifier and is emitted verbatim.

use crate::registry::ResourceRegistry;

/// Placeholder inserted when an item identifier is not provided.
pub const ID_PLACEHOLDER: &str = ":id";

/// Placeholder inserted when a context identifier is not provided.
pub const CONTEXT_ID_PLACEHOLDER: &str = ":contextId";

/// Path to a resource's global list: `/{resource_name}/`.
#[must_use]
pub fn generate_global_list_path(resource_name: &str) -> String {
    format!("/{resource_name}/")
}

/// Path to the create form of a resource: `/{resource_name}/create/`.
#[must_use]
pub fn generate_item_create_path(resource_name: &str) -> String {
    format!("/{resource_name}/create/")
}

/// Path to view an item: `/{resource_name}/{id}/`.
#[must_use]
pub fn generate_item_view_path(resource_name: &str, id: Option<&str>) -> String {
    format!("/{resource_name}/{}/", id.unwrap_or(ID_PLACEHOLDER))
}

/// Path to edit an item: `/{resource_name}/{id}/edit/`.
#[must_use]
pub fn generate_item_edit_path(resource_name: &str, id: Option<&str>) -> String {
    format!("/{resource_name}/{}/edit/", id.unwrap_or(ID_PLACEHOLDER))
}

/// Path to a resource list scoped by a context resource.
///
/// When a mapper is registered for the `(resource_name,
/// ctx_resource_name)` pair, the mapped segments are used and the result
/// carries a trailing slash: `/{mapped}/{id}/{resource_name}/`. The
/// unmapped fallback form carries no trailing slash; consumers depend on
/// that asymmetry.
#[must_use]
pub fn generate_context_list_path(
    registry: &ResourceRegistry,
    ctx_resource_name: &str,
    ctx_id: Option<&str>,
    resource_name: &str,
) -> String {
    match registry.context_mapper_for(resource_name, ctx_resource_name) {
        Some(mapper) => {
            let mapped = mapper(ctx_id);
            let id = mapped.id.as_deref().unwrap_or(CONTEXT_ID_PLACEHOLDER);
            format!("/{}/{id}/{resource_name}/", mapped.context)
        }
        None => {
            let id = ctx_id.unwrap_or(CONTEXT_ID_PLACEHOLDER);
            format!("/{ctx_resource_name}/{id}/{resource_name}")
        }
    }
}
