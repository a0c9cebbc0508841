//! # Prelude
//!
//! Re-exports commonly used types and functions for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use resource_paths::prelude::*;
//!
//! let path = generate_global_list_path("persons");
//! assert_eq!(path, "/persons/");
//! ```
//!
//! This brings into scope:
//! - The path generators and their placeholder constants
//! - `extract_path_info` and the `PathInfo` / `ActionMode` records
//! - `validate_path` and the `PathError` taxonomy
//! - `ResourceRegistry` and the context-mapper types
//! - The `is_uuid` shape predicate

pub use crate::builder::{
    generate_context_list_path, generate_global_list_path, generate_item_create_path,
    generate_item_edit_path, generate_item_view_path, CONTEXT_ID_PLACEHOLDER, ID_PLACEHOLDER,
};
pub use crate::errors::PathError;
pub use crate::extract::extract_path_info;
pub use crate::ident::is_uuid;
pub use crate::info::{ActionMode, PathInfo};
pub use crate::registry::{ContextMapper, MappedContext, ResourceRegistry};
pub use crate::validate::validate_path;
