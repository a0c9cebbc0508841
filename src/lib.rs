//! Shared path grammar for REST-like UI resource addressing.
//!
//! UI code that both builds links and interprets the current location
//! needs a single source of truth for path shape, so that path
//! construction and path interpretation never drift apart. This crate
//! centralizes that grammar: generators for each recognized path form, a
//! decomposer that turns a path string into a structured
//! [`PathInfo`](info::PathInfo) record, and an opt-in validator that
//! checks resource names and identifier forms against a
//! [`ResourceRegistry`](registry::ResourceRegistry).
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_paths::prelude::*;
//!
//! let mut registry = ResourceRegistry::new();
//! registry.add_resource("persons");
//! registry.add_resource("places");
//!
//! // Build a path, validate it, and read it back.
//! let path = generate_item_view_path("persons", Some("C6B4E077-91F1-4BC3-A857-42EFC7B9D247"));
//! let info = extract_path_info(validate_path(&registry, &path)?)?;
//! assert!(info.is_item && info.is_uuid);
//! assert_eq!(info.action_mode, ActionMode::View);
//! # Ok::<(), PathError>(())
//! ```
//!
//! ## Recognized path forms
//!
//! | Form | Shape | Action mode |
//! |---|---|---|
//! | Global list | `/persons/` | view |
//! | Item view | `/persons/{id}/` | view |
//! | Item edit | `/persons/{id}/edit/` | edit |
//! | Item create | `/persons/create/` | create |
//! | Context list | `/places/{id}/persons/` | view |
//!
//! Canonical paths carry a leading and a trailing `/`. An optional
//! `?query` suffix is split off and ignored during decomposition.
//!
//! Generators perform no validation, so links can be built for resources
//! the registry has never heard of; validation is a separate step for
//! callers that need it.

pub mod builder;
pub mod errors;
pub mod extract;
pub mod ident;
pub mod info;
pub mod prelude;
pub mod registry;
pub mod validate;
