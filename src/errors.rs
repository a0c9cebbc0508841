//! Error types for the path grammar engine.

use thiserror::Error;

/// Errors raised while decomposing or validating a resource path.
///
/// Every variant carries the offending path so the failure can be
/// reported at the UI boundary without extra context. All errors are
/// raised synchronously to the immediate caller; nothing is retried or
/// recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path lacks the canonical leading/trailing `/`, or its segment
    /// shape does not match any recognized path form.
    #[error("cannot extract information from non-canonical path '{path}'; expected a leading and trailing '/' and a recognized segment shape")]
    Format { path: String },

    /// A resource or context-resource name is not present in the
    /// registry.
    #[error("unknown resource '{name}' found in path '{path}'")]
    UnknownResource { name: String, path: String },

    /// An identifier matched neither the UUID shape nor any registered
    /// alternate-ID pattern for its resource.
    #[error("no valid resource ID found where expected in path '{path}' (got '{id}'); define an alternate ID matcher if this form is intentional")]
    InvalidIdentifier { id: String, path: String },
}
