//! Identifier form checks.
//!
//! Resource identifiers are UUID-shaped by default; a resource may accept
//! further forms through the alternate-ID matchers registered on a
//! [`ResourceRegistry`].

use std::sync::LazyLock;

use regex::Regex;

use crate::registry::ResourceRegistry;

/// Hyphenated UUID shape, any case, matched against the full string.
static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern compiles")
});

/// Returns true when `s` looks like a UUID.
///
/// This is a shape check only; it does not verify version or variant
/// bits.
#[must_use]
pub fn is_uuid(s: &str) -> bool {
    UUID_RE.is_match(s)
}

/// Returns true when `id` is an acceptable identifier for
/// `resource_name`: UUID-shaped, or matched by any alternate-ID pattern
/// registered for the resource.
#[must_use]
pub fn id_matches(registry: &ResourceRegistry, resource_name: &str, id: &str) -> bool {
    is_uuid(id)
        || registry
            .alt_id_matchers_for(resource_name)
            .iter()
            .any(|matcher| matcher.is_match(id))
}
