//! Resource registry.
//!
//! The settings provider the grammar engine queries: known resource
//! names, per-resource alternate-ID matchers, and per-resource-pair
//! context mappers. The registry is an explicit object; construct one per
//! application context, populate it during initialization, and pass it by
//! reference into validation and context-list generation.
//!
//! No operation fails and inputs are trusted (no schema validation); this
//! is a deliberate simplicity trade-off. The registry performs no
//! internal synchronization; a multi-threaded host must serialize
//! mutation against reads itself.

use std::collections::{HashMap, HashSet};
use std::fmt;

use regex::Regex;

/// Remapped context segments returned by a [`ContextMapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedContext {
    /// Path segment replacing the context resource name.
    pub context: String,
    /// Path segment replacing the context identifier; `None` falls back
    /// to the placeholder at generation time.
    pub id: Option<String>,
}

/// Remaps a (context resource, context id) pair onto different path
/// segments, for resources whose context path diverges from the literal
/// parent/child naming (an alias, or a non-literal relationship).
pub type ContextMapper = Box<dyn Fn(Option<&str>) -> MappedContext + Send + Sync>;

/// Known resource names, alternate-ID rules, and context mappers.
pub struct ResourceRegistry {
    resources: HashSet<String>,
    alt_id_matchers: HashMap<String, Vec<Regex>>,
    // Two-level: resource name -> context resource name -> mapper.
    context_mappers: HashMap<String, HashMap<String, ContextMapper>>,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: HashSet::new(),
            alt_id_matchers: HashMap::new(),
            context_mappers: HashMap::new(),
        }
    }

    // Known resources

    /// Whether `name` has been registered as a resource.
    #[must_use]
    pub fn is_resource_defined(&self, name: &str) -> bool {
        self.resources.contains(name)
    }

    /// Register a resource name. Idempotent.
    pub fn add_resource(&mut self, name: impl Into<String>) {
        self.resources.insert(name.into());
    }

    /// Replace the full known-resource set.
    pub fn set_resources(&mut self, resources: HashSet<String>) {
        self.resources = resources;
    }

    /// The registered resource names.
    #[must_use]
    pub fn resources(&self) -> &HashSet<String> {
        &self.resources
    }

    // Alternate IDs

    /// Alternate-ID patterns registered for `name`, in registration
    /// order. Empty when none are registered; callers cannot distinguish
    /// an unregistered resource from one with no alternate-ID rules.
    #[must_use]
    pub fn alt_id_matchers_for(&self, name: &str) -> &[Regex] {
        self.alt_id_matchers.get(name).map_or(&[], Vec::as_slice)
    }

    /// The full alternate-ID mapping.
    #[must_use]
    pub fn alt_id_matchers(&self) -> &HashMap<String, Vec<Regex>> {
        &self.alt_id_matchers
    }

    /// Append one pattern to the resource's alternate-ID list, creating
    /// the list if absent.
    pub fn add_alt_id_matcher(&mut self, name: impl Into<String>, matcher: Regex) {
        self.alt_id_matchers
            .entry(name.into())
            .or_default()
            .push(matcher);
    }

    /// Append a sequence of patterns, preserving order.
    pub fn add_alt_id_matchers(
        &mut self,
        name: impl Into<String>,
        matchers: impl IntoIterator<Item = Regex>,
    ) {
        self.alt_id_matchers
            .entry(name.into())
            .or_default()
            .extend(matchers);
    }

    /// Replace the full alternate-ID mapping.
    pub fn set_alt_id_matchers(&mut self, matchers: HashMap<String, Vec<Regex>>) {
        self.alt_id_matchers = matchers;
    }

    // Context mappers

    /// The mapper registered for the `(resource_name,
    /// ctx_resource_name)` pair, if any.
    #[must_use]
    pub fn context_mapper_for(
        &self,
        resource_name: &str,
        ctx_resource_name: &str,
    ) -> Option<&ContextMapper> {
        self.context_mappers.get(resource_name)?.get(ctx_resource_name)
    }

    /// Register a mapper for the pair, overwriting any existing mapper.
    pub fn add_context_mapper(
        &mut self,
        resource_name: impl Into<String>,
        ctx_resource_name: impl Into<String>,
        mapper: impl Fn(Option<&str>) -> MappedContext + Send + Sync + 'static,
    ) {
        self.context_mappers
            .entry(resource_name.into())
            .or_default()
            .insert(ctx_resource_name.into(), Box::new(mapper));
    }

    /// Replace the full two-level mapper table.
    pub fn set_resource_mappers(
        &mut self,
        mappers: HashMap<String, HashMap<String, ContextMapper>>,
    ) {
        self.context_mappers = mappers;
    }
}

impl fmt::Debug for ResourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mappers are opaque closures; list the registered pairs instead.
        let mapper_pairs: Vec<(&str, &str)> = self
            .context_mappers
            .iter()
            .flat_map(|(resource, by_ctx)| {
                by_ctx.keys().map(move |ctx| (resource.as_str(), ctx.as_str()))
            })
            .collect();
        f.debug_struct("ResourceRegistry")
            .field("resources", &self.resources)
            .field("alt_id_matchers", &self.alt_id_matchers)
            .field("context_mappers", &mapper_pairs)
            .finish()
    }
}
