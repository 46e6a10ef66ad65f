//! Contract resolution: mapping between local field names and wire field names

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

/// Maps a program's typed values to and from wire field names.
///
/// The wire engine consults the resolver for every object member it writes
/// or reads. Implementations must be cheap to query and safe to share
/// across concurrent calls; the adapter holds one instance for its entire
/// lifetime.
pub trait ContractResolver: fmt::Debug + Send + Sync {
    /// Wire name for a local field, or `None` to keep the name as-is.
    fn outgoing_name(&self, field: &str) -> Option<&str>;

    /// Local name for a wire field, or `None` to keep the name as-is.
    fn incoming_name(&self, field: &str) -> Option<&str>;

    /// Runtime identification hook used to validate the configured
    /// resolver type at adapter construction.
    fn as_any(&self) -> &dyn Any;
}

/// The resolver type required by [`Serializer`](crate::Serializer).
///
/// Quarry's wire format uses snake_case field names, so local names pass
/// through verbatim by default. Individual fields can be renamed with
/// [`with_rename`](QuarryContractResolver::with_rename); renames apply
/// symmetrically on the write and read paths.
#[derive(Debug, Clone, Default)]
pub struct QuarryContractResolver {
    outgoing: BTreeMap<String, String>,
    incoming: BTreeMap<String, String>,
}

impl QuarryContractResolver {
    /// Create a resolver that preserves every field name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rename from `local` to `wire`.
    ///
    /// Applies to every object member with that name, at any nesting depth.
    pub fn with_rename(mut self, local: impl Into<String>, wire: impl Into<String>) -> Self {
        let local = local.into();
        let wire = wire.into();
        self.incoming.insert(wire.clone(), local.clone());
        self.outgoing.insert(local, wire);
        self
    }

    /// Number of registered renames.
    pub fn rename_count(&self) -> usize {
        self.outgoing.len()
    }
}

impl ContractResolver for QuarryContractResolver {
    fn outgoing_name(&self, field: &str) -> Option<&str> {
        self.outgoing.get(field).map(String::as_str)
    }

    fn incoming_name(&self, field: &str) -> Option<&str> {
        self.incoming.get(field).map(String::as_str)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
