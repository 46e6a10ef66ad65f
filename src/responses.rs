//! Response types for Quarry administrative operations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of a verify-repository administrative call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyRepositoryResponse {
    /// Nodes that verified the repository, keyed by node identifier.
    ///
    /// Identifiers are opaque case-sensitive tokens, preserved verbatim.
    /// A response with no participating nodes parses to an empty map; the
    /// field is never absent after a successful parse.
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeDescriptor>,
}

/// Compact record describing one node in the cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Human-readable node name
    #[serde(default)]
    pub name: String,
    /// Additional descriptor fields the server may include.
    ///
    /// Carried opaquely; interpreting them is up to cluster-administration
    /// callers.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NodeDescriptor {
    /// Descriptor with only a node name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}
