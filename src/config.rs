//! Configuration for the serialization adapter

use std::sync::Arc;

use crate::error::{QuarryError, Result};
use crate::resolver::{ContractResolver, QuarryContractResolver};

/// Default size of the bounded write buffer, in bytes.
pub const DEFAULT_WRITE_BUFFER_SIZE: usize = 8 * 1024;

/// JSON output formatting profile, selectable per serialize call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formatting {
    /// No extraneous whitespace
    Compact,
    /// Human-readable, multi-line output
    #[default]
    Indented,
}

/// How the non-blocking deserialize path reports wire faults.
///
/// The blocking path always propagates parse and conversion faults. The
/// non-blocking path applies this policy at its boundary instead, so the
/// choice is an explicit part of the configuration rather than a hidden
/// side effect of which calling convention was used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadFaultPolicy {
    /// Surface parse and conversion faults to the caller
    Propagate,
    /// Discard the fault and return the target type's default value.
    ///
    /// This matches the wire behavior existing callers depend on: a body
    /// that fails to parse is indistinguishable from an empty body. The
    /// discarded fault is logged at `warn` level.
    #[default]
    DefaultOnFault,
}

/// Configuration for [`Serializer`](crate::Serializer)
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Contract resolver consulted for field-name mapping.
    ///
    /// Must be a [`QuarryContractResolver`]; a foreign resolver type is
    /// rejected when the adapter is constructed.
    pub resolver: Arc<dyn ContractResolver>,
    /// Size of the per-call write buffer (bytes, must be non-zero)
    pub write_buffer_size: usize,
    /// Fault policy for the non-blocking deserialize path
    pub async_read_faults: ReadFaultPolicy,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            resolver: Arc::new(QuarryContractResolver::default()),
            write_buffer_size: DEFAULT_WRITE_BUFFER_SIZE,
            async_read_faults: ReadFaultPolicy::default(),
        }
    }
}

impl SerializerConfig {
    /// Validate configuration parameters.
    ///
    /// Called by [`Serializer::new`](crate::Serializer::new) so that a bad
    /// configuration fails at construction, not on first use.
    pub fn validate(&self) -> Result<()> {
        if self
            .resolver
            .as_any()
            .downcast_ref::<QuarryContractResolver>()
            .is_none()
        {
            return Err(QuarryError::invalid_configuration(
                "resolver",
                "resolver must be a QuarryContractResolver",
            ));
        }

        if self.write_buffer_size == 0 {
            return Err(QuarryError::invalid_configuration(
                "write_buffer_size",
                "Write buffer size must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Replace the contract resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn ContractResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the fault policy used by the non-blocking read path.
    pub fn with_async_read_faults(mut self, policy: ReadFaultPolicy) -> Self {
        self.async_read_faults = policy;
        self
    }
}
