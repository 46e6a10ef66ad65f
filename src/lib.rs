//! # Quarry Client
//!
//! Client-side types and JSON wire serialization for the Quarry
//! distributed search engine. This crate covers the marshaling layer:
//! response types for administrative operations and the serialization
//! adapter that converts typed values to and from the byte streams managed
//! by a transport layer.
//!
//! ## Features
//!
//! - **Two formatting profiles**: compact and indented JSON output,
//!   selectable per call, pre-built once at adapter construction
//! - **Field-presence contract**: default-valued fields are emitted,
//!   null-valued fields are omitted, matching the server's partial-update
//!   semantics
//! - **Blocking and non-blocking calling conventions** over caller-supplied
//!   streams (`async` feature)
//! - **Injected contract resolution**: field-name mapping is a capability
//!   passed in at construction and validated eagerly
//!
//! ## Example
//!
//! ```rust
//! use quarry_client::{Formatting, Serializer, VerifyRepositoryResponse};
//!
//! let serializer = Serializer::with_defaults();
//!
//! let response = VerifyRepositoryResponse::default();
//! let mut body = Vec::new();
//! serializer.serialize(&response, &mut body, Formatting::Compact).unwrap();
//!
//! let parsed: VerifyRepositoryResponse =
//!     serializer.deserialize(Some(body.as_slice())).unwrap();
//! assert_eq!(parsed, response);
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod responses;
pub mod serializer;

mod wire;

// Re-exports
pub use config::{DEFAULT_WRITE_BUFFER_SIZE, Formatting, ReadFaultPolicy, SerializerConfig};
pub use error::{QuarryError, Result};
pub use resolver::{ContractResolver, QuarryContractResolver};
pub use responses::{NodeDescriptor, VerifyRepositoryResponse};
pub use serializer::Serializer;

/// Cancellation token accepted by the non-blocking serializer entry points.
#[cfg(feature = "async")]
pub use tokio_util::sync::CancellationToken;
