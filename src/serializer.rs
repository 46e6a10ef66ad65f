//! The serialization adapter: typed values to and from JSON byte streams

use std::io::{BufWriter, Read, Write};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{Formatting, SerializerConfig};
#[cfg(feature = "async")]
use crate::config::ReadFaultPolicy;
use crate::error::{QuarryError, Result};
use crate::resolver::ContractResolver;
use crate::wire;

#[cfg(feature = "async")]
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// One pre-built serializer configuration (formatting plus the shared
/// contract resolver). Built once at adapter construction, immutable
/// afterwards.
#[derive(Debug, Clone)]
struct WireProfile {
    formatting: Formatting,
    resolver: Arc<dyn ContractResolver>,
    write_buffer_size: usize,
}

impl WireProfile {
    fn build(config: &SerializerConfig, formatting: Formatting) -> Self {
        Self {
            formatting,
            resolver: Arc::clone(&config.resolver),
            write_buffer_size: config.write_buffer_size,
        }
    }
}

/// Converts typed values to and from JSON byte streams.
///
/// The adapter holds two pre-built formatting profiles (compact and
/// indented) and exposes blocking and, with the `async` feature,
/// non-blocking entry points over caller-supplied streams. Output is UTF-8
/// without a byte-order mark. The adapter never opens, closes, or
/// repositions a stream; pass `&mut stream` to keep ownership.
///
/// Both profiles are immutable after construction, so a single adapter is
/// safe to share across any number of concurrent calls. A single *stream*
/// must still not be used by two calls at once; stream discipline belongs
/// to the caller.
///
/// Field-presence contract: a field explicitly set to its default value is
/// emitted, a field holding null is omitted from the output object. The
/// non-blocking read fault policy is configured through
/// [`SerializerConfig::async_read_faults`].
#[derive(Debug)]
pub struct Serializer {
    compact: WireProfile,
    indented: WireProfile,
    #[cfg(feature = "async")]
    async_read_faults: ReadFaultPolicy,
}

impl Serializer {
    /// Build an adapter from `config`.
    ///
    /// Validates eagerly: a foreign resolver type or a zero-sized write
    /// buffer is rejected here, before any serialize or deserialize call
    /// can be attempted.
    pub fn new(config: SerializerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build an adapter with the default configuration.
    pub fn with_defaults() -> Self {
        Self::build(SerializerConfig::default())
    }

    fn build(config: SerializerConfig) -> Self {
        Self {
            compact: WireProfile::build(&config, Formatting::Compact),
            indented: WireProfile::build(&config, Formatting::Indented),
            #[cfg(feature = "async")]
            async_read_faults: config.async_read_faults,
        }
    }

    fn profile(&self, formatting: Formatting) -> &WireProfile {
        match formatting {
            Formatting::Compact => &self.compact,
            Formatting::Indented => &self.indented,
        }
    }

    fn resolver(&self) -> &dyn ContractResolver {
        self.compact.resolver.as_ref()
    }

    /// Write `value` as JSON to `writer` using the selected formatting
    /// profile.
    ///
    /// Writes go through a bounded internal buffer and are flushed before
    /// the call returns, so all bytes are visible to the caller afterwards.
    /// Engine and I/O faults propagate unmodified; nothing is caught on the
    /// write path.
    pub fn serialize<T, W>(&self, value: &T, writer: W, formatting: Formatting) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let profile = self.profile(formatting);
        let raw = serde_json::to_value(value).map_err(QuarryError::Serialization)?;
        let shaped = wire::shape_outgoing(raw, profile.resolver.as_ref());

        let mut out = BufWriter::with_capacity(profile.write_buffer_size, writer);
        match profile.formatting {
            Formatting::Compact => {
                serde_json::to_writer(&mut out, &shaped).map_err(QuarryError::Serialization)?
            }
            Formatting::Indented => {
                serde_json::to_writer_pretty(&mut out, &shaped).map_err(QuarryError::Serialization)?
            }
        }
        out.flush()?;
        tracing::trace!(formatting = ?profile.formatting, "serialized value to stream");
        Ok(())
    }

    /// Read one JSON value from `reader` and convert it to `T`.
    ///
    /// An absent body (`None`) is a normal outcome for many endpoints and
    /// yields `T::default()` rather than an error. Parse and conversion
    /// faults propagate.
    pub fn deserialize<T, R>(&self, reader: Option<R>) -> Result<T>
    where
        T: DeserializeOwned + Default,
        R: Read,
    {
        match reader {
            None => Ok(T::default()),
            Some(reader) => self.read_body(reader),
        }
    }

    /// Read one JSON value from `reader` without a statically known target
    /// type.
    ///
    /// An absent body yields [`Value::Null`].
    pub fn deserialize_value<R>(&self, reader: Option<R>) -> Result<Value>
    where
        R: Read,
    {
        match reader {
            None => Ok(Value::Null),
            Some(reader) => {
                let raw: Value =
                    serde_json::from_reader(reader).map_err(QuarryError::Deserialization)?;
                Ok(wire::shape_incoming(raw, self.resolver()))
            }
        }
    }

    fn read_body<T, R>(&self, reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let raw: Value = serde_json::from_reader(reader).map_err(QuarryError::Deserialization)?;
        let shaped = wire::shape_incoming(raw, self.resolver());
        serde_json::from_value(shaped).map_err(QuarryError::Deserialization)
    }

    /// Non-blocking variant of [`serialize`](Serializer::serialize).
    ///
    /// The JSON engine offers no non-blocking write primitive, so the value
    /// is encoded in memory and the bytes handed to the stream; callers get
    /// composition with other non-blocking work, not true asynchronous
    /// encoding. A token cancelled before the call begins returns
    /// [`QuarryError::Cancelled`] without writing anything.
    #[cfg(feature = "async")]
    pub async fn serialize_async<T, W>(
        &self,
        value: &T,
        mut writer: W,
        formatting: Formatting,
        cancel: &CancellationToken,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: AsyncWrite + Unpin,
    {
        if cancel.is_cancelled() {
            return Err(QuarryError::Cancelled);
        }

        let mut body = Vec::with_capacity(self.profile(formatting).write_buffer_size);
        self.serialize(value, &mut body, formatting)?;
        writer.write_all(&body).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Non-blocking variant of [`deserialize`](Serializer::deserialize).
    ///
    /// The body read is the suspension point. Faults while loading or
    /// converting the body are reported according to the configured
    /// [`ReadFaultPolicy`]: under the default `DefaultOnFault` policy the
    /// fault is discarded (logged at `warn`) and `T::default()` is
    /// returned, so a malformed body is indistinguishable from an empty
    /// one. Configure `Propagate` to surface faults instead. Cancellation
    /// observed before the read begins returns [`QuarryError::Cancelled`]
    /// regardless of policy.
    #[cfg(feature = "async")]
    pub async fn deserialize_async<T, R>(
        &self,
        reader: Option<R>,
        cancel: &CancellationToken,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
        R: AsyncRead + Unpin,
    {
        if cancel.is_cancelled() {
            return Err(QuarryError::Cancelled);
        }
        let Some(reader) = reader else {
            return Ok(T::default());
        };

        match self.load_body(reader).await {
            Ok(body) => self.apply_read_policy(self.read_body(body.as_slice())),
            Err(err) => self.apply_read_policy(Err(err)),
        }
    }

    /// Non-blocking variant of [`deserialize_value`](Serializer::deserialize_value).
    ///
    /// Same fault policy as [`deserialize_async`](Serializer::deserialize_async);
    /// the default value for an absent or discarded body is [`Value::Null`].
    #[cfg(feature = "async")]
    pub async fn deserialize_value_async<R>(
        &self,
        reader: Option<R>,
        cancel: &CancellationToken,
    ) -> Result<Value>
    where
        R: AsyncRead + Unpin,
    {
        if cancel.is_cancelled() {
            return Err(QuarryError::Cancelled);
        }
        let Some(reader) = reader else {
            return Ok(Value::Null);
        };

        match self.load_body(reader).await {
            Ok(body) => self.apply_read_policy(self.deserialize_value(Some(body.as_slice()))),
            Err(err) => self.apply_read_policy(Err(err)),
        }
    }

    #[cfg(feature = "async")]
    async fn load_body<R>(&self, mut reader: R) -> Result<Vec<u8>>
    where
        R: AsyncRead + Unpin,
    {
        let mut body = Vec::new();
        reader.read_to_end(&mut body).await?;
        Ok(body)
    }

    #[cfg(feature = "async")]
    fn apply_read_policy<T: Default>(&self, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => Ok(value),
            Err(err) => match self.async_read_faults {
                ReadFaultPolicy::Propagate => Err(err),
                ReadFaultPolicy::DefaultOnFault => {
                    tracing::warn!(error = %err, "discarding unreadable response body");
                    Ok(T::default())
                }
            },
        }
    }
}
