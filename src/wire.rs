//! Wire-shape transformation applied around the JSON engine
//!
//! Quarry's field-presence contract is asymmetric: a field explicitly set
//! to its default value is still emitted, but a field holding null is
//! omitted from the emitted object entirely. Partial updates on the server
//! treat "present with null" and "absent" differently, so the distinction
//! must survive serialization. The rule is enforced here, on the value
//! tree, so every type gets it without per-field serde attributes.

use serde_json::Value;

use crate::resolver::ContractResolver;

/// Shape an outgoing value tree for the wire.
///
/// Removes null-valued object members at every nesting depth and applies
/// the resolver's outgoing renames. Nulls inside arrays are kept; only
/// object members carry presence semantics.
pub(crate) fn shape_outgoing(value: Value, resolver: &dyn ContractResolver) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(name, member)| {
                    let name = match resolver.outgoing_name(&name) {
                        Some(wire) => wire.to_string(),
                        None => name,
                    };
                    (name, shape_outgoing(member, resolver))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| shape_outgoing(item, resolver))
                .collect(),
        ),
        other => other,
    }
}

/// Shape an incoming value tree back to local field names.
///
/// The inverse of [`shape_outgoing`] for renames. Omitted members stay
/// omitted; the target type's defaults fill them in during conversion.
pub(crate) fn shape_incoming(value: Value, resolver: &dyn ContractResolver) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(name, member)| {
                    let name = match resolver.incoming_name(&name) {
                        Some(local) => local.to_string(),
                        None => name,
                    };
                    (name, shape_incoming(member, resolver))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| shape_incoming(item, resolver))
                .collect(),
        ),
        other => other,
    }
}
