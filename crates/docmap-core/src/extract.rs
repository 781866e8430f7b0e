//! Field Metadata Extractor
//!
//! Turns one bare declared type plus its attribute sources into a scalar
//! `FieldSpec`. Wrappers must already be stripped by the resolver.

use crate::{
    PROPERTIES_KEY, TYPE_KEY,
    error::MappingError,
    mapping::FieldSpec,
    model::{Attributes, TypeExpr},
    registry::registry,
    types::{Relationship, TypeTag},
};
use serde_json::Value;
use tracing::warn;

/// Resolve a scalar field's descriptor.
///
/// Attribute sources are merged in order, last writer wins. A `type` key in
/// the merged attributes replaces registry inference entirely; every other
/// key except `properties` is carried through verbatim.
pub fn extract(ty: &TypeExpr, sources: &[Attributes]) -> Result<FieldSpec, MappingError> {
    let mut attributes = Attributes::merge(sources);
    reject_properties_override(&attributes)?;

    let inferred = registry().resolve(ty);

    let tag = match attributes.remove(TYPE_KEY) {
        Some(value) => {
            let tag = override_tag(&value)?;
            if let Some(inferred) = inferred
                && TypeTag::Marker(inferred) != tag
            {
                warn!(declared = %ty, inferred = %inferred, tag = %tag, "type override replaces inferred type");
            }

            tag
        }
        None => TypeTag::Marker(inferred.ok_or_else(|| MappingError::unsupported_type(ty))?),
    };

    Ok(FieldSpec::scalar(tag, attributes))
}

/// Sub-schemas only ever come from a referenced model, never from attributes.
pub(crate) fn reject_properties_override(attributes: &Attributes) -> Result<(), MappingError> {
    if attributes.contains_key(PROPERTIES_KEY) {
        return Err(MappingError::invalid_attribute(
            PROPERTIES_KEY,
            "sub-schemas come from the referenced model",
        ));
    }

    Ok(())
}

// override_tag
// registered spellings normalise to their marker, anything else is kept as-is
// except the structural tags, which need a model reference
fn override_tag(value: &Value) -> Result<TypeTag, MappingError> {
    let Value::String(spelling) = value else {
        return Err(MappingError::invalid_attribute(
            TYPE_KEY,
            format!("expected a string, found {value}"),
        ));
    };

    if spelling.is_empty() {
        return Err(MappingError::invalid_attribute(TYPE_KEY, "empty type tag"));
    }

    if let Some(relationship) = Relationship::from_tag(spelling) {
        return Err(MappingError::unsupported_shape(format!(
            "'{TYPE_KEY}' override '{relationship}' on a field without a model reference"
        )));
    }

    Ok(registry()
        .lookup(spelling)
        .map_or_else(|| TypeTag::Custom(spelling.clone()), TypeTag::Marker))
}
