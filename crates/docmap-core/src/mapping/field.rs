use crate::{
    PROPERTIES_KEY, TYPE_KEY,
    mapping::ModelSchema,
    model::Attributes,
    types::{Relationship, TypeMarker, TypeTag},
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

///
/// FieldSpec
///
/// Resolved mapping descriptor for one field: its type tag, any extra
/// attributes carried from overrides, and for object/nested fields the
/// owned sub-schema.
///

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    type_tag: TypeTag,
    attributes: Attributes,
    properties: Option<ModelSchema>,
}

impl FieldSpec {
    /// Build a scalar descriptor. `type` and `properties` keys in
    /// `attributes` are dropped; the compiler rejects both beforehand.
    #[must_use]
    pub fn scalar(type_tag: impl Into<TypeTag>, mut attributes: Attributes) -> Self {
        attributes.remove(TYPE_KEY);
        attributes.remove(PROPERTIES_KEY);

        Self {
            type_tag: type_tag.into(),
            attributes,
            properties: None,
        }
    }

    /// Build an object or nested descriptor owning `properties`.
    #[must_use]
    pub fn structured(
        relationship: Relationship,
        mut attributes: Attributes,
        properties: ModelSchema,
    ) -> Self {
        attributes.remove(TYPE_KEY);
        attributes.remove(PROPERTIES_KEY);

        Self {
            type_tag: TypeTag::Structured(relationship),
            attributes,
            properties: Some(properties),
        }
    }

    #[must_use]
    pub const fn type_tag(&self) -> &TypeTag {
        &self.type_tag
    }

    #[must_use]
    pub const fn marker(&self) -> Option<TypeMarker> {
        self.type_tag.marker()
    }

    #[must_use]
    pub const fn relationship(&self) -> Option<Relationship> {
        self.type_tag.relationship()
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    #[must_use]
    pub const fn properties(&self) -> Option<&ModelSchema> {
        self.properties.as_ref()
    }
}

impl Serialize for FieldSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + self.attributes.len() + usize::from(self.properties.is_some());
        let mut map = serializer.serialize_map(Some(len))?;

        map.serialize_entry(TYPE_KEY, &self.type_tag)?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        if let Some(properties) = &self.properties {
            map.serialize_entry(PROPERTIES_KEY, properties)?;
        }

        map.end()
    }
}
