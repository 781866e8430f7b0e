//! Published mapping tree.
//!
//! `Mapping` is the document handed to the store's index configuration:
//! `{ "properties": { <field>: <descriptor>, ... } }`. Field and attribute
//! order follow declaration order.
mod field;
mod schema;

pub use field::FieldSpec;
pub use schema::ModelSchema;

use serde::Serialize;
use serde_json::Value;

///
/// Mapping
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Mapping {
    pub properties: ModelSchema,
}

impl Mapping {
    #[must_use]
    pub const fn new(properties: ModelSchema) -> Self {
        Self { properties }
    }

    /// Look up a field by dotted path, e.g. `address.city`.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&FieldSpec> {
        self.properties.field(path)
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
