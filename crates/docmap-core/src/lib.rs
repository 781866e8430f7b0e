//! Core compiler for docmap: type registry, field metadata extraction,
//! container resolution, and the model schema compiler that turns a
//! statically declared model into a document-store index mapping.
#![warn(unreachable_pub)]

pub mod cache;
pub mod compile;
pub mod config;
pub mod error;
pub mod extract;
pub mod fields;
pub mod mapping;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod traits;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use compile::{Compiler, compile};
pub use error::MappingError;

///
/// CONSTANTS
///

/// Attribute key that carries a field's type tag.
pub const TYPE_KEY: &str = "type";

/// Attribute key that carries an object or nested field's sub-schema.
pub const PROPERTIES_KEY: &str = "properties";

/// Default limit on object/nested depth, matching the document store's own
/// `index.mapping.depth.limit` default.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Default limit on mapped fields, matching the document store's own
/// `index.mapping.total_fields.limit` default.
pub const DEFAULT_MAX_FIELDS: usize = 1000;

///
/// Prelude
///
/// Domain vocabulary only; errors and compiler internals stay one level down.
///

pub mod prelude {
    pub use crate::{
        mapping::{FieldSpec, Mapping, ModelSchema},
        model::{Attributes, DeclaredField, ModelRef, TypeExpr},
        traits::{FieldType, Model},
        types::{Primitive, TypeMarker, TypeTag},
    };
}
