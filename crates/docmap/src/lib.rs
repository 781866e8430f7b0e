//! ## Crate layout
//! - `core`: type registry, field extraction, container resolution, and the
//!   model schema compiler.
//! - `fields`: marker newtypes that pin a field's store type.
//! - `Model`: derive macro supplying a model's declared fields.
//!
//! The `prelude` module brings the derive, the introspection traits, and the
//! mapping output types into scope.

pub use docmap_core as core;
pub use docmap_core::fields;
pub use docmap_derive::Model;

// export so the derive's absolute paths resolve inside this crate
extern crate self as docmap;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use docmap_core::{
    Compiler, MappingError, cache::MappingCache, compile, config::CompileConfig,
    mapping::Mapping,
};

///
/// Prelude
/// the derive and the trait share the `Model` name in separate namespaces
///

pub mod prelude {
    pub use crate::{
        Model,
        core::{
            mapping::{FieldSpec, Mapping, ModelSchema},
            model::{Attributes, DeclaredField, TypeExpr},
            traits::{FieldType, Model},
            types::{Primitive, Relationship, TypeMarker, TypeTag},
        },
    };
}
