//! Container & Relationship Resolver
//!
//! Classifies a declared type into one of four shapes. Optional wrappers are
//! transparent wherever they appear; collections of collections are refused.

use crate::{
    error::MappingError,
    model::{ModelRef, TypeExpr},
    types::Relationship,
};

///
/// Shape
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    Scalar(TypeExpr),
    Structured(ModelRef),
    CollectionOfScalar(TypeExpr),
    CollectionOfStructured(ModelRef),
}

impl Shape {
    /// Referenced model and how it embeds, for structured shapes.
    #[must_use]
    pub const fn structured(&self) -> Option<(ModelRef, Relationship)> {
        match self {
            Self::Structured(model) => Some((*model, Relationship::Object)),
            Self::CollectionOfStructured(model) => Some((*model, Relationship::Nested)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::CollectionOfScalar(_) | Self::CollectionOfStructured(_)
        )
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Structured(_) => "structured",
            Self::CollectionOfScalar(_) => "collection_of_scalar",
            Self::CollectionOfStructured(_) => "collection_of_structured",
        }
    }
}

/// Classify a field's declared type.
pub fn classify(ty: &TypeExpr) -> Result<Shape, MappingError> {
    match ty.unwrap_optional() {
        TypeExpr::List(item) => match item.unwrap_optional() {
            TypeExpr::List(_) => Err(MappingError::unsupported_shape(format!(
                "collection of collections '{ty}'"
            ))),
            TypeExpr::Model(model) => Ok(Shape::CollectionOfStructured(*model)),
            scalar => Ok(Shape::CollectionOfScalar(scalar.clone())),
        },
        TypeExpr::Model(model) => Ok(Shape::Structured(*model)),
        scalar => Ok(Shape::Scalar(scalar.clone())),
    }
}
