use crate::{
    model::DeclaredField,
    traits::Model,
    types::Primitive,
};
use std::{
    any::TypeId,
    borrow::Cow,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
};

///
/// TypeExpr
///
/// A field's declared type expression, before any wrapper is unwrapped.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeExpr {
    /// Native type resolved through its default rule.
    Primitive(Primitive),

    /// Marker spelling, canonical or alias, looked up in the registry.
    Named(Cow<'static, str>),

    /// Enumeration backed by a primitive; membership is not mapped.
    Enum {
        name: &'static str,
        repr: Primitive,
    },

    /// Optional wrapper; transparent for mapping purposes.
    Optional(Box<Self>),

    /// Sequence or set wrapper.
    List(Box<Self>),

    /// Reference to another structured model.
    Model(ModelRef),
}

impl TypeExpr {
    #[must_use]
    pub fn named(spelling: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(spelling.into())
    }

    #[must_use]
    pub const fn enumeration(name: &'static str, repr: Primitive) -> Self {
        Self::Enum { name, repr }
    }

    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    #[must_use]
    pub fn model<M: Model>() -> Self {
        Self::Model(ModelRef::of::<M>())
    }

    /// Strip every optional wrapper at the head of the expression.
    #[must_use]
    pub fn unwrap_optional(&self) -> &Self {
        let mut expr = self;
        while let Self::Optional(inner) = expr {
            expr = inner;
        }

        expr
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(prim) => write!(f, "{prim}"),
            Self::Named(spelling) => write!(f, "{spelling}"),
            Self::Enum { name, repr } => write!(f, "{name}({repr})"),
            Self::Optional(inner) => write!(f, "Option<{inner}>"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Model(model) => write!(f, "{}", model.name()),
        }
    }
}

impl From<Primitive> for TypeExpr {
    fn from(prim: Primitive) -> Self {
        Self::Primitive(prim)
    }
}

///
/// ModelRef
///
/// Handle to a structured model: its identity plus the capability to list
/// its declared fields. Equality and hashing use the model's `TypeId`.
///

#[derive(Clone, Copy)]
pub struct ModelRef {
    name: &'static str,
    type_id: TypeId,
    fields: fn() -> Vec<DeclaredField>,
}

impl ModelRef {
    #[must_use]
    pub fn of<M: Model>() -> Self {
        Self {
            name: M::NAME,
            type_id: TypeId::of::<M>(),
            fields: M::fields,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<DeclaredField> {
        (self.fields)()
    }
}

impl Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelRef").field(&self.name).finish()
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelRef {}

impl Hash for ModelRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
