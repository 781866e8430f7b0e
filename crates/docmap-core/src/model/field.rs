use crate::{
    model::{Attributes, TypeExpr},
    traits::FieldType,
};

///
/// DeclaredField
/// One field as a model declares it: name, type expression, and every
/// attribute source attached to it, in attachment order.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DeclaredField {
    pub name: &'static str,
    pub ty: TypeExpr,
    pub attributes: Vec<Attributes>,
}

impl DeclaredField {
    #[must_use]
    pub const fn new(name: &'static str, ty: TypeExpr) -> Self {
        Self {
            name,
            ty,
            attributes: Vec::new(),
        }
    }

    /// Declare a field whose type expression comes from a Rust type.
    #[must_use]
    pub fn of<T: FieldType + ?Sized>(name: &'static str) -> Self {
        Self::new(name, T::type_expr())
    }

    /// Attach one more attribute source; later sources win on conflict.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes.push(attributes);
        self
    }

    /// All attribute sources folded into one mapping.
    #[must_use]
    pub fn merged_attributes(&self) -> Attributes {
        Attributes::merge(&self.attributes)
    }
}
