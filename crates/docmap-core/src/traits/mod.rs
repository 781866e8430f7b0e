mod impls;

use crate::model::{DeclaredField, TypeExpr};

// ============================================================================
// MODEL INTROSPECTION
// ============================================================================
//
// These traits are the capability the compiler consumes. They describe
// *what a model declares*, never how its values are stored or validated.
//

///
/// Model
///
/// A structured model: a name plus its declared fields in declaration order.
/// Usually implemented by `#[derive(Model)]`.
///

pub trait Model: 'static {
    const NAME: &'static str;

    fn fields() -> Vec<DeclaredField>;
}

///
/// FieldType
///
/// Any Rust type that may appear as a model field reports its declared type
/// expression through this trait.
///

pub trait FieldType {
    fn type_expr() -> TypeExpr;
}
