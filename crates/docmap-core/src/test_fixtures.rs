//! Hand-declared models shared by the core's unit tests.

use crate::{
    model::{Attributes, DeclaredField, TypeExpr},
    traits::{FieldType, Model},
    types::Primitive,
};

// model
// declare a unit struct implementing Model + FieldType from a field list
macro_rules! model {
    ($ident:ident => [$($field:expr),* $(,)?]) => {
        pub(crate) struct $ident;

        impl Model for $ident {
            const NAME: &'static str = stringify!($ident);

            fn fields() -> Vec<DeclaredField> {
                vec![$($field),*]
            }
        }

        impl FieldType for $ident {
            fn type_expr() -> TypeExpr {
                TypeExpr::model::<Self>()
            }
        }
    };
}

fn field(name: &'static str, ty: TypeExpr) -> DeclaredField {
    DeclaredField::new(name, ty)
}

model!(Bar => [
    field("foo", TypeExpr::enumeration("FooEnum", Primitive::Text)),
]);

model!(Address => [
    field("street", Primitive::Text.into()),
    field("city", TypeExpr::named("Text")),
    field("zip", TypeExpr::optional(TypeExpr::named("int32"))),
    field("location", TypeExpr::named("LatLon")),
]);

model!(Review => [
    field("rating", TypeExpr::named("Byte")),
    field("body", TypeExpr::named("text")),
    field("helpful", TypeExpr::list(Primitive::Bool.into())),
]);

// Test
// the documented end-to-end shape
model!(Test => [
    field("name", Primitive::Text.into()),
    field("age", TypeExpr::named("integer")),
    field("homepage", Primitive::Url.into()),
    field("foo", Primitive::DateTime.into()).with_attributes(
        Attributes::new()
            .with("default_timezone", "UTC")
            .with("format", "strict_date_time_no_millis"),
    ),
    field("bar", TypeExpr::model::<Bar>()),
    field("baz", TypeExpr::list(Primitive::Integer.into())),
    field("qux", TypeExpr::list(TypeExpr::model::<Bar>())),
]);

model!(Customer => [
    field("name", Primitive::Text.into()),
    field("billing", TypeExpr::model::<Address>()),
    field("shipping", TypeExpr::optional(TypeExpr::model::<Address>())),
    field("reviews", TypeExpr::list(TypeExpr::model::<Review>())),
]);

model!(TreeNode => [
    field("label", Primitive::Text.into()),
    field("children", TypeExpr::list(TypeExpr::model::<TreeNode>())),
]);

model!(Ping => [
    field("pong", TypeExpr::model::<Pong>()),
]);

model!(Pong => [
    field("ping", TypeExpr::optional(TypeExpr::model::<Ping>())),
]);

model!(Priced => [
    field("sku", Primitive::Text.into()),
    field("price", TypeExpr::model::<Money>()),
]);

model!(Money => [
    field("currency", Primitive::Text.into()),
    field("amount", TypeExpr::named("Decimal")),
]);

model!(Duplicated => [
    field("name", Primitive::Text.into()),
    field("name", Primitive::Integer.into()),
]);

model!(RetypedObject => [
    field("address", TypeExpr::model::<Address>())
        .with_attributes(Attributes::new().with("type", "flattened")),
]);

model!(DynamicObject => [
    field("address", TypeExpr::model::<Address>())
        .with_attributes(Attributes::new().with("dynamic", "strict")),
]);

model!(RetaggedTags => [
    field("tags", TypeExpr::list(Primitive::Text.into()))
        .with_attributes(Attributes::new().with("type", "nested")),
]);

model!(PropertiesOverride => [
    field("address", TypeExpr::model::<Address>())
        .with_attributes(Attributes::new().with("properties", "x")),
]);

model!(ScalarProperties => [
    field("name", Primitive::Text.into())
        .with_attributes(Attributes::new().with("properties", "x")),
]);

model!(Matrix => [
    field("rows", TypeExpr::list(TypeExpr::list(Primitive::Float.into()))),
]);

model!(Level3 => [
    field("leaf", Primitive::Bool.into()),
]);

model!(Level2 => [
    field("level3", TypeExpr::model::<Level3>()),
]);

model!(Level1 => [
    field("level2", TypeExpr::model::<Level2>()),
]);
