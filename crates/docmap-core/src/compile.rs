//! Model Schema Compiler
//!
//! Walks a model's declared fields in order, classifying each one and either
//! extracting a scalar descriptor or recursing into the referenced sub-model.

use crate::{
    TYPE_KEY,
    config::CompileConfig,
    error::MappingError,
    extract::{extract, reject_properties_override},
    mapping::{FieldSpec, Mapping, ModelSchema},
    model::{DeclaredField, ModelRef},
    resolve::{Shape, classify},
    traits::Model,
    types::Relationship,
};
use std::{any::TypeId, collections::HashSet};
use tracing::{debug, trace};

/// Compile `M` with the default configuration.
pub fn compile<M: Model>() -> Result<Mapping, MappingError> {
    Compiler::default().compile::<M>()
}

///
/// Compiler
///

#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: CompileConfig,
}

impl Compiler {
    #[must_use]
    pub const fn new(config: CompileConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CompileConfig {
        &self.config
    }

    pub fn compile<M: Model>(&self) -> Result<Mapping, MappingError> {
        self.compile_ref(ModelRef::of::<M>())
    }

    pub fn compile_ref(&self, model: ModelRef) -> Result<Mapping, MappingError> {
        let properties = self.compile_schema(model)?;

        debug!(
            model = model.name(),
            fields = properties.total_fields(),
            "compiled mapping"
        );

        Ok(Mapping::new(properties))
    }

    /// Compile a model's schema without the top-level `properties` wrapper.
    pub fn compile_schema(&self, model: ModelRef) -> Result<ModelSchema, MappingError> {
        Walk::new(&self.config).model(model, 1)
    }
}

///
/// Walk
/// State for one compile: models in progress and the running field count.
///

struct Walk<'a> {
    config: &'a CompileConfig,
    visiting: HashSet<TypeId>,
    field_count: usize,
}

impl<'a> Walk<'a> {
    fn new(config: &'a CompileConfig) -> Self {
        Self {
            config,
            visiting: HashSet::new(),
            field_count: 0,
        }
    }

    // model
    // depth is the level of this model's own fields
    fn model(&mut self, model: ModelRef, depth: usize) -> Result<ModelSchema, MappingError> {
        if !self.visiting.insert(model.type_id()) {
            return Err(MappingError::RecursiveModel {
                model: model.name().to_string(),
            });
        }

        let result = self.fields(model, depth);
        self.visiting.remove(&model.type_id());

        result
    }

    fn fields(&mut self, model: ModelRef, depth: usize) -> Result<ModelSchema, MappingError> {
        if depth > self.config.max_depth {
            return Err(MappingError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        debug!(model = model.name(), depth, "compiling model schema");

        let mut schema = ModelSchema::new();
        for field in model.fields() {
            let spec = self
                .field(&field, depth)
                .map_err(|err| err.with_field(field.name))?;

            schema.insert(field.name, spec)?;
        }

        Ok(schema)
    }

    fn field(&mut self, field: &DeclaredField, depth: usize) -> Result<FieldSpec, MappingError> {
        self.field_count += 1;
        if self.field_count > self.config.max_fields {
            return Err(MappingError::FieldLimitExceeded {
                limit: self.config.max_fields,
            });
        }

        let shape = classify(&field.ty)?;
        trace!(field = field.name, shape = shape.kind(), "classified field");

        match shape {
            Shape::Scalar(inner) | Shape::CollectionOfScalar(inner) => {
                extract(&inner, &field.attributes)
            }
            Shape::Structured(model) => {
                self.structured(field, model, Relationship::Object, depth)
            }
            Shape::CollectionOfStructured(model) => {
                self.structured(field, model, Relationship::Nested, depth)
            }
        }
    }

    fn structured(
        &mut self,
        field: &DeclaredField,
        model: ModelRef,
        relationship: Relationship,
        depth: usize,
    ) -> Result<FieldSpec, MappingError> {
        let attributes = field.merged_attributes();
        reject_properties_override(&attributes)?;
        if attributes.contains_key(TYPE_KEY) {
            return Err(MappingError::unsupported_shape(format!(
                "'{TYPE_KEY}' override on {relationship} field of model '{}'",
                model.name()
            )));
        }

        let properties = self.model(model, depth + 1)?;

        Ok(FieldSpec::structured(relationship, attributes, properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn compile_json<M: Model>() -> serde_json::Value {
        compile::<M>().unwrap().to_value().unwrap()
    }

    #[test]
    fn end_to_end_mapping() {
        assert_eq!(
            compile_json::<Test>(),
            json!({
                "properties": {
                    "name": {"type": "keyword"},
                    "age": {"type": "integer"},
                    "homepage": {"type": "keyword"},
                    "foo": {
                        "type": "date",
                        "format": "strict_date_time_no_millis",
                        "default_timezone": "UTC",
                    },
                    "bar": {
                        "type": "object",
                        "properties": {
                            "foo": {"type": "keyword"},
                        },
                    },
                    "baz": {"type": "long"},
                    "qux": {
                        "type": "nested",
                        "properties": {
                            "foo": {"type": "keyword"},
                        },
                    },
                }
            })
        );
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mapping = compile::<Test>().unwrap();

        assert_eq!(
            mapping.properties.names().collect::<Vec<_>>(),
            ["name", "age", "homepage", "foo", "bar", "baz", "qux"]
        );

        let rendered = mapping.to_json().unwrap();
        assert!(rendered.starts_with(r#"{"properties":{"name":{"type":"keyword"},"age":"#));
    }

    #[test]
    fn object_and_nested_share_properties() {
        let mapping = compile::<Test>().unwrap();
        let bar = mapping.field("bar").unwrap();
        let qux = mapping.field("qux").unwrap();

        assert_eq!(bar.relationship(), Some(Relationship::Object));
        assert_eq!(qux.relationship(), Some(Relationship::Nested));
        assert_eq!(bar.properties(), qux.properties());
    }

    #[test]
    fn list_of_scalar_equals_scalar() {
        let mapping = compile::<Test>().unwrap();

        assert_eq!(
            serde_json::to_value(mapping.field("baz").unwrap()).unwrap(),
            json!({"type": "long"})
        );
    }

    #[test]
    fn sibling_reuse_of_a_model_is_not_recursion() {
        let mapping = compile::<Customer>().unwrap();

        assert_eq!(
            mapping.field("billing").unwrap().properties(),
            mapping.field("shipping").unwrap().properties()
        );
        assert_eq!(
            serde_json::to_value(mapping.field("billing.location").unwrap()).unwrap(),
            json!({"type": "geo_point"})
        );
        assert_eq!(
            serde_json::to_value(mapping.field("reviews").unwrap()).unwrap(),
            json!({
                "type": "nested",
                "properties": {
                    "rating": {"type": "byte"},
                    "body": {"type": "text"},
                    "helpful": {"type": "boolean"},
                }
            })
        );
    }

    #[test]
    fn compile_is_idempotent() {
        assert_eq!(compile::<Customer>().unwrap(), compile::<Customer>().unwrap());
    }

    #[test]
    fn unsupported_type_reports_dotted_path() {
        let err = compile::<Priced>().unwrap_err();

        assert_eq!(err.path(), Some("price.amount"));
        assert_eq!(
            err.leaf(),
            &MappingError::UnsupportedType {
                declared: "Decimal".to_string()
            }
        );
    }

    #[test]
    fn self_recursion_is_rejected() {
        let err = compile::<TreeNode>().unwrap_err();

        assert_eq!(err.path(), Some("children"));
        assert_eq!(
            err.leaf(),
            &MappingError::RecursiveModel {
                model: "TreeNode".to_string()
            }
        );
    }

    #[test]
    fn mutual_recursion_is_rejected() {
        let err = compile::<Ping>().unwrap_err();

        assert_eq!(err.path(), Some("pong.ping"));
        assert!(matches!(err.leaf(), MappingError::RecursiveModel { model } if model == "Ping"));
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let err = compile::<Duplicated>().unwrap_err();

        assert_eq!(
            err,
            MappingError::DuplicateField {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn type_override_on_structured_field_fails_fast() {
        let err = compile::<RetypedObject>().unwrap_err();

        assert_eq!(err.path(), Some("address"));
        assert!(matches!(err.leaf(), MappingError::UnsupportedShape { .. }));
    }

    #[test]
    fn other_overrides_on_structured_field_are_carried() {
        let mapping = compile::<DynamicObject>().unwrap();
        let rendered = serde_json::to_string(mapping.field("address").unwrap()).unwrap();

        assert!(rendered.starts_with(r#"{"type":"object","dynamic":"strict","properties":"#));
    }

    #[test]
    fn structural_override_on_scalar_list_fails() {
        let err = compile::<RetaggedTags>().unwrap_err();

        assert_eq!(err.path(), Some("tags"));
        assert!(matches!(err.leaf(), MappingError::UnsupportedShape { .. }));
    }

    #[test]
    fn properties_override_fails_on_every_shape() {
        let err = compile::<PropertiesOverride>().unwrap_err();

        assert_eq!(err.path(), Some("address"));
        assert!(
            matches!(err.leaf(), MappingError::InvalidAttribute { key, .. } if key == "properties")
        );

        let err = compile::<ScalarProperties>().unwrap_err();

        assert_eq!(err.path(), Some("name"));
        assert!(
            matches!(err.leaf(), MappingError::InvalidAttribute { key, .. } if key == "properties")
        );
    }

    #[test]
    fn collection_of_collections_fails() {
        let err = compile::<Matrix>().unwrap_err();

        assert_eq!(err.path(), Some("rows"));
        assert!(matches!(err.leaf(), MappingError::UnsupportedShape { .. }));
    }

    #[test]
    fn depth_limit_applies_to_nesting() {
        let shallow = Compiler::new(CompileConfig::default().with_max_depth(2));
        let err = shallow.compile::<Level1>().unwrap_err();

        assert_eq!(err.path(), Some("level2.level3"));
        assert_eq!(err.leaf(), &MappingError::DepthExceeded { limit: 2 });

        let exact = Compiler::new(CompileConfig::default().with_max_depth(3));
        assert!(exact.compile::<Level1>().is_ok());
    }

    #[test]
    fn field_limit_counts_every_level() {
        let compiler = Compiler::new(CompileConfig::default().with_max_fields(10));
        let err = compiler.compile::<Customer>().unwrap_err();

        assert_eq!(err.path(), Some("shipping.location"));
        assert_eq!(err.leaf(), &MappingError::FieldLimitExceeded { limit: 10 });

        let roomy = Compiler::new(CompileConfig::default().with_max_fields(15));
        assert_eq!(
            roomy.compile::<Customer>().unwrap().properties.total_fields(),
            15
        );
    }

    #[test]
    fn compile_schema_omits_wrapper() {
        let schema = Compiler::default()
            .compile_schema(ModelRef::of::<Bar>())
            .unwrap();

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"foo": {"type": "keyword"}})
        );
    }

    proptest! {
        #[test]
        fn limits_that_fit_never_change_output(max_depth in 2usize..64, max_fields in 15usize..4096) {
            let config = CompileConfig::default()
                .with_max_depth(max_depth)
                .with_max_fields(max_fields);
            let compiler = Compiler::new(config);

            let first = compiler.compile::<Customer>().unwrap();
            let second = compiler.compile::<Customer>().unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, compile::<Customer>().unwrap());
        }
    }
}
