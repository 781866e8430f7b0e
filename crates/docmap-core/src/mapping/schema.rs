use crate::{error::MappingError, mapping::FieldSpec};
use derive_more::Deref;
use serde::{Serialize, Serializer, ser::SerializeMap};

///
/// ModelSchema
/// Ordered field name -> FieldSpec mapping for one model.
///

#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct ModelSchema(Vec<(String, FieldSpec)>);

impl ModelSchema {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a field. Names are unique within one schema.
    pub fn insert(&mut self, name: impl Into<String>, spec: FieldSpec) -> Result<(), MappingError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(MappingError::DuplicateField { field: name });
        }

        self.0.push((name, spec));

        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, spec)| spec)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Look up a field by dotted path through object/nested sub-schemas.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&FieldSpec> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let spec = self.get(head)?;
        match rest {
            Some(rest) => spec.properties()?.field(rest),
            None => Some(spec),
        }
    }

    /// Total number of mapped fields, counting every nested level.
    #[must_use]
    pub fn total_fields(&self) -> usize {
        self.0
            .iter()
            .map(|(_, spec)| 1 + spec.properties().map_or(0, Self::total_fields))
            .sum()
    }
}

impl<'a> IntoIterator for &'a ModelSchema {
    type Item = &'a (String, FieldSpec);
    type IntoIter = std::slice::Iter<'a, (String, FieldSpec)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for ModelSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, spec) in &self.0 {
            map.serialize_entry(name, spec)?;
        }

        map.end()
    }
}
