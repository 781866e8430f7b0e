//! Type Registry
//!
//! Single source of truth for declared-type spellings.
//! Every marker owns its canonical tag, its marker-type spelling, and any
//! alias spellings. The table is built once per process and never mutated.

use crate::{model::TypeExpr, types::TypeMarker};
use std::{collections::HashMap, sync::LazyLock};

// The first spelling of each entry is the canonical tag.
const ENTRIES: &[(TypeMarker, &[&str])] = &[
    (TypeMarker::Binary, &["binary", "Binary"]),
    (TypeMarker::Boolean, &["boolean", "Boolean"]),
    (TypeMarker::Byte, &["byte", "Byte", "int8"]),
    (TypeMarker::Date, &["date", "Date"]),
    (TypeMarker::Double, &["double", "Double", "float64"]),
    (TypeMarker::Float, &["float", "Float", "float32"]),
    (TypeMarker::GeoPoint, &["geo_point", "GeoPoint", "LatLon"]),
    (TypeMarker::HalfFloat, &["half_float", "HalfFloat", "float16"]),
    (TypeMarker::Integer, &["integer", "Integer", "int32"]),
    (TypeMarker::Keyword, &["keyword", "Keyword"]),
    (TypeMarker::Long, &["long", "Long", "int64"]),
    (TypeMarker::Short, &["short", "Short", "int16"]),
    (TypeMarker::Text, &["text", "Text"]),
    (
        TypeMarker::UnsignedLong,
        &["unsigned_long", "UnsignedLong", "uint64"],
    ),
];

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::build);

/// Process-wide registry, built on first use.
#[must_use]
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

///
/// TypeRegistry
///

#[derive(Debug)]
pub struct TypeRegistry {
    by_spelling: HashMap<&'static str, TypeMarker>,
}

impl TypeRegistry {
    fn build() -> Self {
        let mut by_spelling = HashMap::new();

        for (marker, spellings) in ENTRIES {
            debug_assert_eq!(
                spellings.first(),
                Some(&marker.as_str()),
                "first spelling must be the canonical tag"
            );

            for spelling in *spellings {
                let prev = by_spelling.insert(*spelling, *marker);
                debug_assert!(prev.is_none(), "duplicate spelling '{spelling}'");
            }
        }

        Self { by_spelling }
    }

    /// Look up a single spelling. Matching is exact and case-sensitive.
    #[must_use]
    pub fn lookup(&self, spelling: &str) -> Option<TypeMarker> {
        self.by_spelling.get(spelling).copied()
    }

    /// Resolve a bare (unwrapped) declared type to its marker.
    /// Wrappers and model references never resolve here.
    #[must_use]
    pub fn resolve(&self, expr: &TypeExpr) -> Option<TypeMarker> {
        match expr {
            TypeExpr::Primitive(prim) => Some(prim.default_marker()),
            TypeExpr::Named(spelling) => self.lookup(spelling),
            TypeExpr::Enum { repr, .. } => Some(repr.default_marker()),
            TypeExpr::Optional(_) | TypeExpr::List(_) | TypeExpr::Model(_) => None,
        }
    }

    /// Alias spellings of a marker, canonical tag excluded, sorted.
    #[must_use]
    pub fn aliases(&self, marker: TypeMarker) -> Vec<&'static str> {
        let mut aliases: Vec<_> = self
            .by_spelling
            .iter()
            .filter(|(spelling, m)| **m == marker && **spelling != marker.as_str())
            .map(|(spelling, _)| *spelling)
            .collect();
        aliases.sort_unstable();

        aliases
    }

    /// Every registered spelling, sorted.
    #[must_use]
    pub fn spellings(&self) -> Vec<&'static str> {
        let mut spellings: Vec<_> = self.by_spelling.keys().copied().collect();
        spellings.sort_unstable();

        spellings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_spelling.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_spelling.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;
    use proptest::prelude::*;

    #[test]
    fn every_marker_has_an_entry() {
        for marker in TypeMarker::ALL {
            assert_eq!(registry().lookup(marker.as_str()), Some(marker));
        }
    }

    #[test]
    fn aliases_resolve_to_their_marker() {
        let cases = [
            ("int8", TypeMarker::Byte),
            ("int16", TypeMarker::Short),
            ("int32", TypeMarker::Integer),
            ("int64", TypeMarker::Long),
            ("uint64", TypeMarker::UnsignedLong),
            ("float16", TypeMarker::HalfFloat),
            ("float32", TypeMarker::Float),
            ("float64", TypeMarker::Double),
            ("LatLon", TypeMarker::GeoPoint),
            ("UnsignedLong", TypeMarker::UnsignedLong),
        ];

        for (spelling, marker) in cases {
            assert_eq!(registry().lookup(spelling), Some(marker), "{spelling}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(registry().lookup("KEYWORD"), None);
        assert_eq!(registry().lookup("latlon"), None);
        assert_eq!(registry().lookup(""), None);
    }

    #[test]
    fn aliases_exclude_canonical_tag() {
        let aliases = registry().aliases(TypeMarker::Float);

        assert_eq!(aliases, ["Float", "float32"]);
    }

    #[test]
    fn resolve_uses_primitive_defaults() {
        let reg = registry();

        assert_eq!(
            reg.resolve(&Primitive::Text.into()),
            Some(TypeMarker::Keyword)
        );
        assert_eq!(
            reg.resolve(&TypeExpr::enumeration("Status", Primitive::Integer)),
            Some(TypeMarker::Long)
        );
        assert_eq!(
            reg.resolve(&TypeExpr::optional(Primitive::Text.into())),
            None
        );
    }

    #[test]
    fn spellings_are_sorted() {
        let spellings = registry().spellings();
        let mut sorted = spellings.clone();
        sorted.sort_unstable();

        assert_eq!(spellings, sorted);
        assert_eq!(spellings.len(), registry().len());
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(
            spelling in proptest::sample::select(registry().spellings())
        ) {
            let first = registry().lookup(spelling);
            let second = registry().lookup(spelling);

            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
            prop_assert_eq!(
                registry().resolve(&TypeExpr::named(spelling)),
                first
            );
        }

        #[test]
        fn unregistered_spellings_do_not_resolve(spelling in "[a-z]{1,3}[0-9]{3}") {
            prop_assert_eq!(registry().lookup(&spelling), None);
        }
    }
}
