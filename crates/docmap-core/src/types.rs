use derive_more::Display;
use serde::{Serialize, Serializer};

///
/// TypeMarker
///
/// Canonical field-type tags understood by the document store.
/// The `Display` form is the exact tag written into a mapping.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum TypeMarker {
    #[display("binary")]
    Binary,
    #[display("boolean")]
    Boolean,
    #[display("byte")]
    Byte,
    #[display("date")]
    Date,
    #[display("double")]
    Double,
    #[display("float")]
    Float,
    #[display("geo_point")]
    GeoPoint,
    #[display("half_float")]
    HalfFloat,
    #[display("integer")]
    Integer,
    #[display("keyword")]
    Keyword,
    #[display("long")]
    Long,
    #[display("short")]
    Short,
    #[display("text")]
    Text,
    #[display("unsigned_long")]
    UnsignedLong,
}

impl TypeMarker {
    /// Every marker, in tag order.
    pub const ALL: [Self; 14] = [
        Self::Binary,
        Self::Boolean,
        Self::Byte,
        Self::Date,
        Self::Double,
        Self::Float,
        Self::GeoPoint,
        Self::HalfFloat,
        Self::Integer,
        Self::Keyword,
        Self::Long,
        Self::Short,
        Self::Text,
        Self::UnsignedLong,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Date => "date",
            Self::Double => "double",
            Self::Float => "float",
            Self::GeoPoint => "geo_point",
            Self::HalfFloat => "half_float",
            Self::Integer => "integer",
            Self::Keyword => "keyword",
            Self::Long => "long",
            Self::Short => "short",
            Self::Text => "text",
            Self::UnsignedLong => "unsigned_long",
        }
    }
}

impl Serialize for TypeMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

///
/// Primitive
///
/// Native declared types that carry no marker of their own.
/// Each maps to a documented default marker.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Date,
    DateTime,
    Float,
    Integer,
    Text,
    Url,
}

impl Primitive {
    /// Marker used when a field is declared with this primitive and no
    /// explicit marker.
    #[must_use]
    pub const fn default_marker(self) -> TypeMarker {
        match self {
            Self::Bool => TypeMarker::Boolean,
            Self::Date | Self::DateTime => TypeMarker::Date,
            Self::Float => TypeMarker::Double,
            Self::Integer => TypeMarker::Long,
            Self::Text | Self::Url => TypeMarker::Keyword,
        }
    }
}

///
/// Relationship
///
/// How a structured sub-model is embedded in its parent.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Relationship {
    /// A single embedded sub-document, queried jointly with its parent.
    #[display("object")]
    Object,

    /// An array of sub-documents, each independently addressable.
    #[display("nested")]
    Nested,
}

impl Relationship {
    /// Match a structural `type` tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "object" => Some(Self::Object),
            "nested" => Some(Self::Nested),
            _ => None,
        }
    }
}

///
/// TypeTag
///
/// The `type` value of one resolved field.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum TypeTag {
    #[display("{_0}")]
    Marker(TypeMarker),

    #[display("{_0}")]
    Structured(Relationship),

    /// Tag supplied verbatim by a `type` override the registry does not know.
    #[display("{_0}")]
    Custom(String),
}

impl TypeTag {
    #[must_use]
    pub const fn marker(&self) -> Option<TypeMarker> {
        match self {
            Self::Marker(marker) => Some(*marker),
            _ => None,
        }
    }

    #[must_use]
    pub const fn relationship(&self) -> Option<Relationship> {
        match self {
            Self::Structured(rel) => Some(*rel),
            _ => None,
        }
    }
}

impl From<TypeMarker> for TypeTag {
    fn from(marker: TypeMarker) -> Self {
        Self::Marker(marker)
    }
}

impl From<Relationship> for TypeTag {
    fn from(rel: Relationship) -> Self {
        Self::Structured(rel)
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
