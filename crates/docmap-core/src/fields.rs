//! Marker field types.
//!
//! Newtypes a model can declare to pin a field's store type explicitly,
//! instead of relying on the primitive default rule. Each one reports the
//! marker's own spelling, so it resolves through the registry like any other
//! declared name.

use crate::{model::TypeExpr, traits::FieldType, types::Primitive};
use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

// marker_type
macro_rules! marker_type {
    ($($(#[$meta:meta])* $ident:ident($inner:ty)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, Default, Deref, Deserialize, From, PartialEq, PartialOrd, Serialize)]
            #[serde(transparent)]
            pub struct $ident(pub $inner);

            impl FieldType for $ident {
                fn type_expr() -> TypeExpr {
                    TypeExpr::named(stringify!($ident))
                }
            }
        )*
    };
}

marker_type!(
    /// Exact-match string.
    Keyword(String),
    /// Analyzed full-text string.
    Text(String),
    Binary(Vec<u8>),
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    UnsignedLong(u64),
    HalfFloat(f32),
    Float(f32),
    Double(f64),
    Boolean(bool),
);

// store-width spellings
pub type Int8 = Byte;
pub type Int16 = Short;
pub type Int32 = Integer;
pub type Int64 = Long;
pub type Uint64 = UnsignedLong;
pub type Float16 = HalfFloat;
pub type Float32 = Float;
pub type Float64 = Double;

///
/// LatLon
/// Geographic point, mapped as `geo_point`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, PartialEq, Serialize)]
#[display("{lat},{lon}")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl FieldType for LatLon {
    fn type_expr() -> TypeExpr {
        TypeExpr::named("LatLon")
    }
}

pub type GeoPoint = LatLon;

///
/// HttpUrl
/// URL string; follows the url primitive's default rule.
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct HttpUrl(pub String);

impl FieldType for HttpUrl {
    fn type_expr() -> TypeExpr {
        TypeExpr::Primitive(Primitive::Url)
    }
}
