use std::fmt;

const CUSTOM_PREFIX: &str = "custom_";

/// Identity of a toilet on the client.
///
/// Nodes discovered via the public POI service and toilets registered
/// by users live in two disjoint identifier spaces. The string form
/// keeps them apart: OSM node ids are plain numbers, backend-assigned
/// ids carry the `custom_` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToiletId {
    Osm(i64),
    Custom(String),
}

impl ToiletId {
    pub fn custom(id: impl Into<String>) -> Self {
        Self::Custom(id.into())
    }

    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ToiletId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Osm(id) => write!(f, "{id}"),
            Self::Custom(id) => write!(f, "{CUSTOM_PREFIX}{id}"),
        }
    }
}

impl From<i64> for ToiletId {
    fn from(from: i64) -> Self {
        Self::Osm(from)
    }
}
