use crate::{geo::*, id::*};

/// Label of toilets without a name tag.
pub const UNNAMED_TOILET: &str = "Unnamed Toilet";

/// A toilet as shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Toilet {
    pub id: ToiletId,
    pub pos: MapPoint,
    pub name: String,
}

/// A node tagged as toilet, as delivered by the public POI service.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiNode {
    pub id: i64,
    pub pos: MapPoint,
    pub name: Option<String>,
}

impl From<PoiNode> for Toilet {
    fn from(from: PoiNode) -> Self {
        let PoiNode { id, pos, name } = from;
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNNAMED_TOILET.to_owned());
        Self {
            id: ToiletId::Osm(id),
            pos,
            name,
        }
    }
}

/// A toilet registered by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomToilet {
    /// Backend-assigned id (without any prefix).
    pub id: String,
    pub name: String,
    pub pos: MapPoint,
}

impl CustomToilet {
    pub fn toilet_id(&self) -> ToiletId {
        ToiletId::custom(self.id.clone())
    }
}

impl From<CustomToilet> for Toilet {
    fn from(from: CustomToilet) -> Self {
        let id = from.toilet_id();
        let CustomToilet { name, pos, .. } = from;
        Self { id, pos, name }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomToilet {
    pub name: String,
    pub pos: MapPoint,
}

/// A toilet in the vicinity of a location, with its postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyToilet {
    pub toilet_id: String,
    pub name: String,
    pub address: Option<String>,
    pub pos: MapPoint,
}
