use crate::geo::MapPoint;

/// A named location found by the geocoding service.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub label: String,
    pub pos: MapPoint,
}
