use async_trait::async_trait;
use gloo_net::http::Request;

use rml_boundary::{OverpassElement, OverpassResponse};
use rml_core::gateways::{self, PoiGateway};
use rml_entities::{geo::MapBbox, toilet::PoiNode};

use crate::{into_json, Result};

/// Public Overpass API
#[derive(Clone)]
pub struct OverpassApi {
    url: String,
}

impl OverpassApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn toilets(&self, bbox: &MapBbox) -> Result<Vec<OverpassElement>> {
        let query = toilets_query(bbox);
        let response = Request::post(&self.url).body(query)?.send().await?;
        let OverpassResponse { elements } = into_json(response).await?;
        Ok(elements)
    }
}

/// Overpass QL query for all toilet nodes in a bounding box.
#[must_use]
pub fn toilets_query(bbox: &MapBbox) -> String {
    format!(
        r#"[out:json];node["amenity"="toilets"]({},{},{},{});out body;"#,
        bbox.south(),
        bbox.west(),
        bbox.north(),
        bbox.east()
    )
}

#[async_trait(?Send)]
impl PoiGateway for OverpassApi {
    async fn toilet_nodes(&self, bbox: &MapBbox) -> gateways::Result<Vec<PoiNode>> {
        let elements = self.toilets(bbox).await?;
        let nodes = elements
            .into_iter()
            .filter_map(|element| {
                let id = element.id;
                PoiNode::try_from(element)
                    .map_err(|err| log::warn!("Skipping node {id}: {err}"))
                    .ok()
            })
            .collect();
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use rml_entities::geo::MapPoint;

    use super::*;

    #[test]
    fn query_uses_south_west_north_east_order() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(51.49, -0.12),
            MapPoint::from_lat_lng_deg(51.52, -0.06),
        );
        assert_eq!(
            toilets_query(&bbox),
            r#"[out:json];node["amenity"="toilets"](51.49,-0.12,51.52,-0.06);out body;"#
        );
    }
}
