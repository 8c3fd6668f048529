use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::utf8_percent_encode;

use rml_boundary::NominatimPlace;
use rml_core::gateways::{self, GeoCodingGateway};
use rml_entities::place::Place;

use crate::{into_json, Result, COMPONENT};

const MAX_RESULTS: usize = 5;

/// Place search of an OpenStreetMap Nominatim instance.
#[derive(Clone)]
pub struct NominatimApi {
    url: String,
}

impl NominatimApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    fn search_url(&self, query: &str) -> String {
        let encoded_query = utf8_percent_encode(query, COMPONENT);
        format!(
            "{}/search?format=json&limit={MAX_RESULTS}&q={encoded_query}",
            self.url
        )
    }

    pub async fn search(&self, query: &str) -> Result<Vec<NominatimPlace>> {
        let response = Request::get(&self.search_url(query)).send().await?;
        into_json(response).await
    }
}

#[async_trait(?Send)]
impl GeoCodingGateway for NominatimApi {
    async fn search_places(&self, query: &str) -> gateways::Result<Vec<Place>> {
        let results = self.search(query).await?;
        let places = results
            .into_iter()
            .filter_map(|result| {
                let label = result.display_name.clone();
                Place::try_from(result)
                    .map_err(|err| log::warn!("Skipping place '{label}': {err}"))
                    .ok()
            })
            .collect();
        Ok(places)
    }
}
