use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::utf8_percent_encode;

use rml_boundary::{LooDetail, NearbyToilet, NewLooReview, Review};
use rml_core::gateways::{self, LooGateway};
use rml_entities as e;

use crate::{into_json, Result, COMPONENT};

/// Name of the request header that carries the auth token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Loo API of the nearby and details pages
#[derive(Clone)]
pub struct LooApi {
    url: String,
}

impl LooApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    fn nearby_url(&self, lat: f64, lng: f64, radius: u32) -> String {
        format!("{}/api/toilets?lat={lat}&lng={lng}&radius={radius}", self.url)
    }

    fn detail_url(&self, toilet_id: &str) -> String {
        let encoded_id = utf8_percent_encode(toilet_id, COMPONENT);
        format!("{}/api/toilets/{encoded_id}", self.url)
    }

    fn review_url(&self, toilet_id: &str) -> String {
        let encoded_id = utf8_percent_encode(toilet_id, COMPONENT);
        format!("{}/api/reviews/{encoded_id}", self.url)
    }

    pub async fn nearby_toilets(
        &self,
        lat: f64,
        lng: f64,
        radius: u32,
    ) -> Result<Vec<NearbyToilet>> {
        let url = self.nearby_url(lat, lng, radius);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn loo_detail(&self, toilet_id: &str) -> Result<LooDetail> {
        let url = self.detail_url(toilet_id);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_review(
        &self,
        toilet_id: &str,
        review: &NewLooReview,
        token: &str,
    ) -> Result<Review> {
        let url = self.review_url(toilet_id);
        let response = Request::post(&url)
            .header(AUTH_TOKEN_HEADER, token)
            .json(review)?
            .send()
            .await?;
        into_json(response).await
    }
}

#[async_trait(?Send)]
impl LooGateway for LooApi {
    async fn nearby_toilets(
        &self,
        pos: e::geo::MapPoint,
        radius: u32,
    ) -> gateways::Result<Vec<e::toilet::NearbyToilet>> {
        let (lat, lng) = pos.to_lat_lng_deg();
        let toilets = self.nearby_toilets(lat, lng, radius).await?;
        let toilets = toilets
            .into_iter()
            .filter_map(|toilet| {
                let id = toilet.toilet_id.clone();
                e::toilet::NearbyToilet::try_from(toilet)
                    .map_err(|err| log::warn!("Skipping nearby toilet {id}: {err}"))
                    .ok()
            })
            .collect();
        Ok(toilets)
    }

    async fn loo_detail(&self, toilet_id: &str) -> gateways::Result<e::review::LooDetail> {
        let detail = self.loo_detail(toilet_id).await?;
        Ok(detail.into())
    }

    async fn create_loo_review(
        &self,
        toilet_id: &str,
        review: &e::review::NewLooReview,
        token: &e::auth::AuthToken,
    ) -> gateways::Result<e::review::Review> {
        let review = NewLooReview::from(review.clone());
        let created = self.create_review(toilet_id, &review, token.as_str()).await?;
        Ok(created.into())
    }
}
