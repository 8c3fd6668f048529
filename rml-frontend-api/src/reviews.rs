use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::utf8_percent_encode;

use rml_boundary::{CustomToilet, NewCustomToilet, NewReview, RatingSummary};
use rml_core::gateways::{self, ReviewGateway};
use rml_entities as e;

use crate::{ensure_ok, into_json, Result, COMPONENT};

/// Review backend of the map page
#[derive(Clone)]
pub struct ReviewApi {
    url: String,
}

impl ReviewApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    fn summary_url(&self, toilet_id: &str) -> String {
        let encoded_id = utf8_percent_encode(toilet_id, COMPONENT);
        format!("{}/summary?toilet_id={encoded_id}", self.url)
    }

    /// Returns `None` if there is no summary of the toilet (yet).
    pub async fn summary(&self, toilet_id: &str) -> Result<Option<RatingSummary>> {
        let url = self.summary_url(toilet_id);
        let response = Request::get(&url).send().await?;
        if response.status() == 404 {
            return Ok(None);
        }
        into_json(response).await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<()> {
        let url = format!("{}/reviews", self.url);
        let response = Request::post(&url).json(review)?.send().await?;
        ensure_ok(response).await
    }

    pub async fn custom_toilets(&self) -> Result<Vec<CustomToilet>> {
        let url = format!("{}/custom-toilets", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_custom_toilet(&self, toilet: &NewCustomToilet) -> Result<CustomToilet> {
        let url = format!("{}/custom-toilets", self.url);
        let response = Request::post(&url).json(toilet)?.send().await?;
        into_json(response).await
    }
}

#[async_trait(?Send)]
impl ReviewGateway for ReviewApi {
    async fn summary(
        &self,
        id: &e::id::ToiletId,
    ) -> gateways::Result<Option<e::rating::RatingSummary>> {
        let summary = self.summary(&id.to_string()).await?;
        Ok(summary.map(Into::into))
    }

    async fn create_review(&self, review: &e::review::ReviewInput) -> gateways::Result<()> {
        let review = NewReview::from(review.clone());
        Ok(self.create_review(&review).await?)
    }

    async fn custom_toilets(&self) -> gateways::Result<Vec<e::toilet::CustomToilet>> {
        let toilets = self.custom_toilets().await?;
        let toilets = toilets
            .into_iter()
            .filter_map(|toilet| {
                let id = toilet.id.clone();
                e::toilet::CustomToilet::try_from(toilet)
                    .map_err(|err| log::warn!("Skipping custom toilet {id}: {err}"))
                    .ok()
            })
            .collect();
        Ok(toilets)
    }

    async fn create_custom_toilet(
        &self,
        toilet: &e::toilet::NewCustomToilet,
    ) -> gateways::Result<e::toilet::CustomToilet> {
        let new_toilet = NewCustomToilet::from(toilet.clone());
        let created = self.create_custom_toilet(&new_toilet).await?;
        e::toilet::CustomToilet::try_from(created)
            .map_err(|err| gateways::Error::Decode(err.to_string()))
    }
}
