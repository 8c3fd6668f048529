use async_trait::async_trait;

use super::Result;
use crate::entities::{AuthToken, LooDetail, MapPoint, NearbyToilet, NewLooReview, Review};

#[async_trait(?Send)]
pub trait LooGateway {
    async fn nearby_toilets(&self, pos: MapPoint, radius: u32) -> Result<Vec<NearbyToilet>>;
    async fn loo_detail(&self, toilet_id: &str) -> Result<LooDetail>;
    async fn create_loo_review(
        &self,
        toilet_id: &str,
        review: &NewLooReview,
        token: &AuthToken,
    ) -> Result<Review>;
}
