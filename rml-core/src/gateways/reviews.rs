use async_trait::async_trait;

use super::Result;
use crate::entities::{CustomToilet, NewCustomToilet, RatingSummary, ReviewInput, ToiletId};

#[async_trait(?Send)]
pub trait ReviewGateway {
    /// The aggregated ratings of a toilet.
    ///
    /// Returns `Ok(None)` if nobody has reviewed the toilet yet.
    async fn summary(&self, id: &ToiletId) -> Result<Option<RatingSummary>>;
    async fn create_review(&self, review: &ReviewInput) -> Result<()>;
    async fn custom_toilets(&self) -> Result<Vec<CustomToilet>>;
    async fn create_custom_toilet(&self, toilet: &NewCustomToilet) -> Result<CustomToilet>;
}
