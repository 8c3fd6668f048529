use async_trait::async_trait;

use super::Result;
use crate::entities::Place;

#[async_trait(?Send)]
pub trait GeoCodingGateway {
    /// Places matching a free-form query, best match first.
    async fn search_places(&self, query: &str) -> Result<Vec<Place>>;
}
