use async_trait::async_trait;

use super::Result;
use crate::entities::MapPoint;

#[async_trait(?Send)]
pub trait GeoLocator {
    /// One-shot lookup of the current device position.
    async fn current_position(&self) -> Result<MapPoint>;
}
