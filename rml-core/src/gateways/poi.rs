use async_trait::async_trait;

use super::Result;
use crate::entities::{MapBbox, PoiNode};

#[async_trait(?Send)]
pub trait PoiGateway {
    /// All nodes tagged as toilets within the bounding box.
    async fn toilet_nodes(&self, bbox: &MapBbox) -> Result<Vec<PoiNode>>;
}
