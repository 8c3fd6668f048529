use super::prelude::*;

/// Query the public POI service for toilets within the viewport.
///
/// The raw viewport is normalized first, so views across the
/// antimeridian or of the whole world are queried as well.
/// Every returned node becomes exactly one toilet; nodes without
/// a name are labeled as [`UNNAMED_TOILET`].
pub async fn discover_toilets<G>(gateway: &G, bbox: &MapBbox) -> Result<Vec<Toilet>>
where
    G: PoiGateway + ?Sized,
{
    let bbox = bbox.normalize();
    if !bbox.is_valid() {
        return Err(Error::Bbox);
    }
    let nodes = gateway.toilet_nodes(&bbox).await?;
    log::debug!("Discovered {} toilets within {bbox:?}", nodes.len());
    Ok(nodes.into_iter().map(Toilet::from).collect())
}
