use super::prelude::*;

/// Toilets within `radius` meters of `pos`, as ranked by the backend.
pub async fn find_nearby_toilets<G>(
    gateway: &G,
    pos: MapPoint,
    radius: u32,
) -> Result<Vec<NearbyToilet>>
where
    G: LooGateway + ?Sized,
{
    if !pos.is_valid() {
        return Err(Error::InvalidPosition);
    }
    if radius == 0 {
        return Err(Error::InvalidRadius);
    }
    Ok(gateway.nearby_toilets(pos, radius).await?)
}
