use super::prelude::*;

/// Look up places to jump to on the map.
///
/// Blank queries are rejected without contacting the geocoder.
pub async fn search_places<G>(gateway: &G, query: &str) -> Result<Vec<Place>>
where
    G: GeoCodingGateway + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::EmptySearchQuery);
    }
    let places = gateway.search_places(query).await?;
    log::debug!("Found {} places for '{query}'", places.len());
    Ok(places)
}
