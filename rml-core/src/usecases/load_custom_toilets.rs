use super::prelude::*;

/// All toilets that have been registered by users.
pub async fn load_custom_toilets<G>(gateway: &G) -> Result<Vec<CustomToilet>>
where
    G: ReviewGateway + ?Sized,
{
    let toilets = gateway.custom_toilets().await?;
    log::debug!("Loaded {} custom toilets", toilets.len());
    Ok(toilets)
}
