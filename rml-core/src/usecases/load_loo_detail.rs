use super::prelude::*;

pub async fn load_loo_detail<G>(gateway: &G, toilet_id: &str) -> Result<LooDetail>
where
    G: LooGateway + ?Sized,
{
    Ok(gateway.loo_detail(toilet_id).await?)
}
