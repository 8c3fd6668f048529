use super::prelude::*;

/// Create a review in the details view on behalf of the logged in user.
///
/// Without a stored token nothing is sent.
pub async fn add_loo_review<G, T>(
    gateway: &G,
    tokens: &T,
    toilet_id: &str,
    review: &NewLooReview,
) -> Result<Review>
where
    G: LooGateway + ?Sized,
    T: TokenStore + ?Sized,
{
    let Some(token) = tokens.token() else {
        log::info!("Refusing to review toilet {toilet_id} without a token");
        return Err(Error::Unauthorized);
    };
    let created = gateway.create_loo_review(toilet_id, review, &token).await?;
    log::info!("Added review {} to toilet {toilet_id}", created.review_id);
    Ok(created)
}
