use super::prelude::*;
use crate::usecases::fetch_summary;

/// Submit a review and fetch the updated summary of the toilet.
///
/// Exactly one review is created per invocation. The summary is
/// requested only after the backend accepted the review and is
/// `None` if it could not be obtained.
pub async fn submit_review<G>(gateway: &G, review: &ReviewInput) -> Result<Option<RatingSummary>>
where
    G: ReviewGateway + ?Sized,
{
    gateway.create_review(review).await?;
    log::info!("Submitted review of toilet {}", review.toilet_id);
    Ok(fetch_summary(gateway, &review.toilet_id).await)
}
