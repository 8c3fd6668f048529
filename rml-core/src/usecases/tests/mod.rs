use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use async_trait::async_trait;

pub use futures::executor::block_on;

pub use super::prelude::*;
pub use crate::gateways;

/// Yield once to the executor, e.g. to let other futures of a `join!` progress.
pub fn yield_now() -> impl Future<Output = ()> {
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();
        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                return Poll::Ready(());
            }
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }

    YieldNow(false)
}

pub fn london_bbox() -> MapBbox {
    MapBbox::new(
        MapPoint::from_lat_lng_deg(51.49, -0.12),
        MapPoint::from_lat_lng_deg(51.52, -0.06),
    )
}

pub fn summary(avg: f64) -> RatingSummary {
    RatingSummary {
        average_rating: avg.into(),
        cleanliness: avg.into(),
        accessibility: avg.into(),
        baby_changing: avg.into(),
    }
}

pub struct MockPoi {
    pub response: RefCell<gateways::Result<Vec<PoiNode>>>,
    pub calls: RefCell<Vec<MapBbox>>,
}

impl MockPoi {
    pub fn with_nodes(nodes: Vec<PoiNode>) -> Self {
        Self {
            response: RefCell::new(Ok(nodes)),
            calls: Default::default(),
        }
    }

    pub fn failing(err: gateways::Error) -> Self {
        Self {
            response: RefCell::new(Err(err)),
            calls: Default::default(),
        }
    }
}

#[async_trait(?Send)]
impl PoiGateway for MockPoi {
    async fn toilet_nodes(&self, bbox: &MapBbox) -> gateways::Result<Vec<PoiNode>> {
        self.calls.borrow_mut().push(*bbox);
        self.response.borrow().clone()
    }
}

#[derive(Default)]
pub struct MockGeocoder {
    pub places: Vec<Place>,
    pub queries: RefCell<Vec<String>>,
}

#[async_trait(?Send)]
impl GeoCodingGateway for MockGeocoder {
    async fn search_places(&self, query: &str) -> gateways::Result<Vec<Place>> {
        self.queries.borrow_mut().push(query.to_owned());
        let query = query.to_lowercase();
        Ok(self
            .places
            .iter()
            .filter(|p| p.label.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Summary(ToiletId),
    CreateReview(ReviewInput),
    CustomToilets,
    CreateCustomToilet(NewCustomToilet),
    NearbyToilets(MapPoint, u32),
    LooDetail(String),
    CreateLooReview(String, NewLooReview, AuthToken),
}

/// In-memory review backend that records every request.
#[derive(Default)]
pub struct MockBackend {
    summaries: RefCell<HashMap<ToiletId, RatingSummary>>,
    failing_summaries: RefCell<HashSet<ToiletId>>,
    custom_toilets: RefCell<Vec<CustomToilet>>,
    details: RefCell<HashMap<String, LooDetail>>,
    nearby: RefCell<Vec<NearbyToilet>>,
    reject_writes: Cell<bool>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn set_summary(&self, id: ToiletId, summary: RatingSummary) {
        self.summaries.borrow_mut().insert(id, summary);
    }

    pub fn fail_summary(&self, id: ToiletId) {
        self.failing_summaries.borrow_mut().insert(id);
    }

    pub fn set_detail(&self, detail: LooDetail) {
        self.details
            .borrow_mut()
            .insert(detail.toilet_id.clone(), detail);
    }

    pub fn set_nearby(&self, toilets: Vec<NearbyToilet>) {
        *self.nearby.borrow_mut() = toilets;
    }

    pub fn reject_writes(&self) {
        self.reject_writes.set(true);
    }

    pub fn stored_custom_toilets(&self) -> Vec<CustomToilet> {
        self.custom_toilets.borrow().clone()
    }

    pub fn summary_requests(&self) -> Vec<ToiletId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Summary(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn check_writable(&self) -> gateways::Result<()> {
        if self.reject_writes.get() {
            return Err(gateways::Error::Rejected {
                status: 500,
                message: "Internal Server Error".into(),
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ReviewGateway for MockBackend {
    async fn summary(&self, id: &ToiletId) -> gateways::Result<Option<RatingSummary>> {
        self.calls.borrow_mut().push(Call::Summary(id.clone()));
        if self.failing_summaries.borrow().contains(id) {
            return Err(gateways::Error::Transport("connection reset".into()));
        }
        Ok(self.summaries.borrow().get(id).copied())
    }

    async fn create_review(&self, review: &ReviewInput) -> gateways::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::CreateReview(review.clone()));
        self.check_writable()?;
        let rating = f64::from(review.rating);
        self.summaries
            .borrow_mut()
            .insert(review.toilet_id.clone(), summary(rating));
        Ok(())
    }

    async fn custom_toilets(&self) -> gateways::Result<Vec<CustomToilet>> {
        self.calls.borrow_mut().push(Call::CustomToilets);
        Ok(self.custom_toilets.borrow().clone())
    }

    async fn create_custom_toilet(
        &self,
        toilet: &NewCustomToilet,
    ) -> gateways::Result<CustomToilet> {
        self.calls
            .borrow_mut()
            .push(Call::CreateCustomToilet(toilet.clone()));
        self.check_writable()?;
        let mut stored = self.custom_toilets.borrow_mut();
        let created = CustomToilet {
            id: (stored.len() + 1).to_string(),
            name: toilet.name.clone(),
            pos: toilet.pos,
        };
        stored.push(created.clone());
        Ok(created)
    }
}

#[async_trait(?Send)]
impl LooGateway for MockBackend {
    async fn nearby_toilets(
        &self,
        pos: MapPoint,
        radius: u32,
    ) -> gateways::Result<Vec<NearbyToilet>> {
        self.calls
            .borrow_mut()
            .push(Call::NearbyToilets(pos, radius));
        Ok(self.nearby.borrow().clone())
    }

    async fn loo_detail(&self, toilet_id: &str) -> gateways::Result<LooDetail> {
        self.calls
            .borrow_mut()
            .push(Call::LooDetail(toilet_id.to_owned()));
        self.details
            .borrow()
            .get(toilet_id)
            .cloned()
            .ok_or(gateways::Error::NotFound)
    }

    async fn create_loo_review(
        &self,
        toilet_id: &str,
        review: &NewLooReview,
        token: &AuthToken,
    ) -> gateways::Result<Review> {
        self.calls.borrow_mut().push(Call::CreateLooReview(
            toilet_id.to_owned(),
            review.clone(),
            token.clone(),
        ));
        self.check_writable()?;
        let mut details = self.details.borrow_mut();
        let detail = details.get_mut(toilet_id).ok_or(gateways::Error::NotFound)?;
        let created = Review {
            review_id: format!("r{}", detail.reviews.len() + 1),
            username: "alice".into(),
            overall_rating: review.overall_rating.into(),
            comment: Some(review.comment.clone()).filter(|c| !c.is_empty()),
            created_at: Timestamp::parse("2024-03-01T12:00:00Z"),
        };
        detail.reviews.insert(0, created.clone());
        Ok(created)
    }
}

pub struct MockLocator(pub gateways::Result<MapPoint>);

#[async_trait(?Send)]
impl GeoLocator for MockLocator {
    async fn current_position(&self) -> gateways::Result<MapPoint> {
        self.0.clone()
    }
}

/// Token storage that can be logged in and out at any time.
pub struct MockTokens(RefCell<Option<AuthToken>>);

impl MockTokens {
    pub fn new(token: Option<AuthToken>) -> Self {
        Self(RefCell::new(token))
    }

    pub fn store(&self, token: Option<AuthToken>) {
        *self.0.borrow_mut() = token;
    }
}

impl TokenStore for MockTokens {
    fn token(&self) -> Option<AuthToken> {
        self.0.borrow().clone()
    }
}
