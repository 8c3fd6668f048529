pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{loo_detail_builder::*, review_input_builder::*, toilet_builder::*};

pub mod toilet_builder {

    use super::*;
    use crate::{geo::*, id::*, toilet::*};

    #[derive(Debug)]
    pub struct ToiletBuild {
        toilet: Toilet,
    }

    impl ToiletBuild {
        pub fn id(mut self, id: impl Into<ToiletId>) -> Self {
            self.toilet.id = id.into();
            self
        }
        pub fn custom_id(mut self, id: &str) -> Self {
            self.toilet.id = ToiletId::custom(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.toilet.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.toilet.pos = pos;
            self
        }
        pub fn finish(self) -> Toilet {
            self.toilet
        }
    }

    impl Builder for Toilet {
        type Build = ToiletBuild;
        fn build() -> Self::Build {
            ToiletBuild {
                toilet: Toilet {
                    id: ToiletId::Osm(0),
                    pos: MapPoint::from_lat_lng_deg(51.505, -0.09),
                    name: UNNAMED_TOILET.into(),
                },
            }
        }
    }
}

pub mod review_input_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*};

    #[derive(Debug)]
    pub struct ReviewInputBuild {
        input: ReviewInput,
    }

    fn value(v: i64) -> RatingValue {
        RatingValue::try_from(v).expect("valid rating value")
    }

    impl ReviewInputBuild {
        pub fn toilet_id(mut self, id: ToiletId) -> Self {
            self.input.toilet_id = id;
            self
        }
        pub fn rating(mut self, v: i64) -> Self {
            self.input.rating = value(v);
            self
        }
        pub fn cleanliness(mut self, v: i64) -> Self {
            self.input.cleanliness = value(v);
            self
        }
        pub fn accessibility(mut self, v: i64) -> Self {
            self.input.accessibility = value(v);
            self
        }
        pub fn baby_changing(mut self, v: i64) -> Self {
            self.input.baby_changing = value(v);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.input.comment = comment.into();
            self
        }
        pub fn finish(self) -> ReviewInput {
            self.input
        }
    }

    impl Builder for ReviewInput {
        type Build = ReviewInputBuild;
        fn build() -> Self::Build {
            ReviewInputBuild {
                input: ReviewInput {
                    toilet_id: ToiletId::Osm(0),
                    rating: RatingValue::max(),
                    cleanliness: RatingValue::max(),
                    accessibility: RatingValue::max(),
                    baby_changing: RatingValue::max(),
                    comment: String::new(),
                },
            }
        }
    }
}

pub mod loo_detail_builder {

    use super::*;
    use crate::review::*;

    #[derive(Debug)]
    pub struct LooDetailBuild {
        detail: LooDetail,
    }

    impl LooDetailBuild {
        pub fn toilet_id(mut self, id: &str) -> Self {
            self.detail.toilet_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.detail.name = name.into();
            self
        }
        pub fn reviews(mut self, reviews: Vec<Review>) -> Self {
            self.detail.review_count = reviews.len() as u64;
            self.detail.reviews = reviews;
            self
        }
        pub fn finish(self) -> LooDetail {
            self.detail
        }
    }

    impl Builder for LooDetail {
        type Build = LooDetailBuild;
        fn build() -> Self::Build {
            LooDetailBuild {
                detail: LooDetail {
                    toilet_id: String::new(),
                    name: String::new(),
                    address: None,
                    avg_overall_rating: Default::default(),
                    avg_cleanliness_rating: Default::default(),
                    avg_accessibility_rating: Default::default(),
                    review_count: 0,
                    reviews: vec![],
                },
            }
        }
    }
}
