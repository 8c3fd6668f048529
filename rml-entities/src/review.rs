use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::{id::*, rating::*};

/// A complete review of a toilet, ready to be submitted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInput {
    pub toilet_id     : ToiletId,
    pub rating        : RatingValue,
    pub cleanliness   : RatingValue,
    pub accessibility : RatingValue,
    pub baby_changing : RatingValue,
    pub comment       : String,
}

/// A review as shown in the details of a toilet.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: String,
    pub username: String,
    pub overall_rating: AvgRatingValue,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// A review of a toilet in the details view.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLooReview {
    pub overall_rating       : RatingValue,
    pub cleanliness_rating   : RatingValue,
    pub accessibility_rating : RatingValue,
    pub comment              : String,
}

/// Profile, averages and reviews of a single toilet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct LooDetail {
    pub toilet_id                : String,
    pub name                     : String,
    pub address                  : Option<String>,
    pub avg_overall_rating       : AvgRatingValue,
    pub avg_cleanliness_rating   : AvgRatingValue,
    pub avg_accessibility_rating : AvgRatingValue,
    pub review_count             : u64,
    pub reviews                  : Vec<Review>,
}

impl LooDetail {
    /// Put a freshly created review in front of all others.
    ///
    /// The review count is left untouched: it is owned by the backend.
    pub fn prepend_review(&mut self, review: Review) {
        self.reviews.insert(0, review);
    }
}

/// Creation time of a review.
///
/// The backend sends RFC 3339 strings. Unparsable values are kept
/// verbatim so that they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Parsed(OffsetDateTime),
    Raw(String),
}

impl Timestamp {
    pub fn parse(s: &str) -> Self {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Self::Parsed)
            .unwrap_or_else(|_| Self::Raw(s.to_owned()))
    }

    pub fn to_date_string(&self) -> String {
        match self {
            Self::Parsed(dt) => {
                let date = dt.date();
                format!(
                    "{:04}-{:02}-{:02}",
                    date.year(),
                    u8::from(date.month()),
                    date.day()
                )
            }
            Self::Raw(raw) => raw.clone(),
        }
    }
}
