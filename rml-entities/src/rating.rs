use std::fmt;

use strum::{Display, EnumIter};
use thiserror::Error;

/// The aspects a toilet is rated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RatingCategory {
    Overall,
    Cleanliness,
    Accessibility,
    BabyChanging,
}

impl RatingCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Cleanliness => "Cleanliness",
            Self::Accessibility => "Accessibility",
            Self::BabyChanging => "Baby Changing",
        }
    }
}

/// A single rating: an integer between 1 and 5 (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingValueError {
    #[error("Rating value {0} out of range")]
    OutOfRange(i64),
    #[error("Invalid rating value '{0}'")]
    Parse(String),
}

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueError;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        if from < i64::from(Self::min().0) || from > i64::from(Self::max().0) {
            return Err(RatingValueError::OutOfRange(from));
        }
        // The range check above guarantees a lossless conversion
        u8::try_from(from)
            .map(Self)
            .map_err(|_| RatingValueError::OutOfRange(from))
    }
}

impl TryFrom<&str> for RatingValue {
    type Error = RatingValueError;

    fn try_from(from: &str) -> Result<Self, Self::Error> {
        let trimmed = from.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| RatingValueError::Parse(trimmed.to_owned()))?;
        Self::try_from(value)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An average of ratings, computed by the backend.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

impl fmt::Display for AvgRatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Aggregate of all ratings of a single toilet.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average_rating: AvgRatingValue,
    pub cleanliness: AvgRatingValue,
    pub accessibility: AvgRatingValue,
    pub baby_changing: AvgRatingValue,
}

impl RatingSummary {
    pub const fn get(&self, category: RatingCategory) -> AvgRatingValue {
        match category {
            RatingCategory::Overall => self.average_rating,
            RatingCategory::Cleanliness => self.cleanliness,
            RatingCategory::Accessibility => self.accessibility,
            RatingCategory::BabyChanging => self.baby_changing,
        }
    }
}
