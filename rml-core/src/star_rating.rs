//! Graphical representation of average ratings.

use crate::entities::AvgRatingValue;

pub const MAX_STARS: u8 = 5;

pub const FULL_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

/// Partition of [`MAX_STARS`] stars into full, half and empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_avg(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(MAX_STARS))
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() > 0.0;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }

    pub fn glyphs(&self) -> StarGlyphs {
        let full = FULL_STAR.to_string().repeat(self.full.into());
        let half = self.half.then_some(EMPTY_STAR);
        let empty = EMPTY_STAR.to_string().repeat(self.empty.into());
        StarGlyphs { full, half, empty }
    }
}

impl From<AvgRatingValue> for StarRating {
    fn from(from: AvgRatingValue) -> Self {
        Self::from_avg(from.into())
    }
}

/// Glyphs to render, grouped by style.
///
/// The half marker is an outline star that is styled as filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarGlyphs {
    pub full: String,
    pub half: Option<char>,
    pub empty: String,
}
