use thiserror::Error;

use crate::gateways;

mod add_loo_review;
mod discover_toilets;
mod fetch_summaries;
mod find_nearby_toilets;
mod load_custom_toilets;
mod load_loo_detail;
mod locate_user;
mod register_custom_toilet;
mod search_places;
mod submit_review;

#[cfg(test)]
pub(crate) mod tests;

pub use self::{
    add_loo_review::*, discover_toilets::*, fetch_summaries::*, find_nearby_toilets::*,
    load_custom_toilets::*, load_loo_detail::*, locate_user::*, register_custom_toilet::*,
    search_places::*, submit_review::*,
};

pub mod prelude {
    pub use super::{Error, Result};
    pub use crate::{entities::*, gateways::*};
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("Missing toilet name")]
    EmptyToiletName,
    #[error("Missing search query")]
    EmptySearchQuery,
    #[error("You must be logged in to leave a review.")]
    Unauthorized,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
