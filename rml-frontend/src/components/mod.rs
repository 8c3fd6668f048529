mod add_toilet;
mod loo_details;
mod loo_review_form;
mod map;
mod navbar;
mod review_form;
mod search;
mod star_rating;
mod summary;

pub use self::{
    add_toilet::*, loo_details::*, loo_review_form::*, map::*, navbar::*, review_form::*,
    search::*, star_rating::*, summary::*,
};
