//! Application state owned by the top-level views.
//!
//! Everything in here is plain data that can be kept in reactive
//! signals. Network responses are applied on completion, stale
//! ones are detected by comparing generations.

mod custom_toilets;
mod details;
mod discovery;
mod generation;
mod review_forms;
mod summaries;

pub use self::{
    custom_toilets::*, details::*, discovery::*, generation::*, review_forms::*, summaries::*,
};
