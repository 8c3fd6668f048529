#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # rml-entities
//!
//! Reusable, agnostic domain entities for Rate My Loo.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific workflow: identifiers, coordinates, places, toilets,
//! ratings and reviews.

pub mod auth;
pub mod geo;
pub mod id;
pub mod place;
pub mod rating;
pub mod review;
pub mod toilet;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
