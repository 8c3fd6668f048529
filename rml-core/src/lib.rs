//! # rml-core
//!
//! Client-side core of Rate My Loo: the ports to the outside world
//! ([`gateways`]), the workflows on top of them ([`usecases`]) and the
//! application state the UI renders ([`state`]).

pub mod gateways;
pub mod star_rating;
pub mod state;
pub mod usecases;

pub mod entities {
    pub use rml_entities::{
        auth::*, geo::*, id::*, place::*, rating::*, review::*, toilet::*,
    };
}
