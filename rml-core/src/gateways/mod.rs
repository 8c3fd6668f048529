// Ports to everything outside of the client:
// the public POI service, the review backend, the geocoder,
// the device location and the token storage.

use thiserror::Error;

mod auth;
mod geocode;
mod geolocation;
mod loos;
mod poi;
mod reviews;

pub use self::{auth::*, geocode::*, geolocation::*, loos::*, poi::*, reviews::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The requested resource could not be found")]
    NotFound,
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("The request was rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Invalid response: {0}")]
    Decode(String),
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
