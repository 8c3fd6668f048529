use gloo_net::http::Response;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

use rml_core::gateways;

pub mod config;
mod loos;
mod nominatim;
mod overpass;
mod reviews;

pub use self::{loos::*, nominatim::*, overpass::*, reviews::*};

type Result<T> = std::result::Result<T, Error>;

/// Characters that need to be escaped in query values and path segments.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Unexpected response status {0}")]
    Status(u16),

    #[error("{error}")]
    Api {
        status: u16,
        error: rml_boundary::Error,
    },
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

impl From<Error> for gateways::Error {
    fn from(from: Error) -> Self {
        match from {
            Error::Fetch(msg) => Self::Transport(msg),
            Error::Decode(msg) => Self::Decode(msg),
            Error::Status(404) => Self::NotFound,
            Error::Status(status) => Self::Rejected {
                status,
                message: format!("Request failed with status {status}"),
            },
            Error::Api { status, error } => Self::Rejected {
                status,
                message: error.msg,
            },
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_error(response).await)
    }
}

/// Check the status of a response and ignore its body.
pub async fn ensure_ok(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_error(response).await)
    }
}

async fn into_error(response: Response) -> Error {
    let status = response.status();
    match response.json::<rml_boundary::Error>().await {
        Ok(error) if !error.msg.trim().is_empty() => Error::Api { status, error },
        _ => Error::Status(status),
    }
}
