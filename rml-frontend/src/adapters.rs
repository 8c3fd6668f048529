//! Browser implementations of the client gateways.

use anyhow::anyhow;
use async_trait::async_trait;
use gloo_storage::{LocalStorage, Storage};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::GeolocationPosition;

use rml_core::{
    entities::{AuthToken, MapPoint},
    gateways::{self, GeoLocator, TokenStore},
};

/// Device position via the browser's geolocation API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeoLocator;

#[async_trait(?Send)]
impl GeoLocator for BrowserGeoLocator {
    async fn current_position(&self) -> gateways::Result<MapPoint> {
        current_position()
            .await
            .map_err(|err| gateways::Error::Unavailable(err.to_string()))
    }
}

async fn current_position() -> anyhow::Result<MapPoint> {
    let geolocation = window().navigator().geolocation().map_err(js_error)?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let position: GeolocationPosition = JsFuture::from(promise)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let coords = position.coords();
    Ok(MapPoint::try_from_lat_lng_deg(
        coords.latitude(),
        coords.longitude(),
    )?)
}

fn js_error(err: JsValue) -> anyhow::Error {
    let msg = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|msg| msg.as_string())
        })
        .unwrap_or_else(|| "unknown JS error".to_string());
    anyhow!(msg)
}

/// Auth token as stored by the login of the backend.
///
/// The token is stored verbatim, i.e. not JSON encoded.
#[derive(Debug, Clone)]
pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    #[must_use]
    pub const fn new(key: String) -> Self {
        Self { key }
    }
}

impl TokenStore for LocalStorageTokens {
    fn token(&self) -> Option<AuthToken> {
        match LocalStorage::raw().get_item(&self.key) {
            Ok(token) => token.and_then(AuthToken::new),
            Err(err) => {
                log::warn!("Unable to read auth token: {}", js_error(err));
                None
            }
        }
    }
}
