//! Validated configuration of the web app.

use anyhow::{anyhow, bail, Result};
use rml_entities::geo::MapPoint;

mod raw;

pub use self::raw::{DEFAULT_LAT, DEFAULT_LNG, DEFAULT_NEARBY_RADIUS, DEFAULT_ZOOM};

pub const ENV_NAME_REVIEW_API_URL: &str = "RML_REVIEW_API_URL";
pub const ENV_NAME_LOO_API_URL: &str = "RML_LOO_API_URL";

const MAX_ZOOM: f64 = 22.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api: Api,
    pub map: Map,
    pub auth: Auth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    pub review_url: String,
    pub loo_url: String,
    pub overpass_url: String,
    /// Nominatim instance of the place search.
    pub geocoding_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    /// Used whenever the device position is unknown.
    pub default_pos: MapPoint,
    pub zoom: f64,
    /// Search radius of nearby toilets in meters.
    pub nearby_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    /// Local storage key of the auth token.
    pub token_storage_key: String,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn try_from_toml(toml_str: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml_str)?;
        Self::try_from(raw_config)
    }

    /// Parse a TOML document and apply the compile-time URL overrides.
    pub fn try_load(toml_str: &str) -> Result<Self> {
        let mut cfg = Self::try_from_toml(toml_str)?;
        cfg.override_urls(
            option_env!("RML_REVIEW_API_URL"),
            option_env!("RML_LOO_API_URL"),
        )?;
        Ok(cfg)
    }

    pub fn override_urls(
        &mut self,
        review_url: Option<&str>,
        loo_url: Option<&str>,
    ) -> Result<()> {
        if let Some(url) = review_url {
            log::debug!("{ENV_NAME_REVIEW_API_URL} overrides the review API URL");
            self.api.review_url = normalize_url(url)?;
        }
        if let Some(url) = loo_url {
            log::debug!("{ENV_NAME_LOO_API_URL} overrides the loo API URL");
            self.api.loo_url = normalize_url(url)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api {
                review_url: raw::DEFAULT_REVIEW_URL.to_owned(),
                loo_url: raw::DEFAULT_LOO_URL.to_owned(),
                overpass_url: raw::DEFAULT_OVERPASS_URL.to_owned(),
                geocoding_url: raw::DEFAULT_GEOCODING_URL.to_owned(),
            },
            map: Map {
                default_pos: MapPoint::from_lat_lng_deg(DEFAULT_LAT, DEFAULT_LNG),
                zoom: DEFAULT_ZOOM,
                nearby_radius: DEFAULT_NEARBY_RADIUS,
            },
            auth: Auth {
                token_storage_key: raw::DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            },
        }
    }
}

fn normalize_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        bail!("Empty URL");
    }
    Ok(url.to_owned())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, map, auth } = from;

        let raw::Api {
            review_url,
            loo_url,
            overpass_url,
            geocoding_url,
        } = api.unwrap_or_default();
        let api = Api {
            review_url: normalize_url(&review_url)
                .map_err(|err| anyhow!("Invalid review URL: {err}"))?,
            loo_url: normalize_url(&loo_url).map_err(|err| anyhow!("Invalid loo URL: {err}"))?,
            overpass_url: normalize_url(&overpass_url)
                .map_err(|err| anyhow!("Invalid Overpass URL: {err}"))?,
            geocoding_url: normalize_url(&geocoding_url)
                .map_err(|err| anyhow!("Invalid geocoding URL: {err}"))?,
        };

        let raw::Map {
            default_lat,
            default_lng,
            zoom,
            nearby_radius,
        } = map.unwrap_or_default();
        let default_pos = MapPoint::try_from_lat_lng_deg(default_lat, default_lng)?;
        if !(0.0..=MAX_ZOOM).contains(&zoom) {
            bail!("Zoom level {zoom} out of range");
        }
        if nearby_radius == 0 {
            bail!("The nearby radius must be positive");
        }
        let map = Map {
            default_pos,
            zoom,
            nearby_radius,
        };

        let raw::Auth { token_storage_key } = auth.unwrap_or_default();
        if token_storage_key.trim().is_empty() {
            bail!("Missing token storage key");
        }
        let auth = Auth { token_storage_key };

        Ok(Self { api, map, auth })
    }
}
