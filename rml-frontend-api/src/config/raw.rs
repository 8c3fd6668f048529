use serde::Deserialize;

pub const DEFAULT_REVIEW_URL: &str = "https://rmlbackend-production.up.railway.app";
pub const DEFAULT_LOO_URL: &str = "http://localhost:9090";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";

pub const DEFAULT_LAT: f64 = 51.505;
pub const DEFAULT_LNG: f64 = -0.09;
pub const DEFAULT_ZOOM: f64 = 15.0;
pub const DEFAULT_NEARBY_RADIUS: u32 = 10_000;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub map: Option<Map>,
    pub auth: Option<Auth>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Api {
    pub review_url: String,
    pub loo_url: String,
    pub overpass_url: String,
    pub geocoding_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            review_url: DEFAULT_REVIEW_URL.to_owned(),
            loo_url: DEFAULT_LOO_URL.to_owned(),
            overpass_url: DEFAULT_OVERPASS_URL.to_owned(),
            geocoding_url: DEFAULT_GEOCODING_URL.to_owned(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Map {
    pub default_lat: f64,
    pub default_lng: f64,
    pub zoom: f64,
    pub nearby_radius: u32,
}

impl Default for Map {
    fn default() -> Self {
        Self {
            default_lat: DEFAULT_LAT,
            default_lng: DEFAULT_LNG,
            zoom: DEFAULT_ZOOM,
            nearby_radius: DEFAULT_NEARBY_RADIUS,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Auth {
    pub token_storage_key: String,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}
