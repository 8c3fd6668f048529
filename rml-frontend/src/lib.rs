use leptos::*;
use leptos_router::*;

use rml_core::{gateways, usecases};
use rml_frontend_api::{self as api, config::Config};

mod adapters;
mod components;
mod pages;

use self::{adapters::*, components::*, pages::*};

const CONFIG_TOML: &str = include_str!("../rate-my-loo.toml");

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- config -- //

    let config = Config::try_load(CONFIG_TOML).unwrap_or_else(|err| {
        log::error!("Invalid configuration, using defaults: {err}");
        Config::default()
    });
    let Config {
        api: api_config,
        map: map_config,
        auth,
    } = config;

    // -- init API -- //

    let overpass_api = api::OverpassApi::new(api_config.overpass_url);
    let review_api = api::ReviewApi::new(api_config.review_url);
    let loo_api = api::LooApi::new(api_config.loo_url);
    let geocoder = api::NominatimApi::new(api_config.geocoding_url);
    let tokens = LocalStorageTokens::new(auth.token_storage_key);
    let loos_map_config = map_config.clone();

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! {
                <Home
                  overpass_api = overpass_api.clone()
                  review_api = review_api.clone()
                  geocoder = geocoder.clone()
                  map_config = map_config.clone()
                />
              }
            />
            <Route
              path=Page::Loos.path()
              view=move || view! {
                <Loos
                  loo_api = loo_api.clone()
                  tokens = tokens.clone()
                  map_config = loos_map_config.clone()
                />
              }
            />
          </Routes>
        </main>
      </Router>
    }
}

fn alert(msg: &str) {
    if let Err(err) = window().alert_with_message(msg) {
        log::warn!("Unable to show alert: {err:?}");
    }
}

/// Ask the user for some text; `None` if cancelled.
fn prompt(msg: &str) -> Option<String> {
    window().prompt_with_message(msg).ok().flatten()
}

/// Message for the user, preferring the reason given by the backend.
fn error_message(err: &usecases::Error, fallback: &str) -> String {
    match err {
        usecases::Error::Gateway(gateways::Error::Rejected { message, .. })
            if !message.trim().is_empty() =>
        {
            message.clone()
        }
        usecases::Error::Unauthorized => err.to_string(),
        _ => fallback.to_owned(),
    }
}
