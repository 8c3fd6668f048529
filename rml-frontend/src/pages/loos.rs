use leptos::*;
use leptos_leaflet::{position, Marker, Popup};

use rml_core::{
    entities::{MapPoint, NearbyToilet},
    state::DetailsPanel,
    usecases,
};
use rml_frontend_api::{config, LooApi};

use crate::{components::*, error_message, BrowserGeoLocator, LocalStorageTokens};

/// Toilets around the user and the details of the selected one.
#[component]
pub fn Loos(
    loo_api: LooApi,
    tokens: LocalStorageTokens,
    map_config: config::Map,
) -> impl IntoView {
    // -- signals -- //

    let nearby = RwSignal::new(Vec::<NearbyToilet>::new());
    let nearby_error = RwSignal::new(None::<String>);
    let panel = RwSignal::new(DetailsPanel::default());
    let user_pos = RwSignal::new(None::<MapPoint>);
    let center = RwSignal::new(map_config.default_pos);

    let loo_api = store_value(loo_api);
    let tokens = store_value(tokens);

    // -- callbacks -- //

    let on_select = Callback::new(move |toilet_id: String| {
        let Some(generation) = panel.try_update(|p| p.select(&toilet_id)).flatten() else {
            return;
        };
        spawn_local(async move {
            let api = loo_api.get_value();
            let outcome = usecases::load_loo_detail(&api, &toilet_id)
                .await
                .map_err(|err| {
                    log::warn!("Unable to load details of toilet {toilet_id}: {err}");
                    error_message(&err, "Failed to load toilet details")
                });
            panel.update(|p| {
                p.resolve(generation, outcome);
            });
        });
    });

    // -- init -- //

    let radius = map_config.nearby_radius;
    let default_pos = map_config.default_pos;
    spawn_local(async move {
        let pos = usecases::locate_user(&BrowserGeoLocator, default_pos).await;
        user_pos.set(Some(pos));
        center.set(pos);
        let api = loo_api.get_value();
        match usecases::find_nearby_toilets(&api, pos, radius).await {
            Ok(toilets) => {
                nearby.set(toilets);
                nearby_error.set(None);
            }
            Err(err) => {
                log::warn!("Unable to find nearby toilets: {err}");
                nearby_error.set(Some(error_message(&err, "Failed to fetch toilets")));
            }
        }
    });

    view! {
      <section class="flex flex-col md:flex-row h-screen">
        <div class="flex-1">
          <Map center=center.into() zoom=map_config.zoom user_pos=user_pos.into()>
            <For
              each=move || nearby.get()
              key=|toilet| toilet.toilet_id.clone()
              let:toilet
            >
              <Marker position=position!(toilet.pos.lat(), toilet.pos.lng())>
                <Popup>
                  <NearbyToiletItem toilet on_select />
                </Popup>
              </Marker>
            </For>
          </Map>
        </div>
        <aside class="md:w-1/3 p-4 overflow-y-auto">
          { move || nearby_error.get().map(|msg| view! { <p class="text-red-600">{ msg }</p> }) }
          <LooDetails panel loo_api tokens />
        </aside>
      </section>
    }
}

#[component]
fn NearbyToiletItem(toilet: NearbyToilet, on_select: Callback<String>) -> impl IntoView {
    let NearbyToilet {
        toilet_id,
        name,
        address,
        ..
    } = toilet;
    view! {
      <div class="space-y-1">
        <strong>{ name }</strong>
        { address.map(|address| view! { <p class="text-gray-600">{ address }</p> }) }
        <button
          class="px-2 py-1 rounded border"
          on:click = move |_| on_select.call(toilet_id.clone())
        >
          "Show details"
        </button>
      </div>
    }
}
