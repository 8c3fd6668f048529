use leptos::*;
use leptos_leaflet::{position, Marker, Popup};

use rml_core::{
    entities::{MapBbox, MapPoint, Place, Toilet, ToiletId},
    state::{CustomToiletRegistry, ReviewForms, SummaryStore, ToiletFeed},
    usecases,
};
use rml_frontend_api::{config, NominatimApi, OverpassApi, ReviewApi};

use crate::{alert, components::*, prompt, BrowserGeoLocator};

const PUBLIC_TOILET_ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/PublicToiletIcon.svg/35px-PublicToiletIcon.svg.png";
const CUSTOM_TOILET_ICON_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e2/ToiletIcon.svg/35px-ToiletIcon.svg.png";

/// Map of all toilets in the viewport, with ratings and review forms.
#[allow(clippy::too_many_lines)]
#[component]
pub fn Home(
    overpass_api: OverpassApi,
    review_api: ReviewApi,
    geocoder: NominatimApi,
    map_config: config::Map,
) -> impl IntoView {
    // -- signals -- //

    let feed = RwSignal::new(ToiletFeed::default());
    let summaries = RwSignal::new(SummaryStore::default());
    let registry = RwSignal::new(CustomToiletRegistry::default());
    let forms = RwSignal::new(ReviewForms::default());
    let user_pos = RwSignal::new(None::<MapPoint>);
    let center = RwSignal::new(map_config.default_pos);
    let searched_place = RwSignal::new(None::<Place>);

    let overpass_api = store_value(overpass_api);
    let review_api = store_value(review_api);

    let toilets = Signal::derive(move || {
        let mut toilets = feed.with(|f| f.toilets().to_vec());
        toilets.extend(registry.with(CustomToiletRegistry::to_map_toilets));
        toilets
    });
    let add_mode = Signal::derive(move || registry.with(CustomToiletRegistry::is_add_mode));

    // -- actions -- //

    let merge_summaries = move |ids: Vec<ToiletId>| async move {
        let api = review_api.get_value();
        let count = usecases::fetch_summaries(&api, ids, |id, summary| {
            summaries.update(|s| s.merge(id, summary));
        })
        .await;
        log::debug!("Merged {count} summaries");
    };

    let locate = move || {
        let default_pos = map_config.default_pos;
        spawn_local(async move {
            let pos = usecases::locate_user(&BrowserGeoLocator, default_pos).await;
            user_pos.set(Some(pos));
            center.set(pos);
        });
    };

    // -- callbacks -- //

    let on_bbox_changed = Callback::new(move |bbox: MapBbox| {
        let Some(generation) = feed.try_update(ToiletFeed::begin_query) else {
            return;
        };
        spawn_local(async move {
            let api = overpass_api.get_value();
            match usecases::discover_toilets(&api, &bbox).await {
                Ok(toilets) => {
                    let applied = feed
                        .try_update(|f| f.apply(generation, toilets))
                        .unwrap_or_default();
                    if applied {
                        let ids: Vec<_> = feed.with_untracked(|f| f.ids().cloned().collect());
                        merge_summaries(ids).await;
                    }
                }
                Err(err) => {
                    log::warn!("Unable to discover toilets: {err}");
                }
            }
        });
    });

    let on_map_click = Callback::new(move |pos: MapPoint| {
        let Some(pos) = registry.with_untracked(|r| r.placement(pos)) else {
            return;
        };
        let name = prompt("Enter toilet name:");
        spawn_local(async move {
            let api = review_api.get_value();
            match usecases::register_custom_toilet(&api, name.as_deref(), pos).await {
                Ok(toilet) => {
                    registry.update(|r| r.add(toilet));
                    alert("Custom toilet added!");
                }
                Err(usecases::Error::EmptyToiletName) => {
                    log::debug!("Registration of custom toilet cancelled");
                }
                Err(err) => {
                    log::warn!("Unable to add custom toilet: {err}");
                    alert("Failed to add custom toilet.");
                }
            }
        });
    });

    let on_place_selected = Callback::new(move |place: Place| {
        center.set(place.pos);
        searched_place.set(Some(place));
    });

    let on_toggle_add_mode = Callback::new(move |()| {
        registry.update(CustomToiletRegistry::toggle_add_mode);
    });

    let on_submit_review = Callback::new(move |toilet_id: ToiletId| {
        let input = match forms.try_update(|f| f.begin_submit(&toilet_id)) {
            Some(Ok(input)) => input,
            Some(Err(err)) => {
                alert(&err.to_string());
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let api = review_api.get_value();
            let result = usecases::submit_review(&api, &input).await;
            forms.update(|f| f.finish_submit(&input.toilet_id, result.is_ok()));
            match result {
                Ok(summary) => {
                    if let Some(summary) = summary {
                        summaries.update(|s| s.merge(input.toilet_id.clone(), summary));
                    }
                    alert("Review submitted!");
                }
                Err(err) => {
                    log::warn!("Unable to submit review of {}: {err}", input.toilet_id);
                    alert("Failed to submit review.");
                }
            }
        });
    });

    // -- init -- //

    spawn_local(async move {
        let api = review_api.get_value();
        match usecases::load_custom_toilets(&api).await {
            Ok(toilets) => {
                registry.update(|r| r.replace_all(toilets));
                let ids: Vec<_> = registry.with_untracked(|r| r.toilet_ids().collect());
                merge_summaries(ids).await;
            }
            Err(err) => {
                log::warn!("Unable to load custom toilets: {err}");
            }
        }
    });
    locate();

    view! {
      <section class="flex flex-col h-screen">
        <div class="flex items-center justify-between p-2">
          <AddToiletToggle add_mode on_toggle=on_toggle_add_mode />
          <PlaceSearch geocoder on_select=on_place_selected />
          <button class="px-3 py-1 rounded border" on:click = move |_| locate()>
            "My location"
          </button>
        </div>
        <div class="flex-1">
          <Map
            center=center.into()
            zoom=map_config.zoom
            user_pos=user_pos.into()
            on_bbox_changed
            on_click=on_map_click
          >
            <For
              each=move || toilets.get()
              key=|toilet| toilet.id.clone()
              let:toilet
            >
              <Marker
                position=position!(toilet.pos.lat(), toilet.pos.lng())
                icon_url=Some(marker_icon_url(&toilet.id).to_owned())
              >
                <Popup>
                  <ToiletPopup toilet summaries=summaries.into() forms on_submit=on_submit_review />
                </Popup>
              </Marker>
            </For>
            { move || searched_place.get().map(|place| view! {
                <Marker position=position!(place.pos.lat(), place.pos.lng())>
                  <Popup>{ place.label }</Popup>
                </Marker>
              })
            }
          </Map>
        </div>
      </section>
    }
}

#[component]
fn ToiletPopup(
    toilet: Toilet,
    summaries: Signal<SummaryStore>,
    forms: RwSignal<ReviewForms>,
    on_submit: Callback<ToiletId>,
) -> impl IntoView {
    let Toilet { id, name, .. } = toilet;
    let is_custom = id.is_custom();
    let summary = {
        let id = id.clone();
        Signal::derive(move || summaries.with(|s| s.get(&id).copied()))
    };
    view! {
      <div class="space-y-2">
        <strong>{ name }</strong>
        <Show when=move || is_custom>
          <p class="text-sm italic">"User-submitted toilet"</p>
        </Show>
        <RatingSummaryView summary />
        <ToiletReviewForm toilet_id=id forms on_submit />
      </div>
    }
}

const fn marker_icon_url(id: &ToiletId) -> &'static str {
    if id.is_custom() {
        CUSTOM_TOILET_ICON_URL
    } else {
        PUBLIC_TOILET_ICON_URL
    }
}
