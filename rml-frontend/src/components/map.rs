use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{position, MapContainer, MapEvents, Marker, Popup, Position, TileLayer};

use rml_core::entities::{MapBbox, MapPoint};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const USER_ICON_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/9/99/OOjs_UI_icon_userAvatar.svg/35px-OOjs_UI_icon_userAvatar.svg.png";

/// Leaflet map with a "You are here" marker.
///
/// The markers of the toilets are passed as children.
#[component]
pub fn Map(
    center: Signal<MapPoint>,
    zoom: f64,
    user_pos: Signal<Option<MapPoint>>,
    #[prop(optional)] on_bbox_changed: Option<Callback<MapBbox>>,
    #[prop(optional)] on_click: Option<Callback<MapPoint>>,
    children: Children,
) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    let update_bbox = move || {
        let Some(on_bbox_changed) = on_bbox_changed else {
            return;
        };
        let Some(map) = map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        let bounds = map.get_bounds();
        let sw = bounds.get_south_west();
        let ne = bounds.get_north_east();
        // Leaflet does not wrap longitudes
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(sw.lat(), sw.lng()),
            MapPoint::from_lat_lng_deg(ne.lat(), ne.lng()),
        )
        .normalize();
        on_bbox_changed.call(bbox);
    };

    let events = MapEvents::new()
        .move_end(move |_| {
            update_bbox();
        })
        .mouse_click(move |ev| {
            let Some(on_click) = on_click else {
                return;
            };
            let lat_lng = ev.lat_lng();
            on_click.call(MapPoint::from_lat_lng_deg(lat_lng.lat(), lat_lng.lng()).wrap());
        });

    Effect::new(move |_| {
        log::debug!("Leaflet map changed");
        if map.get().is_some() {
            update_bbox();
        };
    });

    Effect::new(move |_| {
        let Some(map) = map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        let (lat, lng) = center.get().to_lat_lng_deg();
        let zoom = map.get_zoom();
        map.set_view(&LatLng::new(lat, lng), zoom);
    });

    let (lat, lng) = center.get_untracked().to_lat_lng_deg();
    let center = Position::new(lat, lng);

    view! {
      <MapContainer
        class="h-full"
        center
        zoom
        map=map.write_only()
        set_view=true
        events
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        { move || user_pos.get().map(|pos| view! {
            <Marker
              position=position!(pos.lat(), pos.lng())
              icon_url=Some(USER_ICON_URL.to_owned())
            >
              <Popup>"You are here"</Popup>
            </Marker>
          })
        }
        { children() }
      </MapContainer>
    }
}
