use leptos::*;

use rml_core::{entities::Place, gateways::GeoCodingGateway, usecases};

/// Search field that looks up places and hands the selected one over.
///
/// The results close on selection while the label stays in the field.
#[component]
pub fn PlaceSearch<G>(geocoder: G, on_select: Callback<Place>) -> impl IntoView
where
    G: GeoCodingGateway + Clone + 'static,
{
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(None::<Vec<Place>>);
    let search_error = RwSignal::new(None::<String>);

    let search_action = create_action(move |query: &String| {
        let query = query.clone();
        let geocoder = geocoder.clone();
        async move {
            match usecases::search_places(&geocoder, &query).await {
                Ok(places) => {
                    results.set(Some(places));
                    search_error.set(None);
                }
                Err(usecases::Error::EmptySearchQuery) => {
                    results.set(None);
                }
                Err(err) => {
                    log::warn!("Place search failed: {err}");
                    results.set(None);
                    search_error.set(Some(err.to_string()));
                }
            }
        }
    });

    let select = move |place: Place| {
        query.set(place.label.clone());
        results.set(None);
        on_select.call(place);
    };

    view! {
      <div class="relative w-full max-w-md">
        <input
          type="search"
          class="w-full py-1 px-3 bg-gray-50 text-gray-700 outline-none rounded border"
          placeholder="Search for a place"
          prop:value=move || query.get()
          on:input = move |ev| query.set(event_target_value(&ev))
          on:keyup = move |ev| {
            ev.stop_propagation();
            match &*ev.key() {
              "Enter" => {
                search_action.dispatch(query.get_untracked());
              }
              "Escape" => {
                query.set(String::new());
                results.set(None);
                search_error.set(None);
              }
              _ => { /* nothing to do */ }
            }
          }
        />
        { move || search_error.get().map(|err| view! { <p class="text-sm text-red-600">{ err }</p> }) }
        { move || results.get().map(|places| {
            if places.is_empty() {
              return view! { <p class="absolute z-[1000] p-2 bg-white text-gray-500">"No results"</p> }.into_view();
            }
            view! {
              <ul class="absolute z-[1000] w-full bg-white rounded shadow">
                { places.into_iter().map(|place| {
                    let label = place.label.clone();
                    view! {
                      <li>
                        <button
                          class="w-full text-left px-3 py-1 hover:bg-gray-100"
                          on:click = move |_| select(place.clone())
                        >
                          { label }
                        </button>
                      </li>
                    }
                  }).collect_view()
                }
              </ul>
            }.into_view()
          })
        }
      </div>
    }
}
