use leptos::*;

use rml_core::{entities::AvgRatingValue, star_rating::StarRating};

#[component]
pub fn Stars(#[prop(into)] rating: MaybeSignal<AvgRatingValue>) -> impl IntoView {
    let rating = Signal::derive(move || rating.get());
    let glyphs = move || StarRating::from(rating.get()).glyphs();
    view! {
      <span class="stars text-yellow-500" title=move || rating.get().to_string()>
        <span class="stars-full">{ move || glyphs().full }</span>
        { move || glyphs().half.map(|half| view! {
            <span class="stars-half text-yellow-400">{ half.to_string() }</span>
          })
        }
        <span class="stars-empty text-gray-300">{ move || glyphs().empty }</span>
      </span>
    }
}
