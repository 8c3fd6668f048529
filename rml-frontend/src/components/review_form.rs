use leptos::*;

use rml_core::{
    entities::ToiletId,
    state::{ReviewField, ReviewForms, MAP_REVIEW_FIELDS},
};

/// Review form inside the popup of a toilet.
#[component]
pub fn ToiletReviewForm(
    toilet_id: ToiletId,
    forms: RwSignal<ReviewForms>,
    on_submit: Callback<ToiletId>,
) -> impl IntoView {
    let submitting = {
        let toilet_id = toilet_id.clone();
        Signal::derive(move || forms.with(|f| f.is_submitting(&toilet_id)))
    };
    let fields = MAP_REVIEW_FIELDS
        .into_iter()
        .map(|field| view! { <ReviewFieldInput toilet_id=toilet_id.clone() field forms /> })
        .collect_view();

    view! {
      <form
        class="flex flex-col space-y-1"
        on:submit = move |ev| {
          ev.prevent_default();
          on_submit.call(toilet_id.clone());
        }
      >
        { fields }
        <button
          type="submit"
          class="px-2 py-1 bg-blue-600 text-white rounded disabled:opacity-50"
          disabled = move || submitting.get()
        >
          { move || if submitting.get() { "Submitting..." } else { "Submit Review" } }
        </button>
      </form>
    }
}

#[component]
pub fn ReviewFieldInput(
    toilet_id: ToiletId,
    field: ReviewField,
    forms: RwSignal<ReviewForms>,
) -> impl IntoView {
    let value = {
        let toilet_id = toilet_id.clone();
        move || forms.with(|f| f.value(&toilet_id, field).to_owned())
    };
    let on_input = move |ev: ev::Event| {
        let new_value = event_target_value(&ev);
        forms.update(|f| f.set(&toilet_id, field, new_value));
    };
    match field {
        ReviewField::Rating(category) => view! {
          <label class="flex justify-between">
            { category.label() }
            <input
              type="number"
              min="1"
              max="5"
              required
              class="w-16 ml-2 border rounded"
              prop:value = value
              on:input = on_input
            />
          </label>
        }
        .into_view(),
        ReviewField::Comment => view! {
          <textarea
            class="border rounded"
            placeholder="Comment"
            prop:value = value
            on:input = on_input
          />
        }
        .into_view(),
    }
}
