use leptos::*;

use rml_core::{
    entities::Review,
    gateways::TokenStore,
    state::{ReviewField, ReviewForm, LOO_REVIEW_FIELDS},
    usecases,
};
use rml_frontend_api::LooApi;

use crate::{error_message, LocalStorageTokens};

/// Review form of the details view; requires a logged in user.
#[component]
pub fn LooReviewForm(
    toilet_id: String,
    loo_api: StoredValue<LooApi>,
    tokens: StoredValue<LocalStorageTokens>,
    on_created: Callback<Review>,
) -> impl IntoView {
    let form = RwSignal::new(ReviewForm::default());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let logged_in = RwSignal::new(tokens.with_value(|t| t.token().is_some()));

    // The token is written by the login outside of this view
    let refresh_login = move || {
        let now = tokens.with_value(|t| t.token().is_some());
        if logged_in.get_untracked() != now {
            logged_in.set(now);
        }
    };
    let storage_listener = window_event_listener(ev::storage, move |_| refresh_login());
    on_cleanup(move || storage_listener.remove());

    let toilet_id = store_value(toilet_id);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let review = match form.with_untracked(ReviewForm::to_new_loo_review) {
            Ok(review) => review,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            let api = loo_api.get_value();
            let tokens = tokens.get_value();
            let toilet_id = toilet_id.get_value();
            let result = usecases::add_loo_review(&api, &tokens, &toilet_id, &review).await;
            submitting.set(false);
            refresh_login();
            match result {
                Ok(created) => {
                    form.set(ReviewForm::default());
                    error.set(None);
                    on_created.call(created);
                }
                Err(err) => {
                    log::warn!("Unable to review toilet {toilet_id}: {err}");
                    error.set(Some(error_message(&err, "Failed to submit review")));
                }
            }
        });
    };

    let fields = LOO_REVIEW_FIELDS
        .into_iter()
        .map(|field| view! { <LooReviewFieldInput field form /> })
        .collect_view();

    view! {
      <form
        class="flex flex-col space-y-2"
        on:submit=on_submit
        on:focusin = move |_| refresh_login()
      >
        <h3 class="font-bold">"Leave a review"</h3>
        { fields }
        <Show when=move || !logged_in.get()>
          <p class="text-gray-600">"You must be logged in to leave a review."</p>
        </Show>
        { move || error.get().map(|msg| view! { <p class="text-red-600">{ msg }</p> }) }
        <button
          type="submit"
          class="px-2 py-1 bg-blue-600 text-white rounded disabled:opacity-50"
          disabled = move || !logged_in.get() || submitting.get()
        >
          { move || if submitting.get() { "Submitting..." } else { "Submit Review" } }
        </button>
      </form>
    }
}

#[component]
fn LooReviewFieldInput(field: ReviewField, form: RwSignal<ReviewForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_owned());
    let on_input = move |ev: ev::Event| {
        let new_value = event_target_value(&ev);
        form.update(|f| f.set(field, new_value));
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
