use leptos::*;

use rml_core::{
    entities::{LooDetail, Review},
    state::{DetailState, DetailsPanel},
};
use rml_frontend_api::LooApi;

use super::{LooReviewForm, Stars};
use crate::LocalStorageTokens;

#[component]
pub fn LooDetails(
    panel: RwSignal<DetailsPanel>,
    loo_api: StoredValue<LooApi>,
    tokens: StoredValue<LocalStorageTokens>,
) -> impl IntoView {
    move || match panel.with(|p| p.state().clone()) {
        DetailState::Idle => view! {
          <p class="text-gray-500">"Select a toilet to see its details."</p>
        }
        .into_view(),
        DetailState::Loading => view! { <p>"Loading..."</p> }.into_view(),
        DetailState::Failed(msg) => view! {
          <p class="text-red-600">"Error: " { msg }</p>
        }
        .into_view(),
        DetailState::Ready(detail) => {
            view! { <LooDetailView detail panel loo_api tokens /> }.into_view()
        }
    }
}

#[component]
fn LooDetailView(
    detail: LooDetail,
    panel: RwSignal<DetailsPanel>,
    loo_api: StoredValue<LooApi>,
    tokens: StoredValue<LocalStorageTokens>,
) -> impl IntoView {
    let LooDetail {
        toilet_id,
        name,
        address,
        avg_overall_rating,
        avg_cleanliness_rating,
        avg_accessibility_rating,
        review_count,
        reviews,
    } = detail;

    let on_created = {
        let toilet_id = toilet_id.clone();
        Callback::new(move |review: Review| {
            panel.update(|p| {
                p.review_added(&toilet_id, review);
            });
        })
    };

    view! {
      <div class="loo-details space-y-3">
        <h2 class="text-xl font-bold">{ name }</h2>
        { address.map(|address| view! { <p class="text-gray-600">{ address }</p> }) }
        <table>
          <tr>
            <td class="pr-2">"Overall"</td>
            <td><Stars rating=avg_overall_rating /></td>
          </tr>
          <tr>
            <td class="pr-2">"Cleanliness"</td>
            <td><Stars rating=avg_cleanliness_rating /></td>
          </tr>
          <tr>
            <td class="pr-2">"Accessibility"</td>
            <td><Stars rating=avg_accessibility_rating /></td>
          </tr>
        </table>
        <p class="text-gray-500">{ review_count } " reviews"</p>
        <LooReviewForm toilet_id loo_api tokens on_created />
        <ul class="space-y-2">
          { reviews.into_iter().map(|review| view! { <ReviewItem review /> }).collect_view() }
        </ul>
      </div>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    let Review {
        username,
        overall_rating,
        comment,
        created_at,
        ..
    } = review;
    view! {
      <li class="border-t pt-2">
        <div class="flex justify-between">
          <span class="font-bold">{ username }</span>
          <span class="text-gray-500">{ created_at.to_date_string() }</span>
        </div>
        <Stars rating=overall_rating />
        { comment.map(|comment| view! { <p>{ comment }</p> }) }
      </li>
    }
}
