use leptos::*;
use strum::IntoEnumIterator;

use rml_core::entities::{RatingCategory, RatingSummary};

use super::Stars;

#[component]
pub fn RatingSummaryView(summary: Signal<Option<RatingSummary>>) -> impl IntoView {
    move || match summary.get() {
        None => view! { <p class="text-gray-500">"No reviews yet"</p> }.into_view(),
        Some(summary) => view! {
          <table class="rating-summary">
            { RatingCategory::iter().map(|category| {
                let value = summary.get(category);
                view! {
                  <tr>
                    <td class="pr-2">{ category.label() }</td>
                    <td><Stars rating=value /></td>
                    <td class="pl-2 text-gray-500">{ value.to_string() }</td>
                  </tr>
                }
              }).collect_view()
            }
          </table>
        }
        .into_view(),
    }
}
