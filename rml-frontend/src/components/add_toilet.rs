use leptos::*;

#[component]
pub fn AddToiletToggle(add_mode: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
      <div class="flex items-center space-x-2">
        <button
          class="px-3 py-1 rounded bg-green-600 text-white"
          on:click = move |_| on_toggle.call(())
        >
          { move || if add_mode.get() { "Cancel" } else { "Add Toilet" } }
        </button>
        <Show when=move || add_mode.get()>
          <span class="text-gray-600">"Click on the map to place the new toilet"</span>
        </Show>
      </div>
    }
}
